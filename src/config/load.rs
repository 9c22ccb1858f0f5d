use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::CleaverConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: CleaverConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: CleaverConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the sheet path relative to the config file directory.
    pub fn resolve_input(&self) -> Option<PathBuf> {
        self.config
            .input
            .as_ref()
            .map(|input| self.config_dir.join(input))
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaver.json");
        std::fs::write(
            &path,
            r#"{ "input": "art/duck-walk-sheet.png", "output_dir": "walk" }"#,
        )
        .unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();
        assert_eq!(
            loaded.resolve_input(),
            Some(dir.path().join("art/duck-walk-sheet.png"))
        );
        assert_eq!(loaded.resolve_output_dir(), dir.path().join("walk"));
    }

    #[test]
    fn test_missing_input_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaver.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();
        assert_eq!(loaded.resolve_input(), None);
        assert_eq!(loaded.resolve_output_dir(), dir.path().join("."));
    }

    #[test]
    fn test_malformed_config_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = LoadedConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
