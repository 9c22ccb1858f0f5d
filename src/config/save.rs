use std::path::Path;

use anyhow::{Context, Result};

use super::types::CleaverConfig;

/// Save a config to a JSON file with pretty formatting.
pub fn save_config(config: &CleaverConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadedConfig;

    #[test]
    fn test_saved_default_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaver.json");

        save_config(&CleaverConfig::default(), &path).unwrap();
        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.config.version, 1);
        assert_eq!(loaded.config.ink_threshold, 200);
        assert_eq!(loaded.config.prefix, "duck-walk");
    }
}
