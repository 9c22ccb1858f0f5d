use serde::{Deserialize, Serialize};

use crate::output::DEFAULT_PREFIX;
use crate::segment::Segmenter;
use crate::sheet::DEFAULT_INK_THRESHOLD;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Cleaver configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaverConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet to segment
    pub input: Option<String>,
    /// Output directory for frame files
    pub output_dir: String,
    /// Filename prefix for frames
    pub prefix: String,
    /// Luminance below which a pixel counts as ink
    pub ink_threshold: u8,
    /// Ink pixels a row needs to be part of a row band
    pub row_density: u32,
    /// Row bands must be taller than this
    pub min_row_height: u32,
    /// Ink pixels a column needs to be part of a column band
    pub column_density: u32,
    /// Column bands must be wider than this
    pub min_column_width: u32,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for CleaverConfig {
    fn default() -> Self {
        let segmenter = Segmenter::new();
        Self {
            version: 1,
            input: None,
            output_dir: ".".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            ink_threshold: DEFAULT_INK_THRESHOLD,
            row_density: segmenter.row_density,
            min_row_height: segmenter.min_row_height,
            column_density: segmenter.column_density,
            min_column_width: segmenter.min_column_width,
            compress: None,
        }
    }
}
