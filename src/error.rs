use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleaverError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Could not find {0}")]
    InputNotFound(PathBuf),

    #[error("Cannot split a sheet {width}px wide into {frames} frames")]
    InvalidFrameCount { width: u32, frames: u32 },
}
