use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{DynamicImage, ImageReader, RgbaImage};
use log::debug;

use crate::error::CleaverError;

/// A sprite sheet loaded from disk
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Source file path
    pub path: PathBuf,
    /// Full-colour pixels
    pub image: RgbaImage,
}

impl Sheet {
    /// Load a sheet and convert it to RGBA
    pub fn load(path: &Path) -> Result<Self> {
        let image = load_image(path)?.into_rgba8();
        debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }
}

/// Decode an image file, keeping its native colour type
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(CleaverError::InputNotFound(path.to_path_buf()).into());
    }

    let img = ImageReader::open(path)
        .map_err(|e| CleaverError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| CleaverError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| CleaverError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(img)
}
