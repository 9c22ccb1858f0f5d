use anyhow::Result;
use image::DynamicImage;

use super::equal_bands;
use crate::error::CleaverError;

/// Default number of frames in a single-direction strip
pub const DEFAULT_STRIP_FRAMES: u32 = 6;

/// Split a horizontal strip into `frames` equal-width, full-height frames.
///
/// Any remainder columns on the right are dropped. The source colour
/// type is preserved.
pub fn slice_equal(image: &DynamicImage, frames: u32) -> Result<Vec<DynamicImage>> {
    let width = image.width();
    if frames == 0 || width / frames == 0 {
        return Err(CleaverError::InvalidFrameCount { width, frames }.into());
    }

    let height = image.height();
    let slices = equal_bands(width, frames)
        .into_iter()
        .map(|band| image.crop_imm(band.start, 0, band.len(), height))
        .collect();

    Ok(slices)
}
