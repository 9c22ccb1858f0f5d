use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{DynamicImage, ImageFormat};
use log::{debug, info};

use super::frame_filename;
use crate::cli::CompressionLevel;
use crate::error::CleaverError;
use crate::segment::Frame;
use crate::sheet::Direction;

/// Save an image as PNG, optionally with compression.
///
/// Existing files are overwritten.
pub fn save_png(
    image: &DynamicImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    // Encode to PNG in memory
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| CleaverError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            CleaverError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| CleaverError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Write every segmented frame into `output_dir`, returning the paths written
pub fn write_frames(
    frames: &[Frame],
    output_dir: &Path,
    prefix: &str,
    compress: Option<CompressionLevel>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(frames.len());

    for frame in frames {
        let path = output_dir.join(frame_filename(prefix, frame.direction, frame.index));
        save_png(&DynamicImage::ImageRgba8(frame.image.clone()), &path, compress)?;
        debug!("Saved {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Write equal-width strip slices for one direction, numbered from 1
pub fn write_strip(
    slices: &[DynamicImage],
    output_dir: &Path,
    prefix: &str,
    direction: Direction,
    compress: Option<CompressionLevel>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(slices.len());

    for (index, slice) in (1u32..).zip(slices) {
        let path = output_dir.join(frame_filename(prefix, direction, index));
        save_png(slice, &path, compress)?;
        info!("Saved {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Cell;
    use image::{Rgba, RgbaImage};

    fn frame(direction: Direction, index: u32, shade: u8) -> Frame {
        Frame {
            direction,
            index,
            cell: Cell {
                x: 0,
                y: 0,
                width: 30,
                height: 30,
            },
            center: (15, 15),
            image: RgbaImage::from_pixel(50, 50, Rgba([shade, shade, shade, 255])),
        }
    }

    #[test]
    fn test_write_frames_names_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("duck-walk-s-2.png");
        fs::write(&stale, b"stale").unwrap();

        let frames = vec![frame(Direction::North, 1, 0), frame(Direction::South, 2, 80)];
        let written = write_frames(&frames, dir.path(), "duck-walk", None).unwrap();

        assert_eq!(written, vec![dir.path().join("duck-walk-n-1.png"), stale.clone()]);
        let reloaded = image::open(&stale).unwrap().into_rgba8();
        assert_eq!(reloaded.dimensions(), (50, 50));
        assert_eq!(reloaded.get_pixel(10, 10).0, [80, 80, 80, 255]);
    }

    #[test]
    fn test_compressed_png_decodes_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbaImage::from_fn(50, 50, |x, y| Rgba([x as u8, y as u8, 7, 255]));

        save_png(
            &DynamicImage::ImageRgba8(img.clone()),
            &path,
            Some(CompressionLevel::Level(2)),
        )
        .unwrap();

        assert_eq!(image::open(&path).unwrap().into_rgba8(), img);
    }

    #[test]
    fn test_missing_directory_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));

        let err = save_png(&img, &path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CleaverError>(),
            Some(CleaverError::OutputWrite { .. })
        ));
    }
}
