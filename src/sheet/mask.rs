use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::segment::Band;

/// Default luminance below which a pixel counts as ink
pub const DEFAULT_INK_THRESHOLD: u8 = 200;

const INK: Luma<u8> = Luma([255]);

/// Rec. 601 luma with integer weights; alpha is ignored.
pub fn luminance(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    // Weights sum to 65536, so the shifted value always fits in a u8
    let luma = (u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16;
    u8::try_from(luma).unwrap_or(u8::MAX)
}

/// Axis-aligned box with exclusive right/bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Integer centre, rounding down
    pub fn center(&self) -> (u32, u32) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }
}

/// Binary ink/background classification of a sheet.
///
/// Only used to locate content; never written out.
#[derive(Debug, Clone)]
pub struct InkMask {
    mask: GrayImage,
}

impl InkMask {
    /// Classify every pixel with `luminance < threshold` as ink
    pub fn from_image(image: &RgbaImage, threshold: u8) -> Self {
        let mask = GrayImage::from_fn(image.width(), image.height(), |x, y| {
            if luminance(image.get_pixel(x, y)) < threshold {
                INK
            } else {
                Luma([0])
            }
        });
        Self { mask }
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        *self.mask.get_pixel(x, y) == INK
    }

    /// Ink pixels per row across the full width
    pub fn row_profile(&self) -> Vec<u32> {
        self.mask
            .rows()
            .map(|row| count_ink(row.copied()))
            .collect()
    }

    /// Ink pixels per column, counted over the rows in `rows`
    pub fn column_profile(&self, rows: Band) -> Vec<u32> {
        let end = rows.end.min(self.height());
        let start = rows.start.min(end);
        (0..self.width())
            .map(|x| count_ink((start..end).map(|y| *self.mask.get_pixel(x, y))))
            .collect()
    }

    /// Tight box around the ink inside the given cell, in cell-local
    /// coordinates. `None` when the cell holds no ink.
    pub fn bounding_box(&self, x: u32, y: u32, width: u32, height: u32) -> Option<BoundingBox> {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0u32;
        let mut max_y = 0u32;
        let mut found = false;

        for py in y..y_end {
            for px in x..x_end {
                if self.is_ink(px, py) {
                    found = true;
                    min_x = min_x.min(px);
                    min_y = min_y.min(py);
                    max_x = max_x.max(px);
                    max_y = max_y.max(py);
                }
            }
        }

        found.then(|| BoundingBox {
            x0: min_x - x,
            y0: min_y - y,
            x1: max_x - x + 1,
            y1: max_y - y + 1,
        })
    }
}

fn count_ink(pixels: impl Iterator<Item = Luma<u8>>) -> u32 {
    let count = pixels.filter(|p| *p == INK).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
