use image::{RgbaImage, imageops};

/// Crop a `width` x `height` region whose top-left corner is at `(x, y)`.
///
/// The region may extend past any edge of `image`, or miss it entirely.
/// Pixels outside the source are transparent black.
pub fn crop_padded(image: &RgbaImage, x: i64, y: i64, width: u32, height: u32) -> RgbaImage {
    let mut out = RgbaImage::new(width, height);
    imageops::replace(&mut out, image, -x, -y);
    out
}

/// Crop a square of side `size` centred on `(cx, cy)`
pub fn crop_centered(image: &RgbaImage, cx: i64, cy: i64, size: u32) -> RgbaImage {
    let half = i64::from(size / 2);
    crop_padded(image, cx - half, cy - half, size, size)
}
