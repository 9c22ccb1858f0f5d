#![allow(dead_code)]

use image::{Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const INK: Rgba<u8> = Rgba([20, 20, 30, 255]);

/// Row and column pitch of the synthetic sheet
pub const PITCH: u32 = 60;

pub fn fill(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            img.put_pixel(px, py, color);
        }
    }
}

/// A walk sheet with 8 rows, each a caption block followed by `frames`
/// sprite blocks on a 60px grid. Each sprite gets a distinct colour so
/// crops can be told apart.
pub fn walk_sheet(frames: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel((frames + 1) * PITCH, 8 * PITCH, WHITE);
    for row in 0..8 {
        let top = row * PITCH;
        // Caption: short and wide, like a line of text
        fill(&mut img, 10, top + 25, 40, 10, INK);
        for col in 1..=frames {
            let shade = u8::try_from(row * 20 + col).unwrap_or(u8::MAX);
            fill(
                &mut img,
                col * PITCH + 15,
                top + 15,
                30,
                30,
                Rgba([shade, 0, 40, 255]),
            );
        }
    }
    img
}
