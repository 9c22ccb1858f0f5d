use image::RgbaImage;
use log::{debug, info, warn};

use super::{Band, RowBands, equal_bands, find_bands, select_frames};
use crate::sheet::{DEFAULT_INK_THRESHOLD, Direction, InkMask, Sheet, crop_centered};

/// Rows a walk sheet is expected to have, one per direction
pub const ROW_COUNT: usize = Direction::ALL.len();
/// Most frames kept per direction
pub const MAX_FRAMES: usize = 6;
/// Side length of every output frame
pub const FRAME_SIZE: u32 = 50;

/// A cell rectangle on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Cell {
    fn from_bands(column: Band, row: Band) -> Self {
        Self {
            x: column.start,
            y: row.start,
            width: column.len(),
            height: row.len(),
        }
    }
}

/// One extracted animation frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub direction: Direction,
    /// 1-based position within the direction's row
    pub index: u32,
    /// Cell the frame was found in
    pub cell: Cell,
    /// Centre of the cell's ink, in sheet coordinates
    pub center: (u32, u32),
    /// `FRAME_SIZE` x `FRAME_SIZE` crop centred on `center`
    pub image: RgbaImage,
}

/// Result of segmenting a sheet
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub rows: RowBands,
    pub frames: Vec<Frame>,
}

/// Locates rows, columns and frame content on a sprite sheet via
/// ink projection profiles.
#[derive(Debug, Clone)]
pub struct Segmenter {
    pub ink_threshold: u8,
    pub row_density: u32,
    pub min_row_height: u32,
    pub column_density: u32,
    pub min_column_width: u32,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            ink_threshold: DEFAULT_INK_THRESHOLD,
            row_density: 10,
            min_row_height: 20,
            column_density: 5,
            min_column_width: 20,
        }
    }

    pub fn ink_threshold(mut self, threshold: u8) -> Self {
        self.ink_threshold = threshold;
        self
    }

    pub fn row_density(mut self, density: u32) -> Self {
        self.row_density = density;
        self
    }

    pub fn min_row_height(mut self, height: u32) -> Self {
        self.min_row_height = height;
        self
    }

    pub fn column_density(mut self, density: u32) -> Self {
        self.column_density = density;
        self
    }

    pub fn min_column_width(mut self, width: u32) -> Self {
        self.min_column_width = width;
        self
    }

    /// Find the row bands, falling back to an even split of the height
    /// when projection does not yield exactly one row per direction.
    pub fn detect_rows(&self, mask: &InkMask) -> RowBands {
        let bands = find_bands(&mask.row_profile(), self.row_density, self.min_row_height);
        info!("Detected {} rows.", bands.len());

        if bands.len() == ROW_COUNT {
            RowBands::Detected(bands)
        } else {
            warn!(
                "Did not detect exactly {} rows. Falling back to an even grid.",
                ROW_COUNT
            );
            let count = u32::try_from(ROW_COUNT).unwrap_or(u32::MAX);
            RowBands::FallbackUsed(equal_bands(mask.height(), count))
        }
    }

    /// Find column bands within one row, left to right
    pub fn detect_columns(&self, mask: &InkMask, row: Band) -> Vec<Band> {
        find_bands(
            &mask.column_profile(row),
            self.column_density,
            self.min_column_width,
        )
    }

    /// Segment a whole sheet into frames
    pub fn segment(&self, sheet: &Sheet) -> Segmentation {
        let mask = InkMask::from_image(&sheet.image, self.ink_threshold);
        let rows = self.detect_rows(&mask);
        let mut frames = Vec::new();

        for (row_idx, &row) in rows.bands().iter().enumerate() {
            // Rows past the eighth have no direction and are ignored
            let Some(direction) = Direction::from_row(row_idx) else {
                break;
            };
            let columns = self.detect_columns(&mask, row);
            let kept = select_frames(&columns, MAX_FRAMES);
            info!(
                "Row {} ({}): Found {} frames.",
                row_idx,
                direction,
                kept.len()
            );

            for (index, &column) in (1u32..).zip(kept) {
                let cell = Cell::from_bands(column, row);
                match extract_frame(&sheet.image, &mask, direction, index, cell) {
                    Some(frame) => frames.push(frame),
                    None => debug!("Skipping empty cell {}-{}", direction, index),
                }
            }
        }

        Segmentation { rows, frames }
    }
}

/// Crop one frame centred on the ink inside `cell`; `None` if the cell is blank
fn extract_frame(
    image: &RgbaImage,
    mask: &InkMask,
    direction: Direction,
    index: u32,
    cell: Cell,
) -> Option<Frame> {
    let bbox = mask.bounding_box(cell.x, cell.y, cell.width, cell.height)?;
    let (bx, by) = bbox.center();
    let center = (cell.x + bx, cell.y + by);

    // Crop may run off the sheet near its edges
    let image = crop_centered(
        image,
        i64::from(center.0),
        i64::from(center.1),
        FRAME_SIZE,
    );

    Some(Frame {
        direction,
        index,
        cell,
        center,
        image,
    })
}
