mod band;
mod equal;
mod segmenter;

pub use band::{Band, RowBands, equal_bands, find_bands, select_frames};
pub use equal::{DEFAULT_STRIP_FRAMES, slice_equal};
pub use segmenter::{Cell, FRAME_SIZE, Frame, MAX_FRAMES, ROW_COUNT, Segmentation, Segmenter};
