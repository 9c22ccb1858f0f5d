mod format;
mod naming;

pub use format::{save_png, write_frames, write_strip};
pub use naming::{DEFAULT_PREFIX, frame_filename};
