use crate::sheet::Direction;

/// Prefix for frame filenames when none is configured
pub const DEFAULT_PREFIX: &str = "duck-walk";

/// `{prefix}-{direction}-{index}.png`, with `index` 1-based
pub fn frame_filename(prefix: &str, direction: Direction, index: u32) -> String {
    format!("{}-{}-{}.png", prefix, direction.tag(), index)
}
