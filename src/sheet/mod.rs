mod crop;
mod direction;
mod loader;
mod mask;

pub use crop::{crop_centered, crop_padded};
pub use direction::Direction;
pub use loader::{Sheet, load_image};
pub use mask::{BoundingBox, DEFAULT_INK_THRESHOLD, InkMask, luminance};
