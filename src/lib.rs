pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod segment;
pub mod sheet;

pub use cli::{CliArgs, Command, CompressionLevel};
pub use error::CleaverError;
pub use segment::{Frame, RowBands, Segmentation, Segmenter};
pub use sheet::{Direction, InkMask, Sheet};
