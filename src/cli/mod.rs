mod args;

pub use args::{AutoArgs, CliArgs, Command, CompressionLevel, InitConfigArgs, SliceArgs};
