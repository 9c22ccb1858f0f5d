use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::segment::DEFAULT_STRIP_FRAMES;
use crate::sheet::Direction;

#[derive(Parser, Debug)]
#[command(name = "cleaver")]
#[command(version, about = "Sprite sheet slicer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Detect rows and frames on an 8-direction walk sheet and crop each frame
    Auto(AutoArgs),
    /// Cut a single-direction strip into equal-width frames
    Slice(SliceArgs),
    /// Write a config file with default settings
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AutoArgs {
    /// Sprite sheet image
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Output directory for frame files
    #[arg(required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Load settings from a cleaver config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Filename prefix ({prefix}-{direction}-{n}.png) [default: duck-walk]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Luminance below which a pixel counts as ink [default: 200]
    #[arg(long, value_name = "LUMA")]
    pub ink_threshold: Option<u8>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SliceArgs {
    /// Horizontal strip image
    pub input: PathBuf,

    /// Output directory for frame files
    pub output: PathBuf,

    /// Direction tag used in output filenames
    #[arg(value_enum)]
    pub direction: Direction,

    /// Number of frames in the strip
    #[arg(default_value_t = DEFAULT_STRIP_FRAMES, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Filename prefix ({prefix}-{direction}-{n}.png) [default: duck-walk]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitConfigArgs {
    /// Where to write the config file
    #[arg(default_value = "cleaver.json")]
    pub path: PathBuf,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
