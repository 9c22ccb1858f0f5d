use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cleaver::cli::{AutoArgs, CliArgs, Command, CompressionLevel, InitConfigArgs, SliceArgs};
use cleaver::CleaverError;
use cleaver::config::{CleaverConfig, CompressConfig, LoadedConfig, save_config};
use cleaver::output::{DEFAULT_PREFIX, write_frames, write_strip};
use cleaver::segment::{Segmenter, slice_equal};
use cleaver::sheet::{Sheet, load_image};

#[allow(clippy::print_stdout)]
fn main() {
    if let Err(e) = run() {
        // Use println instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init). Errors share
        // stdout with the diagnostics.
        println!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match &cli.command {
        Command::Auto(args) => run_auto(args),
        Command::Slice(args) => run_slice(args),
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}

fn run_auto(args: &AutoArgs) -> Result<()> {
    let merged = merge_config_with_args(args)?;

    init_logging(merged.verbose);
    info!("Cleaver sprite sheet slicer v{}", env!("CARGO_PKG_VERSION"));

    if !merged.input.exists() {
        return Err(CleaverError::InputNotFound(merged.input).into());
    }

    // Create output directory if it doesn't exist
    if !merged.output.exists() {
        fs::create_dir_all(&merged.output)?;
    }

    let sheet = Sheet::load(&merged.input)?;

    let segmentation = merged.segmenter.segment(&sheet);
    let written = write_frames(
        &segmentation.frames,
        &merged.output,
        &merged.prefix,
        merged.compress,
    )?;

    info!(
        "Wrote {} frames to {}",
        written.len(),
        merged.output.display()
    );

    Ok(())
}

fn run_slice(args: &SliceArgs) -> Result<()> {
    init_logging(args.verbose);

    let image = load_image(&args.input)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output)?;
    }

    let slices = slice_equal(&image, args.frames)?;
    let prefix = args.prefix.as_deref().unwrap_or(DEFAULT_PREFIX);
    write_strip(&slices, &args.output, prefix, args.direction, args.compress)?;

    Ok(())
}

fn run_init_config(args: &InitConfigArgs) -> Result<()> {
    init_logging(false);
    save_config(&CleaverConfig::default(), &args.path)?;
    info!("Wrote default config to {}", args.path.display());
    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: PathBuf,
    output: PathBuf,
    prefix: String,
    segmenter: Segmenter,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &AutoArgs) -> Result<MergedConfig> {
    // Load config if specified
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Sheet path: CLI > config; one of them must be present
    let input = args
        .input
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_input))
        .context("no sprite sheet given on the command line or in the config file")?;

    // Output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_output_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let config = loaded_config
        .as_ref()
        .map(|lc| lc.config.clone())
        .unwrap_or_default();

    let prefix = args.prefix.clone().unwrap_or(config.prefix);
    let ink_threshold = args.ink_threshold.unwrap_or(config.ink_threshold);

    let segmenter = Segmenter::new()
        .ink_threshold(ink_threshold)
        .row_density(config.row_density)
        .min_row_height(config.min_row_height)
        .column_density(config.column_density)
        .min_column_width(config.min_column_width);

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else {
        config
            .compress
            .as_ref()
            .map(parse_compress_config)
            .transpose()?
    };

    Ok(MergedConfig {
        input,
        output,
        prefix,
        segmenter,
        compress,
        verbose: args.verbose,
    })
}

fn parse_compress_config(compress: &CompressConfig) -> Result<CompressionLevel> {
    let level = match compress {
        CompressConfig::Level(n) => n.to_string(),
        CompressConfig::Max(s) => s.clone(),
    };
    level
        .parse::<CompressionLevel>()
        .map_err(|e| anyhow::anyhow!("invalid compress value in config file: {}", e))
}
