//! Image to LCD array tool
//!
//! Converts an image into an RGB565 C array for LCD controllers.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use image2lcd_core::{convert_file, ConvertOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "image2lcd")]
#[command(about = "Convert an image into an RGB565 C array for LCD displays")]
#[command(version)]
struct Cli {
    /// Input image (PNG, JPEG, BMP, ...)
    image: Option<PathBuf>,

    /// Output header file (default: input path with a .h extension)
    output: Option<PathBuf>,

    /// Output header file, alternative to the positional argument
    #[arg(short = 'o', long = "output", id = "output_flag", conflicts_with = "output")]
    output_flag: Option<PathBuf>,

    /// Array base name (default: input file name without extension)
    #[arg(long)]
    name: Option<String>,

    /// Canvas width in pixels (default: 320)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (default: 240)
    #[arg(long)]
    height: Option<u32>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(input) = cli.image else {
        print_usage();
        return Ok(ExitCode::FAILURE);
    };

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            debug!("Loaded configuration from: {}", path.display());
            config
        }
        None => Config::default(),
    };

    let options = ConvertOptions {
        output: cli.output.or(cli.output_flag),
        name: cli.name,
        size: config.canvas_size(cli.width, cli.height)?,
    };

    let written = convert_file(&input, &options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    println!("Wrote {}", written.display());
    Ok(ExitCode::SUCCESS)
}

fn print_usage() {
    eprintln!("Usage: image2lcd <IMAGE> [OUTPUT]");
    eprintln!("Example: image2lcd test.png");
}
