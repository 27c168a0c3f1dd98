//! shrink CLI - resize and re-encode images
//!
//! Thin front end over `shrink-core`: JPEG re-encoding (the default), PNG
//! re-encoding, or a search for the best JPEG quality under a size budget.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use shrink_core::{
    compress_file, compress_png, compress_to_size_with_options, decode_image, CompressOptions,
    PixelGrid, Quality, ResampleFilter,
};

/// Resize and re-encode images, optionally to fit a byte budget.
#[derive(Parser, Debug)]
#[command(name = "shrink")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image file (JPEG or PNG)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file path. Written as JPEG unless --png is given, whatever the extension.
    #[arg(short, long, value_name = "OUTPUT")]
    output: PathBuf,

    /// JPEG quality (1-100). Values outside that range encode at 80.
    #[arg(short, long, default_value_t = 80, allow_hyphen_values = true)]
    quality: i32,

    /// Named quality level (overrides --quality)
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Maximum output width in pixels (0 = no limit)
    #[arg(long, default_value_t = 0)]
    max_width: u32,

    /// Maximum output height in pixels (0 = no limit)
    #[arg(long, default_value_t = 0)]
    max_height: u32,

    /// Resampling filter used when shrinking
    #[arg(long, value_enum, default_value = "catmull-rom")]
    filter: FilterArg,

    /// Search for the highest JPEG quality whose output fits in this many bytes
    #[arg(long, value_name = "BYTES", conflicts_with = "png")]
    target_size: Option<usize>,

    /// Encode losslessly as PNG at maximum compression
    #[arg(long)]
    png: bool,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Quality 30
    Low,
    /// Quality 60
    Medium,
    /// Quality 80
    High,
    /// Quality 95
    Best,
}

impl From<PresetArg> for Quality {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Low => Quality::Low,
            PresetArg::Medium => Quality::Medium,
            PresetArg::High => Quality::High,
            PresetArg::Best => Quality::Best,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Nearest neighbor (fastest)
    Nearest,
    /// Bilinear
    Bilinear,
    /// Catmull-Rom bicubic
    CatmullRom,
    /// Lanczos3 (slowest)
    Lanczos3,
}

impl From<FilterArg> for ResampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Bilinear => ResampleFilter::Bilinear,
            FilterArg::CatmullRom => ResampleFilter::CatmullRom,
            FilterArg::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

impl Args {
    fn options(&self) -> CompressOptions {
        let quality = match self.preset {
            Some(preset) => Quality::from(preset).into(),
            None => self.quality,
        };

        CompressOptions::new()
            .with_quality(quality)
            .with_max_dimensions(self.max_width, self.max_height)
            .with_filter(self.filter.into())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let opts = args.options();

    if let Some(target) = args.target_size {
        let grid = read_grid(args)?;
        let bytes = compress_to_size_with_options(&grid, target, &opts)
            .context("Failed to compress to target size")?;
        fs::write(&args.output, &bytes)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;

        info!(size = bytes.len(), target, fits = bytes.len() <= target, "wrote sized JPEG");
    } else if args.png {
        let grid = read_grid(args)?;
        let file = fs::File::create(&args.output)
            .with_context(|| format!("Failed to create {}", args.output.display()))?;
        compress_png(&grid, std::io::BufWriter::new(file), &opts)
            .context("Failed to encode PNG")?;

        info!(output = %args.output.display(), "wrote PNG");
    } else {
        compress_file(&args.input, &args.output, &opts).with_context(|| {
            format!(
                "Failed to compress {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;
    }

    Ok(())
}

fn read_grid(args: &Args) -> Result<PixelGrid> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    decode_image(&bytes).with_context(|| format!("Failed to decode {}", args.input.display()))
}
