// imgconvert/src/cli.rs
use crate::core::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imgconvert",
    version,
    about = "Convert images to WebP and AVIF formats"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single image
    Convert {
        /// Input image file
        input: PathBuf,

        /// Output directory (default: same as input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "both")]
        format: Format,

        /// Quality for both formats (overrides the per-format settings)
        #[arg(short, long)]
        quality: Option<u8>,

        /// WebP quality 1-100
        #[arg(long, default_value_t = 80)]
        webp_quality: u8,

        /// AVIF quality 1-100
        #[arg(long, default_value_t = 50)]
        avif_quality: u8,

        /// Enable lossless WebP compression
        #[arg(short, long)]
        lossless: bool,

        /// Maximum output width (maintains aspect ratio)
        #[arg(short = 'W', long)]
        max_width: Option<u32>,

        /// Maximum output height (maintains aspect ratio)
        #[arg(short = 'H', long)]
        max_height: Option<u32>,

        /// Use a named preset (overrides quality/size options)
        #[arg(short, long)]
        preset: Option<String>,

        /// Show compression statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// Convert every supported image in a directory
    Batch {
        /// Input directory
        input: PathBuf,

        /// Output directory (default: same as input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "both")]
        format: Format,

        /// Quality for both formats (overrides the per-format settings)
        #[arg(short, long)]
        quality: Option<u8>,

        /// WebP quality 1-100
        #[arg(long, default_value_t = 80)]
        webp_quality: u8,

        /// AVIF quality 1-100
        #[arg(long, default_value_t = 50)]
        avif_quality: u8,

        /// Enable lossless WebP compression
        #[arg(short, long)]
        lossless: bool,

        /// Maximum output width (maintains aspect ratio)
        #[arg(short = 'W', long)]
        max_width: Option<u32>,

        /// Maximum output height (maintains aspect ratio)
        #[arg(short = 'H', long)]
        max_height: Option<u32>,

        /// Number of parallel workers (default: CPU count)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Use a named preset (overrides quality/size options)
        #[arg(short, long)]
        preset: Option<String>,

        /// Show compression statistics per converted image
        #[arg(short, long)]
        stats: bool,
    },

    /// List available presets
    Presets,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Webp,
    Avif,
    Both,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Webp => OutputFormat::Webp,
            Format::Avif => OutputFormat::Avif,
            Format::Both => OutputFormat::Both,
        }
    }
}
