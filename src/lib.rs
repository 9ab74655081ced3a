mod cli;
mod core;
mod presets;
mod processors;
mod stats;
mod utils;

pub use cli::{Cli, Commands, Format};
pub use core::{
    BatchResult, ConversionConfig, ConversionResult, ConvertError, ConvertedFile, ErrorKind,
    ImageConverter, ImagePath, OutputFormat, Result, TargetFormat, MAX_DIMENSION, MAX_FILE_SIZE,
    SUPPORTED_EXTENSIONS,
};
pub use presets::{get_preset, Preset, PRESETS};
pub use processors::{
    enumerate_images, fit_dimensions, BatchProcessor, Encoder, Loader, Resizer,
};
pub use stats::{calculate_savings, FormatStats, Savings, StatsRecord, StatsReporter};
pub use utils::{format_file_size, get_file_extension, is_supported_format};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ConversionConfig, ConversionResult, ImageConverter, ImagePath,
        OutputFormat, StatsReporter,
    };
}

// Re-export commonly used types
pub use image::RgbaImage;
