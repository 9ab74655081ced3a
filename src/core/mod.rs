// imgconvert/src/core/mod.rs
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

mod converter;

pub use converter::ImageConverter;

/// Extensions accepted as conversion input, lower-case.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "bmp", "webp"];

/// Largest accepted input file, in bytes.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Largest accepted dimension on either axis, input or configured bound.
pub const MAX_DIMENSION: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Webp,
    Avif,
}

impl TargetFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Webp => "webp",
            TargetFormat::Avif => "avif",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFormat::Webp => write!(f, "WebP"),
            TargetFormat::Avif => write!(f, "AVIF"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Webp,
    Avif,
    Both,
}

impl OutputFormat {
    /// Concrete formats to produce, in request order (WebP before AVIF).
    pub fn targets(self) -> &'static [TargetFormat] {
        match self {
            OutputFormat::Webp => &[TargetFormat::Webp],
            OutputFormat::Avif => &[TargetFormat::Avif],
            OutputFormat::Both => &[TargetFormat::Webp, TargetFormat::Avif],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub output_format: OutputFormat,
    pub webp_quality: u8,
    pub avif_quality: u8,
    pub lossless: bool,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub output_dir: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Both,
            webp_quality: 80,
            avif_quality: 50,
            lossless: false,
            max_width: None,
            max_height: None,
            output_dir: None,
        }
    }
}

impl ConversionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.webp_quality == 0 || self.webp_quality > 100 {
            return Err(ConvertError::InvalidConfig(format!(
                "webp_quality must be 1-100, got {}",
                self.webp_quality
            )));
        }

        if self.avif_quality == 0 || self.avif_quality > 100 {
            return Err(ConvertError::InvalidConfig(format!(
                "avif_quality must be 1-100, got {}",
                self.avif_quality
            )));
        }

        for (name, bound) in [("max_width", self.max_width), ("max_height", self.max_height)] {
            if let Some(px) = bound {
                if px == 0 || px > MAX_DIMENSION {
                    return Err(ConvertError::InvalidConfig(format!(
                        "{} must be 1-{}, got {}",
                        name, MAX_DIMENSION, px
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A path that has been checked to carry a supported input extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath {
    path: PathBuf,
    extension: String,
}

impl ImagePath {
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let extension = crate::utils::get_file_extension(&path).ok_or_else(|| {
            ConvertError::UnsupportedFormat(format!("no file extension: {}", path.display()))
        })?;

        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ConvertError::UnsupportedFormat(format!(
                "unsupported extension .{} ({})",
                extension,
                path.display()
            )));
        }

        Ok(Self { path, extension })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// One written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub format: TargetFormat,
    pub path: PathBuf,
}

/// Per-image outcome. Exactly one of the two variants, never a mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Success {
        input: PathBuf,
        outputs: Vec<ConvertedFile>,
    },
    Failure {
        input: PathBuf,
        kind: ErrorKind,
        message: String,
    },
}

impl ConversionResult {
    pub fn input(&self) -> &Path {
        match self {
            ConversionResult::Success { input, .. } => input,
            ConversionResult::Failure { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }

    pub fn output_for(&self, format: TargetFormat) -> Option<&Path> {
        match self {
            ConversionResult::Success { outputs, .. } => outputs
                .iter()
                .find(|o| o.format == format)
                .map(|o| o.path.as_path()),
            ConversionResult::Failure { .. } => None,
        }
    }
}

/// Ordered batch outcome, index-aligned with the enumeration order of the
/// input directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    results: Vec<ConversionResult>,
}

impl BatchResult {
    pub fn new(results: Vec<ConversionResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }
}

impl IntoIterator for BatchResult {
    type Item = ConversionResult;
    type IntoIter = std::vec::IntoIter<ConversionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a ConversionResult;
    type IntoIter = std::slice::Iter<'a, ConversionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Caller-facing failure classification carried by `Failure` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotADirectory,
    UnsupportedFormat,
    CorruptImage,
    EncodeError,
    IoError,
    InvalidConfig,
    TooLarge,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotADirectory => "not a directory",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::CorruptImage => "corrupt image",
            ErrorKind::EncodeError => "encode error",
            ErrorKind::IoError => "io error",
            ErrorKind::InvalidConfig => "invalid config",
            ErrorKind::TooLarge => "too large",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("corrupt image: {0}")]
    CorruptImage(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("input too large: {0}")]
    TooLarge(String),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Io(_) => ErrorKind::IoError,
            ConvertError::NotADirectory(_) => ErrorKind::NotADirectory,
            ConvertError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            ConvertError::CorruptImage(_) => ErrorKind::CorruptImage,
            ConvertError::Encode(_) => ErrorKind::EncodeError,
            ConvertError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            ConvertError::TooLarge(_) => ErrorKind::TooLarge,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ConversionConfig::default().validate().is_ok());
    }

    #[test]
    fn quality_out_of_range_rejected() {
        let mut config = ConversionConfig::default();
        config.webp_quality = 0;
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidConfig(_))
        ));

        let mut config = ConversionConfig::default();
        config.avif_quality = 101;
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_bound_rejected() {
        let mut config = ConversionConfig::default();
        config.max_width = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn image_path_accepts_supported_extensions() {
        let ip = ImagePath::from_path(PathBuf::from("photo.PNG")).unwrap();
        assert_eq!(ip.extension(), "png");
    }

    #[test]
    fn image_path_rejects_unknown_extension() {
        let err = ImagePath::from_path(PathBuf::from("notes.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn both_expands_webp_first() {
        assert_eq!(
            OutputFormat::Both.targets(),
            &[TargetFormat::Webp, TargetFormat::Avif]
        );
    }
}
