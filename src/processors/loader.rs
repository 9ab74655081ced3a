// imgconvert/src/processors/loader.rs
use crate::core::{ConvertError, Result, MAX_DIMENSION, MAX_FILE_SIZE};
use image::{ImageError, ImageReader, RgbaImage};
use std::path::Path;

/// Decodes input files into RGBA bitmaps, guarding against oversized input.
#[derive(Debug, Clone)]
pub struct Loader {
    max_file_size: u64,
    max_dimension: u32,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            max_dimension: MAX_DIMENSION,
        }
    }

    /// Load an image and normalize it to RGBA so resize and encode behave
    /// uniformly regardless of the source color model.
    pub fn load(&self, path: &Path) -> Result<RgbaImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_file(path)?;

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| match e {
                ImageError::IoError(io) => ConvertError::Io(io),
                other => ConvertError::CorruptImage(format!(
                    "failed to decode {}: {}",
                    path.display(),
                    other
                )),
            })?;

        let image = image.to_rgba8();
        let (width, height) = image.dimensions();

        if width > self.max_dimension || height > self.max_dimension {
            return Err(ConvertError::TooLarge(format!(
                "image dimensions {}x{} exceed maximum {}",
                width, height, self.max_dimension
            )));
        }

        log::debug!("Loaded image: {}x{} pixels", width, height);

        Ok(image)
    }

    fn validate_file(&self, path: &Path) -> Result<()> {
        let metadata = path.metadata()?;

        if metadata.len() == 0 {
            return Err(ConvertError::CorruptImage(format!(
                "file is empty: {}",
                path.display()
            )));
        }

        if metadata.len() > self.max_file_size {
            return Err(ConvertError::TooLarge(format!(
                "file size {} exceeds maximum {}",
                metadata.len(),
                self.max_file_size
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
