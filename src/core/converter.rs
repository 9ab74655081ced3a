// imgconvert/src/core/converter.rs
use super::{ConversionConfig, ConversionResult, ConvertedFile, ImagePath, Result};
use crate::processors::{fit_dimensions, Encoder, Loader, Resizer};
use std::fs;
use std::path::PathBuf;

/// Converts one image: decode, bounded downscale, encode every requested
/// format, write the outputs.
pub struct ImageConverter {
    config: ConversionConfig,
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
}

impl ImageConverter {
    pub fn new(config: ConversionConfig) -> Self {
        let encoder = Encoder::new(config.webp_quality, config.avif_quality, config.lossless);

        Self {
            config,
            loader: Loader::new(),
            resizer: Resizer::new(),
            encoder,
        }
    }

    /// Convert a single image, folding any error into a `Failure` entry.
    /// Nothing escapes as `Err`: one bad image in a batch stays its own
    /// problem.
    pub fn convert(&self, input: &ImagePath) -> ConversionResult {
        match self.convert_inner(input) {
            Ok(outputs) => ConversionResult::Success {
                input: input.path().to_path_buf(),
                outputs,
            },
            Err(e) => {
                log::error!("Failed to convert {}: {}", input.path().display(), e);
                ConversionResult::Failure {
                    input: input.path().to_path_buf(),
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        }
    }

    fn convert_inner(&self, input: &ImagePath) -> Result<Vec<ConvertedFile>> {
        let mut image = self.loader.load(input.path())?;

        if let Some((width, height)) = fit_dimensions(
            image.width(),
            image.height(),
            self.config.max_width,
            self.config.max_height,
        ) {
            image = self.resizer.resize(&image, width, height);
        }

        let output_dir = self.output_dir(input);
        fs::create_dir_all(&output_dir)?;

        let stem = input
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        // Outputs are written one format at a time; a failure on a later
        // format leaves the earlier files in place and the whole item is
        // reported as a Failure.
        let mut outputs = Vec::new();
        for &format in self.config.output_format.targets() {
            let path = output_dir.join(format!("{}.{}", stem, format.extension()));
            self.encoder.write(&image, format, &path)?;
            outputs.push(ConvertedFile { format, path });
        }

        Ok(outputs)
    }

    fn output_dir(&self, input: &ImagePath) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .path()
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, OutputFormat, TargetFormat};
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn save_png(dir: &TempDir, name: &str, width: u32, height: u32) -> ImagePath {
        let child = dir.child(name);
        image::RgbImage::new(width, height)
            .save(child.path())
            .unwrap();
        ImagePath::from_path(child.path().to_path_buf()).unwrap()
    }

    #[test]
    fn webp_only_writes_one_output() {
        let temp = TempDir::new().unwrap();
        let input = save_png(&temp, "photo.png", 10, 10);

        let config = ConversionConfig {
            output_format: OutputFormat::Webp,
            ..Default::default()
        };
        let result = ImageConverter::new(config).convert(&input);

        let webp = result.output_for(TargetFormat::Webp).unwrap();
        assert!(webp.exists());
        assert_eq!(webp.file_name().unwrap(), "photo.webp");
        assert!(result.output_for(TargetFormat::Avif).is_none());
    }

    #[test]
    fn both_writes_webp_and_avif() {
        let temp = TempDir::new().unwrap();
        let input = save_png(&temp, "photo.png", 8, 8);

        let result = ImageConverter::new(ConversionConfig::default()).convert(&input);

        assert!(result.is_success());
        assert!(result.output_for(TargetFormat::Webp).unwrap().exists());
        assert!(result.output_for(TargetFormat::Avif).unwrap().exists());
    }

    #[test]
    fn outputs_land_in_configured_directory() {
        let temp = TempDir::new().unwrap();
        let input = save_png(&temp, "photo.png", 8, 8);
        let out = temp.child("converted");

        let config = ConversionConfig {
            output_format: OutputFormat::Webp,
            output_dir: Some(out.path().to_path_buf()),
            ..Default::default()
        };
        let result = ImageConverter::new(config).convert(&input);

        assert_eq!(
            result.output_for(TargetFormat::Webp).unwrap(),
            out.path().join("photo.webp")
        );
    }

    #[test]
    fn small_image_keeps_its_dimensions() {
        let temp = TempDir::new().unwrap();
        let input = save_png(&temp, "small.png", 10, 10);

        let config = ConversionConfig {
            output_format: OutputFormat::Webp,
            max_width: Some(1920),
            max_height: Some(1080),
            ..Default::default()
        };
        let result = ImageConverter::new(config).convert(&input);

        let out = result.output_for(TargetFormat::Webp).unwrap();
        let decoded = image::open(out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (10, 10));
    }

    #[test]
    fn large_image_is_downscaled_to_fit() {
        let temp = TempDir::new().unwrap();
        let input = save_png(&temp, "big.png", 800, 600);

        let config = ConversionConfig {
            output_format: OutputFormat::Webp,
            max_width: Some(192),
            ..Default::default()
        };
        let result = ImageConverter::new(config).convert(&input);

        let out = result.output_for(TargetFormat::Webp).unwrap();
        let decoded = image::open(out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (192, 144));
    }

    #[test]
    fn corrupt_input_is_a_failure_entry() {
        let temp = TempDir::new().unwrap();
        let child = temp.child("broken.png");
        child.write_binary(b"definitely not a png").unwrap();
        let input = ImagePath::from_path(child.path().to_path_buf()).unwrap();

        let result = ImageConverter::new(ConversionConfig::default()).convert(&input);

        match result {
            ConversionResult::Failure { kind, .. } => assert_eq!(kind, ErrorKind::CorruptImage),
            ConversionResult::Success { .. } => panic!("expected failure"),
        }
    }
}
