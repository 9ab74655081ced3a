// imgconvert/src/processors/encoder.rs
use crate::core::{ConvertError, Result, TargetFormat};
use image::codecs::avif::AvifEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs;
use std::path::Path;

// Balanced speed/size tradeoff for the AV1 encoder.
const AVIF_SPEED: u8 = 4;

/// Encodes RGBA bitmaps to WebP or AVIF and writes them to disk.
///
/// WebP goes through the libwebp bindings because the `image` crate encoder
/// is lossless-only and has no quality knob. The `lossless` flag applies to
/// WebP; AVIF always encodes lossy at `avif_quality`.
#[derive(Debug, Clone)]
pub struct Encoder {
    webp_quality: u8,
    avif_quality: u8,
    lossless: bool,
}

impl Encoder {
    pub fn new(webp_quality: u8, avif_quality: u8, lossless: bool) -> Self {
        Self {
            webp_quality: webp_quality.clamp(1, 100),
            avif_quality: avif_quality.clamp(1, 100),
            lossless,
        }
    }

    pub fn encode(&self, image: &RgbaImage, format: TargetFormat) -> Result<Vec<u8>> {
        match format {
            TargetFormat::Webp => self.encode_webp(image),
            TargetFormat::Avif => self.encode_avif(image),
        }
    }

    pub fn write(&self, image: &RgbaImage, format: TargetFormat, path: &Path) -> Result<()> {
        let bytes = self.encode(image, format)?;
        fs::write(path, &bytes)?;

        log::info!("Saved image: {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn encode_webp(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        log::debug!(
            "Encoding WebP, quality: {}, lossless: {}",
            self.webp_quality,
            self.lossless
        );

        let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
        let memory = encoder
            .encode_simple(self.lossless, self.webp_quality as f32)
            .map_err(|e| ConvertError::Encode(format!("WebP encoding failed: {:?}", e)))?;

        Ok(memory.to_vec())
    }

    fn encode_avif(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        log::debug!("Encoding AVIF, quality: {}", self.avif_quality);

        let mut buffer = Vec::new();
        let encoder = AvifEncoder::new_with_speed_quality(&mut buffer, AVIF_SPEED, self.avif_quality);
        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| ConvertError::Encode(format!("AVIF encoding failed: {}", e)))?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> RgbaImage {
        RgbaImage::from_fn(16, 16, |x, y| {
            image::Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
        })
    }

    #[test]
    fn webp_lossy_produces_riff_container() {
        let bytes = Encoder::new(80, 50, false)
            .encode(&test_image(), TargetFormat::Webp)
            .unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn webp_lossless_round_trips_pixels() {
        let image = test_image();
        let bytes = Encoder::new(100, 50, true)
            .encode(&image, TargetFormat::Webp)
            .unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), image.dimensions());
        assert_eq!(decoded.as_raw(), image.as_raw());
    }

    #[test]
    fn avif_produces_output() {
        let bytes = Encoder::new(80, 50, false)
            .encode(&test_image(), TargetFormat::Avif)
            .unwrap();
        assert!(!bytes.is_empty());
        // ISO BMFF: "ftyp" brand at byte 4
        assert_eq!(&bytes[4..8], b"ftyp");
    }
}
