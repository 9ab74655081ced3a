// imgconvert/src/processors/resizer.rs
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Compute the dimensions that fit `width` x `height` within the given
/// bounds, preserving aspect ratio. Returns `None` when the image already
/// fits: the scale factor is the minimum of `bound/dim` over the bounds that
/// are set, and a factor >= 1 means no resize (downscale only, never
/// upscale).
pub fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Option<(u32, u32)> {
    let mut scale = f64::INFINITY;

    if let Some(max_w) = max_width {
        scale = scale.min(max_w as f64 / width as f64);
    }
    if let Some(max_h) = max_height {
        scale = scale.min(max_h as f64 / height as f64);
    }

    if !scale.is_finite() || scale >= 1.0 {
        return None;
    }

    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    Some((new_width, new_height))
}

/// Downscales bitmaps to fit configured bounds.
#[derive(Debug, Clone)]
pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn resize(&self, image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        imageops::resize(image, width, height, self.filter)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
