// imgconvert/src/presets.rs
use crate::core::{ConversionConfig, OutputFormat};
use std::path::PathBuf;

/// A named bundle of conversion settings. Presets resolve to a full
/// `ConversionConfig`; the conversion core never sees a preset name.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub output_format: OutputFormat,
    pub webp_quality: u8,
    pub avif_quality: u8,
    pub lossless: bool,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

impl Preset {
    pub fn to_config(&self, output_dir: Option<PathBuf>) -> ConversionConfig {
        ConversionConfig {
            output_format: self.output_format,
            webp_quality: self.webp_quality,
            avif_quality: self.avif_quality,
            lossless: self.lossless,
            max_width: self.max_width,
            max_height: self.max_height,
            output_dir,
        }
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "web",
        description: "Optimized for web pages (WebP, quality 80, max 1920px wide)",
        output_format: OutputFormat::Webp,
        webp_quality: 80,
        avif_quality: 50,
        lossless: false,
        max_width: Some(1920),
        max_height: None,
    },
    Preset {
        name: "thumbnail",
        description: "Small thumbnails (WebP, quality 70, max 300x300)",
        output_format: OutputFormat::Webp,
        webp_quality: 70,
        avif_quality: 50,
        lossless: false,
        max_width: Some(300),
        max_height: Some(300),
    },
    Preset {
        name: "social",
        description: "Social media images (WebP, quality 85, 1200x630)",
        output_format: OutputFormat::Webp,
        webp_quality: 85,
        avif_quality: 50,
        lossless: false,
        max_width: Some(1200),
        max_height: Some(630),
    },
    Preset {
        name: "hd",
        description: "HD resolution (WebP, quality 90, 1920x1080)",
        output_format: OutputFormat::Webp,
        webp_quality: 90,
        avif_quality: 80,
        lossless: false,
        max_width: Some(1920),
        max_height: Some(1080),
    },
    Preset {
        name: "4k",
        description: "4K resolution (WebP, quality 90, 3840x2160)",
        output_format: OutputFormat::Webp,
        webp_quality: 90,
        avif_quality: 80,
        lossless: false,
        max_width: Some(3840),
        max_height: Some(2160),
    },
    Preset {
        name: "archive",
        description: "High quality archival (both formats, quality 95/90)",
        output_format: OutputFormat::Both,
        webp_quality: 95,
        avif_quality: 90,
        lossless: false,
        max_width: None,
        max_height: None,
    },
    Preset {
        name: "lossless",
        description: "Lossless WebP compression (no quality loss)",
        output_format: OutputFormat::Webp,
        webp_quality: 100,
        avif_quality: 100,
        lossless: true,
        max_width: None,
        max_height: None,
    },
    Preset {
        name: "max-compression",
        description: "Maximum file size reduction (AVIF, quality 40)",
        output_format: OutputFormat::Avif,
        webp_quality: 50,
        avif_quality: 40,
        lossless: false,
        max_width: None,
        max_height: None,
    },
];

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}
