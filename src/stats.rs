// imgconvert/src/stats.rs
use crate::core::{ConversionResult, Result, TargetFormat};
use crate::utils::format_file_size;
use std::fs;
use std::path::PathBuf;

/// Size delta between an input and one output.
#[derive(Debug, Clone, PartialEq)]
pub struct Savings {
    pub original_size: u64,
    pub new_size: u64,
    pub saved_bytes: u64,
    pub savings_percent: f64,
    pub compression_ratio: f64,
    pub increased: bool,
}

pub fn calculate_savings(original_size: u64, new_size: u64) -> Savings {
    let (savings_percent, compression_ratio) = if original_size > 0 {
        let percent = (original_size as f64 - new_size as f64) / original_size as f64 * 100.0;
        let ratio = if new_size > 0 {
            original_size as f64 / new_size as f64
        } else {
            f64::INFINITY
        };
        (percent, ratio)
    } else {
        (0.0, 1.0)
    };

    Savings {
        original_size,
        new_size,
        saved_bytes: original_size.abs_diff(new_size),
        savings_percent,
        compression_ratio,
        increased: new_size > original_size,
    }
}

impl Savings {
    /// Ratio as `original:new` with one decimal on the left term.
    pub fn ratio_display(&self) -> String {
        if self.compression_ratio.is_finite() {
            format!("{:.1}:1", self.compression_ratio)
        } else {
            "inf:1".to_string()
        }
    }
}

/// Stats for one written output format.
#[derive(Debug, Clone)]
pub struct FormatStats {
    pub format: TargetFormat,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub savings: Savings,
}

/// Derived, read-only summary of a successful conversion.
#[derive(Debug, Clone)]
pub struct StatsRecord {
    pub input: PathBuf,
    pub input_size_bytes: u64,
    pub formats: Vec<FormatStats>,
    pub best_format: Option<TargetFormat>,
}

pub struct StatsReporter;

impl StatsReporter {
    /// Compute stats for a `Success` entry; a `Failure` yields `None`.
    pub fn summarize(result: &ConversionResult) -> Result<Option<StatsRecord>> {
        let outputs = match result {
            ConversionResult::Success { outputs, .. } => outputs,
            ConversionResult::Failure { .. } => return Ok(None),
        };

        let input_size = fs::metadata(result.input())?.len();

        let mut formats = Vec::with_capacity(outputs.len());
        for output in outputs {
            let size = fs::metadata(&output.path)?.len();
            formats.push(FormatStats {
                format: output.format,
                path: output.path.clone(),
                size_bytes: size,
                savings: calculate_savings(input_size, size),
            });
        }

        // Smallest output wins; outputs carry request order, so min_by on a
        // strict less-than keeps the first on ties.
        let best_format = formats
            .iter()
            .min_by(|a, b| a.size_bytes.cmp(&b.size_bytes))
            .map(|f| f.format);

        Ok(Some(StatsRecord {
            input: result.input().to_path_buf(),
            input_size_bytes: input_size,
            formats,
            best_format,
        }))
    }

    pub fn format_summary(record: &StatsRecord) -> String {
        let mut lines = vec![
            "Compression statistics".to_string(),
            format!("  Input: {}", format_file_size(record.input_size_bytes)),
        ];

        for entry in &record.formats {
            let delta = if entry.savings.increased {
                format!("{:.1}% larger", -entry.savings.savings_percent)
            } else {
                format!(
                    "{:.1}% saved, {}",
                    entry.savings.savings_percent,
                    entry.savings.ratio_display()
                )
            };
            lines.push(format!(
                "  {}: {} ({})",
                entry.format,
                format_file_size(entry.size_bytes),
                delta
            ));
        }

        if let Some(best) = record.best_format {
            lines.push(format!("  Best: {}", best));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConvertedFile;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use std::path::Path;

    #[test]
    fn fifty_percent_savings() {
        let s = calculate_savings(1000, 500);
        assert!((s.savings_percent - 50.0).abs() < 1e-9);
        assert!(!s.increased);
        assert_eq!(s.saved_bytes, 500);
    }

    #[test]
    fn growth_is_flagged() {
        let s = calculate_savings(500, 1000);
        assert!(s.increased);
        assert!(s.savings_percent < 0.0);
        assert_eq!(s.saved_bytes, 500);
    }

    #[test]
    fn ratio_formatting() {
        assert_eq!(calculate_savings(1000, 250).ratio_display(), "4.0:1");
        assert_eq!(calculate_savings(1000, 0).ratio_display(), "inf:1");
    }

    #[test]
    fn zero_original_is_neutral() {
        let s = calculate_savings(0, 100);
        assert_eq!(s.savings_percent, 0.0);
    }

    #[test]
    fn documented_webp_vector() {
        // 2.5 MB input producing a 450 KB WebP
        let s = calculate_savings(2_621_440, 460_800);
        assert!((s.savings_percent - 82.4).abs() < 0.05);
        assert_eq!(s.ratio_display(), "5.7:1");
    }

    #[test]
    fn failure_yields_none() {
        let failure = ConversionResult::Failure {
            input: Path::new("x.png").to_path_buf(),
            kind: crate::core::ErrorKind::CorruptImage,
            message: "bad".to_string(),
        };
        assert!(StatsReporter::summarize(&failure).unwrap().is_none());
    }

    #[test]
    fn best_format_is_smallest_with_webp_winning_ties() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("in.png");
        input.write_binary(&[0u8; 1000]).unwrap();
        let webp = temp.child("in.webp");
        webp.write_binary(&[0u8; 200]).unwrap();
        let avif = temp.child("in.avif");
        avif.write_binary(&[0u8; 200]).unwrap();

        let result = ConversionResult::Success {
            input: input.path().to_path_buf(),
            outputs: vec![
                ConvertedFile {
                    format: TargetFormat::Webp,
                    path: webp.path().to_path_buf(),
                },
                ConvertedFile {
                    format: TargetFormat::Avif,
                    path: avif.path().to_path_buf(),
                },
            ],
        };

        let record = StatsReporter::summarize(&result).unwrap().unwrap();
        assert_eq!(record.input_size_bytes, 1000);
        assert_eq!(record.best_format, Some(TargetFormat::Webp));
    }

    #[test]
    fn summary_mentions_each_format() {
        let record = StatsRecord {
            input: Path::new("in.png").to_path_buf(),
            input_size_bytes: 2_621_440,
            formats: vec![FormatStats {
                format: TargetFormat::Webp,
                path: Path::new("in.webp").to_path_buf(),
                size_bytes: 460_800,
                savings: calculate_savings(2_621_440, 460_800),
            }],
            best_format: Some(TargetFormat::Webp),
        };

        let summary = StatsReporter::format_summary(&record);
        assert!(summary.contains("WebP"));
        assert!(summary.contains("82.4% saved"));
        assert!(summary.contains("5.7:1"));
        assert!(summary.contains("Best: WebP"));
    }
}
