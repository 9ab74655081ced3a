use anyhow::bail;
use clap::Parser;
use imgconvert::{
    get_preset, BatchProcessor, Cli, Commands, ConversionConfig, ConversionResult, Format,
    ImageConverter, ImagePath, StatsReporter, PRESETS,
};
use log::LevelFilter;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output_dir,
            format,
            quality,
            webp_quality,
            avif_quality,
            lossless,
            max_width,
            max_height,
            preset,
            stats,
        } => {
            let config = build_config(
                output_dir,
                format,
                quality,
                webp_quality,
                avif_quality,
                lossless,
                max_width,
                max_height,
                preset.as_deref(),
            )?;
            process_convert(input, config, stats)
        }
        Commands::Batch {
            input,
            output_dir,
            format,
            quality,
            webp_quality,
            avif_quality,
            lossless,
            max_width,
            max_height,
            workers,
            preset,
            stats,
        } => {
            let config = build_config(
                output_dir,
                format,
                quality,
                webp_quality,
                avif_quality,
                lossless,
                max_width,
                max_height,
                preset.as_deref(),
            )?;
            process_batch(input, config, workers, stats)
        }
        Commands::Presets => {
            process_presets();
            Ok(())
        }
    }
}

fn build_config(
    output_dir: Option<PathBuf>,
    format: Format,
    quality: Option<u8>,
    webp_quality: u8,
    avif_quality: u8,
    lossless: bool,
    max_width: Option<u32>,
    max_height: Option<u32>,
    preset: Option<&str>,
) -> anyhow::Result<ConversionConfig> {
    let mut config = match preset {
        Some(name) => match get_preset(name) {
            Some(preset) => preset.to_config(output_dir),
            None => {
                let available: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
                bail!(
                    "unknown preset '{}'. Available presets: {}",
                    name,
                    available.join(", ")
                );
            }
        },
        None => ConversionConfig {
            output_format: format.into(),
            webp_quality,
            avif_quality,
            lossless,
            max_width,
            max_height,
            output_dir,
        },
    };

    // A bare -q overrides both formats, preset or not
    if let Some(q) = quality {
        config.webp_quality = q;
        config.avif_quality = q;
    }

    config.validate()?;
    Ok(config)
}

fn process_convert(input: PathBuf, config: ConversionConfig, stats: bool) -> anyhow::Result<()> {
    let image_path = ImagePath::from_path(input)?;
    let converter = ImageConverter::new(config);

    match converter.convert(&image_path) {
        ConversionResult::Success { input, outputs } => {
            println!("Converted: {}", input.display());
            for output in &outputs {
                println!("  {}: {}", output.format, output.path.display());
            }

            if stats {
                let result = ConversionResult::Success { input, outputs };
                if let Some(record) = StatsReporter::summarize(&result)? {
                    println!();
                    println!("{}", StatsReporter::format_summary(&record));
                }
            }

            Ok(())
        }
        ConversionResult::Failure { input, message, .. } => {
            bail!("failed to convert {}: {}", input.display(), message)
        }
    }
}

fn process_batch(
    input: PathBuf,
    config: ConversionConfig,
    workers: Option<usize>,
    stats: bool,
) -> anyhow::Result<()> {
    let processor = BatchProcessor::new(config, workers);
    let batch = processor.convert_directory(&input)?;

    println!(
        "Batch conversion complete: {} succeeded, {} failed",
        batch.success_count(),
        batch.failure_count()
    );

    if batch.failure_count() > 0 {
        println!("\nFailed conversions:");
        for result in &batch {
            if let ConversionResult::Failure { input, kind, message } = result {
                println!("  {} ({}): {}", input.display(), kind, message);
            }
        }
    }

    if stats {
        for result in &batch {
            if let Some(record) = StatsReporter::summarize(result)? {
                println!();
                println!("{}", record.input.display());
                println!("{}", StatsReporter::format_summary(&record));
            }
        }
    }

    // Per-item failures are reported in the result list; only a top-level
    // validation or enumeration error exits nonzero.
    Ok(())
}

fn process_presets() {
    println!("Available presets:\n");
    for preset in PRESETS {
        println!("  {:15} {}", preset.name, preset.description);
    }
    println!("\nUsage: imgconvert convert input.png --preset <preset-name>");
}
