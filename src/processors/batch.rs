use crate::core::{BatchResult, ConversionConfig, ConvertError, ImageConverter, Result};
use crate::processors::walker::enumerate_images;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

/// Fans a directory of images out across a bounded worker pool and collects
/// one result per enumerated input, in enumeration order.
pub struct BatchProcessor {
    config: ConversionConfig,
    workers: Option<usize>,
}

impl BatchProcessor {
    /// `workers: None` resolves to the host's available parallelism.
    pub fn new(config: ConversionConfig, workers: Option<usize>) -> Self {
        Self { config, workers }
    }

    pub fn convert_directory(&self, input_dir: &Path) -> Result<BatchResult> {
        // Config and worker-count problems abort before anything is
        // scheduled or written.
        self.config.validate()?;
        let workers = self.resolve_workers()?;

        let paths = enumerate_images(input_dir)?;

        if paths.is_empty() {
            log::warn!("No supported images found in {}", input_dir.display());
            return Ok(BatchResult::default());
        }

        log::info!(
            "Converting {} images from {} with {} workers",
            paths.len(),
            input_dir.display(),
            workers
        );

        let pb = self.create_progress_bar(paths.len());
        let converter = ImageConverter::new(self.config.clone());

        // The pool lives for exactly this call; dropping it joins the
        // workers before we return. par_iter + collect keeps results in
        // input order no matter which worker finishes first, and a Failure
        // entry for one image never disturbs its siblings.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| {
                ConvertError::InvalidConfig(format!("failed to create worker pool: {}", e))
            })?;

        let results = pool.install(|| {
            paths
                .par_iter()
                .progress_with(pb.clone())
                .map(|path| converter.convert(path))
                .collect()
        });

        let batch = BatchResult::new(results);

        pb.finish_with_message(format!(
            "{} succeeded, {} failed",
            batch.success_count(),
            batch.failure_count()
        ));

        Ok(batch)
    }

    fn resolve_workers(&self) -> Result<usize> {
        match self.workers {
            Some(0) => Err(ConvertError::InvalidConfig(
                "worker count must be positive".to_string(),
            )),
            Some(n) => Ok(n),
            None => Ok(std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)),
        }
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}
