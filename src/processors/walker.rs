// imgconvert/src/processors/walker.rs
use crate::core::{ConvertError, ImagePath, Result};
use std::path::Path;
use walkdir::WalkDir;

/// List the convertible images directly under `input_dir`.
///
/// Direct children only, filtered to the supported extension set
/// (case-insensitive), sorted lexicographically by file name. The sort fixes
/// the enumeration order that batch results are aligned to, independent of
/// filesystem listing order.
pub fn enumerate_images(input_dir: &Path) -> Result<Vec<ImagePath>> {
    if !input_dir.is_dir() {
        return Err(ConvertError::NotADirectory(input_dir.to_path_buf()));
    }

    let mut paths: Vec<ImagePath> = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| ImagePath::from_path(entry.into_path()).ok())
        .collect();

    paths.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));

    log::debug!(
        "Enumerated {} images in {}",
        paths.len(),
        input_dir.display()
    );

    Ok(paths)
}
