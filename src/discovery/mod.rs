//! Input discovery.
//!
//! Directory listings are always sorted by file name, so every step that
//! depends on enumeration order (first export wins, font code points) gives
//! the same result on every platform.

mod advancements;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PackError, Result};

pub use advancements::{load_category, scan_advancements, AGGREGATE_FILENAME, RESERVED_CATEGORY};

/// Immediate children of `dir`, sorted by file name.
///
/// A missing `dir` is an error.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PackError::Io {
            path: dir.to_path_buf(),
            message: "Directory not found".to_string(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| PackError::io(dir, "Failed to list directory", e))?;
        entries.push(entry.into_path());
    }

    Ok(entries)
}

/// Names of the `.png` files directly inside `dir`, sorted.
pub fn list_png_names(dir: &Path) -> Result<Vec<String>> {
    Ok(list_dir(dir)?
        .into_iter()
        .filter(|p| p.is_file())
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .filter(|name| name.ends_with(".png"))
        .collect())
}
