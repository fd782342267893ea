//! Pretty JSON file output.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{PackError, Result};

/// What happened to a guarded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already existed and was left as is.
    Kept,
}

/// Serialize `value` with two-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PackError::Build {
        message: format!("Failed to serialize {}: {}", path.display(), e),
        help: None,
    })
}

/// Write `value` to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value, path)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PackError::io(parent, "Failed to create directory", e))?;
    }

    fs::write(path, json).map_err(|e| PackError::io(path, "Failed to write JSON", e))
}

/// Write `value` to `path` only if nothing is there yet.
pub fn write_json_if_absent<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Kept);
    }

    write_json(path, value)?;
    Ok(WriteOutcome::Written)
}
