//! Icon collection from the icon exporter's output.
//!
//! Exports are copied into the pack under their plain item id. A destination
//! that already exists is left alone, so re-runs only fill in new icons and
//! hand-edited textures survive.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::PackConfig;
use crate::discovery::list_png_names;
use crate::error::{PackError, Result};
use crate::output::Printer;
use crate::types::ExportedIcon;

/// Counts from one collection step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectReport {
    pub copied: usize,
    /// Destination already present.
    pub existing: usize,
    /// Fluids, stateful exports, unrelated items and unparseable names.
    pub filtered: usize,
    /// Expected source file not found.
    pub missing: usize,
}

impl CollectReport {
    pub fn merge(&mut self, other: &CollectReport) {
        self.copied += other.copied;
        self.existing += other.existing;
        self.filtered += other.filtered;
        self.missing += other.missing;
    }
}

/// Copy every wanted export in `source` to `dest/<item>.png`.
pub fn collect_icons(
    source: &Path,
    dest: &Path,
    config: &PackConfig,
    printer: &Printer,
) -> Result<CollectReport> {
    collect_matching(source, dest, config, printer, |icon| {
        Some(format!("{}.png", icon.item))
    })
}

/// Copy exports of advancement items to `dest/<item>_advancement.png`.
///
/// Exports of items no advancement uses are skipped.
pub fn collect_advancement_icons(
    source: &Path,
    dest: &Path,
    items: &BTreeSet<String>,
    config: &PackConfig,
    printer: &Printer,
) -> Result<CollectReport> {
    collect_matching(source, dest, config, printer, |icon| {
        items
            .contains(&icon.item)
            .then(|| format!("{}_advancement.png", icon.item))
    })
}

/// Copy `<icon_namespace>__<item>.png` for each configured block item to
/// `dest/<item>.png`. Missing exports are warnings.
pub fn copy_block_items(
    source: &Path,
    dest: &Path,
    config: &PackConfig,
    printer: &Printer,
) -> Result<CollectReport> {
    let mut report = CollectReport::default();
    if config.block_items.is_empty() {
        return Ok(report);
    }

    create_dir(dest)?;

    for item in &config.block_items {
        let source_path = source.join(ExportedIcon::file_name_for(&config.icon_namespace, item));
        if !source_path.exists() {
            printer.warning(
                "Missing",
                &format!("icon for item '{}' ({})", item, source_path.display()),
            );
            report.missing += 1;
            continue;
        }

        if copy_if_absent(&source_path, &dest.join(format!("{}.png", item)))? {
            report.copied += 1;
        } else {
            report.existing += 1;
        }
    }

    Ok(report)
}

fn collect_matching(
    source: &Path,
    dest: &Path,
    config: &PackConfig,
    printer: &Printer,
    target_name: impl Fn(&ExportedIcon) -> Option<String>,
) -> Result<CollectReport> {
    let mut report = CollectReport::default();
    create_dir(dest)?;

    for file_name in list_png_names(source)? {
        let Some(icon) = ExportedIcon::parse(&file_name) else {
            printer.warning("Skipping", &format!("unrecognised export name '{}'", file_name));
            report.filtered += 1;
            continue;
        };

        if icon.is_fluid() || (config.skip_stateful_icons && icon.is_stateful()) {
            report.filtered += 1;
            continue;
        }

        let Some(name) = target_name(&icon) else {
            report.filtered += 1;
            continue;
        };

        if copy_if_absent(&source.join(&file_name), &dest.join(name))? {
            report.copied += 1;
        } else {
            report.existing += 1;
        }
    }

    Ok(report)
}

/// Returns false without touching anything if `dest` exists.
pub(crate) fn copy_if_absent(source: &Path, dest: &Path) -> Result<bool> {
    if dest.exists() {
        return Ok(false);
    }

    fs::copy(source, dest).map_err(|e| PackError::io(dest, "Failed to copy icon", e))?;
    Ok(true)
}

pub(crate) fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| PackError::io(dir, "Failed to create directory", e))
}
