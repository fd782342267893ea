//! Advancement scanner.
//!
//! Advancements are exported per category folder, each holding one
//! aggregate `_all.json` that maps advancement name to its definition.

use std::fs;
use std::path::Path;

use crate::error::{PackError, Result};
use crate::types::{Advancement, AdvancementDefinition, AdvancementsByCategory};

use super::list_dir;

/// The aggregate file inside each category folder.
pub const AGGREGATE_FILENAME: &str = "_all.json";

/// Recipe unlocks are advancements too, but they have no icons worth showing.
pub const RESERVED_CATEGORY: &str = "recipes";

/// Scan every category folder under `dir`.
///
/// Non-directory entries and the `recipes` folder are skipped. A category
/// without a readable, well-formed aggregate file fails the whole scan.
pub fn scan_advancements(dir: &Path) -> Result<AdvancementsByCategory> {
    let mut categories = AdvancementsByCategory::new();

    for path in list_dir(dir)? {
        if !path.is_dir() {
            continue;
        }
        let Some(category) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if category == RESERVED_CATEGORY {
            continue;
        }

        let advancements = load_category(&path.join(AGGREGATE_FILENAME))?;
        categories.insert(category.to_string(), advancements);
    }

    Ok(categories)
}

/// Load one aggregate file, keeping the file's entry order.
pub fn load_category(path: &Path) -> Result<Vec<Advancement>> {
    let content = fs::read_to_string(path)
        .map_err(|e| PackError::io(path, "Failed to read advancements", e))?;

    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| PackError::Parse {
            message: format!("Invalid advancement file {}: {}", path.display(), e),
            help: Some("Expected an object of advancement name to definition".to_string()),
        })?;

    entries
        .into_iter()
        .map(|(name, value)| {
            let definition: AdvancementDefinition =
                serde_json::from_value(value).map_err(|e| PackError::Parse {
                    message: format!("Invalid advancement '{}' in {}: {}", name, path.display(), e),
                    help: Some("Every advancement needs display.icon.id".to_string()),
                })?;

            Ok(Advancement {
                name,
                item: definition.display.icon.id.path().to_string(),
            })
        })
        .collect()
}
