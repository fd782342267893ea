//! Items atlas mapping extraction.
//!
//! Reads the debug dump of the items atlas (F3+S in game) and maps every
//! item id to the sprite that shows it, e.g. `minecraft:stick → item/stick`.
//! Each dump line is tab separated; only the first field, the sprite name,
//! is used:
//!
//! ```text
//! minecraft:item/stick	x=16	y=0	w=16	h=16
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::AtlasRules;
use crate::error::{PackError, Result};

/// Item id → sprite path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtlasMapping {
    sprites: BTreeMap<String, String>,
}

impl AtlasMapping {
    pub fn get(&self, item: &str) -> Option<&str> {
        self.sprites.get(item).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sprites.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty JSON object, sorted by item id.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.sprites).map_err(|e| PackError::Build {
            message: format!("Failed to serialize atlas mappings: {}", e),
            help: None,
        })
    }

    /// `sprites.put(Items.STICK, "item/stick");` lines for the mod's sprite table.
    pub fn java_hashmap_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(item, sprite)| {
                let name = item.split_once(':').map_or(item, |(_, path)| path);
                format!(
                    "        sprites.put(Items.{}, \"{}\");",
                    name.to_uppercase(),
                    sprite
                )
            })
            .collect()
    }
}

/// Build the mapping from the text of an atlas dump.
///
/// Overrides are applied after the scan, so they win over scanned entries.
pub fn extract_atlas_mappings(dump: &str, rules: &AtlasRules) -> AtlasMapping {
    let mut sprites = BTreeMap::new();

    for line in dump.lines() {
        let value = line.split('\t').next().unwrap_or("").trim_end();

        if !value.starts_with(&rules.prefix) {
            continue;
        }
        if rules.blacklist.iter().any(|suffix| value.ends_with(suffix.as_str())) {
            continue;
        }

        if let Some((item, sprite)) = item_for_sprite(value) {
            sprites.insert(item, sprite.to_string());
        }
    }

    for (item, sprite) in &rules.overrides {
        sprites.insert(item.clone(), sprite.clone());
    }

    AtlasMapping { sprites }
}

/// Read an atlas dump file and extract its mapping.
pub fn load_atlas_mappings(path: &Path, rules: &AtlasRules) -> Result<AtlasMapping> {
    let dump = fs::read_to_string(path)
        .map_err(|e| PackError::io(path, "Failed to read atlas dump", e))?;

    Ok(extract_atlas_mappings(&dump, rules))
}

/// Write the mapping as JSON, creating parent directories.
pub fn save_atlas_mappings(mapping: &AtlasMapping, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PackError::io(parent, "Failed to create directory", e))?;
    }

    fs::write(path, mapping.to_json()?)
        .map_err(|e| PackError::io(path, "Failed to write atlas mappings", e))
}

/// `minecraft:item/stick` → (`minecraft:stick`, `item/stick`).
fn item_for_sprite(value: &str) -> Option<(String, &str)> {
    let (namespace, sprite) = value.split_once(':')?;
    let name = sprite.strip_prefix("item/").unwrap_or(sprite);
    Some((format!("{}:{}", namespace, name), sprite))
}
