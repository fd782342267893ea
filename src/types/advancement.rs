//! Advancement records and the subset of the definition format we read.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::ItemId;

/// One advancement and the item shown as its icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advancement {
    pub name: String,
    /// Item path without namespace, e.g. `diamond_pickaxe`.
    pub item: String,
}

/// Advancements grouped by category folder name.
pub type AdvancementsByCategory = BTreeMap<String, Vec<Advancement>>;

/// Unique item paths referenced by any advancement, sorted.
pub fn advancement_items(categories: &AdvancementsByCategory) -> BTreeSet<String> {
    categories
        .values()
        .flatten()
        .map(|a| a.item.clone())
        .collect()
}

/// An advancement definition as found in a category's `_all.json`.
///
/// Only the display icon is read; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct AdvancementDefinition {
    pub display: AdvancementDisplay,
}

#[derive(Debug, Deserialize)]
pub struct AdvancementDisplay {
    pub icon: AdvancementIcon,
}

#[derive(Debug, Deserialize)]
pub struct AdvancementIcon {
    pub id: ItemId,
}
