//! Item definitions and models for advancement icons.
//!
//! Two styles are supported, picked by `PackConfig::style`:
//!
//! * composite: `items/<item>_advancement.json` stacks the frame model
//!   `<ns>:item/advancement` with the item's own model, so the game renders
//!   the real item (animated, tinted, 3D block) in front of the frame;
//! * baked: one generated model per texture in `textures/advancement_item`,
//!   the frame and icon already flattened by the compositor.
//!
//! Every file is written only if absent, so edited models are never
//! clobbered.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ModelSource, PackConfig, PackLayout};
use crate::discovery::list_png_names;
use crate::error::{PackError, Result};
use crate::output::{plural, Printer};
use crate::types::AdvancementsByCategory;

use super::json::{write_json_if_absent, WriteOutcome};

/// Contents of an `items/*.json` file.
#[derive(Debug, Serialize)]
pub struct ItemDefinition {
    pub model: ItemModel,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ItemModel {
    #[serde(rename = "minecraft:model")]
    Model { model: String },
    #[serde(rename = "minecraft:composite")]
    Composite { models: Vec<serde_json::Value> },
}

impl ItemModel {
    pub fn reference(model: impl Into<String>) -> Self {
        ItemModel::Model { model: model.into() }
    }
}

/// A `models/item/*.json` file with a single generated layer.
#[derive(Debug, Serialize)]
pub struct GeneratedModel {
    pub parent: &'static str,
    pub textures: Layers,
}

#[derive(Debug, Serialize)]
pub struct Layers {
    pub layer0: String,
}

impl GeneratedModel {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            parent: "minecraft:item/generated",
            textures: Layers {
                layer0: texture.into(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemAsset {
    model: serde_json::Value,
}

/// The vanilla item definition table (`items/_all.json`), keyed by item path.
#[derive(Debug, Default)]
pub struct ItemAssets {
    entries: HashMap<String, ItemAsset>,
}

impl ItemAssets {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PackError::io(path, "Failed to read item assets", e))?;

        Self::parse(&content).map_err(|e| match e {
            PackError::Parse { message, help } => PackError::Parse {
                message: format!("{} ({})", message, path.display()),
                help,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        let entries = serde_json::from_str(content).map_err(|e| PackError::Parse {
            message: format!("Invalid item asset table: {}", e),
            help: Some("Expected an object of item id to {\"model\": ...}".to_string()),
        })?;

        Ok(Self { entries })
    }

    /// The item's model descriptor.
    pub fn model(&self, item: &str) -> Option<&serde_json::Value> {
        self.entries.get(item).map(|a| &a.model)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts from a model generation step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModelReport {
    pub written: usize,
    pub kept: usize,
    /// Items missing from the asset table that fell back to a reference.
    pub fallbacks: usize,
}

impl ModelReport {
    fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => self.written += 1,
            WriteOutcome::Kept => self.kept += 1,
        }
    }
}

/// Write `items/<item>_advancement.json` composites for every advancement.
///
/// `assets` is required for `ModelSource::Lookup`; items it lacks fall back
/// to a `minecraft:item/<item>` reference with a warning.
pub fn write_composite_advancement_models(
    pack: &PackLayout,
    advancements: &AdvancementsByCategory,
    assets: Option<&ItemAssets>,
    config: &PackConfig,
    printer: &Printer,
) -> Result<ModelReport> {
    let items_dir = pack.items_dir(&config.namespace);
    let frame = serde_json::to_value(ItemModel::reference(config.frame_model())).map_err(|e| {
        PackError::Build {
            message: format!("Failed to build frame model: {}", e),
            help: None,
        }
    })?;

    let mut report = ModelReport::default();

    for (category, entries) in advancements {
        printer.status(
            "Generating",
            &format!(
                "item models for {} ({})",
                category,
                plural(entries.len(), "advancement", "advancements")
            ),
        );

        for advancement in entries {
            let path = items_dir.join(format!("{}_advancement.json", advancement.item));
            if path.exists() {
                report.kept += 1;
                continue;
            }

            let item_model = match (config.model_source, assets.and_then(|a| a.model(&advancement.item))) {
                (ModelSource::Lookup, Some(model)) => model.clone(),
                (ModelSource::Lookup, None) => {
                    printer.warning(
                        "Missing",
                        &format!("item asset for '{}', referencing its model", advancement.item),
                    );
                    report.fallbacks += 1;
                    reference_value(&advancement.item)?
                }
                (ModelSource::Reference, _) => reference_value(&advancement.item)?,
            };

            let definition = ItemDefinition {
                model: ItemModel::Composite {
                    models: vec![frame.clone(), item_model],
                },
            };
            report.record(write_json_if_absent(&path, &definition)?);
        }
    }

    Ok(report)
}

/// Write an item definition and a generated model for every baked texture
/// in `textures/advancement_item`.
pub fn write_baked_advancement_models(pack: &PackLayout, config: &PackConfig) -> Result<ModelReport> {
    let ns = &config.namespace;
    let items_dir = pack.items_dir(ns);
    let models_dir = pack.item_models_dir(ns);
    let mut report = ModelReport::default();

    for file_name in list_png_names(&pack.advancement_item_dir())? {
        let Some(item) = file_name.strip_suffix(".png") else {
            continue;
        };

        let definition = ItemDefinition {
            model: ItemModel::reference(format!("{}:item/{}_advancement", ns, item)),
        };
        report.record(write_json_if_absent(
            &items_dir.join(format!("{}_advancement.json", item)),
            &definition,
        )?);

        let model = GeneratedModel::new(format!("minecraft:advancement_item/{}", item));
        report.record(write_json_if_absent(
            &models_dir.join(format!("{}_advancement.json", item)),
            &model,
        )?);
    }

    Ok(report)
}

fn reference_value(item: &str) -> Result<serde_json::Value> {
    serde_json::to_value(ItemModel::reference(format!("minecraft:item/{}", item))).map_err(|e| {
        PackError::Build {
            message: format!("Failed to build model reference for '{}': {}", item, e),
            help: None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvancementStyle;
    use crate::types::Advancement;
    use serde_json::json;
    use tempfile::tempdir;

    const ASSETS: &str = r#"{
        "wheat": { "model": { "type": "minecraft:model", "model": "minecraft:item/wheat" } },
        "compass": { "model": { "type": "minecraft:select", "property": "minecraft:context_dimension", "cases": [] } }
    }"#;

    fn advancements(items: &[&str]) -> AdvancementsByCategory {
        let mut categories = AdvancementsByCategory::new();
        categories.insert(
            "husbandry".to_string(),
            items
                .iter()
                .map(|item| Advancement {
                    name: format!("minecraft:husbandry/{}", item),
                    item: item.to_string(),
                })
                .collect(),
        );
        categories
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_composite_with_lookup() {
        let dir = tempdir().unwrap();
        let pack = PackLayout::new(dir.path());
        let assets = ItemAssets::parse(ASSETS).unwrap();

        let report = write_composite_advancement_models(
            &pack,
            &advancements(&["compass"]),
            Some(&assets),
            &PackConfig::default(),
            &Printer::plain(),
        )
        .unwrap();

        assert_eq!(report.written, 1);
        pretty_assertions::assert_eq!(
            read_json(&pack.items_dir("bingo").join("compass_advancement.json")),
            json!({
                "model": {
                    "type": "minecraft:composite",
                    "models": [
                        { "type": "minecraft:model", "model": "bingo:item/advancement" },
                        { "type": "minecraft:select", "property": "minecraft:context_dimension", "cases": [] }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_composite_file_text() {
        let dir = tempdir().unwrap();
        let pack = PackLayout::new(dir.path());
        let assets = ItemAssets::parse(ASSETS).unwrap();

        write_composite_advancement_models(
            &pack,
            &advancements(&["wheat"]),
            Some(&assets),
            &PackConfig::default(),
            &Printer::plain(),
        )
        .unwrap();

        let text = fs::read_to_string(pack.items_dir("bingo").join("wheat_advancement.json")).unwrap();
        insta::assert_snapshot!(text, @r###"
        {
          "model": {
            "type": "minecraft:composite",
            "models": [
              {
                "type": "minecraft:model",
                "model": "bingo:item/advancement"
              },
              {
                "type": "minecraft:model",
                "model": "minecraft:item/wheat"
              }
            ]
          }
        }
        "###);
    }

    #[test]
    fn test_composite_with_reference() {
        let dir = tempdir().unwrap();
        let pack = PackLayout::new(dir.path());
        let config = PackConfig {
            model_source: ModelSource::Reference,
            ..PackConfig::default()
        };

        write_composite_advancement_models(&pack, &advancements(&["compass"]), None, &config, &Printer::plain())
            .unwrap();

        let value = read_json(&pack.items_dir("bingo").join("compass_advancement.json"));
        assert_eq!(
            value["model"]["models"][1],
            json!({ "type": "minecraft:model", "model": "minecraft:item/compass" })
        );
    }

    #[test]
    fn test_missing_asset_falls_back_to_reference() {
        let dir = tempdir().unwrap();
        let pack = PackLayout::new(dir.path());
        let assets = ItemAssets::parse(ASSETS).unwrap();
        let printer = Printer::plain();

        let report = write_composite_advancement_models(
            &pack,
            &advancements(&["elytra"]),
            Some(&assets),
            &PackConfig::default(),
            &printer,
        )
        .unwrap();

        assert_eq!(report.fallbacks, 1);
        assert_eq!(printer.warning_count(), 1);
        let value = read_json(&pack.items_dir("bingo").join("elytra_advancement.json"));
        assert_eq!(value["model"]["models"][1]["model"], "minecraft:item/elytra");
    }

    #[test]
    fn test_composite_keeps_existing_and_duplicates() {
        let dir = tempdir().unwrap();
        let pack = PackLayout::new(dir.path());
        let assets = ItemAssets::parse(ASSETS).unwrap();
        let path = pack.items_dir("bingo").join("wheat_advancement.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "edited").unwrap();

        let report = write_composite_advancement_models(
            &pack,
            &advancements(&["wheat", "wheat"]),
            Some(&assets),
            &PackConfig::default(),
            &Printer::plain(),
        )
        .unwrap();

        assert_eq!(report.kept, 2);
        assert_eq!(report.written, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited");
    }

    #[test]
    fn test_baked_models() {
        let dir = tempdir().unwrap();
        let pack = PackLayout::new(dir.path());
        fs::create_dir_all(pack.advancement_item_dir()).unwrap();
        fs::write(pack.advancement_item_dir().join("wheat.png"), b"").unwrap();
        let config = PackConfig {
            style: AdvancementStyle::Baked,
            ..PackConfig::default()
        };

        let report = write_baked_advancement_models(&pack, &config).unwrap();

        assert_eq!(report.written, 2);
        assert_eq!(
            read_json(&pack.items_dir("bingo").join("wheat_advancement.json")),
            json!({ "model": { "type": "minecraft:model", "model": "bingo:item/wheat_advancement" } })
        );
        assert_eq!(
            read_json(&pack.item_models_dir("bingo").join("wheat_advancement.json")),
            json!({
                "parent": "minecraft:item/generated",
                "textures": { "layer0": "minecraft:advancement_item/wheat" }
            })
        );
    }

    #[test]
    fn test_item_assets_parse_errors() {
        assert!(matches!(ItemAssets::parse("[1, 2]"), Err(PackError::Parse { .. })));
        assert!(matches!(
            ItemAssets::parse(r#"{ "stick": { "no_model": 1 } }"#),
            Err(PackError::Parse { .. })
        ));
    }

    #[test]
    fn test_item_assets_load_missing() {
        let result = ItemAssets::load(Path::new("/nonexistent/_all.json"));
        assert!(matches!(result, Err(PackError::Io { .. })));
    }
}
