//! Pack configuration (iconpack.yaml).
//!
//! Every generator step takes a `&PackConfig` instead of reading global
//! constants, so several packs can be generated from one checkout. A missing
//! `iconpack.yaml` means all defaults, which reproduce the "Bingo Icons" pack.

mod layout;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

pub use layout::{InputLayout, PackLayout};

/// The name of the config file looked up in the base directory.
pub const CONFIG_FILENAME: &str = "iconpack.yaml";

/// How advancement icons end up in the pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvancementStyle {
    /// Item definitions compose the frame model with the item's own model at
    /// load time.
    Composite,
    /// The frame and the icon are flattened into one texture per item.
    Baked,
}

/// Where a composite advancement model takes the item's model from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSource {
    /// Copy the item's model from the vanilla item asset table.
    Lookup,
    /// Reference `minecraft:item/<item>` directly.
    Reference,
}

/// Format fields written to `pack.mcmeta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_format: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_format: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_format: Option<u32>,
}

impl Default for PackFormat {
    fn default() -> Self {
        Self {
            pack_format: None,
            min_format: Some(70),
            max_format: Some(75),
        }
    }
}

/// Bitmap font glyph settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// First code point handed out; the private use area starts at U+E000.
    pub base_codepoint: u32,
    pub height: u32,
    pub ascent: i32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            base_codepoint: 0xE000,
            height: 10,
            ascent: 9,
        }
    }
}

/// Rules for reading the items atlas dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasRules {
    /// Only sprites under this prefix belong to items.
    pub prefix: String,
    /// Sprites ending with any of these are overlays, frames or model parts.
    pub blacklist: Vec<String>,
    /// Item id → sprite for items whose icon is not their first frame.
    pub overrides: BTreeMap<String, String>,
}

impl Default for AtlasRules {
    fn default() -> Self {
        let blacklist = [
            "bundle_open_back",
            "bundle_open_front",
            "_spear_in_hand",
            "_overlay",
            "/crossbow_arrow",
            "/crossbow_firework",
            "/crossbow_standby",
            "/elytra_broken",
            "/filled_map_markings",
            "/fishing_rod_cast",
            "/spyglass_model",
            "/tipped_arrow_base",
            "/tipped_arrow_head",
            "0",
            "1",
            "2",
            "3",
            "4",
            "5",
            "6",
            "7",
            "8",
            "9",
        ];

        let overrides = [
            ("minecraft:clock", "item/clock_00"),
            ("minecraft:compass", "item/compass_20"),
            ("minecraft:crossbow", "item/crossbow_standby"),
            ("minecraft:disc_fragment_5", "item/disc_fragment_5"),
            ("minecraft:music_disc_5", "item/music_disc_5"),
            ("minecraft:music_disc_11", "item/music_disc_11"),
            ("minecraft:music_disc_13", "item/music_disc_13"),
            ("minecraft:recovery_compass", "item/recovery_compass_20"),
            ("minecraft:tipped_arrow", "item/arrow"),
        ];

        Self {
            prefix: "minecraft:item/".to_string(),
            blacklist: blacklist.iter().map(|s| s.to_string()).collect(),
            overrides: overrides
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// A directory contributing sprites to the items atlas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSource {
    /// Sprite name prefix, e.g. `item/`.
    pub prefix: String,
    /// Directory under `textures/`.
    pub source: String,
}

/// Pack configuration loaded from iconpack.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Pack directory name under the output directory.
    pub name: String,
    pub description: String,
    /// Namespace for the generated item definitions and models.
    pub namespace: String,
    pub format: PackFormat,

    /// Input directory, relative to the base directory.
    pub input: PathBuf,
    /// Output directory, relative to the base directory.
    pub output: PathBuf,

    pub style: AdvancementStyle,
    pub model_source: ModelSource,

    /// Namespace the exporter uses for the items we composite.
    pub icon_namespace: String,
    /// Skip exports whose file name carries component state.
    pub skip_stateful_icons: bool,
    /// Items copied as plain atlas sprites into `textures/block_item`.
    pub block_items: Vec<String>,
    /// Side length of the baked advancement icon canvas.
    pub canvas_size: u32,
    pub font: FontConfig,
    /// Item → exporter file name, for items whose plain export is missing.
    pub icon_overrides: BTreeMap<String, String>,
    pub atlas: AtlasRules,
    pub atlas_sources: Vec<AtlasSource>,
}

impl Default for PackConfig {
    fn default() -> Self {
        let mut icon_overrides = BTreeMap::new();
        icon_overrides.insert(
            "potion".to_string(),
            "minecraft__potion__{'minecraft__potion_contents'__{potion__'minecraft__water'}}.png"
                .to_string(),
        );

        Self {
            name: "Bingo Icons".to_string(),
            description: "Enables Icons for Bingo".to_string(),
            namespace: "bingo".to_string(),
            format: PackFormat::default(),
            input: PathBuf::from("input"),
            output: PathBuf::from("output"),
            style: AdvancementStyle::Composite,
            model_source: ModelSource::Lookup,
            icon_namespace: "minecraft".to_string(),
            skip_stateful_icons: false,
            block_items: vec![],
            canvas_size: 22,
            font: FontConfig::default(),
            icon_overrides,
            atlas: AtlasRules::default(),
            atlas_sources: vec![
                AtlasSource {
                    prefix: "item/".to_string(),
                    source: "block_item".to_string(),
                },
                AtlasSource {
                    prefix: "advancement_item/".to_string(),
                    source: "advancement_item".to_string(),
                },
            ],
        }
    }
}

impl PackConfig {
    /// Load config from an iconpack.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PackError::io(path, "Failed to read config", e))?;

        Self::parse(&content)
    }

    /// Parse and validate config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| PackError::Parse {
                message: format!("Invalid config: {}", e),
                help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load `<root>/iconpack.yaml`, or the defaults when there is none.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let format = &self.format;
        if format.pack_format.is_none() && format.min_format.is_none() && format.max_format.is_none()
        {
            return Err(PackError::Config {
                message: "No pack format set".to_string(),
                help: Some("Set format.pack_format or format.min_format/max_format".to_string()),
            });
        }

        if let (Some(min), Some(max)) = (format.min_format, format.max_format) {
            if min > max {
                return Err(PackError::Config {
                    message: format!("min_format {} is greater than max_format {}", min, max),
                    help: None,
                });
            }
        }

        if self.namespace.is_empty() {
            return Err(PackError::Config {
                message: "Namespace must not be empty".to_string(),
                help: Some("The default namespace is 'bingo'".to_string()),
            });
        }

        if self.canvas_size == 0 {
            return Err(PackError::Config {
                message: "canvas_size must be at least 1".to_string(),
                help: None,
            });
        }

        Ok(())
    }

    /// Input paths under `root`.
    pub fn input_layout(&self, root: &Path) -> InputLayout {
        InputLayout::new(root.join(&self.input))
    }

    /// Pack paths under `root`.
    pub fn pack_layout(&self, root: &Path) -> PackLayout {
        PackLayout::new(root.join(&self.output).join(&self.name))
    }

    /// Directory for the side files that are not part of the pack.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    /// Model id of the advancement frame, e.g. `bingo:item/advancement`.
    pub fn frame_model(&self) -> String {
        format!("{}:item/advancement", self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = PackConfig::parse("").unwrap();

        assert_eq!(config.name, "Bingo Icons");
        assert_eq!(config.namespace, "bingo");
        assert_eq!(config.font.base_codepoint, 0xE000);
        assert_eq!(config.canvas_size, 22);
        assert_eq!(config.style, AdvancementStyle::Composite);
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
name: Test Pack
namespace: test
style: baked
model_source: reference
skip_stateful_icons: true
block_items:
  - white_banner
font:
  base_codepoint: 57600
format:
  pack_format: 46
"#;
        let config = PackConfig::parse(yaml).unwrap();

        assert_eq!(config.name, "Test Pack");
        assert_eq!(config.style, AdvancementStyle::Baked);
        assert_eq!(config.model_source, ModelSource::Reference);
        assert!(config.skip_stateful_icons);
        assert_eq!(config.block_items, vec!["white_banner"]);
        assert_eq!(config.font.base_codepoint, 57600);
        // Untouched font fields keep their defaults
        assert_eq!(config.font.height, 10);
        assert_eq!(config.format.pack_format, Some(46));
        assert_eq!(config.format.min_format, None);
        assert_eq!(config.frame_model(), "test:item/advancement");
    }

    #[test]
    fn test_default_atlas_rules() {
        let rules = AtlasRules::default();
        assert_eq!(rules.prefix, "minecraft:item/");
        assert!(rules.blacklist.contains(&"_overlay".to_string()));
        assert_eq!(
            rules.overrides.get("minecraft:clock").map(String::as_str),
            Some("item/clock_00")
        );
    }

    #[test]
    fn test_rejects_inverted_format_range() {
        let yaml = "format:\n  min_format: 80\n  max_format: 75\n";
        let err = PackConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, PackError::Config { .. }));
    }

    #[test]
    fn test_rejects_missing_format() {
        let yaml = "format: {}\n";
        assert!(PackConfig::parse(yaml).is_err());
    }

    #[test]
    fn test_rejects_zero_canvas() {
        assert!(PackConfig::parse("canvas_size: 0\n").is_err());
    }

    #[test]
    fn test_rejects_bad_yaml() {
        let err = PackConfig::parse("style: [").unwrap_err();
        assert!(matches!(err, PackError::Parse { .. }));
    }

    #[test]
    fn test_default_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&PackConfig::default()).unwrap();
        let config = PackConfig::parse(&yaml).unwrap();
        assert_eq!(config.icon_overrides, PackConfig::default().icon_overrides);
        assert_eq!(config.atlas_sources, PackConfig::default().atlas_sources);
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = PackConfig::discover(dir.path()).unwrap();
        assert_eq!(config.name, "Bingo Icons");
    }

    #[test]
    fn test_layouts() {
        let config = PackConfig::default();
        let root = Path::new("/base");

        assert_eq!(
            config.pack_layout(root).root(),
            Path::new("/base/output/Bingo Icons")
        );
        assert_eq!(
            config.input_layout(root).atlas_dump(),
            PathBuf::from("/base/input/minecraft_textures_atlas_items.png.txt")
        );
    }
}
