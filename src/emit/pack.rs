//! Pack-level descriptors: `pack.mcmeta`, `pack.png` and the items atlas.

use std::fs;

use serde::Serialize;

use crate::config::{AtlasSource, InputLayout, PackConfig, PackFormat, PackLayout};
use crate::error::{PackError, Result};

use super::json::write_json;

#[derive(Serialize)]
struct McMeta<'a> {
    pack: PackSection<'a>,
}

#[derive(Serialize)]
struct PackSection<'a> {
    description: &'a str,
    #[serde(flatten)]
    format: &'a PackFormat,
}

#[derive(Serialize)]
struct AtlasDefinition<'a> {
    sources: Vec<DirectorySource<'a>>,
}

#[derive(Serialize)]
struct DirectorySource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    prefix: &'a str,
    source: &'a str,
}

/// Write `pack.mcmeta`, copy the optional pack icon and create
/// `assets/minecraft`.
///
/// Returns whether a pack icon was copied.
pub fn write_pack_metadata(pack: &PackLayout, input: &InputLayout, config: &PackConfig) -> Result<bool> {
    let mcmeta = McMeta {
        pack: PackSection {
            description: &config.description,
            format: &config.format,
        },
    };
    write_json(&pack.mcmeta(), &mcmeta)?;

    let icon = input.pack_icon();
    let copied = icon.exists();
    if copied {
        fs::copy(&icon, pack.pack_icon())
            .map_err(|e| PackError::io(&pack.pack_icon(), "Failed to copy pack icon", e))?;
    }

    let assets = pack.assets("minecraft");
    fs::create_dir_all(&assets).map_err(|e| PackError::io(&assets, "Failed to create directory", e))?;

    Ok(copied)
}

/// Write `assets/minecraft/atlases/items.json` with one directory source
/// per configured atlas source.
pub fn write_items_atlas(pack: &PackLayout, sources: &[AtlasSource]) -> Result<()> {
    let atlas = AtlasDefinition {
        sources: sources
            .iter()
            .map(|s| DirectorySource {
                kind: "minecraft:directory",
                prefix: &s.prefix,
                source: &s.source,
            })
            .collect(),
    };

    write_json(&pack.items_atlas(), &atlas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn layouts(dir: &std::path::Path) -> (PackLayout, InputLayout) {
        (
            PackLayout::new(dir.join("output/pack")),
            InputLayout::new(dir.join("input")),
        )
    }

    #[test]
    fn test_pack_mcmeta() {
        let dir = tempdir().unwrap();
        let (pack, input) = layouts(dir.path());

        let copied = write_pack_metadata(&pack, &input, &PackConfig::default()).unwrap();

        assert!(!copied);
        assert!(pack.assets("minecraft").is_dir());
        insta::assert_snapshot!(fs::read_to_string(pack.mcmeta()).unwrap(), @r###"
        {
          "pack": {
            "description": "Enables Icons for Bingo",
            "min_format": 70,
            "max_format": 75
          }
        }
        "###);
    }

    #[test]
    fn test_pack_mcmeta_single_format() {
        let dir = tempdir().unwrap();
        let (pack, input) = layouts(dir.path());
        let config = PackConfig {
            format: PackFormat {
                pack_format: Some(46),
                min_format: None,
                max_format: None,
            },
            ..PackConfig::default()
        };

        write_pack_metadata(&pack, &input, &config).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(pack.mcmeta()).unwrap()).unwrap();
        assert_eq!(value["pack"]["pack_format"], 46);
        assert!(value["pack"].get("min_format").is_none());
    }

    #[test]
    fn test_pack_icon_copied_when_present() {
        let dir = tempdir().unwrap();
        let (pack, input) = layouts(dir.path());
        fs::create_dir_all(input.root()).unwrap();
        fs::write(input.pack_icon(), b"png bytes").unwrap();

        let copied = write_pack_metadata(&pack, &input, &PackConfig::default()).unwrap();

        assert!(copied);
        assert_eq!(fs::read(pack.pack_icon()).unwrap(), b"png bytes");
    }

    #[test]
    fn test_items_atlas() {
        let dir = tempdir().unwrap();
        let (pack, _) = layouts(dir.path());

        write_items_atlas(&pack, &PackConfig::default().atlas_sources).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(pack.items_atlas()).unwrap()).unwrap();
        pretty_assertions::assert_eq!(
            value,
            serde_json::json!({
                "sources": [
                    { "type": "minecraft:directory", "prefix": "item/", "source": "block_item" },
                    { "type": "minecraft:directory", "prefix": "advancement_item/", "source": "advancement_item" }
                ]
            })
        );
    }
}
