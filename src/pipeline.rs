//! The full pack generation run.
//!
//! Steps run in a fixed order and share nothing but the output directory
//! and the advancement list:
//!
//! 1. `pack.mcmeta`, `pack.png`, items atlas
//! 2. plain icons and block item sprites
//! 3. advancement scan
//! 4. advancement models and icons (composite or baked)
//! 5. font and character table, from whatever ended up in `textures/icons`

use std::path::{Path, PathBuf};

use crate::atlas::{load_atlas_mappings, save_atlas_mappings, AtlasMapping};
use crate::collect::{collect_advancement_icons, collect_icons, copy_block_items, CollectReport};
use crate::config::{AdvancementStyle, ModelSource, PackConfig};
use crate::discovery::scan_advancements;
use crate::emit::{
    write_baked_advancement_models, write_composite_advancement_models, write_font,
    write_items_atlas, write_pack_metadata, ItemAssets, ModelReport,
};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::composite_advancement_icons;
use crate::types::advancement_items;

/// Side file with the item id → character table.
pub const ICON_MAPPINGS_FILENAME: &str = "item_icon_mappings.json";

/// Side file with the item id → atlas sprite table.
pub const ATLAS_MAPPINGS_FILENAME: &str = "atlas_mappings.json";

/// Summary of one `generate` run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pack_root: PathBuf,
    pub pack_icon: bool,
    pub icons: CollectReport,
    pub block_items: CollectReport,
    pub advancement_icons: CollectReport,
    pub models: ModelReport,
    pub categories: usize,
    pub advancements: usize,
    pub glyphs: usize,
}

/// Generate the pack for the base directory `root`.
pub fn generate(root: &Path, config: &PackConfig, printer: &Printer) -> Result<BuildReport> {
    let input = config.input_layout(root);
    let pack = config.pack_layout(root);
    let mut report = BuildReport {
        pack_root: pack.root().to_path_buf(),
        ..BuildReport::default()
    };

    printer.status("Generating", &format!("{} ({})", config.name, printer.path(pack.root())));
    report.pack_icon = write_pack_metadata(&pack, &input, config)?;
    write_items_atlas(&pack, &config.atlas_sources)?;

    report.icons = collect_icons(&input.icons_dir(), &pack.icons_dir(), config, printer)?;
    printer.status(
        "Copied",
        &format!(
            "{} ({} already present)",
            plural(report.icons.copied, "icon", "icons"),
            report.icons.existing
        ),
    );

    report.block_items = copy_block_items(&input.icons_dir(), &pack.block_item_dir(), config, printer)?;

    let advancements = scan_advancements(&input.advancements_dir())?;
    let items = advancement_items(&advancements);
    report.categories = advancements.len();
    report.advancements = advancements.values().map(Vec::len).sum();
    printer.info(
        "Found",
        &format!(
            "{} in {} ({})",
            plural(report.advancements, "advancement", "advancements"),
            plural(report.categories, "category", "categories"),
            plural(items.len(), "item", "items")
        ),
    );

    match config.style {
        AdvancementStyle::Composite => {
            let assets = match config.model_source {
                ModelSource::Lookup => {
                    let assets = ItemAssets::load(&input.item_assets())?;
                    printer.info("Loaded", &plural(assets.len(), "item asset", "item assets"));
                    Some(assets)
                }
                ModelSource::Reference => None,
            };

            report.models = write_composite_advancement_models(
                &pack,
                &advancements,
                assets.as_ref(),
                config,
                printer,
            )?;
            report.advancement_icons = collect_advancement_icons(
                &input.advancement_icons_dir(),
                &pack.icons_dir(),
                &items,
                config,
                printer,
            )?;
        }
        AdvancementStyle::Baked => {
            report.advancement_icons = composite_advancement_icons(
                &input.icons_dir(),
                &pack.advancement_item_dir(),
                &input.background(),
                &items,
                config,
                printer,
            )?;
            report.models = write_baked_advancement_models(&pack, config)?;
        }
    }

    let mapping = write_font(
        &pack,
        &config.output_dir(root).join(ICON_MAPPINGS_FILENAME),
        &config.font,
        printer,
    )?;
    report.glyphs = mapping.len();

    Ok(report)
}

/// Extract the atlas mapping from the input dump and save it next to the
/// pack.
pub fn generate_atlas_mappings(
    root: &Path,
    config: &PackConfig,
    printer: &Printer,
) -> Result<AtlasMapping> {
    let input = config.input_layout(root);
    let mapping = load_atlas_mappings(&input.atlas_dump(), &config.atlas)?;
    printer.status(
        "Generated",
        &plural(mapping.len(), "atlas mapping", "atlas mappings"),
    );

    let path = config.output_dir(root).join(ATLAS_MAPPINGS_FILENAME);
    save_atlas_mappings(&mapping, &path)?;
    printer.status("Wrote", &printer.path(&path));

    Ok(mapping)
}
