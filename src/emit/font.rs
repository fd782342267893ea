//! Bitmap font mapping icons to private use characters.
//!
//! Every texture in `textures/icons` becomes one glyph. Ids are sorted before
//! code points are handed out, so the same set of icons always produces the
//! same characters regardless of directory listing order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::{FontConfig, PackLayout};
use crate::discovery::list_png_names;
use crate::error::{PackError, Result};
use crate::output::{plural, Printer};

use super::json::write_json;

/// Texture directory of the glyphs, relative to `textures/`.
const ICON_TEXTURE_DIR: &str = "icons";

/// Item id → assigned character, in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontMapping {
    entries: Vec<(String, char)>,
}

impl FontMapping {
    /// Sort and dedup `ids`, then assign `base`, `base + 1`, ...
    pub fn assign(ids: impl IntoIterator<Item = String>, base: u32) -> Result<Self> {
        let mut ids: Vec<String> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();

        let mut entries = Vec::with_capacity(ids.len());
        for (index, id) in ids.into_iter().enumerate() {
            let code = u32::try_from(index)
                .ok()
                .and_then(|i| base.checked_add(i))
                .and_then(char::from_u32)
                .ok_or_else(|| PackError::Build {
                    message: format!("No valid code point for icon '{}' (index {})", id, index),
                    help: Some("Lower font.base_codepoint or collect fewer icons".to_string()),
                })?;
            entries.push((id, code));
        }

        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<char> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

#[derive(Serialize)]
struct FontDescriptor {
    providers: Vec<BitmapProvider>,
}

#[derive(Serialize)]
struct BitmapProvider {
    #[serde(rename = "type")]
    kind: &'static str,
    file: String,
    height: u32,
    ascent: i32,
    chars: Vec<String>,
}

fn descriptor(mapping: &FontMapping, font: &FontConfig) -> FontDescriptor {
    FontDescriptor {
        providers: mapping
            .iter()
            .map(|(id, c)| BitmapProvider {
                kind: "bitmap",
                file: format!("{}/{}.png", ICON_TEXTURE_DIR, id),
                height: font.height,
                ascent: font.ascent,
                chars: vec![c.to_string()],
            })
            .collect(),
    }
}

/// Assign characters to the pack's icons and write both the font
/// descriptor and the `id → char` table at `mappings_path`.
///
/// Both files are rewritten on every run.
pub fn write_font(
    pack: &PackLayout,
    mappings_path: &Path,
    font: &FontConfig,
    printer: &Printer,
) -> Result<FontMapping> {
    let ids = list_png_names(&pack.icons_dir())?
        .into_iter()
        .filter_map(|name| name.strip_suffix(".png").map(str::to_string));

    let mapping = FontMapping::assign(ids, font.base_codepoint)?;

    let font_path = pack.font();
    write_json(&font_path, &descriptor(&mapping, font))?;
    printer.status(
        "Wrote",
        &format!("{} to {}", plural(mapping.len(), "glyph", "glyphs"), printer.path(&font_path)),
    );

    let table: BTreeMap<&str, String> = mapping.iter().map(|(id, c)| (id, c.to_string())).collect();
    write_json(mappings_path, &table)?;
    printer.status(
        "Wrote",
        &format!(
            "{} to {}",
            plural(mapping.len(), "mapping", "mappings"),
            printer.path(mappings_path)
        ),
    );

    Ok(mapping)
}
