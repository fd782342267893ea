//! Advancement icon compositing.
//!
//! Each advancement item gets its own texture: the advancement frame,
//! scaled to the canvas, with the item icon pasted in the middle. The icon's
//! alpha channel is the paste mask, so every channel (alpha included) is
//! `icon * a + background * (1 - a)`.

use std::collections::BTreeSet;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::collect::{create_dir, CollectReport};
use crate::config::PackConfig;
use crate::error::Result;
use crate::output::Printer;
use crate::types::ExportedIcon;

use super::png::{load_rgba, write_png};

/// Pastes icons onto a fixed background canvas.
pub struct Compositor {
    background: RgbaImage,
}

impl Compositor {
    /// Use `background` as the frame, resized to `canvas`×`canvas` if needed.
    pub fn new(background: RgbaImage, canvas: u32) -> Self {
        let background = if background.dimensions() == (canvas, canvas) {
            background
        } else {
            imageops::resize(&background, canvas, canvas, FilterType::CatmullRom)
        };

        Self { background }
    }

    /// Load the frame from a PNG.
    pub fn open(path: &Path, canvas: u32) -> Result<Self> {
        Ok(Self::new(load_rgba(path)?, canvas))
    }

    pub fn background(&self) -> &RgbaImage {
        &self.background
    }

    /// A new canvas with `icon` centred on the background.
    pub fn compose(&self, icon: &RgbaImage) -> RgbaImage {
        let mut canvas = self.background.clone();
        let (x, y) = centered_offset(canvas.dimensions(), icon.dimensions());
        paste_with_alpha_mask(&mut canvas, icon, x, y);
        canvas
    }
}

/// Top-left position that centres `icon` on `background`, rounding down.
///
/// Negative when the icon is larger than the background.
pub fn centered_offset(background: (u32, u32), icon: (u32, u32)) -> (i64, i64) {
    let dx = background.0 as i64 - icon.0 as i64;
    let dy = background.1 as i64 - icon.1 as i64;
    (dx.div_euclid(2), dy.div_euclid(2))
}

/// Paste `icon` at (`x`, `y`) using its alpha as the mask. Clips to `base`.
pub fn paste_with_alpha_mask(base: &mut RgbaImage, icon: &RgbaImage, x: i64, y: i64) {
    let (base_w, base_h) = base.dimensions();

    for (ix, iy, src) in icon.enumerate_pixels() {
        let bx = x + ix as i64;
        let by = y + iy as i64;
        if bx < 0 || by < 0 || bx >= base_w as i64 || by >= base_h as i64 {
            continue;
        }

        let dst = base.get_pixel_mut(bx as u32, by as u32);
        *dst = blend(*dst, *src);
    }
}

fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let a = src.0[3] as u32;
    match a {
        0 => dst,
        255 => src,
        _ => {
            let mut out = [0u8; 4];
            for (i, channel) in out.iter_mut().enumerate() {
                let value = src.0[i] as u32 * a + dst.0[i] as u32 * (255 - a);
                *channel = ((value + 127) / 255) as u8;
            }
            Rgba(out)
        }
    }
}

/// Compose `dest/<item>.png` for every advancement item from the plain
/// exports in `source`.
///
/// Items listed in `icon_overrides` read their override file instead of
/// `<icon_namespace>__<item>.png`. Missing sources are warnings, existing
/// destinations are kept.
pub fn composite_advancement_icons(
    source: &Path,
    dest: &Path,
    background: &Path,
    items: &BTreeSet<String>,
    config: &PackConfig,
    printer: &Printer,
) -> Result<CollectReport> {
    let mut report = CollectReport::default();
    create_dir(dest)?;

    printer.status(
        "Compositing",
        &crate::output::plural(items.len(), "advancement icon", "advancement icons"),
    );

    let compositor = Compositor::open(background, config.canvas_size)?;

    for item in items {
        let file_name = config
            .icon_overrides
            .get(item)
            .cloned()
            .unwrap_or_else(|| ExportedIcon::file_name_for(&config.icon_namespace, item));

        let source_path = source.join(&file_name);
        if !source_path.exists() {
            printer.warning(
                "Missing",
                &format!("icon for advancement item '{}' ({})", item, source_path.display()),
            );
            report.missing += 1;
            continue;
        }

        let dest_path = dest.join(format!("{}.png", item));
        if dest_path.exists() {
            report.existing += 1;
            continue;
        }

        let icon = load_rgba(&source_path)?;
        write_png(&compositor.compose(&icon), &dest_path)?;
        report.copied += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREY: Rgba<u8> = Rgba([100, 100, 100, 255]);

    fn solid(w: u32, h: u32, colour: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(w, h, colour)
    }

    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset((22, 22), (16, 16)), (3, 3));
        assert_eq!(centered_offset((22, 22), (15, 16)), (3, 3));
        assert_eq!(centered_offset((22, 22), (22, 22)), (0, 0));
        // Rounds toward negative infinity
        assert_eq!(centered_offset((22, 22), (32, 31)), (-5, -5));
    }

    #[test]
    fn test_opaque_icon_centred_at_three() {
        let compositor = Compositor::new(solid(22, 22, GREY), 22);
        let out = compositor.compose(&solid(16, 16, RED));

        assert_eq!(out.dimensions(), (22, 22));
        assert_eq!(*out.get_pixel(2, 2), GREY);
        assert_eq!(*out.get_pixel(3, 3), RED);
        assert_eq!(*out.get_pixel(18, 18), RED);
        assert_eq!(*out.get_pixel(19, 19), GREY);
        assert_eq!(*out.get_pixel(3, 19), GREY);
    }

    #[test]
    fn test_transparent_pixels_show_background() {
        let mut icon = solid(16, 16, RED);
        icon.put_pixel(0, 0, Rgba([0, 255, 0, 0]));

        let compositor = Compositor::new(solid(22, 22, GREY), 22);
        let out = compositor.compose(&icon);

        assert_eq!(*out.get_pixel(3, 3), GREY);
        assert_eq!(*out.get_pixel(4, 3), RED);
    }

    #[test]
    fn test_partial_alpha_masks_every_channel() {
        let mut base = solid(1, 1, Rgba([0, 0, 0, 255]));
        let icon = solid(1, 1, Rgba([255, 255, 255, 128]));

        paste_with_alpha_mask(&mut base, &icon, 0, 0);

        // 255 * 128 / 255 = 128; alpha = 128 * 128 / 255 + 255 * 127 / 255
        assert_eq!(base.get_pixel(0, 0).0, [128, 128, 128, 191]);
    }

    #[test]
    fn test_background_resized_to_canvas() {
        let compositor = Compositor::new(solid(44, 44, GREY), 22);
        assert_eq!(compositor.background().dimensions(), (22, 22));
        let px = compositor.background().get_pixel(10, 10).0;
        assert!(px[0].abs_diff(100) <= 1, "got {:?}", px);
    }

    #[test]
    fn test_oversized_icon_is_clipped() {
        let compositor = Compositor::new(solid(22, 22, GREY), 22);
        let out = compositor.compose(&solid(32, 32, RED));

        assert_eq!(out.dimensions(), (22, 22));
        assert_eq!(*out.get_pixel(0, 0), RED);
        assert_eq!(*out.get_pixel(21, 21), RED);
    }

    fn write_img(path: &Path, img: &RgbaImage) {
        write_png(img, path).unwrap();
    }

    #[test]
    fn test_composite_advancement_icons() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("exports");
        let dest = dir.path().join("advancement_item");
        let background = dir.path().join("background.png");
        fs::create_dir_all(&source).unwrap();

        write_img(&background, &solid(22, 22, GREY));
        write_img(&source.join("minecraft__wheat.png"), &solid(16, 16, RED));
        write_img(
            &source.join(
                "minecraft__potion__{'minecraft__potion_contents'__{potion__'minecraft__water'}}.png",
            ),
            &solid(16, 16, RED),
        );

        let items: BTreeSet<String> = ["wheat", "potion", "elytra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let printer = Printer::plain();

        let report = composite_advancement_icons(
            &source,
            &dest,
            &background,
            &items,
            &PackConfig::default(),
            &printer,
        )
        .unwrap();

        assert_eq!(report.copied, 2);
        assert_eq!(report.missing, 1);
        assert_eq!(printer.warning_count(), 1);

        let wheat = load_rgba(&dest.join("wheat.png")).unwrap();
        assert_eq!(wheat.dimensions(), (22, 22));
        assert_eq!(*wheat.get_pixel(3, 3), RED);
        assert!(dest.join("potion.png").exists());
        assert!(!dest.join("elytra.png").exists());
    }

    #[test]
    fn test_composite_skips_existing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("exports");
        let dest = dir.path().join("advancement_item");
        let background = dir.path().join("background.png");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();

        write_img(&background, &solid(22, 22, GREY));
        write_img(&source.join("minecraft__wheat.png"), &solid(16, 16, RED));
        fs::write(dest.join("wheat.png"), b"keep").unwrap();

        let items: BTreeSet<String> = ["wheat".to_string()].into();
        let report = composite_advancement_icons(
            &source,
            &dest,
            &background,
            &items,
            &PackConfig::default(),
            &Printer::plain(),
        )
        .unwrap();

        assert_eq!(report.existing, 1);
        assert_eq!(fs::read(dest.join("wheat.png")).unwrap(), b"keep");
    }
}
