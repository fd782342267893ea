//! PNG reading and writing.

use std::path::Path;

use image::RgbaImage;

use crate::error::{PackError, Result};

/// Open any image and convert it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| PackError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    Ok(img.to_rgba8())
}

/// Write an RGBA image as PNG.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PackError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
