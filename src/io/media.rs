// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! Decodes raster images into RGBA pixels ready to be uploaded as an egui
//! texture.

use anyhow::{Context, Result};
use std::path::Path;

/// Extensions offered by the open dialog's image filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// A decoded image in RGBA8 layout.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LoadedImage {
    /// Convert to an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.width as usize, self.height as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, &self.pixels)
    }
}

/// Load and decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();

    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_load_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(load_image(&path).is_err());
    }
}
