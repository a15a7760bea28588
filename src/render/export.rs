// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Raster export.
//!
//! Scales the current canvas raster to one of the social-media target
//! sizes and writes it out as PNG. Export reads the raster only; it
//! never touches the live scene state.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use image::imageops::FilterType;
use image::RgbaImage;

/// An export target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSize {
    pub key: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

pub static EXPORT_SIZES: [ExportSize; 5] = [
    ExportSize { key: "1:1_HD", label: "1:1 HD (1080x1080)", width: 1080, height: 1080 },
    ExportSize { key: "1:1_4K", label: "1:1 4K (2160x2160)", width: 2160, height: 2160 },
    ExportSize { key: "16:9_HD", label: "16:9 HD (1920x1080)", width: 1920, height: 1080 },
    ExportSize { key: "16:9_4K", label: "16:9 4K (3840x2160)", width: 3840, height: 2160 },
    ExportSize { key: "YT_THUMBNAIL", label: "YouTube Thumbnail (1280x720)", width: 1280, height: 720 },
];

/// Scale the raster to the target size. The source always fills the
/// target dimensions, regardless of aspect ratio or on-screen zoom.
pub fn scale_to(raster: &RgbaImage, size: &ExportSize) -> RgbaImage {
    image::imageops::resize(raster, size.width, size.height, FilterType::Triangle)
}

/// Scale and write the raster as PNG.
pub fn export_png(raster: &RgbaImage, size: &ExportSize, path: &Path) -> Result<()> {
    let scaled = scale_to(raster, size);
    scaled.save(path)?;
    Ok(())
}

/// Suggested filename: `futbol-grafik-{key}-{unixMillis}.png`.
pub fn export_file_name(size: &ExportSize) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("futbol-grafik-{}-{}.png", size.key, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_by_key(key: &str) -> &'static ExportSize {
        EXPORT_SIZES.iter().find(|s| s.key == key).unwrap()
    }

    #[test]
    fn test_preset_table() {
        assert_eq!(EXPORT_SIZES.len(), 5);
        let four_k = size_by_key("16:9_4K");
        assert_eq!((four_k.width, four_k.height), (3840, 2160));
        let thumb = size_by_key("YT_THUMBNAIL");
        assert_eq!((thumb.width, thumb.height), (1280, 720));
    }

    #[test]
    fn test_scale_fills_target_dimensions() {
        let raster = RgbaImage::from_pixel(1920, 1080, image::Rgba([10, 20, 30, 255]));
        let scaled = scale_to(&raster, size_by_key("16:9_4K"));
        assert_eq!((scaled.width(), scaled.height()), (3840, 2160));
        // A solid source stays solid after scaling.
        assert_eq!(*scaled.get_pixel(1920, 1080), image::Rgba([10, 20, 30, 255]));

        // Aspect ratio is not preserved; the target is simply filled.
        let square = scale_to(&raster, size_by_key("1:1_HD"));
        assert_eq!((square.width(), square.height()), (1080, 1080));
    }

    #[test]
    fn test_file_name_pattern() {
        let name = export_file_name(size_by_key("1:1_4K"));
        assert!(name.starts_with("futbol-grafik-1:1_4K-"));
        assert!(name.ends_with(".png"));
        let millis = name
            .trim_start_matches("futbol-grafik-1:1_4K-")
            .trim_end_matches(".png");
        assert!(millis.parse::<u128>().is_ok());
    }

    #[test]
    fn test_export_png_writes_file() {
        let raster = RgbaImage::from_pixel(192, 108, image::Rgba([0, 0, 0, 255]));
        let dir = std::env::temp_dir();
        let path = dir.join("futbol-grafik-test-export.png");
        export_png(&raster, size_by_key("YT_THUMBNAIL"), &path).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (1280, 720));
        let _ = std::fs::remove_file(&path);
    }
}
