// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Color utilities.
//!
//! This module provides the RGB color type shared by the scene model,
//! the raster renderer and the egui panels, plus `#RRGGBB` hex
//! parsing/formatting as used throughout the app.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([0xFF, 0xFF, 0xFF]);

    /// Default accent color, also used when a team lookup misses.
    pub const INDIGO: Color = Color([0x63, 0x66, 0xF1]);

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color([r, g, b]))
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.0[0], self.0[1], self.0[2], 0xFF])
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#6366F1"), Some(Color([0x63, 0x66, 0xF1])));
        assert_eq!(Color::from_hex("6366f1"), Some(Color([0x63, 0x66, 0xF1])));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#6366F1AA"), None);
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Color([0x0F, 0x17, 0x2A]);
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }
}
