//! Declarative render configuration.
//!
//! `RenderConfig` is loaded once per invocation by an external
//! collaborator (YAML loader, GUI settings tab) and treated as read-only
//! by the engine for the duration of a render call. `Default` reproduces
//! the stock configuration so a host without a config file renders
//! something sensible.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::element::Element;

// ── Color ───────────────────────────────────────────────────────────

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

// ── Color table ─────────────────────────────────────────────────────

/// Colors keyed by semantic role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    /// Halo color drawn behind every text element.
    pub outline: Color,
    /// Fill color for the name line.
    pub name: Color,
    /// Fill color for position, address, phone, and email lines.
    pub details: Color,
    /// Separator rule color.
    pub separator: Color,
    /// Fill color for the confidentiality notice.
    pub confidentiality: Color,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            outline: Color::WHITE,
            name: Color::rgb(51, 51, 51),
            details: Color::rgb(100, 100, 100),
            separator: Color::rgba(200, 0, 40, 200),
            confidentiality: Color::rgb(150, 150, 150),
        }
    }
}

// ── Font paths ──────────────────────────────────────────────────────

/// Ordered font-file candidates per platform.
///
/// By convention the first entry is the bold face and the remaining
/// entries are regular-weight fallbacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPaths {
    pub linux: Vec<PathBuf>,
    pub windows: Vec<PathBuf>,
    pub macos: Vec<PathBuf>,
}

impl FontPaths {
    /// The candidate list for the platform this binary runs on.
    ///
    /// Unknown platforms use the linux list, matching the original
    /// behavior of treating linux as the catch-all.
    pub fn current(&self) -> &[PathBuf] {
        if cfg!(target_os = "windows") {
            &self.windows
        } else if cfg!(target_os = "macos") {
            &self.macos
        } else {
            &self.linux
        }
    }
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            linux: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            ],
            windows: vec![
                PathBuf::from("C:\\Windows\\Fonts\\arialbd.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
            ],
            macos: vec![
                PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
                PathBuf::from("/System/Library/Fonts/HelveticaNeue.ttc"),
            ],
        }
    }
}

// ── Render configuration ────────────────────────────────────────────

/// Everything the layout and composition engines need to know that is
/// not contact data: dimensions, colors, fonts, logo search paths, the
/// confidentiality notice, and the element order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Target logo height in pixels.
    pub logo_height: u32,
    /// Margin around the signature in pixels.
    pub margin: u32,
    /// Gap between the logo and the text column in pixels.
    pub logo_margin_right: u32,
    /// Height of one text line in pixels.
    pub line_height: u32,

    /// Halo width for the name line.
    pub outline_width_name: u32,
    /// Halo width for every other text element.
    pub outline_width_text: u32,

    pub colors: ColorTable,
    pub font_paths: FontPaths,

    /// Candidate logo locations, tried in order.
    pub logo_search_paths: Vec<PathBuf>,

    /// Legal notice rendered in the small font. Empty disables the
    /// element even when it appears in the order.
    pub confidentiality_text: String,

    /// Which elements render, and in what vertical order. Must be a
    /// duplicate-free subset of [`Element::ALL`]; [`Element::parse_order`]
    /// produces one from raw config strings.
    pub element_order: Vec<Element>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            logo_height: 70,
            margin: 15,
            logo_margin_right: 20,
            line_height: 22,
            outline_width_name: 2,
            outline_width_text: 1,
            colors: ColorTable::default(),
            font_paths: FontPaths::default(),
            logo_search_paths: vec![
                PathBuf::from("logo.png"),
                PathBuf::from("logo.jpg"),
                PathBuf::from("./logo/logo.png"),
                PathBuf::from("./logo/logo.jpg"),
            ],
            confidentiality_text: "CONFIDENTIALITY: This message is intended solely for the \
                use of the addressee and may contain confidential information."
                .to_string(),
            element_order: Element::ALL.to_vec(),
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = RenderConfig::default();
        assert_eq!(config.logo_height, 70);
        assert_eq!(config.margin, 15);
        assert_eq!(config.logo_margin_right, 20);
        assert_eq!(config.line_height, 22);
        assert_eq!(config.outline_width_name, 2);
        assert_eq!(config.outline_width_text, 1);
    }

    #[test]
    fn test_default_colors() {
        let colors = ColorTable::default();
        assert_eq!(colors.outline, Color::WHITE);
        assert_eq!(colors.name, Color::rgb(51, 51, 51));
        assert_eq!(colors.separator.a, 200);
    }

    #[test]
    fn test_default_order_is_complete() {
        let config = RenderConfig::default();
        assert_eq!(config.element_order, Element::ALL.to_vec());
    }

    #[test]
    fn test_font_paths_current_never_panics() {
        let paths = FontPaths::default();
        // Whatever the platform, a non-empty candidate list comes back.
        assert!(!paths.current().is_empty());
    }

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RenderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_element_order_survives_serde_as_ids() {
        let config = RenderConfig {
            element_order: vec![Element::Logo, Element::Name],
            ..RenderConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"logo\""));
        assert!(json.contains("\"name\""));
    }
}
