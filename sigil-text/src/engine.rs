//! Text shaping and CPU glyph rasterization via `cosmic-text`.
//!
//! The engine owns a `FontSystem` (font discovery + shaping) and a
//! `SwashCache` (glyph rasterization). Shaped text comes back as
//! positioned CPU coverage bitmaps ([`RasterGlyph`]) that the
//! composition engine blits straight onto its RGBA canvas, so the
//! renderer needs no text dependencies of its own.
//!
//! Metrics come from the same shaping pass that produces the bitmaps:
//! there is no second metric source that canvas sizing could disagree
//! with.

use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent, Weight,
};

use crate::fonts::{FontFamily, ResolvedFont};

/// Line height multiplier used during shaping. Vertical placement on
/// the canvas is governed by the configured `line_height`, not by this.
const LINE_SPACING: f32 = 1.2;

/// A rasterized glyph positioned relative to the text origin
/// (top-left of the shaped line).
#[derive(Clone, Debug)]
pub struct RasterGlyph {
    /// Top-left of the bitmap, relative to the text origin.
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub pixels: GlyphPixels,
}

/// Pixel payload of a rasterized glyph.
#[derive(Clone, Debug)]
pub enum GlyphPixels {
    /// 8-bit alpha coverage, `width * height` bytes. Tinted with the
    /// draw color at blit time.
    Mask(Vec<u8>),
    /// Premixed RGBA, `width * height * 4` bytes (color emoji).
    Color(Vec<u8>),
}

/// Result of shaping one line of text.
#[derive(Clone, Debug, Default)]
pub struct ShapedLine {
    pub glyphs: Vec<RasterGlyph>,
    /// Tight bounding width of the shaped text in pixels.
    pub width: f32,
    /// Bounding height of the shaped text in pixels.
    pub height: f32,
}

/// Core text engine wrapping cosmic-text.
pub struct TextEngine {
    pub font_system: FontSystem,
    pub swash_cache: SwashCache,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Create a new engine with system font discovery.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Pixel bounding box a renderer needs to lay out `text`.
    ///
    /// The empty string measures `(0, 0)` without erroring.
    pub fn measure(&mut self, text: &str, font: &ResolvedFont) -> (u32, u32) {
        let line = self.shape(text, font);
        (line.width.ceil() as u32, line.height.ceil() as u32)
    }

    /// Shape and rasterize a single line of text.
    pub fn shape(&mut self, text: &str, font: &ResolvedFont) -> ShapedLine {
        if text.is_empty() {
            return ShapedLine::default();
        }

        let line_height = font.size * LINE_SPACING;
        let metrics = Metrics::new(font.size, line_height);

        let family = match &font.family {
            FontFamily::Named(name) => Family::Name(name.as_str()),
            FontFamily::SansSerif => Family::SansSerif,
        };
        let attrs = Attrs::new().family(family).weight(Weight(font.weight));

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        let mut total_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        for run in buffer.layout_runs() {
            let line_y = run.line_y;
            total_height = total_height.max(line_y + line_height * 0.5);

            for glyph in run.glyphs.iter() {
                total_width = total_width.max(glyph.x + glyph.w);

                let physical = glyph.physical((0.0, 0.0), 1.0);
                let image = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key);
                let image = match image {
                    Some(img) => img,
                    None => continue, // whitespace or missing glyph
                };
                if image.placement.width == 0 || image.placement.height == 0 {
                    continue;
                }

                let pixels = match image.content {
                    SwashContent::Mask => GlyphPixels::Mask(image.data.clone()),
                    SwashContent::Color => GlyphPixels::Color(image.data.clone()),
                    SwashContent::SubpixelMask => {
                        log::debug!("skipping subpixel-mask glyph");
                        continue;
                    }
                };

                glyphs.push(RasterGlyph {
                    x: physical.x + image.placement.left,
                    y: line_y.round() as i32 + physical.y - image.placement.top,
                    width: image.placement.width,
                    height: image.placement.height,
                    pixels,
                });
            }
        }

        ShapedLine {
            glyphs,
            width: total_width,
            height: total_height,
        }
    }

    /// Number of font faces known to the engine. Zero means the host
    /// has no fonts installed and shaping will produce no coverage.
    pub fn face_count(&self) -> usize {
        self.font_system.db().faces().count()
    }
}

// ===================================================================
// Tests
// ===================================================================
