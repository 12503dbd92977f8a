//! # sigil-text
//!
//! Font resolution and CPU text rasterization for the Sigil signature
//! renderer, built on `cosmic-text` (shaping + swash rasterization) and
//! `font-kit` (system font directory search).
//!
//! ## Architecture
//!
//! ```text
//! FontResolver (candidate paths → ResolvedFont, never fails)
//!      │
//!      ▼
//! TextEngine (cosmic-text FontSystem + SwashCache)
//!      │
//!      ├── measure(str, font) ──► (width, height) in pixels
//!      └── shape(str, font)   ──► ShapedLine { Vec<RasterGlyph> }
//! ```
//!
//! Measurement and rasterization share one shaping path, so canvas
//! sizing can never disagree with what is later drawn.
//!
//! - **`fonts`** — candidate validation, platform fallback chain,
//!   LRU-cached resolution, non-fatal diagnostics.
//! - **`engine`** — shaping and glyph rasterization to CPU coverage
//!   bitmaps.

pub mod engine;
pub mod fonts;

// Re-exports for ergonomic use.
pub use engine::{GlyphPixels, RasterGlyph, ShapedLine, TextEngine};
pub use fonts::{Diagnostic, FontFamily, FontResolution, FontResolver, ResolvedFont};
