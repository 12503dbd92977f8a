//! # sigil-render
//!
//! CPU composition engine for the Sigil signature renderer: pastes the
//! scaled logo and draws halo-outlined text onto a transparent RGBA
//! canvas, in the element order the layout engine planned.
//!
//! ## Architecture
//!
//! ```text
//!  SignatureData + RenderConfig (sigil-core)
//!       │
//!       ▼
//!  FontResolver + TextEngine (sigil-text)   ◀─── fonts, metrics, glyphs
//!       │
//!       ▼
//!  plan() (sigil-layout)                    ◀─── canvas size + anchors
//!       │
//!       ▼
//!  SignatureRenderer::render()              ◀─── paste / outline / rule
//!       │
//!       ▼
//!  image::RgbaImage (transparent canvas)
//! ```
//!
//! ## Crate modules
//!
//! - [`logo`] — logo search, decode, aspect-preserving scale
//! - [`draw`] — alpha blending, glyph blitting, outline halo, rule
//! - [`renderer`] — the `SignatureRenderer` orchestrator
//! - [`error`] — the crate error type

pub mod draw;
pub mod error;
pub mod logo;
pub mod renderer;

// Re-exports for convenience
pub use error::RenderError;
pub use logo::{find_logo, load_logo, logo_from_bytes, scale_logo};
pub use renderer::SignatureRenderer;
