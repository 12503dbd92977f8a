//! # sigil-core
//!
//! Data model for the Sigil email-signature renderer: the contact record,
//! the declarative render configuration, and the closed set of signature
//! elements.
//!
//! ## Architecture
//!
//! ```text
//! SignatureData (validated contact record)
//!      │
//!      ▼
//! RenderConfig (dimensions, colors, fonts, element order)
//!      │
//!      ▼
//! Element (closed enum: logo, name, …, confidentiality)
//! ```
//!
//! - **`data`** — `SignatureData` record with construction-time validation
//!   and derived text lines (phone line, email line).
//! - **`config`** — `RenderConfig`, `ColorTable`, platform `FontPaths`.
//! - **`element`** — the `Element` enum and order parsing.
//!
//! Everything here is serde-serializable so that external collaborators
//! (YAML config loaders, profile stores, GUIs) can persist and restore
//! state without this crate knowing about file formats.

pub mod config;
pub mod data;
pub mod element;

// Re-exports for ergonomic use.
pub use config::{Color, ColorTable, FontPaths, RenderConfig};
pub use data::{DataError, SignatureData, DEFAULT_WEBSITE};
pub use element::Element;
