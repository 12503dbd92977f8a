//! # sigil-layout
//!
//! Deterministic layout for the Sigil signature renderer: given the
//! configuration, the contact data, the scaled logo dimensions, and the
//! measured text extents, compute the canvas size and a top-left anchor
//! for every element — before a single pixel is drawn.
//!
//! ## Architecture
//!
//! ```text
//! RenderConfig + SignatureData + logo size + TextExtents
//!      │
//!      ▼
//! plan()  ──► LayoutPlan { width, height, Vec<PlacedElement> }
//! ```
//!
//! The plan is ephemeral: computed fresh per render call, never
//! persisted.

pub mod engine;

// Re-exports for ergonomic use.
pub use engine::{plan, LayoutPlan, PlacedElement, PlacedKind, TextExtents};
