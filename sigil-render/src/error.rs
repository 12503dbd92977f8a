//! Composition-pipeline errors.
//!
//! Font-resolution problems never appear here: they degrade to a
//! fallback font and surface as diagnostics. A missing or undecodable
//! logo does fail the render, since a signature without its logo is not
//! renderable.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// No candidate logo path exists. Carries the full searched list
    /// for user guidance.
    #[error("logo file not found; searched: {searched:?}")]
    LogoNotFound { searched: Vec<PathBuf> },

    /// A logo file existed but its bytes are not a decodable image.
    #[error("failed to decode logo {path:?}: {source}")]
    LogoDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Any other failure during metrics, layout, or drawing.
    #[error("rendering failed during '{operation}': {reason}")]
    Render {
        operation: &'static str,
        reason: String,
    },
}
