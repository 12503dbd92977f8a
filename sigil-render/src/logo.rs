//! Logo search, decoding, and aspect-preserving scaling.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::error::RenderError;

/// Return the first existing regular file among the candidate paths.
///
/// The error carries every searched path so a host can tell the user
/// where a logo may be placed.
pub fn find_logo(search_paths: &[PathBuf]) -> Result<PathBuf, RenderError> {
    for path in search_paths {
        if path.is_file() {
            log::debug!("found logo at '{}'", path.display());
            return Ok(path.clone());
        }
    }
    Err(RenderError::LogoNotFound {
        searched: search_paths.to_vec(),
    })
}

/// Decode a logo file and scale it to `target_height`.
pub fn load_logo(path: &Path, target_height: u32) -> Result<RgbaImage, RenderError> {
    let decoded = image::open(path).map_err(|source| RenderError::LogoDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scale_logo(&decoded, target_height))
}

/// Decode already-loaded logo bytes and scale them to `target_height`.
///
/// This is the entry point for hosts that do their own file I/O.
pub fn logo_from_bytes(bytes: &[u8], target_height: u32) -> Result<RgbaImage, RenderError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| RenderError::LogoDecode {
        path: PathBuf::from("<memory>"),
        source,
    })?;
    Ok(scale_logo(&decoded, target_height))
}

/// Resize to `target_height` preserving aspect ratio, normalizing to
/// RGBA regardless of the source channel count.
///
/// `target_width = round(target_height * W / H)`, clamped to ≥ 1 px so
/// extreme ratios still produce a paintable bitmap.
pub fn scale_logo(logo: &DynamicImage, target_height: u32) -> RgbaImage {
    let target_height = target_height.max(1);
    let (width, height) = logo.dimensions();
    if width == 0 || height == 0 {
        return RgbaImage::new(1, target_height);
    }

    let target_width = (target_height as f64 * width as f64 / height as f64).round() as u32;
    let target_width = target_width.max(1);

    let rgba = logo.to_rgba8();
    imageops::resize(&rgba, target_width, target_height, FilterType::Lanczos3)
}

// ===================================================================
// Tests
// ===================================================================
