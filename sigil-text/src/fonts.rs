//! Font resolution with a platform fallback chain.
//!
//! Resolution order for a candidate list:
//!
//! 1. Each configured candidate path, validated (exists, regular file,
//!    recognized font extension) and loaded into the cosmic-text font
//!    database.
//! 2. A system-directory search via `font-kit` for the platform default
//!    sans-serif family.
//! 3. The generic sans-serif family, letting cosmic-text pick whatever
//!    the host has.
//!
//! Resolution therefore **never fails**: a signature without its
//! preferred font is still useful. Every step past the first candidate
//! is reported as a [`Diagnostic`] value (and logged), not an error.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cosmic_text::{fontdb, FontSystem};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use lru::LruCache;

/// Recognized font file extensions (case-insensitive).
const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Resolutions kept in the cache; a render host only ever needs a
/// handful of (candidates, size) combinations.
const FONT_CACHE_CAP: usize = 32;

// ── Resolved font handle ────────────────────────────────────────────

/// The family a resolved font renders with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontFamily {
    /// A concrete family name present in the font database.
    Named(String),
    /// The engine built-in fallback: whatever the database matches for
    /// generic sans-serif.
    SansSerif,
}

/// Handle to a loaded font at a given pixel size.
///
/// Cheap to clone and safe to cache across render calls; the backing
/// face data lives in the shared font database.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFont {
    pub family: FontFamily,
    /// Pixel size text is shaped at.
    pub size: f32,
    /// Weight of the matched face (400 = normal, 700 = bold).
    pub weight: u16,
}

impl ResolvedFont {
    /// The same face at a different size (used to derive the small
    /// confidentiality font from the regular one).
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
            weight: self.weight,
        }
    }
}

// ── Diagnostics ─────────────────────────────────────────────────────

/// A non-fatal font-resolution warning, surfaced to the caller instead
/// of thrown, preserving the never-fail contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("{message}");
        Self { message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a resolution: always a usable font, plus whatever
/// warnings accumulated on the way there.
#[derive(Clone, Debug)]
pub struct FontResolution {
    pub font: ResolvedFont,
    pub diagnostics: Vec<Diagnostic>,
}

// ── Resolver ────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    candidates: Vec<PathBuf>,
    /// Size in millipixels so the key stays hashable.
    size_milli: u32,
}

/// Resolves font-file candidates into [`ResolvedFont`] handles.
///
/// Owned by one renderer instance; concurrent renders use independent
/// resolvers rather than sharing module-level state, so no locking is
/// needed.
pub struct FontResolver {
    default_family: String,
    cache: LruCache<CacheKey, ResolvedFont>,
    system_source: Option<SystemSource>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(platform_default_family())
    }
}

impl FontResolver {
    /// Create a resolver falling back to `default_family` when no
    /// configured candidate is usable.
    pub fn new(default_family: impl Into<String>) -> Self {
        let cap = NonZeroUsize::new(FONT_CACHE_CAP).unwrap_or(NonZeroUsize::MIN);
        Self {
            default_family: default_family.into(),
            cache: LruCache::new(cap),
            system_source: None,
        }
    }

    /// Resolve a candidate list at `size` pixels.
    ///
    /// Cached: repeated calls with the same candidates and size skip
    /// file probing and return no new diagnostics.
    pub fn resolve(
        &mut self,
        font_system: &mut FontSystem,
        candidates: &[PathBuf],
        size: f32,
    ) -> FontResolution {
        let key = CacheKey {
            candidates: candidates.to_vec(),
            size_milli: (size * 1000.0) as u32,
        };
        if let Some(font) = self.cache.get(&key) {
            return FontResolution {
                font: font.clone(),
                diagnostics: Vec::new(),
            };
        }

        let mut diagnostics = Vec::new();

        for (index, path) in candidates.iter().enumerate() {
            if let Err(reason) = validate_candidate(path) {
                diagnostics.push(Diagnostic::new(format!(
                    "skipping font candidate '{}': {reason}",
                    path.display()
                )));
                continue;
            }
            match load_font_file(font_system, path, size) {
                Some(font) => {
                    if index > 0 {
                        diagnostics.push(Diagnostic::new(format!(
                            "fell back to font candidate #{index} '{}'",
                            path.display()
                        )));
                    } else {
                        log::debug!("loaded font candidate '{}'", path.display());
                    }
                    self.cache.put(key, font.clone());
                    return FontResolution { font, diagnostics };
                }
                None => diagnostics.push(Diagnostic::new(format!(
                    "failed to load font candidate '{}'",
                    path.display()
                ))),
            }
        }

        // No configured candidate worked: search system font directories
        // for the platform default family.
        if let Some(font) = self.resolve_system_family(font_system, size) {
            diagnostics.push(Diagnostic::new(format!(
                "no configured font candidate usable, using system font '{}'",
                self.default_family
            )));
            self.cache.put(key, font.clone());
            return FontResolution { font, diagnostics };
        }

        // Engine built-in fallback: generic sans-serif. Resolution must
        // never fail a render.
        diagnostics.push(Diagnostic::new(format!(
            "could not locate '{}', using generic sans-serif",
            self.default_family
        )));
        let font = ResolvedFont {
            family: FontFamily::SansSerif,
            size,
            weight: 400,
        };
        self.cache.put(key, font.clone());
        FontResolution { font, diagnostics }
    }

    /// Look for the default family in platform font directories.
    fn resolve_system_family(
        &mut self,
        font_system: &mut FontSystem,
        size: f32,
    ) -> Option<ResolvedFont> {
        let source = self.system_source.get_or_insert_with(SystemSource::new);
        let handle = source
            .select_best_match(
                &[
                    FamilyName::Title(self.default_family.clone()),
                    FamilyName::SansSerif,
                ],
                &Properties::new(),
            )
            .ok()?;
        match handle {
            Handle::Path { path, .. } => load_font_file(font_system, &path, size),
            Handle::Memory { bytes, .. } => {
                load_font_bytes(font_system, bytes.as_ref().clone(), size)
            }
        }
    }
}

/// Check that a candidate exists, is a regular file, and carries a
/// recognized font extension.
pub fn validate_candidate(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err("path does not exist".into());
    }
    if !path.is_file() {
        return Err("not a regular file".into());
    }
    let recognized = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            FONT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);
    if !recognized {
        return Err(format!(
            "unrecognized font extension (expected one of {FONT_EXTENSIONS:?})"
        ));
    }
    Ok(())
}

fn load_font_file(font_system: &mut FontSystem, path: &Path, size: f32) -> Option<ResolvedFont> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("could not read '{}': {e}", path.display());
            return None;
        }
    };
    load_font_bytes(font_system, bytes, size)
}

fn load_font_bytes(font_system: &mut FontSystem, bytes: Vec<u8>, size: f32) -> Option<ResolvedFont> {
    let source_data: Arc<dyn AsRef<[u8]> + Send + Sync> = Arc::new(bytes);
    let ids = font_system
        .db_mut()
        .load_font_source(fontdb::Source::Binary(source_data));
    let id = ids.into_iter().next()?;
    let face = font_system.db().face(id)?;
    let family = face.families.first().map(|(name, _)| name.clone())?;
    let weight = face.weight.0;
    Some(ResolvedFont {
        family: FontFamily::Named(family),
        size,
        weight,
    })
}

fn platform_default_family() -> &'static str {
    if cfg!(target_os = "windows") {
        "Arial"
    } else if cfg!(target_os = "macos") {
        "Helvetica"
    } else {
        "DejaVu Sans"
    }
}

// ===================================================================
// Tests
// ===================================================================
