//! High-level renderer that ties font resolution, metrics, layout, and
//! drawing together into a single `render()` call.
//!
//! Rendering is a pure, synchronous computation: identical inputs
//! produce an identical canvas. The renderer takes `&mut self` because
//! cosmic-text shaping does; concurrent renders use independent
//! renderer instances rather than a shared one.

use image::RgbaImage;
use sigil_core::{Element, RenderConfig, SignatureData};
use sigil_layout::{plan, PlacedKind, TextExtents};
use sigil_text::{Diagnostic, FontResolver, ResolvedFont, ShapedLine, TextEngine};

use crate::draw::{draw_hline, draw_text_outlined, paste_image};
use crate::error::RenderError;
use crate::logo::{find_logo, load_logo};

/// Pixel size of the bold name line.
pub const FONT_SIZE_NAME: f32 = 16.0;
/// Pixel size of the regular detail lines.
pub const FONT_SIZE_BODY: f32 = 14.0;
/// The confidentiality notice renders at this fraction of the body
/// size. Kept as the original's constant rather than made configurable.
pub const CONFIDENTIALITY_FONT_SCALE: f32 = 0.7;
/// Separator rule thickness in pixels, likewise a fixed constant.
pub const SEPARATOR_THICKNESS: u32 = 2;

/// Upper bound on either canvas dimension; anything larger indicates a
/// runaway configuration rather than a real signature.
const MAX_CANVAS_DIM: u32 = 8192;

/// Main composition engine.
///
/// # Usage
///
/// ```ignore
/// let mut renderer = SignatureRenderer::new(RenderConfig::default());
/// let logo = sigil_render::load_logo(path, renderer.config().logo_height)?;
/// let canvas = renderer.render(&data, &logo)?;
/// ```
pub struct SignatureRenderer {
    config: RenderConfig,
    text: TextEngine,
    resolver: FontResolver,
    bold_font: ResolvedFont,
    regular_font: ResolvedFont,
    small_font: ResolvedFont,
    diagnostics: Vec<Diagnostic>,
}

impl SignatureRenderer {
    /// Create a renderer, resolving the bold and regular fonts from the
    /// platform candidate list once up front.
    pub fn new(config: RenderConfig) -> Self {
        let mut text = TextEngine::new();
        let mut resolver = FontResolver::default();
        let (bold_font, regular_font, small_font, diagnostics) =
            resolve_fonts(&config, &mut resolver, &mut text);
        log::info!(
            "SignatureRenderer ready ({} font faces, {} diagnostics)",
            text.face_count(),
            diagnostics.len(),
        );
        Self {
            config,
            text,
            resolver,
            bold_font,
            regular_font,
            small_font,
            diagnostics,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the configuration, re-resolving fonts. Long-lived hosts
    /// (a GUI) call this between renders after the user edits settings.
    pub fn set_config(&mut self, config: RenderConfig) {
        let (bold, regular, small, diagnostics) =
            resolve_fonts(&config, &mut self.resolver, &mut self.text);
        self.bold_font = bold;
        self.regular_font = regular;
        self.small_font = small;
        self.diagnostics.extend(diagnostics);
        self.config = config;
    }

    /// Non-fatal font warnings accumulated since construction.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render the signature onto a fresh transparent canvas.
    ///
    /// `logo` must already be scaled (see [`crate::load_logo`] /
    /// [`crate::scale_logo`]); the renderer pastes it as-is.
    pub fn render(
        &mut self,
        data: &SignatureData,
        logo: &RgbaImage,
    ) -> Result<RgbaImage, RenderError> {
        // One config snapshot per render call.
        let config = self.config.clone();

        let phone_text = data.phone_line();
        let email_text = data.email_line();

        let name = self.text.shape(data.name(), &self.bold_font);
        let position = self.text.shape(data.position(), &self.regular_font);
        let address = self.text.shape(data.address(), &self.regular_font);
        let phone = self.text.shape(&phone_text, &self.regular_font);
        let email = self.text.shape(&email_text, &self.regular_font);
        let confidentiality = self
            .text
            .shape(&config.confidentiality_text, &self.small_font);

        let extents = TextExtents {
            name_width: ceil_width(&name),
            position_width: ceil_width(&position),
            address_width: ceil_width(&address),
            phone_width: ceil_width(&phone),
            email_width: ceil_width(&email),
            confidentiality_width: ceil_width(&confidentiality),
        };

        let layout = plan(&config, data, logo.dimensions(), &extents);
        if layout.width == 0
            || layout.height == 0
            || layout.width > MAX_CANVAS_DIM
            || layout.height > MAX_CANVAS_DIM
        {
            return Err(RenderError::Render {
                operation: "allocate canvas",
                reason: format!(
                    "planned canvas {}x{} outside 1..={MAX_CANVAS_DIM}",
                    layout.width, layout.height
                ),
            });
        }

        // Zero-initialized means fully transparent.
        let mut canvas = RgbaImage::new(layout.width, layout.height);

        for item in &layout.items {
            match item.element {
                Element::Logo => paste_image(&mut canvas, logo, item.x, item.y),
                Element::Name => draw_text_outlined(
                    &mut canvas,
                    &name,
                    item.x,
                    item.y,
                    config.colors.outline,
                    config.colors.name,
                    config.outline_width_name,
                ),
                Element::Position => self.draw_detail(&mut canvas, &position, item, &config),
                Element::Address => self.draw_detail(&mut canvas, &address, item, &config),
                Element::Phone => self.draw_detail(&mut canvas, &phone, item, &config),
                Element::Email => self.draw_detail(&mut canvas, &email, item, &config),
                Element::Separator => {
                    if let PlacedKind::Rule { width } = item.kind {
                        draw_hline(
                            &mut canvas,
                            item.x,
                            item.y,
                            width,
                            SEPARATOR_THICKNESS,
                            config.colors.separator,
                        );
                    }
                }
                Element::Confidentiality => draw_text_outlined(
                    &mut canvas,
                    &confidentiality,
                    item.x,
                    item.y,
                    config.colors.outline,
                    config.colors.confidentiality,
                    config.outline_width_text,
                ),
            }
        }

        log::debug!(
            "rendered {}x{} canvas with {} elements",
            layout.width,
            layout.height,
            layout.items.len(),
        );
        Ok(canvas)
    }

    /// Locate the logo via the configured search paths, load and scale
    /// it, and render.
    pub fn render_from_search(&mut self, data: &SignatureData) -> Result<RgbaImage, RenderError> {
        let path = find_logo(&self.config.logo_search_paths)?;
        let logo = load_logo(&path, self.config.logo_height)?;
        self.render(data, &logo)
    }

    fn draw_detail(
        &self,
        canvas: &mut RgbaImage,
        line: &ShapedLine,
        item: &sigil_layout::PlacedElement,
        config: &RenderConfig,
    ) {
        draw_text_outlined(
            canvas,
            line,
            item.x,
            item.y,
            config.colors.outline,
            config.colors.details,
            config.outline_width_text,
        );
    }
}

fn resolve_fonts(
    config: &RenderConfig,
    resolver: &mut FontResolver,
    text: &mut TextEngine,
) -> (ResolvedFont, ResolvedFont, ResolvedFont, Vec<Diagnostic>) {
    let candidates = config.font_paths.current();
    let bold_candidates = &candidates[..candidates.len().min(1)];
    let regular_candidates = candidates.get(1..).unwrap_or(&[]);

    let mut diagnostics = Vec::new();
    let bold = resolver.resolve(&mut text.font_system, bold_candidates, FONT_SIZE_NAME);
    diagnostics.extend(bold.diagnostics);
    let regular = resolver.resolve(&mut text.font_system, regular_candidates, FONT_SIZE_BODY);
    diagnostics.extend(regular.diagnostics);

    let small = regular
        .font
        .with_size(regular.font.size * CONFIDENTIALITY_FONT_SCALE);

    (bold.font, regular.font, small, diagnostics)
}

fn ceil_width(line: &ShapedLine) -> u32 {
    line.width.ceil() as u32
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba};
    use sigil_core::Color;
    use std::io::Cursor;

    fn sample_data() -> SignatureData {
        SignatureData::new(
            "Ana Silva",
            "Engineer",
            "1 Main St",
            "",
            "",
            "ana@example.com",
            "example.com",
        )
        .unwrap()
    }

    fn opaque_logo(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 80, 160, 255]))
    }

    fn renderer() -> SignatureRenderer {
        SignatureRenderer::new(RenderConfig::default())
    }

    fn no_fonts(r: &SignatureRenderer) -> bool {
        if r.text.face_count() == 0 {
            eprintln!("skipping: no system fonts installed");
            return true;
        }
        false
    }

    fn non_transparent(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn test_example_scenario_dimensions() {
        let mut r = renderer();
        // 100x50 logo scaled to height 70 is 140 wide.
        let logo = crate::scale_logo(&DynamicImage::ImageRgba8(opaque_logo(100, 50)), 70);
        assert_eq!(logo.dimensions(), (140, 70));

        let canvas = r.render(&sample_data(), &logo).unwrap();
        assert!(canvas.width() >= 15 + 140 + 20 + 15, "got {}", canvas.width());
        assert!(canvas.height() >= 15 + 70 + 15, "got {}", canvas.height());
    }

    #[test]
    fn test_canvas_is_transparent_outside_content() {
        let mut r = renderer();
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();
        // The corner pixel sits inside the margin.
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(
            canvas.get_pixel(canvas.width() - 1, canvas.height() - 1)[3],
            0
        );
    }

    #[test]
    fn test_logo_pasted_at_margin() {
        let mut r = renderer();
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();
        assert_eq!(canvas.get_pixel(15, 15).0, [0, 80, 160, 255]);
        assert_eq!(canvas.get_pixel(14, 15)[3], 0);
    }

    #[test]
    fn test_determinism() {
        let mut r = renderer();
        let logo = opaque_logo(140, 70);
        let a = r.render(&sample_data(), &logo).unwrap();
        let b = r.render(&sample_data(), &logo).unwrap();
        assert_eq!(a.dimensions(), b.dimensions());
        assert_eq!(non_transparent(&a), non_transparent(&b));
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_outline_visibility_on_black_and_white() {
        let mut r = renderer();
        if no_fonts(&r) {
            return;
        }
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();

        // Halo pixels (near-white) and fill pixels (near the dark name
        // color) must both exist.
        let has_halo = canvas
            .pixels()
            .any(|p| p[3] > 200 && p[0] > 200 && p[1] > 200 && p[2] > 200);
        let has_fill = canvas
            .pixels()
            .any(|p| p[3] > 200 && p[0] < 100 && p[1] < 100 && p[2] < 120);
        assert!(has_halo, "expected halo-colored pixels");
        assert!(has_fill, "expected fill-colored pixels");

        // Composited over pure black and pure white, the text region
        // stays visible (more than one distinct value).
        for background in [Rgba([0u8, 0, 0, 255]), Rgba([255u8, 255, 255, 255])] {
            let mut composited = RgbaImage::from_pixel(canvas.width(), canvas.height(), background);
            crate::draw::paste_image(&mut composited, &canvas, 0, 0);
            let mut values: Vec<[u8; 4]> = composited.pixels().map(|p| p.0).collect();
            values.sort();
            values.dedup();
            assert!(
                values.len() > 1,
                "canvas invisible over {background:?}"
            );
        }
    }

    #[test]
    fn test_glyphs_stay_inside_canvas() {
        let mut r = renderer();
        if no_fonts(&r) {
            return;
        }
        // Long text lines: the canvas must grow instead of clipping, so
        // the rightmost column stays empty (right margin).
        let data = SignatureData::new(
            "A Very Long Name Indeed For Testing",
            "Principal Staff Engineer Of Everything",
            "Very Long Street Address 1234, Some City",
            "210000000",
            "910000000",
            "a.very.long.email@example-company.com",
            "www.example-company.com",
        )
        .unwrap();
        let canvas = r.render(&data, &opaque_logo(140, 70)).unwrap();
        let right_edge_ink = (0..canvas.height())
            .filter(|&y| canvas.get_pixel(canvas.width() - 1, y)[3] != 0)
            .count();
        assert_eq!(right_edge_ink, 0, "text clipped at the right edge");
    }

    #[test]
    fn test_confidentiality_in_bottom_third() {
        let mut r = renderer();
        if no_fonts(&r) {
            return;
        }
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();
        let bottom_start = canvas.height() * 2 / 3;
        let ink = (bottom_start..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y)[3] != 0)
            .count();
        assert!(ink > 0, "bottom third should contain the notice");
    }

    #[test]
    fn test_separator_rendered_in_its_color() {
        let mut r = renderer();
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();
        let separator = Color::rgba(200, 0, 40, 200);
        let has_rule = canvas
            .pixels()
            .any(|p| p[0] == separator.r && p[1] == separator.g && p[3] > 0);
        assert!(has_rule, "separator rule missing");
    }

    #[test]
    fn test_order_without_separator_or_confidentiality() {
        let config = RenderConfig {
            element_order: vec![
                Element::Logo,
                Element::Name,
                Element::Position,
                Element::Address,
                Element::Email,
            ],
            ..RenderConfig::default()
        };
        let mut r = SignatureRenderer::new(config.clone());
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();
        let has_rule = canvas.pixels().any(|p| p[0] == 200 && p[1] == 0 && p[3] > 0);
        assert!(!has_rule, "no separator should render");
        // Four text lines (phone skipped), no separator/confidentiality.
        assert_eq!(
            canvas.height(),
            config.margin * 2 + 4 * config.line_height
        );
    }

    #[test]
    fn test_transparency_survives_png_round_trip() {
        let mut r = renderer();
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();

        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(canvas.clone())
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), canvas.dimensions());
        for (before, after) in canvas.pixels().zip(decoded.pixels()) {
            if before[3] == 0 {
                assert_eq!(after[3], 0, "transparent pixel became visible");
            }
        }
    }

    #[test]
    fn test_render_from_search_reports_missing_logo() {
        let config = RenderConfig {
            logo_search_paths: vec!["/nope/logo.png".into(), "/nope/logo.jpg".into()],
            ..RenderConfig::default()
        };
        let mut r = SignatureRenderer::new(config);
        match r.render_from_search(&sample_data()) {
            Err(RenderError::LogoNotFound { searched }) => assert_eq!(searched.len(), 2),
            other => panic!("expected LogoNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_set_config_takes_effect() {
        let mut r = renderer();
        let logo = opaque_logo(140, 70);
        let before = r.render(&sample_data(), &logo).unwrap();

        let mut config = RenderConfig::default();
        config.margin = 30;
        r.set_config(config);
        let after = r.render(&sample_data(), &logo).unwrap();
        assert!(after.width() > before.width());
        assert!(after.height() >= before.height());
    }

    #[test]
    fn test_font_fallback_never_fails_render() {
        // Nonexistent candidate paths still produce a render.
        let mut config = RenderConfig::default();
        config.font_paths.linux = vec!["/nope/bold.ttf".into(), "/nope/regular.ttf".into()];
        config.font_paths.windows = vec!["C:\\nope\\bold.ttf".into()];
        config.font_paths.macos = vec!["/nope/font.ttc".into()];
        let mut r = SignatureRenderer::new(config);
        assert!(!r.diagnostics().is_empty(), "fallback must be diagnosed");
        let canvas = r.render(&sample_data(), &opaque_logo(140, 70)).unwrap();
        assert!(canvas.width() > 0);
    }
}
