//! Pixel-level drawing primitives: source-over blending, glyph
//! blitting, the outline halo, the separator rule, and the
//! alpha-preserving logo paste.
//!
//! All operations mutate the canvas in place and silently clip at the
//! canvas edges.

use image::{Rgba, RgbaImage};
use sigil_core::Color;
use sigil_text::{GlyphPixels, ShapedLine};

/// Source-over blend of one RGBA pixel onto the canvas, integer math.
pub(crate) fn blend_pixel(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let sa = src[3] as u32;
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = Rgba(src);
        return;
    }
    let da = dst[3] as u32;
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for channel in 0..3 {
        let sc = src[channel] as u32;
        let dc = dst[channel] as u32;
        dst[channel] = ((sc * sa + dc * da * (255 - sa) / 255) / out_a) as u8;
    }
    dst[3] = out_a as u8;
}

fn put(canvas: &mut RgbaImage, x: i32, y: i32, src: [u8; 4]) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    blend_pixel(canvas.get_pixel_mut(x, y), src);
}

/// Blit one shaped line at `(x + dx, y + dy)`.
///
/// `keep_embedded` controls color-bitmap glyphs (emoji): the fill pass
/// keeps their own colors, the halo passes tint them like masks.
fn blit_line(
    canvas: &mut RgbaImage,
    line: &ShapedLine,
    x: u32,
    y: u32,
    dx: i32,
    dy: i32,
    color: Color,
    keep_embedded: bool,
) {
    for glyph in &line.glyphs {
        let origin_x = x as i32 + glyph.x + dx;
        let origin_y = y as i32 + glyph.y + dy;
        match &glyph.pixels {
            GlyphPixels::Mask(coverage) => {
                for row in 0..glyph.height {
                    for col in 0..glyph.width {
                        let cov = coverage[(row * glyph.width + col) as usize];
                        if cov == 0 {
                            continue;
                        }
                        let alpha = (cov as u16 * color.a as u16 / 255) as u8;
                        put(
                            canvas,
                            origin_x + col as i32,
                            origin_y + row as i32,
                            [color.r, color.g, color.b, alpha],
                        );
                    }
                }
            }
            GlyphPixels::Color(rgba) => {
                for row in 0..glyph.height {
                    for col in 0..glyph.width {
                        let i = ((row * glyph.width + col) * 4) as usize;
                        let src_a = rgba[i + 3];
                        if src_a == 0 {
                            continue;
                        }
                        let src = if keep_embedded {
                            [rgba[i], rgba[i + 1], rgba[i + 2], src_a]
                        } else {
                            let alpha = (src_a as u16 * color.a as u16 / 255) as u8;
                            [color.r, color.g, color.b, alpha]
                        };
                        put(canvas, origin_x + col as i32, origin_y + row as i32, src);
                    }
                }
            }
        }
    }
}

/// Draw a shaped line with a halo: the text at every integer offset in
/// the `±outline_width` square in the outline color, then once at the
/// anchor in the fill color. `outline_width == 0` degenerates to plain
/// fill-only text.
pub fn draw_text_outlined(
    canvas: &mut RgbaImage,
    line: &ShapedLine,
    x: u32,
    y: u32,
    outline: Color,
    fill: Color,
    outline_width: u32,
) {
    let w = outline_width as i32;
    for dy in -w..=w {
        for dx in -w..=w {
            if dx == 0 && dy == 0 {
                continue;
            }
            blit_line(canvas, line, x, y, dx, dy, outline, false);
        }
    }
    blit_line(canvas, line, x, y, 0, 0, fill, true);
}

/// Draw a horizontal rule of the given thickness.
pub fn draw_hline(
    canvas: &mut RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    thickness: u32,
    color: Color,
) {
    let src = [color.r, color.g, color.b, color.a];
    for row in 0..thickness {
        for col in 0..width {
            put(canvas, (x + col) as i32, (y + row) as i32, src);
        }
    }
}

/// Composite an RGBA image onto the canvas using its own alpha as the
/// mask, so logo transparency survives the paste.
pub fn paste_image(canvas: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        put(canvas, (x + sx) as i32, (y + sy) as i32, pixel.0);
    }
}

// ===================================================================
// Tests
// ===================================================================
