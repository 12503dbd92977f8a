//! Canvas sizing and element placement.
//!
//! Geometry model:
//!
//! ```text
//! ┌──────────────────────────────── canvas_width ───┐
//! │ margin                                          │
//! │   ┌──────┐  text_x                              │
//! │   │ logo │  Name                                │
//! │   │      │  Position                            │
//! │   └──────┘  Address                             │
//! │             Tel: … | Tlm: …                     │
//! │             email | website                     │
//! │             ───────────────── (separator)       │
//! │             CONFIDENTIALITY: …                  │
//! │ margin                                          │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The vertical cursor walks the configured element order once; the
//! logo is anchored at the top margin and does not advance the cursor,
//! but bounds the canvas height from below.

use sigil_core::{Element, RenderConfig, SignatureData};

/// Fraction of a line height inserted above the separator rule,
/// in tenths (matches the original behavior).
const SEPARATOR_GAP_ABOVE_TENTHS: u32 = 3;
/// Fraction of a line height inserted below the separator rule.
const SEPARATOR_GAP_BELOW_TENTHS: u32 = 7;
/// Line heights the confidentiality notice reserves (smaller font, may
/// visually wrap in a host).
const CONFIDENTIALITY_LINES: u32 = 2;

/// Measured pixel widths of every text element, supplied by the
/// composition engine from the same shaping path that will draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextExtents {
    pub name_width: u32,
    pub position_width: u32,
    pub address_width: u32,
    pub phone_width: u32,
    pub email_width: u32,
    pub confidentiality_width: u32,
}

/// What a placed element is, geometrically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacedKind {
    /// The logo bitmap, pasted at its anchor.
    Image,
    /// A text line, drawn from its top-left anchor.
    Text,
    /// The horizontal separator rule.
    Rule { width: u32 },
}

/// One element with its computed top-left anchor.
#[derive(Clone, Copy, Debug)]
pub struct PlacedElement {
    pub element: Element,
    pub x: u32,
    pub y: u32,
    pub kind: PlacedKind,
}

/// Computed canvas geometry for one render call.
#[derive(Clone, Debug)]
pub struct LayoutPlan {
    pub width: u32,
    pub height: u32,
    /// Horizontal column where all text begins.
    pub text_x: u32,
    /// Elements in render order; skipped elements are absent.
    pub items: Vec<PlacedElement>,
}

/// Compute the canvas size and every element anchor.
///
/// Duplicate entries in the element order keep their first occurrence;
/// elements whose backing data is empty are skipped without leaving a
/// gap.
pub fn plan(
    config: &RenderConfig,
    data: &SignatureData,
    logo_size: (u32, u32),
    extents: &TextExtents,
) -> LayoutPlan {
    let (logo_width, logo_height) = logo_size;
    let margin = config.margin;
    let line_height = config.line_height;

    let text_x = margin + logo_width + config.logo_margin_right;

    let phone_line = data.phone_line();

    // Widest of the plain text lines; the separator rule spans this.
    let text_width = extents
        .name_width
        .max(extents.position_width)
        .max(extents.address_width)
        .max(if phone_line.is_empty() {
            0
        } else {
            extents.phone_width
        })
        .max(extents.email_width);

    let content_width = text_width.max(extents.confidentiality_width);
    let width = text_x + content_width + margin;

    let mut items = Vec::with_capacity(config.element_order.len());
    let mut seen: Vec<Element> = Vec::with_capacity(config.element_order.len());
    let mut cursor = margin;

    for &element in &config.element_order {
        if seen.contains(&element) {
            log::warn!("duplicate element '{element}' in order, rendering first only");
            continue;
        }
        seen.push(element);

        match element {
            Element::Logo => items.push(PlacedElement {
                element,
                x: margin,
                y: margin,
                kind: PlacedKind::Image,
            }),
            Element::Separator => {
                cursor += line_height * SEPARATOR_GAP_ABOVE_TENTHS / 10;
                items.push(PlacedElement {
                    element,
                    x: text_x,
                    y: cursor,
                    kind: PlacedKind::Rule { width: text_width },
                });
                cursor += line_height * SEPARATOR_GAP_BELOW_TENTHS / 10;
            }
            Element::Confidentiality => {
                if config.confidentiality_text.trim().is_empty() {
                    continue;
                }
                items.push(PlacedElement {
                    element,
                    x: text_x,
                    y: cursor,
                    kind: PlacedKind::Text,
                });
                cursor += line_height * CONFIDENTIALITY_LINES;
            }
            Element::Name | Element::Position | Element::Address | Element::Phone
            | Element::Email => {
                let empty = match element {
                    Element::Phone => phone_line.is_empty(),
                    Element::Name => data.name().is_empty(),
                    Element::Position => data.position().is_empty(),
                    Element::Address => data.address().is_empty(),
                    _ => false, // email line always carries the website
                };
                if empty {
                    continue;
                }
                items.push(PlacedElement {
                    element,
                    x: text_x,
                    y: cursor,
                    kind: PlacedKind::Text,
                });
                cursor += line_height;
            }
        }
    }

    let text_bound = cursor + margin;
    let logo_bound = margin * 2 + logo_height;
    let height = text_bound.max(logo_bound);

    LayoutPlan {
        width,
        height,
        text_x,
        items,
    }
}

// ===================================================================
// Tests
// ===================================================================
