//! SVG vector backend.
//!
//! Emits one element per dark module plus optional gradient defs, a solid
//! background rect, the knockout patch and a base64-embedded logo image.

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use qrforge_core::color::Rgb;

use crate::engine::RenderError;
use crate::style::{Background, DotShape, Fill};
use crate::styled::{Rect, StyledSymbol};

const FG_GRADIENT_ID: &str = "fg-gradient";

pub(crate) fn render(symbol: &StyledSymbol) -> Result<Vec<u8>, RenderError> {
    let style = &symbol.style;
    let layout = symbol.layout();
    let size = style.size;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );

    let fill_ref = match &style.foreground {
        Fill::Flat(color) => hex(*color),
        Fill::LinearGradient {
            rotation,
            start,
            end,
        } => {
            let (cx, cy) = (layout.size / 2.0, layout.size / 2.0);
            let (dx, dy) = (rotation.cos() * cx, rotation.sin() * cy);
            let _ = write!(
                svg,
                r#"<defs><linearGradient id="{FG_GRADIENT_ID}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
                cx - dx,
                cy - dy,
                cx + dx,
                cy + dy,
                hex(*start),
                hex(*end),
            );
            format!("url(#{FG_GRADIENT_ID})")
        }
    };

    if let Background::Solid(color) = style.background {
        let _ = write!(
            svg,
            r#"<rect width="{size}" height="{size}" fill="{}"/>"#,
            hex(color)
        );
    }

    for my in 0..symbol.width() {
        for mx in 0..symbol.width() {
            if !symbol.is_dark(mx, my) || symbol.module_hidden(&layout, mx, my) {
                continue;
            }
            let cell = symbol.cell(&layout, mx, my);
            let edge = layout.module;
            match style.dot_shape {
                DotShape::Square => {
                    let _ = write!(
                        svg,
                        r#"<rect x="{:.2}" y="{:.2}" width="{edge:.2}" height="{edge:.2}" fill="{fill_ref}"/>"#,
                        cell.x0, cell.y0,
                    );
                }
                DotShape::Rounded => {
                    let _ = write!(
                        svg,
                        r#"<rect x="{:.2}" y="{:.2}" width="{edge:.2}" height="{edge:.2}" rx="{:.2}" fill="{fill_ref}"/>"#,
                        cell.x0,
                        cell.y0,
                        edge * 0.3,
                    );
                }
                DotShape::Dots => {
                    let _ = write!(
                        svg,
                        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{fill_ref}"/>"#,
                        (cell.x0 + cell.x1) / 2.0,
                        (cell.y0 + cell.y1) / 2.0,
                        edge / 2.0,
                    );
                }
            }
        }
    }

    if let Some(region) = layout.knockout {
        let _ = write!(
            svg,
            r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="#FFFFFF"/>"##,
            region.x0,
            region.y0,
            width_of(region),
            height_of(region),
        );
    }

    if let (Some(directive), Some(region)) = (style.logo.as_ref(), layout.logo) {
        let _ = write!(
            svg,
            r#"<image x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" href="data:image/png;base64,{}"/>"#,
            region.x0,
            region.y0,
            width_of(region),
            height_of(region),
            BASE64.encode(directive.png.as_slice()),
        );
    }

    svg.push_str("</svg>");
    Ok(svg.into_bytes())
}

fn hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

const fn width_of(rect: Rect) -> f64 {
    rect.x1 - rect.x0
}

const fn height_of(rect: Rect) -> f64 {
    rect.y1 - rect.y0
}
