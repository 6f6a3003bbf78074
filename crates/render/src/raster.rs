//! PNG raster backend.
//!
//! Draws the module matrix into an RGBA canvas, shape by shape, then
//! overlays the logo and encodes through the `image` crate.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{ImageFormat, Rgba, RgbaImage, imageops};

use qrforge_core::color::Rgb;

use crate::engine::RenderError;
use crate::style::{Background, DotShape, Fill};
use crate::styled::{Layout, Rect, StyledSymbol};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub(crate) fn render(symbol: &StyledSymbol) -> Result<Vec<u8>, RenderError> {
    let style = &symbol.style;
    let layout = symbol.layout();
    let size = style.size;

    let background = match style.background {
        Background::Transparent => CLEAR,
        Background::Solid(color) => opaque(color),
    };
    let mut canvas = RgbaImage::from_pixel(size, size, background);

    for my in 0..symbol.width() {
        for mx in 0..symbol.width() {
            if !symbol.is_dark(mx, my) || symbol.module_hidden(&layout, mx, my) {
                continue;
            }
            draw_module(&mut canvas, &layout, symbol.cell(&layout, mx, my), style);
        }
    }

    if let Some(region) = layout.knockout {
        fill_rect(&mut canvas, region, WHITE);
    }

    if let (Some(directive), Some(region)) = (style.logo.as_ref(), layout.logo) {
        overlay_logo(&mut canvas, &directive.png, region)?;
    }

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| RenderError::Raster(e.to_string()))?;
    Ok(out)
}

const fn opaque(color: Rgb) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

/// Paint one dark module in its configured shape.
fn draw_module(canvas: &mut RgbaImage, layout: &Layout, cell: Rect, style: &crate::SymbolStyle) {
    let radius = match style.dot_shape {
        DotShape::Square => 0.0,
        DotShape::Rounded => layout.module * 0.3,
        DotShape::Dots => layout.module * 0.5,
    };

    let (width, height) = canvas.dimensions();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (px0, py0) = (cell.x0.floor().max(0.0) as u32, cell.y0.floor().max(0.0) as u32);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (px1, py1) = (
        (cell.x1.ceil() as u32).min(width),
        (cell.y1.ceil() as u32).min(height),
    );

    for py in py0..py1 {
        for px in px0..px1 {
            let (cx, cy) = (f64::from(px) + 0.5, f64::from(py) + 0.5);
            if inside_shape(cell, radius, cx, cy) {
                canvas.put_pixel(px, py, foreground_at(style, layout, cx, cy));
            }
        }
    }
}

/// Point-in-shape test for a module cell with the given corner radius.
///
/// A radius of zero is the plain square; a radius of half the module edge
/// degenerates the rounded rect into a circle (the "dots" shape).
fn inside_shape(cell: Rect, radius: f64, x: f64, y: f64) -> bool {
    if x < cell.x0 || x >= cell.x1 || y < cell.y0 || y >= cell.y1 {
        return false;
    }
    if radius <= 0.0 {
        return true;
    }
    let nearest_x = x.clamp(cell.x0 + radius, cell.x1 - radius);
    let nearest_y = y.clamp(cell.y0 + radius, cell.y1 - radius);
    let (dx, dy) = (x - nearest_x, y - nearest_y);
    dx * dx + dy * dy <= radius * radius
}

/// Foreground color at a pixel: flat, or the gradient stop projected onto
/// the rotated axis.
fn foreground_at(style: &crate::SymbolStyle, layout: &Layout, x: f64, y: f64) -> Rgba<u8> {
    match &style.foreground {
        Fill::Flat(color) => opaque(*color),
        Fill::LinearGradient {
            rotation,
            start,
            end,
        } => {
            let (dx, dy) = (rotation.cos(), rotation.sin());
            let t = ((x / layout.size - 0.5) * dx + (y / layout.size - 0.5) * dy + 0.5)
                .clamp(0.0, 1.0);
            Rgba([
                lerp(start.r, end.r, t),
                lerp(start.g, end.g, t),
                lerp(start.b, end.b, t),
                255,
            ])
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round().clamp(0.0, 255.0) as u8
}

fn fill_rect(canvas: &mut RgbaImage, region: Rect, pixel: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (px0, py0) = (region.x0.floor().max(0.0) as u32, region.y0.floor().max(0.0) as u32);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (px1, py1) = (
        (region.x1.ceil().max(0.0) as u32).min(width),
        (region.y1.ceil().max(0.0) as u32).min(height),
    );
    for py in py0..py1 {
        for px in px0..px1 {
            canvas.put_pixel(px, py, pixel);
        }
    }
}

/// Decode, scale and center the logo over the canvas.
fn overlay_logo(canvas: &mut RgbaImage, png: &[u8], region: Rect) -> Result<(), RenderError> {
    let logo = image::load_from_memory_with_format(png, ImageFormat::Png)
        .map_err(|e| RenderError::Logo(e.to_string()))?
        .to_rgba8();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let edge = ((region.x1 - region.x0).round().max(1.0)) as u32;
    let scaled = imageops::resize(&logo, edge, edge, FilterType::Triangle);

    #[allow(clippy::cast_possible_truncation)]
    imageops::overlay(canvas, &scaled, region.x0.round() as i64, region.y0.round() as i64);
    Ok(())
}
