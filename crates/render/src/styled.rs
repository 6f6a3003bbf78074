//! The production engine: `qrcode`-encoded matrix, styled output.
//!
//! Encoding and error correction are the `qrcode` crate's job; this module
//! only walks the finished matrix and hands the drawing off to the raster
//! and vector backends.

use qrcode::{EcLevel, QrCode};

use qrforge_core::render_config::ErrorCorrection;

use crate::engine::{RenderEngine, RenderError, Symbol};
use crate::style::SymbolStyle;
use crate::{raster, vector};

/// Data rendered while the payload is still empty, so the preview shows a
/// scannable symbol from the first paint.
pub const PLACEHOLDER_PAYLOAD: &str = "Hello, Earth";

/// Engine drawing styled symbols from `qrcode`-encoded matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyledQrEngine;

impl StyledQrEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

impl RenderEngine for StyledQrEngine {
    fn configure(
        &self,
        payload: &str,
        style: &SymbolStyle,
    ) -> Result<Box<dyn Symbol>, RenderError> {
        if style.size <= style.quiet_zone * 2 {
            return Err(RenderError::Style(
                "quiet zone leaves no room for the symbol".to_string(),
            ));
        }

        let data = if payload.is_empty() {
            PLACEHOLDER_PAYLOAD
        } else {
            payload
        };

        let code = QrCode::with_error_correction_level(data.as_bytes(), ec_level(style.error_correction))
            .map_err(|e| RenderError::Encoding(e.to_string()))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();

        Ok(Box::new(StyledSymbol {
            modules,
            width,
            style: style.clone(),
        }))
    }
}

/// A configured symbol: the module matrix plus the style it was built for.
pub(crate) struct StyledSymbol {
    modules: Vec<bool>,
    width: usize,
    pub(crate) style: SymbolStyle,
}

/// Pixel geometry shared by the raster and vector backends.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    /// Symbol edge in pixels.
    pub size: f64,
    /// Offset of the module grid (the quiet zone).
    pub origin: f64,
    /// Edge length of one module in pixels.
    pub module: f64,
    /// Logo knockout region, when background modules are hidden.
    pub knockout: Option<Rect>,
    /// Logo placement region.
    pub logo: Option<Rect>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    fn centered(size: f64, edge: f64) -> Self {
        let offset = (size - edge) / 2.0;
        Self {
            x0: offset,
            y0: offset,
            x1: offset + edge,
            y1: offset + edge,
        }
    }

    fn expanded(self, margin: f64) -> Self {
        Self {
            x0: self.x0 - margin,
            y0: self.y0 - margin,
            x1: self.x1 + margin,
            y1: self.y1 + margin,
        }
    }

    fn intersects(self, other: Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

impl StyledSymbol {
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn is_dark(&self, mx: usize, my: usize) -> bool {
        self.modules.get(my * self.width + mx).copied().unwrap_or(false)
    }

    pub(crate) fn layout(&self) -> Layout {
        let size = f64::from(self.style.size);
        let origin = f64::from(self.style.quiet_zone);
        #[allow(clippy::cast_precision_loss)] // matrix width is at most 177
        let module = (size - origin * 2.0) / self.width as f64;

        let logo = self
            .style
            .logo
            .as_ref()
            .map(|logo| Rect::centered(size, logo.size_fraction * size));
        let knockout = self.style.logo.as_ref().and_then(|directive| {
            directive.hide_background_modules.then(|| {
                Rect::centered(size, directive.size_fraction * size)
                    .expanded(f64::from(directive.knockout_margin))
            })
        });

        Layout {
            size,
            origin,
            module,
            knockout,
            logo,
        }
    }

    /// Pixel rectangle of one module cell.
    pub(crate) fn cell(&self, layout: &Layout, mx: usize, my: usize) -> Rect {
        #[allow(clippy::cast_precision_loss)] // module indices are tiny
        let (fx, fy) = (mx as f64, my as f64);
        Rect {
            x0: layout.origin + fx * layout.module,
            y0: layout.origin + fy * layout.module,
            x1: layout.origin + (fx + 1.0) * layout.module,
            y1: layout.origin + (fy + 1.0) * layout.module,
        }
    }

    /// Whether a module is suppressed by the logo knockout region.
    pub(crate) fn module_hidden(&self, layout: &Layout, mx: usize, my: usize) -> bool {
        layout
            .knockout
            .is_some_and(|region| self.cell(layout, mx, my).intersects(region))
    }
}

impl Symbol for StyledSymbol {
    fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        raster::render(self)
    }

    fn to_svg(&self) -> Result<Vec<u8>, RenderError> {
        vector::render(self)
    }
}
