//! Capability interface for the rendering collaborator.
//!
//! The adapter never inspects a symbol's internal matrix; it supplies a
//! payload plus a [`SymbolStyle`](crate::style::SymbolStyle) and consumes
//! export results. Keeping the boundary a trait lets the adapter and the
//! server be exercised against a stub (see [`crate::testing`]).

use crate::style::SymbolStyle;

/// Errors from configuration or export.
///
/// These are the only failures the rendering path produces; they are
/// caught at the server/CLI boundary and turned into user-facing messages.
/// Builders and validators upstream never fail.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The payload could not be encoded into a symbol.
    #[error("payload cannot be encoded: {0}")]
    Encoding(String),
    /// The style carried an unusable value (e.g. an unparsable color).
    #[error("invalid style: {0}")]
    Style(String),
    /// The logo bytes are not a decodable PNG.
    #[error("logo image is not a decodable PNG: {0}")]
    Logo(String),
    /// Raster output failed.
    #[error("raster export failed: {0}")]
    Raster(String),
    /// Vector output failed.
    #[error("vector export failed: {0}")]
    Vector(String),
    /// The engine could not complete the request at all.
    #[error("rendering engine unavailable: {0}")]
    Unavailable(String),
}

/// A configured symbol ready for export.
pub trait Symbol: Send + Sync {
    /// Encode the symbol as a PNG raster.
    ///
    /// # Errors
    ///
    /// [`RenderError::Raster`] or [`RenderError::Logo`] when encoding or
    /// the logo overlay fails.
    fn to_png(&self) -> Result<Vec<u8>, RenderError>;

    /// Encode the symbol as an SVG document.
    ///
    /// # Errors
    ///
    /// [`RenderError::Vector`] when document generation fails.
    fn to_svg(&self) -> Result<Vec<u8>, RenderError>;
}

/// The rendering collaborator.
pub trait RenderEngine: Send + Sync {
    /// Build a symbol for `payload` under `style`.
    ///
    /// Called afresh for every configuration change - there is no
    /// incremental patching of a previously configured symbol.
    ///
    /// # Errors
    ///
    /// [`RenderError::Encoding`] when the payload does not fit a symbol,
    /// [`RenderError::Style`] for unusable styling.
    fn configure(&self, payload: &str, style: &SymbolStyle)
    -> Result<Box<dyn Symbol>, RenderError>;
}
