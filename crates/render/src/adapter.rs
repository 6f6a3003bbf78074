//! Asynchronous export surface over a rendering engine.

use std::sync::Arc;

use qrforge_core::render_config::RenderConfig;

use crate::engine::{RenderEngine, RenderError};
use crate::style::SymbolStyle;
use crate::styled::StyledQrEngine;

enum ExportKind {
    Png,
    Svg,
}

/// Translates `{payload, RenderConfig}` into engine invocations.
///
/// Every export maps the configuration afresh and configures a new symbol -
/// there is no incremental patching and no result caching, so a stale
/// export is simply discarded by whoever raced past it. The actual drawing
/// runs on a blocking thread; failures surface as [`RenderError`] and leave
/// no state behind.
#[derive(Clone)]
pub struct Renderer {
    engine: Arc<dyn RenderEngine>,
}

impl Renderer {
    /// Adapter over an arbitrary engine (a stub in tests).
    #[must_use]
    pub fn new(engine: Arc<dyn RenderEngine>) -> Self {
        Self { engine }
    }

    /// Adapter over the production styled-QR engine.
    #[must_use]
    pub fn styled() -> Self {
        Self::new(Arc::new(StyledQrEngine::new()))
    }

    /// Export a PNG raster.
    ///
    /// # Errors
    ///
    /// Any [`RenderError`] from style mapping, configuration or encoding.
    pub async fn export_png(
        &self,
        payload: &str,
        config: &RenderConfig,
    ) -> Result<Vec<u8>, RenderError> {
        self.export(payload, config, ExportKind::Png).await
    }

    /// Export an SVG document.
    ///
    /// # Errors
    ///
    /// Any [`RenderError`] from style mapping, configuration or encoding.
    pub async fn export_svg(
        &self,
        payload: &str,
        config: &RenderConfig,
    ) -> Result<Vec<u8>, RenderError> {
        self.export(payload, config, ExportKind::Svg).await
    }

    async fn export(
        &self,
        payload: &str,
        config: &RenderConfig,
        kind: ExportKind,
    ) -> Result<Vec<u8>, RenderError> {
        let style = SymbolStyle::from_config(config)?;
        let engine = Arc::clone(&self.engine);
        let payload = payload.to_owned();

        tokio::task::spawn_blocking(move || {
            let symbol = engine.configure(&payload, &style)?;
            match kind {
                ExportKind::Png => symbol.to_png(),
                ExportKind::Svg => symbol.to_svg(),
            }
        })
        .await
        .map_err(|e| RenderError::Unavailable(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Background, Fill};
    use crate::testing::StubEngine;
    use qrforge_core::color::Rgb;

    #[tokio::test]
    async fn exports_pass_the_mapped_style_to_the_engine() {
        let stub = Arc::new(StubEngine::new());
        let renderer = Renderer::new(Arc::clone(&stub) as Arc<dyn RenderEngine>);

        let config = RenderConfig::default();
        let bytes = renderer
            .export_png("WIFI:T:WPA2;S:x;P:y;H:false;;", &config)
            .await
            .expect("stub export");
        assert_eq!(bytes, b"stub-png");

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        let (payload, style) = calls.first().expect("one configure call");
        assert_eq!(payload, "WIFI:T:WPA2;S:x;P:y;H:false;;");
        assert_eq!(style.background, Background::Transparent);
        assert_eq!(style.foreground, Fill::Flat(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[tokio::test]
    async fn every_export_reconfigures_the_symbol() {
        let stub = Arc::new(StubEngine::new());
        let renderer = Renderer::new(Arc::clone(&stub) as Arc<dyn RenderEngine>);
        let config = RenderConfig::default();

        let _ = renderer.export_png("a", &config).await.expect("first");
        let _ = renderer.export_svg("a", &config).await.expect("second");
        assert_eq!(stub.calls().len(), 2, "no caching between exports");
    }

    #[tokio::test]
    async fn engine_failure_surfaces_as_render_error() {
        let renderer = Renderer::new(Arc::new(StubEngine::failing()));
        let err = renderer
            .export_png("a", &RenderConfig::default())
            .await
            .expect_err("stub must fail");
        assert!(matches!(err, RenderError::Unavailable(_)));
    }
}
