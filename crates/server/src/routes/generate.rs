//! Stateless one-shot generation.
//!
//! For scripted consumers that don't want a session: one request carries a
//! mode-tagged input record plus optional style overrides and gets image
//! bytes back. Advisory validation is logged, never enforced.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use qrforge_core::Collector;
use qrforge_core::render_config::RenderConfig;

use crate::error::Result;
use crate::routes::customize::ConfigPatch;
use crate::routes::sessions::ModeInput;
use crate::state::AppState;

/// Output format for a one-shot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Svg,
}

/// One-shot generation request: a mode-tagged input record, the output
/// format, and optional style overrides on top of the default config.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub input: ModeInput,
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub style: ConfigPatch,
}

/// Generate a symbol in one shot.
///
/// POST /api/generate
#[instrument(skip(state, body))]
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<impl IntoResponse> {
    let mut collector = Collector::new();
    body.input.apply(&mut collector);

    if !collector.validation().valid {
        tracing::debug!(
            hint = collector.validation().message.as_deref().unwrap_or_default(),
            "Advisory validation failed; generating anyway"
        );
    }
    if let Some(warning) = collector.warning() {
        tracing::debug!(warning, "Advisory warning; generating anyway");
    }

    let mut config = RenderConfig::default();
    body.style.apply(&mut config)?;

    let payload = collector.payload();
    let (bytes, content_type) = match body.format {
        ExportFormat::Png => (
            state.renderer().export_png(payload, &config).await?,
            "image/png",
        ),
        ExportFormat::Svg => (
            state.renderer().export_svg(payload, &config).await?,
            "image/svg+xml",
        ),
    };

    tracing::info!(mode = %collector.mode(), bytes = bytes.len(), "One-shot symbol generated");
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}
