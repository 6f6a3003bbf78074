//! Export route handlers.
//!
//! Exports are asynchronous and uncached: each request clones the current
//! payload and configuration under the lock, releases it, and renders on a
//! blocking thread. A failure leaves the workbench untouched and surfaces
//! as a user-facing error.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use qrforge_core::render_config::RenderConfig;

use crate::error::Result;
use crate::routes::sessions::workbench_or_404;
use crate::state::AppState;

/// The encoded payload as plain text.
///
/// GET /api/sessions/{id}/payload
#[instrument(skip(state))]
pub async fn payload_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let workbench = workbench_or_404(&state, id).await?;
    let payload = workbench.lock().await.collector.payload().to_string();
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], payload))
}

async fn current_state(state: &AppState, id: Uuid) -> Result<(String, RenderConfig)> {
    let workbench = workbench_or_404(state, id).await?;
    let guard = workbench.lock().await;
    Ok((guard.collector.payload().to_string(), guard.config.clone()))
}

fn attachment(extension: &str) -> String {
    format!(
        "attachment; filename=\"qr-code-{}.{extension}\"",
        Utc::now().timestamp_millis()
    )
}

/// Rendered PNG raster.
///
/// GET /api/sessions/{id}/export/png
#[instrument(skip(state))]
pub async fn png(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<impl IntoResponse> {
    let (payload, config) = current_state(&state, id).await?;
    let bytes = state.renderer().export_png(&payload, &config).await?;
    tracing::info!(session = %id, bytes = bytes.len(), "PNG exported");
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, attachment("png")),
        ],
        bytes,
    ))
}

/// Rendered SVG document.
///
/// GET /api/sessions/{id}/export/svg
#[instrument(skip(state))]
pub async fn svg(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<impl IntoResponse> {
    let (payload, config) = current_state(&state, id).await?;
    let bytes = state.renderer().export_svg(&payload, &config).await?;
    tracing::info!(session = %id, bytes = bytes.len(), "SVG exported");
    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (header::CONTENT_DISPOSITION, attachment("svg")),
        ],
        bytes,
    ))
}
