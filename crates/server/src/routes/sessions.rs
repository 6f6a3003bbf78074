//! Session workbench route handlers.
//!
//! Each mutation locks the workbench, applies the change through the
//! collector (which recomputes the payload synchronously), and responds
//! with a full snapshot so the frontend never has to diff state.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use qrforge_core::collector::Validation;
use qrforge_core::render_config::{DotStyle, ErrorCorrection, LogoShape, RenderConfig};
use qrforge_core::theme::ColorTheme;
use qrforge_core::types::{
    ContactCard, CryptoKind, InputMode, MeCardContact, PaymentDraft, WifiNetwork,
};

use crate::error::{AppError, Result};
use crate::session::{SharedWorkbench, Workbench};
use crate::state::AppState;

/// A mode-tagged input record, replacing the workbench's current fields.
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ModeInput {
    Text {
        #[serde(default)]
        text: String,
    },
    Vcard {
        #[serde(flatten)]
        contact: ContactCard,
    },
    Mecard {
        #[serde(flatten)]
        contact: MeCardContact,
    },
    Wifi {
        #[serde(flatten)]
        network: WifiNetwork,
    },
    Crypto {
        #[serde(flatten)]
        draft: PaymentDraft,
    },
}

impl ModeInput {
    /// Apply the record to a collector (switching its mode if needed).
    pub fn apply(self, collector: &mut qrforge_core::Collector) {
        match self {
            Self::Text { text } => collector.set_text(text),
            Self::Vcard { contact } => collector.set_contact(contact),
            Self::Mecard { contact } => collector.set_mecard(contact),
            Self::Wifi { network } => collector.set_wifi(network),
            Self::Crypto { draft } => collector.set_payment(draft),
        }
    }
}

/// Summary of an uploaded logo - the bytes themselves never leave the
/// server through a snapshot.
#[derive(Debug, Serialize)]
pub struct LogoView {
    pub bytes: usize,
    pub size_percent: u8,
    pub background_shape: LogoShape,
    pub white_knockout: bool,
}

/// Serializable view of a render configuration.
#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub size: u32,
    pub background_color: String,
    pub background_transparent: bool,
    pub theme: ColorTheme,
    pub error_correction: ErrorCorrection,
    pub quiet_zone: u32,
    pub dot_style: DotStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoView>,
}

impl ConfigView {
    fn from_config(config: &RenderConfig) -> Self {
        Self {
            size: config.size,
            background_color: config.background_color.clone(),
            background_transparent: config.background_transparent,
            theme: config.theme.clone(),
            error_correction: config.error_correction,
            quiet_zone: config.quiet_zone,
            dot_style: config.dot_style,
            logo: config.logo.as_ref().map(|logo| LogoView {
                bytes: logo.data.len(),
                size_percent: logo.size_percent,
                background_shape: logo.background_shape,
                white_knockout: logo.white_knockout,
            }),
        }
    }
}

/// Full workbench snapshot returned by every session endpoint.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub id: Uuid,
    pub mode: InputMode,
    pub payload: String,
    pub validation: Validation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub config: ConfigView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    pub low_contrast: bool,
    pub created_at: DateTime<Utc>,
}

pub(crate) fn snapshot(id: Uuid, workbench: &Workbench) -> Snapshot {
    Snapshot {
        id,
        mode: workbench.collector.mode(),
        payload: workbench.collector.payload().to_string(),
        validation: workbench.collector.validation().clone(),
        warning: workbench.collector.warning().map(ToString::to_string),
        config: ConfigView::from_config(&workbench.config),
        contrast: workbench.config.contrast(),
        low_contrast: workbench.config.is_low_contrast(),
        created_at: workbench.created_at,
    }
}

/// Look up a workbench or respond 404.
pub(crate) async fn workbench_or_404(state: &AppState, id: Uuid) -> Result<SharedWorkbench> {
    state
        .sessions()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))
}

/// Create a fresh workbench.
///
/// POST /api/sessions
#[instrument(skip(state))]
pub async fn create(State(state): State<AppState>) -> (StatusCode, Json<Snapshot>) {
    let (id, workbench) = state.sessions().create().await;
    let guard = workbench.lock().await;
    tracing::info!(session = %id, "Workbench created");
    (StatusCode::CREATED, Json(snapshot(id, &guard)))
}

/// Full snapshot of a workbench.
///
/// GET /api/sessions/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let guard = workbench.lock().await;
    Ok(Json(snapshot(id, &guard)))
}

/// Drop a workbench.
///
/// DELETE /api/sessions/{id}
#[instrument(skip(state))]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state.sessions().remove(id).await;
    StatusCode::NO_CONTENT
}

/// Body for a mode switch.
#[derive(Debug, Deserialize)]
pub struct ModeChange {
    pub mode: InputMode,
}

/// Switch input mode, resetting mode-local fields to defaults.
///
/// PUT /api/sessions/{id}/mode
#[instrument(skip(state))]
pub async fn set_mode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ModeChange>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    guard.collector.set_mode(body.mode);
    Ok(Json(snapshot(id, &guard)))
}

/// Replace the current mode's record and recompute the payload.
///
/// PUT /api/sessions/{id}/input
#[instrument(skip(state, body))]
pub async fn set_input(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ModeInput>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    body.apply(&mut guard.collector);
    Ok(Json(snapshot(id, &guard)))
}

/// Body for a payment sub-type switch.
#[derive(Debug, Deserialize)]
pub struct KindChange {
    pub kind: CryptoKind,
}

/// Switch the payment sub-type (clears the address, leaves ERC-20 entry).
///
/// POST /api/sessions/{id}/crypto/kind
#[instrument(skip(state))]
pub async fn set_crypto_kind(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<KindChange>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    guard.collector.set_payment_kind(body.kind);
    Ok(Json(snapshot(id, &guard)))
}

/// Body for the ERC-20 toggle.
#[derive(Debug, Deserialize)]
pub struct Erc20Toggle {
    pub enabled: bool,
}

/// Toggle ERC-20 entry; enabling clears the token addresses.
///
/// POST /api/sessions/{id}/crypto/erc20
#[instrument(skip(state))]
pub async fn set_erc20(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Erc20Toggle>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    guard.collector.set_erc20_enabled(body.enabled);
    Ok(Json(snapshot(id, &guard)))
}
