//! Customization route handlers: render-config patches, theme catalog,
//! logo upload.

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use qrforge_core::render_config::{DotStyle, ErrorCorrection, LogoOverlay, LogoShape, RenderConfig};
use qrforge_core::theme::{ColorTheme, ThemePaint, color_themes, theme_by_name};

use crate::error::{AppError, Result};
use crate::routes::sessions::{Snapshot, snapshot, workbench_or_404};
use crate::state::AppState;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Theme choice in a config patch: a preset by name, or the "Custom"
/// template overwritten with explicit colors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ThemeSelection {
    Preset { name: String },
    Custom { custom: CustomTheme },
}

/// Explicit colors for the "Custom" theme entry.
#[derive(Debug, Deserialize)]
pub struct CustomTheme {
    pub color1: String,
    #[serde(default)]
    pub color2: Option<String>,
    #[serde(default)]
    pub angle: Option<f64>,
}

impl ThemeSelection {
    fn resolve(self) -> Result<ColorTheme> {
        match self {
            Self::Preset { name } => theme_by_name(&name)
                .ok_or_else(|| AppError::BadRequest(format!("unknown theme {name:?}"))),
            Self::Custom { custom } => {
                let paint = match custom.color2 {
                    Some(color2) => ThemePaint::Gradient {
                        color1: custom.color1,
                        color2,
                        angle: RenderConfig::normalize_angle(custom.angle.unwrap_or(135.0)),
                    },
                    None => ThemePaint::Solid {
                        color1: custom.color1,
                    },
                };
                Ok(ColorTheme {
                    name: ColorTheme::CUSTOM.to_string(),
                    paint,
                })
            }
        }
    }
}

/// Partial render-config update; absent fields are left untouched.
///
/// Numeric fields are clamped to their documented bands rather than
/// rejected. Logo placement fields apply only while a logo is present.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConfigPatch {
    pub size: Option<u32>,
    pub background_color: Option<String>,
    pub background_transparent: Option<bool>,
    pub theme: Option<ThemeSelection>,
    pub error_correction: Option<ErrorCorrection>,
    pub quiet_zone: Option<u32>,
    pub dot_style: Option<DotStyle>,
    pub logo_size_percent: Option<u8>,
    pub logo_background_shape: Option<LogoShape>,
    pub logo_white_knockout: Option<bool>,
}

impl ConfigPatch {
    /// Apply the patch as discrete field updates.
    pub(crate) fn apply(self, config: &mut RenderConfig) -> Result<()> {
        if let Some(size) = self.size {
            config.set_size(size);
        }
        if let Some(color) = self.background_color {
            config.background_color = color;
        }
        if let Some(transparent) = self.background_transparent {
            config.background_transparent = transparent;
        }
        if let Some(selection) = self.theme {
            config.theme = selection.resolve()?;
        }
        if let Some(level) = self.error_correction {
            config.error_correction = level;
        }
        if let Some(px) = self.quiet_zone {
            config.set_quiet_zone(px);
        }
        if let Some(style) = self.dot_style {
            config.dot_style = style;
        }
        if let Some(logo) = config.logo.as_mut() {
            if let Some(percent) = self.logo_size_percent {
                logo.size_percent = LogoOverlay::clamp_size(percent);
            }
            if let Some(shape) = self.logo_background_shape {
                logo.background_shape = shape;
            }
            if let Some(knockout) = self.logo_white_knockout {
                logo.white_knockout = knockout;
            }
        }
        Ok(())
    }
}

/// Apply a partial config update.
///
/// PATCH /api/sessions/{id}/config
#[instrument(skip(state, body))]
pub async fn patch_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ConfigPatch>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    body.apply(&mut guard.config)?;
    Ok(Json(snapshot(id, &guard)))
}

/// Restore the default render configuration.
///
/// POST /api/sessions/{id}/config/reset
#[instrument(skip(state))]
pub async fn reset_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    guard.config.reset();
    tracing::info!(session = %id, "Render config reset to defaults");
    Ok(Json(snapshot(id, &guard)))
}

/// Upload a PNG logo as the multipart field `file`.
///
/// Placement settings of a previously uploaded logo are preserved; only
/// the image bytes are replaced (and the old allocation released).
///
/// POST /api/sessions/{id}/logo
#[instrument(skip(state, multipart))]
pub async fn upload_logo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;

    let mut data: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            data = Some(bytes.to_vec());
        }
    }

    let data = data.ok_or_else(|| AppError::BadRequest("missing multipart field \"file\"".to_string()))?;
    if data.len() > state.config().max_logo_bytes {
        return Err(AppError::BadRequest(format!(
            "logo exceeds {} bytes",
            state.config().max_logo_bytes
        )));
    }
    if data.get(..8) != Some(&PNG_MAGIC[..]) {
        return Err(AppError::BadRequest("logo must be a PNG image".to_string()));
    }

    let mut guard = workbench.lock().await;
    let mut overlay = LogoOverlay::new(data);
    if let Some(previous) = guard.config.logo.as_ref() {
        overlay.size_percent = previous.size_percent;
        overlay.background_shape = previous.background_shape;
        overlay.white_knockout = previous.white_knockout;
    }
    guard.config.set_logo(overlay);
    tracing::info!(session = %id, "Logo uploaded");
    Ok(Json(snapshot(id, &guard)))
}

/// Remove the logo, releasing its bytes.
///
/// DELETE /api/sessions/{id}/logo
#[instrument(skip(state))]
pub async fn delete_logo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Snapshot>> {
    let workbench = workbench_or_404(&state, id).await?;
    let mut guard = workbench.lock().await;
    guard.config.clear_logo();
    Ok(Json(snapshot(id, &guard)))
}

/// The theme preset catalog.
///
/// GET /api/themes
pub async fn list_themes() -> Json<Vec<ColorTheme>> {
    Json(color_themes())
}
