//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Liveness check
//! GET    /health/ready                  - Readiness check (renders a probe symbol)
//!
//! # Sessions (workbench per browser session)
//! POST   /api/sessions                  - Create a workbench
//! GET    /api/sessions/{id}             - Full snapshot
//! DELETE /api/sessions/{id}             - Drop the workbench
//! PUT    /api/sessions/{id}/mode        - Switch input mode (resets fields)
//! PUT    /api/sessions/{id}/input       - Replace the current mode's record
//! POST   /api/sessions/{id}/crypto/kind - Switch payment sub-type
//! POST   /api/sessions/{id}/crypto/erc20 - Toggle ERC-20 entry
//!
//! # Customization
//! PATCH  /api/sessions/{id}/config      - Partial render-config update
//! POST   /api/sessions/{id}/config/reset - Restore default config
//! POST   /api/sessions/{id}/logo        - Upload a PNG logo (multipart)
//! DELETE /api/sessions/{id}/logo        - Remove the logo
//! GET    /api/themes                    - Theme preset catalog
//!
//! # Output
//! GET    /api/sessions/{id}/payload     - Encoded payload as text/plain
//! GET    /api/sessions/{id}/export/png  - Rendered raster (attachment)
//! GET    /api/sessions/{id}/export/svg  - Rendered vector (attachment)
//! POST   /api/generate                  - Stateless one-shot generation
//! ```

pub mod customize;
pub mod export;
pub mod generate;
pub mod sessions;

use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::state::AppState;

/// Create the session workbench routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create))
        .route("/{id}", get(sessions::show).delete(sessions::destroy))
        .route("/{id}/mode", put(sessions::set_mode))
        .route("/{id}/input", put(sessions::set_input))
        .route("/{id}/crypto/kind", post(sessions::set_crypto_kind))
        .route("/{id}/crypto/erc20", post(sessions::set_erc20))
        .route("/{id}/config", patch(customize::patch_config))
        .route("/{id}/config/reset", post(customize::reset_config))
        .route(
            "/{id}/logo",
            post(customize::upload_logo).delete(customize::delete_logo),
        )
        .route("/{id}/payload", get(export::payload_text))
        .route("/{id}/export/png", get(export::png))
        .route("/{id}/export/svg", get(export::svg))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/sessions", session_routes())
        .route("/api/themes", get(customize::list_themes))
        .route("/api/generate", post(generate::generate))
}
