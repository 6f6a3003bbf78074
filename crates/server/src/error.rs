//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use qrforge_render::RenderError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rendering or export failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; client mistakes are not
        // error events.
        if matches!(
            self,
            Self::Internal(_)
                | Self::Render(
                    RenderError::Raster(_) | RenderError::Vector(_) | RenderError::Unavailable(_)
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Render(err) => match err {
                // The payload or style the client sent cannot be rendered.
                RenderError::Encoding(_) | RenderError::Style(_) | RenderError::Logo(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                // The engine itself failed.
                RenderError::Raster(_) | RenderError::Vector(_) | RenderError::Unavailable(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Render(err) => match err {
                RenderError::Encoding(_) | RenderError::Style(_) | RenderError::Logo(_) => {
                    err.to_string()
                }
                _ => "Rendering failed, please try again".to_string(),
            },
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("session 123".to_string());
        assert_eq!(err.to_string(), "Not found: session 123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_render_errors_split_client_from_engine() {
        assert_eq!(
            status_of(AppError::Render(RenderError::Encoding("too long".to_string()))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::Render(RenderError::Logo("not png".to_string()))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::Render(RenderError::Unavailable("down".to_string()))),
            StatusCode::BAD_GATEWAY
        );
    }
}
