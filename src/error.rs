use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main error type for the prediction API
#[derive(Error, Debug)]
pub enum ButcherError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Lookup errors
    #[error("{0}")]
    NotFound(String),

    // Request validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // Transport errors (one WebSocket session)
    #[error("WebSocket transport error: {0}")]
    Transport(#[from] axum::Error),

    // The session was closed before a frame could be queued
    #[error("WebSocket session {0} is closed")]
    SessionClosed(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ButcherError
pub type Result<T> = std::result::Result<T, ButcherError>;

impl ButcherError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ButcherError::NotFound(_) => StatusCode::NOT_FOUND,
            ButcherError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ButcherError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
