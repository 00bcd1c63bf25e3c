/*!
 * Error types for the transcheck application.
 *
 * This module contains custom error types for startup and for the HTTP layer,
 * using the thiserror crate for ergonomic error definitions.
 */

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error body for a placeholder request without both keys
pub const PLACEHOLDER_MISSING_FIELDS: &str =
    "Missing 'source_text' or 'translated_text' key in request body";

/// Error body for a consistency request without both keys
pub const CONSISTENCY_MISSING_FIELDS: &str = "Missing 'source_text' or 'translated_text'";

/// Errors returned to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body absent, malformed, or lacking a required key
    #[error("{0}")]
    MissingFields(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Main application error type for startup and serving
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Could not bind the listening socket
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an error
    #[error("Server error: {0}")]
    Server(String),
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
