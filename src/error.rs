// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Outcome of a failed call to the Beancounter platform.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect failure, timeout).
    #[error("upstream unreachable: {message}")]
    Transport { message: String, timeout: bool },

    /// Non-2xx HTTP status without a readable envelope.
    #[error("upstream HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the JSON shape we expected.
    #[error("upstream JSON parse error: {0}")]
    Decode(String),

    /// The platform answered, but its envelope status was not "OK".
    #[error("{status}: {message}")]
    Rejected { status: String, message: String },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return UpstreamError::Decode(err.to_string());
        }
        UpstreamError::Transport {
            timeout: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Beancounter API error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(UpstreamError::Transport { timeout: true, .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    #[serde(skip_serializing_if = "String::is_empty")]
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::NotFound(_) | AppError::BadRequest(_) => {
                tracing::info!(error = %self, "Request rejected");
                self.to_string()
            }
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Beancounter API error");
                err.to_string()
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
