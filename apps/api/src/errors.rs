#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// All variants are terminal for the request: nothing here triggers a retry.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `sign` query parameter (or an empty one).
    #[error("Missing sign")]
    MissingSign,

    /// A `sign` value outside the 12-sign set.
    #[error("Invalid sign")]
    InvalidSign,

    /// The upstream provider call failed (network, auth, quota).
    #[error("Provider call failed: {0}")]
    Provider(String),

    /// The provider answered but its output was not parseable JSON.
    #[error("Unparseable model output: {0}")]
    MalformedOutput(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message exposed to clients. Upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingSign => "Missing sign",
            AppError::InvalidSign => "Invalid sign",
            AppError::Provider(_) => "AI failed",
            AppError::MalformedOutput(_) => "Bad JSON from model",
            AppError::Internal(_) => "Internal server error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingSign | AppError::InvalidSign => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedOutput(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Provider(msg) => tracing::error!("Provider error: {msg}"),
            AppError::MalformedOutput(msg) => tracing::error!("Malformed model output: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }

        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}
