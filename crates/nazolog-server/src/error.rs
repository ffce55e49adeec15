//! Error types for the HTTP API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Note the asymmetry inherited from the store contract: only reads and
//! creation surface a [`StoreError`] here. Update and delete report
//! `{"success": false}` with status 200 and never pass through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nazolog_store::StoreError;

/// Errors that can occur in the HTTP API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested event was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request payload failed presentation-layer validation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The data layer failed (remote collection unreachable or query
    /// error). Propagated from reads and creation; no retry.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("store error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
