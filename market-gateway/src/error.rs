//! Gateway error responses.
//!
//! The final stage of error translation: backend `tonic::Status` values and
//! gateway-local failures both become JSON error bodies here.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tonic::{Code, Status};
use validator::ValidationErrors;

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or rejected bearer token.
    Unauthorized,
    /// Payload failed validation; one reason per offending field.
    Validation(BTreeMap<String, String>),
    /// Malformed request outside of field validation (bad id, bad JSON).
    BadRequest(String),
    /// A backend call failed; the status code drives the HTTP status.
    Rpc(Status),
}

impl From<Status> for ApiError {
    fn from(status: Status) -> Self {
        Self::Rpc(status)
    }
}

impl ApiError {
    /// Flattens [`ValidationErrors`] into a field -> reason map. The reason
    /// is the validator's message when one is set, otherwise its code.
    pub fn from_validation(errors: ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|err| {
                    let reason = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    (field.to_string(), reason)
                })
            })
            .collect();
        Self::Validation(map)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "unauthorized" })),
            )
                .into_response(),
            Self::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": fields })),
            )
                .into_response(),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            Self::Rpc(status) => {
                let http_status = match status.code() {
                    Code::AlreadyExists => StatusCode::CONFLICT,
                    Code::NotFound => StatusCode::NOT_FOUND,
                    Code::InvalidArgument => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (
                    http_status,
                    Json(serde_json::json!({ "error": status.message() })),
                )
                    .into_response()
            }
        }
    }
}
