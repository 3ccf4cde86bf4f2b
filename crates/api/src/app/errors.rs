use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use camp_core::DomainError;
use camp_infra::StoreError;

use crate::app::dto::FieldError;

/// Generic message used where rule details are not surfaced.
pub const VALIDATION_ERRORS: &str = "validation errors";

pub const MISSING_CAMPER_FIELDS: &str =
    "Invalid JSON data. Please provide \"name\" and \"age\" fields.";

/// Anything that can go wrong while turning a request into a write.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<sqlx::Error> for RequestError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.into())
    }
}

/// `{"error": message}`
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// `{"errors": message}`
pub fn json_errors(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "errors": message.into() }))).into_response()
}

/// `{"errors": ["validation errors"]}` with 400.
pub fn validation_errors() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": [VALIDATION_ERRORS] })),
    )
        .into_response()
}

pub fn not_found(what: &str) -> Response {
    json_error(StatusCode::NOT_FOUND, format!("{what} not found"))
}

/// Last-resort mapping for store failures on paths with no declared error shape.
pub fn store_error(err: StoreError) -> Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
