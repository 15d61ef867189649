use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{FieldError, ValidationErrors};
use serde_json::Value;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Error response body: `{"error": <title>, "detail": <message or field list>}`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    error: &'static str,
    detail: Value,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail: detail.map(Value::String).unwrap_or(Value::Null) }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        let detail = serde_json::to_value(&errors).unwrap_or(Value::Null);
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, error: "Validation Error", detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::DuplicateKey(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)),
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
        }
    }
}

impl From<ValidationErrors> for JsonApiError {
    fn from(errors: ValidationErrors) -> Self {
        debug!(count = errors.len(), "request body failed validation");
        JsonApiError::validation(errors)
    }
}

/// Unreadable bodies (bad JSON, wrong content type) report as a single body-level field error.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(status = %rejection.status(), "rejected request body");
        let err = FieldError::new(&["body"], rejection.body_text(), "json_invalid");
        JsonApiError::validation(ValidationErrors::single(err))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
