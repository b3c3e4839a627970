use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request format";
pub const INVALID_IMAGE_MESSAGE: &str =
    "Invalid image format. Please provide a valid base64 encoded image.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error during caption generation";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Image is too large. The request body limit is 10MB.";
pub const RETRY_MESSAGE: &str = "Please try again or contact support if the problem persists.";

/// One field-level problem with a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<&'static str>,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn invalid_type(path: &[&str], expected: &'static str, received: &'static str) -> Self {
        let message = if received == "undefined" {
            "Required".to_string()
        } else {
            format!("Expected {expected}, received {received}")
        };
        Self {
            code: "invalid_type",
            expected: Some(expected),
            received: Some(received),
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message,
        }
    }

    pub fn invalid_json(detail: impl std::fmt::Display) -> Self {
        Self::malformed("invalid_json", format!("Malformed JSON body: {detail}"))
    }

    pub fn invalid_form(detail: impl std::fmt::Display) -> Self {
        Self::malformed("invalid_form", format!("Malformed form body: {detail}"))
    }

    fn malformed(code: &'static str, message: String) -> Self {
        Self {
            code,
            expected: None,
            received: None,
            path: Vec::new(),
            message,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request format ({} issue(s))", .0.len())]
    Validation(Vec<ValidationIssue>),
    #[error("image is not a data:image/ URI")]
    Format,
    #[error("request body rejected: {0}")]
    Body(#[from] BytesRejection),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Format => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body sent for any failure inside caption generation, panics included.
pub fn internal_error_body() -> serde_json::Value {
    json!({
        "error": INTERNAL_ERROR_MESSAGE,
        "message": RETRY_MESSAGE,
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(details) => json!({
                "error": INVALID_REQUEST_MESSAGE,
                "details": details,
            }),
            ApiError::Format => json!({ "error": INVALID_IMAGE_MESSAGE }),
            ApiError::Body(_) if status == StatusCode::PAYLOAD_TOO_LARGE => {
                json!({ "error": PAYLOAD_TOO_LARGE_MESSAGE })
            }
            ApiError::Body(rejection) => json!({ "error": rejection.body_text() }),
            ApiError::Internal(err) => {
                error!("Caption generation error: {err:#}");
                internal_error_body()
            }
        };
        (status, Json(body)).into_response()
    }
}
