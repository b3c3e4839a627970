use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::api::{CaptionRequest, CaptionResponse, IMAGE_PREFIX};
use crate::captioner::{extract_features, select_caption};
use crate::data_uri::DataUri;
use crate::error::{ApiError, ValidationIssue};
use crate::state::AppState;

/// `POST /api/caption`
pub async fn generate_caption(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CaptionResponse>, ApiError> {
    let body = body?;
    let request = if is_form_encoded(&headers) {
        parse_form_request(&body)?
    } else {
        parse_caption_request(&body)?
    };
    if !request.image.starts_with(IMAGE_PREFIX) {
        return Err(ApiError::Format);
    }

    if let Some(uri) = DataUri::parse(&request.image) {
        debug!(
            media_type = uri.media_type,
            approx_bytes = uri.decoded_len_estimate(),
            "caption request accepted"
        );
    }

    let started = Instant::now();
    let delay = state.config.delay.sample(&mut rand::thread_rng());
    tokio::time::sleep(delay).await;

    let features = extract_features(&request.image);
    let selection =
        select_caption(features, &mut rand::thread_rng()).context("selecting caption")?;

    let processing_time = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        confidence = selection.confidence,
        group = selection.group.unwrap_or("fallback"),
        processing_time_ms = processing_time,
        "caption generated"
    );

    Ok(Json(CaptionResponse {
        caption: selection.caption.to_string(),
        confidence: selection.confidence,
        processing_time,
    }))
}

/// Checks the body is an object with a string `image`. An empty body counts
/// as `{}`.
pub fn parse_caption_request(body: &[u8]) -> Result<CaptionRequest, ApiError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body)
            .map_err(|err| ApiError::Validation(vec![ValidationIssue::invalid_json(err)]))?
    };

    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ApiError::Validation(vec![ValidationIssue::invalid_type(
                &[],
                "object",
                json_type_name(&other),
            )]))
        }
    };

    match fields.remove("image") {
        Some(Value::String(image)) => Ok(CaptionRequest { image }),
        Some(other) => Err(ApiError::Validation(vec![ValidationIssue::invalid_type(
            &["image"],
            "string",
            json_type_name(&other),
        )])),
        None => Err(ApiError::Validation(vec![ValidationIssue::invalid_type(
            &["image"],
            "string",
            "undefined",
        )])),
    }
}

/// Form posts (`image=data%3Aimage...`) carry the same single field.
pub fn parse_form_request(body: &[u8]) -> Result<CaptionRequest, ApiError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|err| ApiError::Validation(vec![ValidationIssue::invalid_form(err)]))?;

    pairs
        .into_iter()
        .find(|(key, _)| key == "image")
        .map(|(_, image)| CaptionRequest { image })
        .ok_or_else(|| {
            ApiError::Validation(vec![ValidationIssue::invalid_type(
                &["image"],
                "string",
                "undefined",
            )])
        })
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
