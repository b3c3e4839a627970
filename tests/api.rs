use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose;
use base64::Engine as _;
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tokio::time::Instant;
use tower::ServiceExt;

use image_caption_demo::api::CaptionResponse;
use image_caption_demo::captioner::patterns::FALLBACK_CAPTIONS;
use image_caption_demo::error::PAYLOAD_TOO_LARGE_MESSAGE;
use image_caption_demo::routes::meta::DEMO_MESSAGE;
use image_caption_demo::routes::MAX_BODY_BYTES;
use image_caption_demo::{build_router, AppState, Config};

const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn app() -> Router {
    app_with(Config::default())
}

fn app_with(config: Config) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

fn png_data_uri() -> String {
    format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(PNG_HEADER)
    )
}

async fn post_caption(router: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    post_caption_as(router, "application/json", body).await
}

async fn post_caption_as(
    router: Router,
    content_type: &str,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/caption")
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test(start_paused = true)]
async fn valid_image_gets_fallback_caption() {
    let body = json!({ "image": "data:image/png;base64,AAAA" }).to_string();
    let (status, json) = post_caption(app(), body).await;

    assert_eq!(status, StatusCode::OK);
    let response: CaptionResponse = serde_json::from_value(json.clone()).unwrap();
    assert!(FALLBACK_CAPTIONS.contains(&response.caption.as_str()));
    assert_eq!(response.confidence, 0.85);
    assert!(response.processing_time >= 800);
    assert!(json["processingTime"].is_u64());
}

#[tokio::test(start_paused = true)]
async fn repeated_requests_stay_in_bounds() {
    let body = json!({ "image": png_data_uri() }).to_string();
    for _ in 0..10 {
        let (status, json) = post_caption(app(), body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        let response: CaptionResponse = serde_json::from_value(json).unwrap();
        assert!((0.85..=0.98).contains(&response.confidence));
        assert!((800..2100).contains(&response.processing_time));
        assert!(FALLBACK_CAPTIONS.contains(&response.caption.as_str()));
    }
}

#[tokio::test(start_paused = true)]
async fn delay_does_not_serialize_requests() {
    let router = app();
    let body = json!({ "image": png_data_uri() }).to_string();
    let started = Instant::now();

    let mut requests = JoinSet::new();
    for _ in 0..16 {
        let router = router.clone();
        let body = body.clone();
        requests.spawn(async move { post_caption(router, body).await.0 });
    }
    while let Some(status) = requests.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    assert!(started.elapsed().as_millis() < 2000 + 100);
}

#[tokio::test]
async fn missing_image_is_validation_error() {
    let (status, json) = post_caption(app(), json!({ "picture": "x" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request format");
    assert_eq!(json["details"][0]["path"], json!(["image"]));
    assert_eq!(json["details"][0]["message"], "Required");
}

#[tokio::test]
async fn non_string_image_is_validation_error() {
    for image in [json!(12), json!(true), json!(["data:image/png"]), json!({})] {
        let (status, json) = post_caption(app(), json!({ "image": image }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid request format");
        assert_eq!(json["details"][0]["code"], "invalid_type");
    }
}

#[tokio::test]
async fn empty_and_malformed_bodies_are_validation_errors() {
    let (status, json) = post_caption(app(), "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request format");

    let (status, json) = post_caption(app(), "{\"image\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["code"], "invalid_json");
}

#[tokio::test]
async fn non_image_uri_is_format_error() {
    for image in ["", "AAAA", "data:text/plain;base64,AAAA", "DATA:IMAGE/png;base64,AAAA"] {
        let (status, json) = post_caption(app(), json!({ "image": image }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Invalid image format. Please provide a valid base64 encoded image."
        );
        assert!(json.get("details").is_none());
    }
}

#[tokio::test(start_paused = true)]
async fn body_just_under_limit_is_captioned() {
    let padding = "A".repeat(MAX_BODY_BYTES - 100_000);
    let body = json!({ "image": format!("data:image/png;base64,{padding}") }).to_string();
    assert!(body.len() < MAX_BODY_BYTES);
    assert!(body.len() > 9_900_000);

    let (status, json) = post_caption(app(), body).await;
    assert_eq!(status, StatusCode::OK);
    let response: CaptionResponse = serde_json::from_value(json).unwrap();
    assert!(FALLBACK_CAPTIONS.contains(&response.caption.as_str()));
    assert_eq!(response.confidence, 0.85);
}

#[tokio::test]
async fn oversized_body_gets_json_error() {
    let padding = "A".repeat(MAX_BODY_BYTES);
    let body = json!({ "image": format!("data:image/png;base64,{padding}") }).to_string();
    let (status, json) = post_caption(app(), body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"], PAYLOAD_TOO_LARGE_MESSAGE);
}

#[tokio::test(start_paused = true)]
async fn form_encoded_image_is_captioned() {
    let form = "image=data%3Aimage%2Fpng%3Bbase64%2CAAAA";
    let (status, json) = post_caption_as(app(), "application/x-www-form-urlencoded", form).await;
    assert_eq!(status, StatusCode::OK);
    let response: CaptionResponse = serde_json::from_value(json).unwrap();
    assert!(FALLBACK_CAPTIONS.contains(&response.caption.as_str()));
}

#[tokio::test]
async fn form_encoded_body_follows_same_validation() {
    let form_type = "application/x-www-form-urlencoded";

    let (status, json) = post_caption_as(app(), form_type, "picture=cat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["path"], json!(["image"]));

    let (status, json) = post_caption_as(app(), form_type, "image=https%3A%2F%2Fcat.png").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Invalid image format. Please provide a valid base64 encoded image."
    );
}

#[tokio::test]
async fn ping_uses_configured_message() {
    let config = Config {
        ping_message: "hello there".to_string(),
        ..Config::default()
    };
    let (status, json) = get_json(app_with(config), "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "hello there" }));
}

#[tokio::test]
async fn demo_is_static() {
    let (status, json) = get_json(app(), "/api/demo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], DEMO_MESSAGE);
}

#[tokio::test]
async fn index_serves_upload_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("/api/caption"));
    assert!(page.contains("readAsDataURL"));
    assert!(page.contains("response.text()"));
}
