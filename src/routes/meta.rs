use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::MessageResponse;
use crate::state::AppState;

pub const DEMO_MESSAGE: &str = "Hello from the caption server";

/// `GET /api/ping`
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.config.ping_message.clone(),
    })
}

/// `GET /api/demo`
pub async fn demo() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: DEMO_MESSAGE.to_string(),
    })
}
