//! Wire types shared by the HTTP handlers and the browser page.

use serde::{Deserialize, Serialize};

/// Prefix every accepted `image` value must carry.
pub const IMAGE_PREFIX: &str = "data:image/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionResponse {
    pub caption: String,
    pub confidence: f64,
    /// Milliseconds, artificial delay included.
    pub processing_time: u64,
}

/// Payload of `/api/ping` and `/api/demo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
