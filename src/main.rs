// Demo image captioning server: uploads go in, canned captions come out.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use image_caption_demo::logging::init_logging;
use image_caption_demo::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;
    init_logging(&config.log_level);

    let addr = config.bind_addr()?;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        delay_min_ms = state.config.delay.min_ms(),
        delay_max_ms = state.config.delay.max_ms(),
        "🚀 Server running on http://{addr}"
    );
    info!("📸 Open it in your browser to start captioning");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
