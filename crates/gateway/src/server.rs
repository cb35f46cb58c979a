use std::sync::Arc;

use {
    axum::{
        Json, Router,
        extract::DefaultBodyLimit,
        response::IntoResponse,
        routing::{get, post},
    },
    tower_http::cors::{Any, CorsLayer},
    tracing::info,
};

use courier_telegram::Outbound;

use crate::send::handle_send;

/// Maximum inbound envelope size: 25 MB (also the route-level body limit).
/// Data URLs inflate binary payloads by ~4/3, so this bounds shared media
/// at roughly 18 MB.
pub const MAX_ENVELOPE_SIZE: usize = 25 * 1024 * 1024;

// ── Shared app state ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    pub outbound: Arc<dyn Outbound>,
}

// ── Server startup ───────────────────────────────────────────────────────────

/// Build the gateway router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/send", post(handle_send))
        .layer(DefaultBodyLimit::max(MAX_ENVELOPE_SIZE))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start(bind: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("gateway listening on {addr}");
    axum::serve(listener, build_app(state)).await?;
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
