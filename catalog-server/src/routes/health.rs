//! Health check route

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::SystemTime;

use crate::server::ServerState;

/// Health check route - public (no credential required)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    store: StoreInfo,
}

/// Coordinates of the catalog blob being served. Never the token.
#[derive(Serialize)]
pub struct StoreInfo {
    owner: String,
    repo: String,
    path: String,
}

// Server start time (lazily initialized)
static START_TIME: OnceLock<SystemTime> = OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let github = &state.config().github;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        store: StoreInfo {
            owner: github.owner.clone(),
            repo: github.repo.clone(),
            path: github.file_path.clone(),
        },
    })
}
