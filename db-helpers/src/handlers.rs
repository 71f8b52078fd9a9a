use crate::metrics::Reading;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub counters: BTreeMap<String, u64>,
    pub sources: Vec<Reading>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/metrics/:name", get(metric_source_handler))
        .with_state(state)
}

pub async fn health_handler() -> impl IntoResponse {
    // Simple readiness/health endpoint. Keep it lightweight.
    Json(json!({ "status": "ok" }))
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    let snapshot = MetricsSnapshot {
        counters: state.counters.snapshot(),
        sources: state.sources.iter().map(|s| s.read()).collect(),
    };
    debug!(
        "Serving {} counters and {} sources",
        snapshot.counters.len(),
        snapshot.sources.len()
    );
    Json(snapshot)
}

pub async fn metric_source_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.source(&name) {
        Some(source) => Json(source.read()).into_response(),
        None => state.errors.bad_request(
            format!("no metric source named '{}'", name),
            "unknown-metric-source",
            "no metric source is registered under that name",
        ),
    }
}
