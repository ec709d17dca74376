//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, UpstreamInfo};
use crate::state::AppState;

/// Returns service liveness and the upstream settings in use.
///
/// # Endpoint
///
/// `GET /health`
///
/// Does not call upstream; a reachable service always answers 200.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let options = state.pageview_service.options();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: UpstreamInfo {
            base_url: state.upstream_base_url.clone(),
            fetch_concurrency: options.concurrency,
            max_range_days: options.max_range_days,
        },
    })
}
