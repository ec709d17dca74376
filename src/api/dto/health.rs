//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstream: UpstreamInfo,
}

/// Upstream settings the service is running with.
#[derive(Debug, Serialize)]
pub struct UpstreamInfo {
    pub base_url: String,
    pub fetch_concurrency: usize,
    pub max_range_days: u64,
}
