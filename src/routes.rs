//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /`                         - Landing page (HTML)
//! - `GET /health`                   - Liveness probe
//! - `GET /most_viewed_articles`     - Ranked articles over a date range
//! - `GET /article_view_count`       - Total views for one article
//! - `GET /article_most_viewed_day`  - Peak day for one article in a month
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
