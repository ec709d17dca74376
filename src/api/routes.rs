//! API route configuration.
//!
//! All query endpoints are public and read-only.

use crate::api::handlers::{
    article_most_viewed_day_handler, article_view_count_handler, health_handler,
    most_viewed_articles_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Pageview query routes.
///
/// # Endpoints
///
/// - `GET /most_viewed_articles`    - Articles ranked by views over a date range
/// - `GET /article_view_count`      - One article's total views over a date range
/// - `GET /article_most_viewed_day` - One article's peak day within a month
/// - `GET /health`                  - Liveness probe
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/most_viewed_articles", get(most_viewed_articles_handler))
        .route("/article_view_count", get(article_view_count_handler))
        .route(
            "/article_most_viewed_day",
            get(article_most_viewed_day_handler),
        )
        .route("/health", get(health_handler))
}
