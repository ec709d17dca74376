//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET /` - Landing page describing the query endpoints
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
