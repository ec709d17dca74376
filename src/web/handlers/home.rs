//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/home.html` with the endpoint list and example links.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub version: &'static str,
    pub max_range_days: u64,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        version: env!("CARGO_PKG_VERSION"),
        max_range_days: state.pageview_service.options().max_range_days,
    }
}
