//! # Wiki Pageviews
//!
//! An HTTP service that aggregates English Wikipedia pageview statistics on
//! top of the Wikimedia REST API, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Dates, pageview records, and the upstream source trait
//! - **Application Layer** ([`application`]) - Range aggregation and per-endpoint reductions
//! - **Infrastructure Layer** ([`infrastructure`]) - Wikimedia client and in-memory fixtures
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Endpoints
//!
//! - `GET /most_viewed_articles?start_date=YYYYMMDD&end_date=YYYYMMDD`
//! - `GET /article_view_count?article_title=T&start_date=YYYYMMDD&end_date=YYYYMMDD`
//! - `GET /article_most_viewed_day?article_title=T&year=YYYY&month=MM`
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl 'http://localhost:3000/most_viewed_articles?start_date=20240101&end_date=20240102'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FetchOptions, PageviewService, PeakDay};
    pub use crate::domain::entities::{DateKey, DayFetch, PageviewRecord, ViewAggregate};
    pub use crate::domain::repositories::PageviewRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
