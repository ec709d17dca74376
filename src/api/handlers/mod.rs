//! HTTP request handlers for API endpoints.
//!
//! One module per endpoint.

pub mod article_most_viewed_day;
pub mod article_view_count;
pub mod health;
pub mod most_viewed_articles;

pub use article_most_viewed_day::article_most_viewed_day_handler;
pub use article_view_count::article_view_count_handler;
pub use health::health_handler;
pub use most_viewed_articles::most_viewed_articles_handler;
