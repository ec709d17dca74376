//! Business logic services for the application layer.

pub mod pageview_service;

pub use pageview_service::{FetchOptions, PageviewService, PeakDay};
