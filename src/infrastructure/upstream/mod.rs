//! Upstream pageview sources.
//!
//! Provides two [`crate::domain::repositories::PageviewRepository`] implementations:
//! - [`WikimediaClient`] - Production client for the Wikimedia REST API
//! - [`FixturePageviewRepository`] - In-memory fixtures for tests

mod fixture_repository;
mod wikimedia_client;

pub use fixture_repository::FixturePageviewRepository;
pub use wikimedia_client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, FetchError, WikimediaClient};
