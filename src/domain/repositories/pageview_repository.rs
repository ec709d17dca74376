//! Repository trait for the upstream daily pageview source.

use crate::domain::entities::{DateKey, DayFetch};
use async_trait::async_trait;

/// Source of ranked per-day article views.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::WikimediaClient`] - Wikimedia REST API
/// - [`crate::infrastructure::upstream::FixturePageviewRepository`] - In-memory fixtures
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageviewRepository: Send + Sync {
    /// Fetches the ranked article list for one calendar day.
    ///
    /// Never returns an error: transport and decoding problems are reported
    /// as [`DayFetch::Failure`] so the caller decides how to surface them.
    async fn fetch_day(&self, date: DateKey) -> DayFetch;
}
