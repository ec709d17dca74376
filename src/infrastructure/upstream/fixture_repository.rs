//! In-memory pageview source for tests and offline runs.

use crate::domain::entities::{DateKey, DayFetch, PageviewRecord};
use crate::domain::repositories::PageviewRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// A pageview source that answers from a fixed table of days.
///
/// Days without an entry are reported as [`DayFetch::Empty`]. Every call is
/// counted so tests can assert how many days were fetched.
///
/// # Use Cases
///
/// - Handler and service tests that need deterministic upstream data
/// - Local development without network access
#[derive(Debug, Default)]
pub struct FixturePageviewRepository {
    days: HashMap<DateKey, DayFetch>,
    calls: AtomicUsize,
}

impl FixturePageviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the records returned for `date`.
    pub fn with_day(mut self, date: DateKey, records: Vec<PageviewRecord>) -> Self {
        self.days.insert(date, DayFetch::from_records(records));
        self
    }

    /// Makes `date` report an upstream failure.
    pub fn with_failure(mut self, date: DateKey, reason: impl Into<String>) -> Self {
        self.days.insert(date, DayFetch::Failure(reason.into()));
        self
    }

    /// Number of `fetch_day` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageviewRepository for FixturePageviewRepository {
    async fn fetch_day(&self, date: DateKey) -> DayFetch {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!(date = %date, "Serving fixture day");
        self.days.get(&date).cloned().unwrap_or(DayFetch::Empty)
    }
}
