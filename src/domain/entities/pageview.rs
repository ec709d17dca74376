//! Pageview records and per-request aggregates.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One article's views and rank for a single day, as reported upstream.
///
/// Sample upstream item: `{"article":"Main_Page","views":18793503,"rank":1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageviewRecord {
    pub article: String,
    pub views: u64,
    pub rank: u32,
}

impl PageviewRecord {
    /// Creates a new record.
    pub fn new(article: impl Into<String>, views: u64, rank: u32) -> Self {
        Self {
            article: article.into(),
            views,
            rank,
        }
    }
}

/// Outcome of fetching one day from the upstream source.
///
/// Keeps "the day has no data" apart from "the upstream call failed" so
/// callers can decide how to surface each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayFetch {
    Data(Vec<PageviewRecord>),
    Empty,
    Failure(String),
}

impl DayFetch {
    /// Builds an outcome from a record list, mapping an empty list to [`DayFetch::Empty`].
    pub fn from_records(records: Vec<PageviewRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Data(records)
        }
    }

    /// Collapses the outcome to a record list; empty for both `Empty` and `Failure`.
    pub fn into_records(self) -> Vec<PageviewRecord> {
        match self {
            Self::Data(records) => records,
            Self::Empty | Self::Failure(_) => Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Views summed per article title over a date range.
///
/// Built fresh for each request and dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewAggregate {
    totals: HashMap<String, u64>,
}

impl ViewAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one day's records into the running totals.
    pub fn add_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a PageviewRecord>,
    {
        for record in records {
            let total = self.totals.entry(record.article.clone()).or_insert(0);
            *total = total.saturating_add(record.views);
        }
    }

    /// Total views for `article`, zero if it never appeared.
    pub fn views_for(&self, article: &str) -> u64 {
        self.totals.get(article).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Consumes the aggregate into `(article, views)` pairs, most viewed first.
    ///
    /// Equal counts are ordered by article title so output is deterministic.
    pub fn into_ranked(self) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self.totals.into_iter().collect();
        ranked.sort_by(|(a_title, a_views), (b_title, b_views)| {
            match b_views.cmp(a_views) {
                Ordering::Equal => a_title.cmp(b_title),
                other => other,
            }
        });
        ranked
    }
}
