//! Core domain entities for pageview aggregation.
//!
//! Entities are plain data structures that carry no I/O.
//!
//! # Entity Types
//!
//! - [`DateKey`] - A calendar day in `YYYYMMDD` form
//! - [`PageviewRecord`] - One article's views for one day
//! - [`DayFetch`] - Tagged outcome of fetching one day from upstream
//! - [`ViewAggregate`] - Views summed per article over a range

pub mod date_key;
pub mod pageview;

pub use date_key::{DateKey, DateKeyError, DateRange, days_in_month};
pub use pageview::{DayFetch, PageviewRecord, ViewAggregate};
