//! Calendar day keys used at the API boundary.
//!
//! Clients send dates as eight digits (`YYYYMMDD`); the upstream pageviews API
//! expects them slash-delimited (`YYYY/MM/DD`). [`DateKey`] sits between the
//! two and owns day arithmetic so ranges roll over month and year boundaries.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use thiserror::Error;

/// Reasons an input string cannot become a [`DateKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("expected 8 characters, got {0}")]
    Length(usize),

    #[error("date must contain only digits")]
    NonNumeric,

    #[error("{0} is not a calendar date")]
    NotACalendarDate(String),
}

/// A single calendar day, rendered as `YYYYMMDD` at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parses an eight-digit `YYYYMMDD` string.
    ///
    /// # Errors
    ///
    /// - [`DateKeyError::Length`] unless the input is exactly 8 characters
    /// - [`DateKeyError::NonNumeric`] if any character is not an ASCII digit
    /// - [`DateKeyError::NotACalendarDate`] for values such as `20241301`
    pub fn parse(raw: &str) -> Result<Self, DateKeyError> {
        let len = raw.chars().count();
        if len != 8 {
            return Err(DateKeyError::Length(len));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateKeyError::NonNumeric);
        }

        // All ASCII digits, so byte slicing is safe and the parses cannot fail.
        let year: i32 = raw[0..4].parse().map_err(|_| DateKeyError::NonNumeric)?;
        let month: u32 = raw[4..6].parse().map_err(|_| DateKeyError::NonNumeric)?;
        let day: u32 = raw[6..8].parse().map_err(|_| DateKeyError::NonNumeric)?;

        Self::from_ymd(year, month, day).ok_or_else(|| DateKeyError::NotACalendarDate(raw.into()))
    }

    /// Builds a key from calendar components, `None` if they do not form a date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// First and last day of the given month.
    pub fn month_bounds(year: i32, month: u32) -> Option<(Self, Self)> {
        let last = days_in_month(year, month)?;
        Some((Self::from_ymd(year, month, 1)?, Self::from_ymd(year, month, last)?))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following calendar day, `None` past the end of the supported range.
    pub fn succ(&self) -> Option<Self> {
        self.0.checked_add_days(Days::new(1)).map(Self)
    }

    /// Number of days in `start..=end`, zero when `start > end`.
    pub fn days_between(start: Self, end: Self) -> u64 {
        if start > end {
            return 0;
        }
        (end.0 - start.0).num_days().unsigned_abs() + 1
    }

    /// Iterates `start..=end` one calendar day at a time.
    ///
    /// Yields nothing when `start > end`.
    pub fn range_inclusive(start: Self, end: Self) -> DateRange {
        DateRange {
            next: (start <= end).then_some(start),
            end,
        }
    }

    /// Slash-delimited form used in upstream URLs: `YYYY/MM/DD`.
    pub fn to_upstream_path(&self) -> String {
        self.0.format("%Y/%m/%d").to_string()
    }

    /// Compact eight-digit form: `YYYYMMDD`.
    pub fn to_compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

/// Inclusive iterator over consecutive calendar days.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<DateKey>,
    end: DateKey,
}

impl Iterator for DateRange {
    type Item = DateKey;

    fn next(&mut self) -> Option<DateKey> {
        let current = self.next?;
        self.next = current.succ().filter(|d| *d <= self.end);
        Some(current)
    }
}

/// Number of days in `month` of `year`, accounting for leap years.
///
/// Returns `None` when `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}
