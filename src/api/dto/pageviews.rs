//! DTOs for the pageview query endpoints.
//!
//! Query structs keep every parameter as `Option<String>` so missing and
//! malformed values are reported with the service's own error messages
//! rather than extractor rejections. Checks run in a fixed order: presence,
//! then length, then digits, then calendar validity.

use crate::domain::entities::{DateKey, DateKeyError};
use crate::error::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for all-digit parameters.
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Query for `GET /most_viewed_articles`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MostViewedArticlesQuery {
    #[validate(length(equal = 8, message = "Invalid format. Please use YYYYMMDD date format."))]
    #[validate(regex(
        path = "*DIGITS_REGEX",
        message = "Invalid date format. Please use YYYYMMDD format."
    ))]
    pub start_date: Option<String>,

    #[validate(length(equal = 8, message = "Invalid format. Please use YYYYMMDD date format."))]
    #[validate(regex(
        path = "*DIGITS_REGEX",
        message = "Invalid date format. Please use YYYYMMDD format."
    ))]
    pub end_date: Option<String>,
}

impl MostViewedArticlesQuery {
    /// Validates the query into an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing, malformed, or
    /// non-calendar dates.
    pub fn into_range(self) -> Result<(DateKey, DateKey), AppError> {
        let (Some(start), Some(end)) = (present(&self.start_date), present(&self.end_date)) else {
            return Err(missing(
                "start_date and end_date parameters are required",
                &["start_date", "end_date"],
            ));
        };

        self.validate()?;

        Ok((
            parse_date_key("start_date", start)?,
            parse_date_key("end_date", end)?,
        ))
    }
}

/// Query for `GET /article_view_count`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArticleViewCountQuery {
    pub article_title: Option<String>,

    #[validate(length(equal = 8, message = "Invalid format. Please use YYYYMMDD date format."))]
    #[validate(regex(
        path = "*DIGITS_REGEX",
        message = "Invalid date format. Please use YYYYMMDD format."
    ))]
    pub start_date: Option<String>,

    #[validate(length(equal = 8, message = "Invalid format. Please use YYYYMMDD date format."))]
    #[validate(regex(
        path = "*DIGITS_REGEX",
        message = "Invalid date format. Please use YYYYMMDD format."
    ))]
    pub end_date: Option<String>,
}

impl ArticleViewCountQuery {
    /// Validates the query into `(article_title, start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing parameters or bad dates.
    pub fn into_parts(self) -> Result<(String, DateKey, DateKey), AppError> {
        let (Some(title), Some(start), Some(end)) = (
            present(&self.article_title),
            present(&self.start_date),
            present(&self.end_date),
        ) else {
            return Err(missing(
                "article_title, start_date, and end_date parameters are required",
                &["article_title", "start_date", "end_date"],
            ));
        };

        self.validate()?;

        Ok((
            title.to_string(),
            parse_date_key("start_date", start)?,
            parse_date_key("end_date", end)?,
        ))
    }
}

/// Query for `GET /article_most_viewed_day`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArticleMostViewedDayQuery {
    pub article_title: Option<String>,

    #[validate(length(
        equal = 4,
        message = "Invalid format. Please use YYYY for year and MM for month format."
    ))]
    #[validate(regex(
        path = "*DIGITS_REGEX",
        message = "Invalid format. Please use YYYY for year and MM for month format."
    ))]
    pub year: Option<String>,

    #[validate(length(
        equal = 2,
        message = "Invalid format. Please use YYYY for year and MM for month format."
    ))]
    #[validate(regex(
        path = "*DIGITS_REGEX",
        message = "Invalid format. Please use YYYY for year and MM for month format."
    ))]
    pub month: Option<String>,
}

impl ArticleMostViewedDayQuery {
    /// Validates the query into `(article_title, year, month)`.
    ///
    /// Month range (`01..=12`) is checked by the service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing or malformed parameters.
    pub fn into_parts(self) -> Result<(String, i32, u32), AppError> {
        let (Some(title), Some(year), Some(month)) = (
            present(&self.article_title),
            present(&self.year),
            present(&self.month),
        ) else {
            return Err(missing(
                "article_title, year and month parameters are required",
                &["article_title", "year", "month"],
            ));
        };

        self.validate()?;

        let format_error = || {
            AppError::bad_request(
                "Invalid format. Please use YYYY for year and MM for month format.",
                json!({ "year": year, "month": month }),
            )
        };
        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;

        Ok((title.to_string(), year, month))
    }
}

/// Response for `GET /most_viewed_articles`.
///
/// Serializes each entry as a two-element array: `[title, views]`.
#[derive(Debug, Serialize)]
pub struct MostViewedArticlesResponse {
    pub articles: Vec<(String, u64)>,
}

/// Response for `GET /article_view_count`.
#[derive(Debug, Serialize)]
pub struct ArticleViewCountResponse {
    pub article_title: String,
    pub view_count: u64,
}

/// Response for `GET /article_most_viewed_day`.
#[derive(Debug, Serialize)]
pub struct ArticleMostViewedDayResponse {
    pub article_title: String,
    /// Slash-formatted date (`YYYY/MM/DD`), `null` if the article never appeared.
    pub most_viewed_day: Option<String>,
    pub views: u64,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn missing(message: &str, required: &[&str]) -> AppError {
    AppError::bad_request(message, json!({ "required": required }))
}

fn parse_date_key(field: &str, raw: &str) -> Result<DateKey, AppError> {
    DateKey::parse(raw).map_err(|e| {
        let message = match e {
            DateKeyError::Length(_) => "Invalid format. Please use YYYYMMDD date format.",
            DateKeyError::NonNumeric => "Invalid date format. Please use YYYYMMDD format.",
            DateKeyError::NotACalendarDate(_) => "Invalid date. Please use a real calendar date.",
        };
        AppError::bad_request(message, json!({ field: e.to_string() }))
    })
}
