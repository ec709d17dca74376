//! Wikimedia REST API client for daily top-article pageviews.

use crate::domain::entities::{DateKey, DayFetch, PageviewRecord};
use crate::domain::repositories::PageviewRepository;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Endpoint serving the top 1000 articles per day for English Wikipedia.
pub const DEFAULT_BASE_URL: &str =
    "https://wikimedia.org/api/rest_v1/metrics/pageviews/top/en.wikipedia/all-access";

/// Browser-like identification; the upstream rejects default client signatures.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Errors raised while talking to the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(StatusCode),

    #[error("upstream body could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct TopResponse {
    #[serde(default)]
    items: Vec<TopItem>,
}

#[derive(Debug, Deserialize)]
struct TopItem {
    #[serde(default)]
    articles: Vec<PageviewRecord>,
}

/// Upstream pageviews client backed by `reqwest`.
///
/// One GET per day against `{base_url}/YYYY/MM/DD`. Only the first element
/// of the response's `items` array is read.
#[derive(Debug, Clone)]
pub struct WikimediaClient {
    http: Client,
    base_url: Url,
}

impl WikimediaClient {
    /// Creates a client for `base_url` sending `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if `base_url` does not parse, or
    /// [`FetchError::Client`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self::with_client(http, Url::parse(base_url)?))
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Builds the URL for a single day: `{base_url}/YYYY/MM/DD`.
    pub fn day_url(&self, date: DateKey) -> Result<Url, FetchError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, date.to_upstream_path()))?)
    }

    async fn try_fetch_day(&self, date: DateKey) -> Result<DayFetch, FetchError> {
        let url = self.day_url(date)?;
        debug!(%url, "Fetching daily top articles");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        match response.status() {
            StatusCode::OK => {}
            // Upstream answers 404 for days it has no data for yet.
            StatusCode::NOT_FOUND => return Ok(DayFetch::Empty),
            status => return Err(FetchError::Status(status)),
        }

        let body: TopResponse = response.json().await.map_err(FetchError::Decode)?;

        let records = body
            .items
            .into_iter()
            .next()
            .map(|item| item.articles)
            .unwrap_or_default();

        Ok(DayFetch::from_records(records))
    }
}

#[async_trait]
impl PageviewRepository for WikimediaClient {
    async fn fetch_day(&self, date: DateKey) -> DayFetch {
        let outcome = match self.try_fetch_day(date).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(date = %date, error = %e, "Upstream fetch failed");
                DayFetch::Failure(e.to_string())
            }
        };

        let label = match &outcome {
            DayFetch::Data(_) => "data",
            DayFetch::Empty => "empty",
            DayFetch::Failure(_) => "failure",
        };
        metrics::counter!("upstream_fetch_total", "outcome" => label).increment(1);

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> WikimediaClient {
        WikimediaClient::new(base, DEFAULT_USER_AGENT, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_day_url_appends_slash_date() {
        let client = client(DEFAULT_BASE_URL);
        let url = client.day_url(DateKey::parse("20240105").unwrap()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://wikimedia.org/api/rest_v1/metrics/pageviews/top/en.wikipedia/all-access/2024/01/05"
        );
    }

    #[test]
    fn test_day_url_ignores_trailing_slash() {
        let client = client("http://localhost:8080/top/");
        let url = client.day_url(DateKey::parse("20231231").unwrap()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/top/2023/12/31");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = WikimediaClient::new("not a url", DEFAULT_USER_AGENT, Duration::from_secs(5));
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_top_response_takes_first_item() {
        let body = r#"{
            "items": [
                {
                    "project": "en.wikipedia",
                    "access": "all-access",
                    "year": "2024", "month": "01", "day": "01",
                    "articles": [
                        {"article": "Main_Page", "views": 100, "rank": 1},
                        {"article": "Cat", "views": 10, "rank": 2}
                    ]
                },
                { "articles": [ {"article": "Ignored", "views": 1, "rank": 1} ] }
            ]
        }"#;
        let parsed: TopResponse = serde_json::from_str(body).unwrap();
        let records = parsed.items.into_iter().next().unwrap().articles;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], PageviewRecord::new("Cat", 10, 2));
    }

    #[test]
    fn test_top_response_tolerates_missing_fields() {
        let parsed: TopResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());

        let parsed: TopResponse = serde_json::from_str(r#"{"items":[{}]}"#).unwrap();
        assert!(parsed.items[0].articles.is_empty());
    }
}
