//! Pageview aggregation service.

use std::sync::Arc;

use crate::domain::entities::{DateKey, DayFetch, PageviewRecord, ViewAggregate};
use crate::domain::repositories::PageviewRepository;
use crate::error::AppError;
use futures::stream::{self, StreamExt};
use serde_json::{Value, json};
use tracing::{debug, info};

/// Tuning knobs for per-request upstream fan-out.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Maximum number of day fetches in flight for one request.
    pub concurrency: usize,
    /// Longest accepted range, in days, inclusive of both ends.
    pub max_range_days: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            max_range_days: 366,
        }
    }
}

/// Peak day for an article within one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakDay {
    /// `None` when the article never appeared with views that month.
    pub date: Option<DateKey>,
    pub views: u64,
}

/// Service answering pageview queries over day ranges.
///
/// Every query walks an inclusive range of calendar days, fetches each day
/// from the [`PageviewRepository`], and reduces the records. Nothing is kept
/// between calls.
pub struct PageviewService<R: PageviewRepository + ?Sized = dyn PageviewRepository> {
    repository: Arc<R>,
    options: FetchOptions,
}

impl<R: PageviewRepository + ?Sized> PageviewService<R> {
    /// Creates a new pageview service.
    pub fn new(repository: Arc<R>, options: FetchOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    pub fn options(&self) -> FetchOptions {
        self.options
    }

    /// Fetches a single day's ranked article list.
    ///
    /// Failures collapse to an empty list; use [`Self::aggregate`] when they
    /// must be told apart.
    pub async fn articles_for_date(&self, date: DateKey) -> Vec<PageviewRecord> {
        self.repository.fetch_day(date).await.into_records()
    }

    /// Sums views per article over `start..=end`.
    ///
    /// Days are fetched with up to [`FetchOptions::concurrency`] requests in
    /// flight. Days without data contribute nothing. A reversed range yields an
    /// empty aggregate without touching upstream.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the range exceeds
    /// [`FetchOptions::max_range_days`].
    /// Returns [`AppError::Upstream`] if any day fails to fetch.
    pub async fn aggregate(&self, start: DateKey, end: DateKey) -> Result<ViewAggregate, AppError> {
        self.check_range(start, end)?;

        let fetched = self.fetch_range(start, end).await;
        let mut aggregate = ViewAggregate::new();
        let mut failed_days = Vec::new();

        for (date, outcome) in fetched {
            match outcome {
                DayFetch::Data(records) => aggregate.add_records(&records),
                DayFetch::Empty => debug!(date = %date, "No pageview data for day"),
                DayFetch::Failure(reason) => failed_days.push(failed_day(date, reason)),
            }
        }

        if !failed_days.is_empty() {
            return Err(upstream_error(failed_days));
        }

        info!(
            start = %start,
            end = %end,
            articles = aggregate.len(),
            "Aggregated pageviews"
        );

        Ok(aggregate)
    }

    /// Articles over `start..=end` ordered by total views, most viewed first.
    ///
    /// Equal totals are ordered by title.
    ///
    /// # Errors
    ///
    /// See [`Self::aggregate`].
    pub async fn most_viewed_articles(
        &self,
        start: DateKey,
        end: DateKey,
    ) -> Result<Vec<(String, u64)>, AppError> {
        Ok(self.aggregate(start, end).await?.into_ranked())
    }

    /// Total views of `article_title` over `start..=end`, zero if never seen.
    ///
    /// # Errors
    ///
    /// See [`Self::aggregate`].
    pub async fn article_view_count(
        &self,
        article_title: &str,
        start: DateKey,
        end: DateKey,
    ) -> Result<u64, AppError> {
        Ok(self.aggregate(start, end).await?.views_for(article_title))
    }

    /// Finds the day of `month` in `year` when `article_title` had the most views.
    ///
    /// Scans the whole month. Ties go to the earliest day. Days without data
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `month` is not in `1..=12`.
    /// Returns [`AppError::Upstream`] if any day fails to fetch.
    pub async fn article_most_viewed_day(
        &self,
        article_title: &str,
        year: i32,
        month: u32,
    ) -> Result<PeakDay, AppError> {
        let (first, last) = DateKey::month_bounds(year, month).ok_or_else(|| {
            AppError::bad_request(
                "Invalid month. Please use a value between 01 and 12.",
                json!({ "year": year, "month": month }),
            )
        })?;

        let fetched = self.fetch_range(first, last).await;
        let mut peak = PeakDay {
            date: None,
            views: 0,
        };
        let mut failed_days = Vec::new();

        for (date, outcome) in fetched {
            let records = match outcome {
                DayFetch::Data(records) => records,
                DayFetch::Empty => continue,
                DayFetch::Failure(reason) => {
                    failed_days.push(failed_day(date, reason));
                    continue;
                }
            };

            for record in records.iter().filter(|r| r.article == article_title) {
                if record.views > peak.views {
                    peak = PeakDay {
                        date: Some(date),
                        views: record.views,
                    };
                }
            }
        }

        if !failed_days.is_empty() {
            return Err(upstream_error(failed_days));
        }

        Ok(peak)
    }

    fn check_range(&self, start: DateKey, end: DateKey) -> Result<(), AppError> {
        let days = DateKey::days_between(start, end);
        if days > self.options.max_range_days {
            return Err(AppError::bad_request(
                format!(
                    "Date range too long. At most {} days may be requested.",
                    self.options.max_range_days
                ),
                json!({ "requested_days": days, "max_days": self.options.max_range_days }),
            ));
        }
        Ok(())
    }

    /// Fetches every day in `start..=end`, results in calendar order.
    async fn fetch_range(&self, start: DateKey, end: DateKey) -> Vec<(DateKey, DayFetch)> {
        let repository = &self.repository;

        stream::iter(DateKey::range_inclusive(start, end))
            .map(move |date| async move { (date, repository.fetch_day(date).await) })
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await
    }
}

fn failed_day(date: DateKey, reason: String) -> Value {
    json!({ "date": date.to_compact(), "reason": reason })
}

fn upstream_error(failed_days: Vec<Value>) -> AppError {
    AppError::upstream(
        "Upstream pageviews API failed",
        json!({ "failed_days": failed_days }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPageviewRepository;
    use std::collections::HashMap;

    fn key(raw: &str) -> DateKey {
        DateKey::parse(raw).unwrap()
    }

    fn cat_dog_fixture() -> HashMap<DateKey, Vec<PageviewRecord>> {
        HashMap::from([
            (key("20240101"), vec![PageviewRecord::new("Cat", 10, 1)]),
            (
                key("20240102"),
                vec![
                    PageviewRecord::new("Cat", 5, 1),
                    PageviewRecord::new("Dog", 20, 2),
                ],
            ),
        ])
    }

    fn mock_from(days: HashMap<DateKey, Vec<PageviewRecord>>) -> MockPageviewRepository {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo.expect_fetch_day().returning(move |date| {
            DayFetch::from_records(days.get(&date).cloned().unwrap_or_default())
        });
        mock_repo
    }

    fn service(mock_repo: MockPageviewRepository) -> PageviewService<MockPageviewRepository> {
        PageviewService::new(Arc::new(mock_repo), FetchOptions::default())
    }

    #[tokio::test]
    async fn test_aggregate_sums_views_per_article() {
        let service = service(mock_from(cat_dog_fixture()));

        let aggregate = service
            .aggregate(key("20240101"), key("20240102"))
            .await
            .unwrap();

        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate.views_for("Cat"), 15);
        assert_eq!(aggregate.views_for("Dog"), 20);
    }

    #[tokio::test]
    async fn test_aggregate_single_day_matches_that_day() {
        let service = service(mock_from(cat_dog_fixture()));

        let aggregate = service
            .aggregate(key("20240102"), key("20240102"))
            .await
            .unwrap();

        assert_eq!(aggregate.views_for("Cat"), 5);
        assert_eq!(aggregate.views_for("Dog"), 20);
    }

    #[tokio::test]
    async fn test_aggregate_walks_across_month_boundary() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo
            .expect_fetch_day()
            .withf(|date| {
                ["20240130", "20240131", "20240201", "20240202"].contains(&date.to_compact().as_str())
            })
            .times(4)
            .returning(|_| DayFetch::from_records(vec![PageviewRecord::new("Cat", 1, 1)]));

        let service = service(mock_repo);
        let aggregate = service
            .aggregate(key("20240130"), key("20240202"))
            .await
            .unwrap();

        assert_eq!(aggregate.views_for("Cat"), 4);
    }

    #[tokio::test]
    async fn test_aggregate_reversed_range_is_empty_without_fetching() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo.expect_fetch_day().never();

        let service = service(mock_repo);
        let aggregate = service
            .aggregate(key("20240102"), key("20240101"))
            .await
            .unwrap();

        assert!(aggregate.is_empty());
    }

    #[tokio::test]
    async fn test_aggregate_rejects_oversized_range() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo.expect_fetch_day().never();

        let service = PageviewService::new(
            Arc::new(mock_repo),
            FetchOptions {
                concurrency: 4,
                max_range_days: 7,
            },
        );

        let result = service.aggregate(key("20240101"), key("20240108")).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_aggregate_surfaces_upstream_failure() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo.expect_fetch_day().returning(|date| {
            if date.day() == 2 {
                DayFetch::Failure("upstream returned HTTP 503".to_string())
            } else {
                DayFetch::from_records(vec![PageviewRecord::new("Cat", 1, 1)])
            }
        });

        let service = service(mock_repo);
        let result = service.aggregate(key("20240101"), key("20240103")).await;

        match result {
            Err(AppError::Upstream { details, .. }) => {
                assert_eq!(details["failed_days"][0]["date"], "20240102");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_most_viewed_articles_sorted_descending() {
        let service = service(mock_from(cat_dog_fixture()));

        let ranked = service
            .most_viewed_articles(key("20240101"), key("20240102"))
            .await
            .unwrap();

        assert_eq!(
            ranked,
            vec![("Dog".to_string(), 20), ("Cat".to_string(), 15)]
        );
    }

    #[tokio::test]
    async fn test_article_view_count_known_and_unknown() {
        let service = service(mock_from(cat_dog_fixture()));

        let dog = service
            .article_view_count("Dog", key("20240101"), key("20240102"))
            .await
            .unwrap();
        assert_eq!(dog, 20);

        let missing = service
            .article_view_count("Platypus", key("20240101"), key("20240102"))
            .await
            .unwrap();
        assert_eq!(missing, 0);
    }

    #[tokio::test]
    async fn test_repeated_queries_are_identical() {
        let service = service(mock_from(cat_dog_fixture()));

        let first = service
            .most_viewed_articles(key("20240101"), key("20240102"))
            .await
            .unwrap();
        let second = service
            .most_viewed_articles(key("20240101"), key("20240102"))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_article_most_viewed_day_picks_peak() {
        let days = HashMap::from([
            (key("20240301"), vec![PageviewRecord::new("Cat", 10, 3)]),
            (key("20240309"), vec![PageviewRecord::new("Cat", 50, 1)]),
            (
                key("20240315"),
                vec![
                    PageviewRecord::new("Dog", 99, 1),
                    PageviewRecord::new("Cat", 20, 2),
                ],
            ),
        ]);
        let service = service(mock_from(days));

        let peak = service.article_most_viewed_day("Cat", 2024, 3).await.unwrap();

        assert_eq!(peak.date, Some(key("20240309")));
        assert_eq!(peak.views, 50);
    }

    #[tokio::test]
    async fn test_article_most_viewed_day_ties_go_to_earliest_day() {
        let days = HashMap::from([
            (key("20240220"), vec![PageviewRecord::new("Cat", 40, 1)]),
            (key("20240205"), vec![PageviewRecord::new("Cat", 40, 1)]),
        ]);
        let service = service(mock_from(days));

        let peak = service.article_most_viewed_day("Cat", 2024, 2).await.unwrap();

        assert_eq!(peak.date, Some(key("20240205")));
    }

    #[tokio::test]
    async fn test_article_most_viewed_day_scans_whole_month() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo
            .expect_fetch_day()
            .withf(|date| date.year() == 2024 && date.month() == 2)
            .times(29)
            .returning(|_| DayFetch::Empty);

        let service = service(mock_repo);
        let peak = service.article_most_viewed_day("Cat", 2024, 2).await.unwrap();

        assert_eq!(peak, PeakDay { date: None, views: 0 });
    }

    #[tokio::test]
    async fn test_article_most_viewed_day_rejects_invalid_month() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo.expect_fetch_day().never();

        let service = service(mock_repo);
        let result = service.article_most_viewed_day("Cat", 2024, 13).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_article_most_viewed_day_surfaces_failure() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo.expect_fetch_day().returning(|date| {
            if date.day() == 10 {
                DayFetch::Failure("timeout".to_string())
            } else {
                DayFetch::Empty
            }
        });

        let service = service(mock_repo);
        let result = service.article_most_viewed_day("Cat", 2024, 4).await;

        assert!(matches!(result, Err(AppError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_articles_for_date_collapses_failure() {
        let mut mock_repo = MockPageviewRepository::new();
        mock_repo
            .expect_fetch_day()
            .times(1)
            .returning(|_| DayFetch::Failure("boom".to_string()));

        let service = service(mock_repo);
        assert!(service.articles_for_date(key("20240101")).await.is_empty());
    }
}
