#![allow(dead_code)]

use std::sync::Arc;
use wiki_pageviews::application::services::{FetchOptions, PageviewService};
use wiki_pageviews::domain::entities::{DateKey, PageviewRecord};
use wiki_pageviews::domain::repositories::PageviewRepository;
use wiki_pageviews::infrastructure::upstream::FixturePageviewRepository;
use wiki_pageviews::state::AppState;

pub fn key(raw: &str) -> DateKey {
    DateKey::parse(raw).unwrap()
}

/// `2024/01/01` → Cat 10; `2024/01/02` → Cat 5, Dog 20.
pub fn cat_dog_fixture() -> FixturePageviewRepository {
    FixturePageviewRepository::new()
        .with_day(key("20240101"), vec![PageviewRecord::new("Cat", 10, 1)])
        .with_day(
            key("20240102"),
            vec![
                PageviewRecord::new("Cat", 5, 1),
                PageviewRecord::new("Dog", 20, 2),
            ],
        )
}

pub fn create_test_state(repo: Arc<FixturePageviewRepository>) -> AppState {
    create_test_state_with_options(repo, FetchOptions::default())
}

pub fn create_test_state_with_options(
    repo: Arc<FixturePageviewRepository>,
    options: FetchOptions,
) -> AppState {
    let repository: Arc<dyn PageviewRepository> = repo;
    let pageview_service = Arc::new(PageviewService::new(repository, options));

    AppState::new(pageview_service, "http://fixture.invalid/top")
}
