mod common;

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use wiki_pageviews::api;
use wiki_pageviews::web;

fn server() -> TestServer {
    let state = common::create_test_state(Arc::new(common::cat_dog_fixture()));
    let app = Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = server().get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
    assert_eq!(json["upstream"]["fetch_concurrency"], 8);
    assert_eq!(json["upstream"]["max_range_days"], 366);
}

#[tokio::test]
async fn test_home_page_renders() {
    let response = server().get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Wikipedia Pageviews"));
    assert!(body.contains("/most_viewed_articles"));
    assert!(body.contains("/article_view_count"));
    assert!(body.contains("/article_most_viewed_day"));
    assert!(body.contains("366 days"));
}

#[tokio::test]
async fn test_full_route_table_serves_queries() {
    let response = server()
        .get("/article_view_count")
        .add_query_param("article_title", "Cat")
        .add_query_param("start_date", "20240101")
        .add_query_param("end_date", "20240102")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["view_count"], 15);
}
