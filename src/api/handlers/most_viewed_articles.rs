//! Handler for the most viewed articles over a date range.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::pageviews::{MostViewedArticlesQuery, MostViewedArticlesResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists articles by total views over a date range, most viewed first.
///
/// # Endpoint
///
/// `GET /most_viewed_articles`
///
/// # Query Parameters
///
/// - `start_date` (required): First day, `YYYYMMDD`
/// - `end_date` (required): Last day, `YYYYMMDD`, inclusive
///
/// # Response
///
/// ```json
/// { "articles": [["Dog", 20], ["Cat", 15]] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unparseable query string, missing or malformed dates, or a range that is too long.
/// Returns 502 Bad Gateway if the upstream API fails for any day.
pub async fn most_viewed_articles_handler(
    State(state): State<AppState>,
    params: Result<Query<MostViewedArticlesQuery>, QueryRejection>,
) -> Result<Json<MostViewedArticlesResponse>, AppError> {
    let Query(params) = params?;
    let (start, end) = params.into_range()?;

    let articles = state
        .pageview_service
        .most_viewed_articles(start, end)
        .await?;

    Ok(Json(MostViewedArticlesResponse { articles }))
}
