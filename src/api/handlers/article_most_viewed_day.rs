//! Handler for the peak day of an article within a month.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::pageviews::{ArticleMostViewedDayQuery, ArticleMostViewedDayResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Finds the day of a month when an article had the most views.
///
/// # Endpoint
///
/// `GET /article_most_viewed_day`
///
/// # Query Parameters
///
/// - `article_title` (required): Title as it appears upstream
/// - `year` (required): `YYYY`
/// - `month` (required): `MM`, `01` to `12`
///
/// # Response
///
/// ```json
/// { "article_title": "Cat", "most_viewed_day": "2024/03/09", "views": 50 }
/// ```
///
/// `most_viewed_day` is `null` when the article never appeared that month.
/// Ties resolve to the earliest day.
///
/// # Errors
///
/// Returns 400 Bad Request for an unparseable query string or missing or malformed parameters.
/// Returns 502 Bad Gateway if the upstream API fails for any day.
pub async fn article_most_viewed_day_handler(
    State(state): State<AppState>,
    params: Result<Query<ArticleMostViewedDayQuery>, QueryRejection>,
) -> Result<Json<ArticleMostViewedDayResponse>, AppError> {
    let Query(params) = params?;
    let (article_title, year, month) = params.into_parts()?;

    let peak = state
        .pageview_service
        .article_most_viewed_day(&article_title, year, month)
        .await?;

    Ok(Json(ArticleMostViewedDayResponse {
        article_title,
        most_viewed_day: peak.date.map(|d| d.to_upstream_path()),
        views: peak.views,
    }))
}
