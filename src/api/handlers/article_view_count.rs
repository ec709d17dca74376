//! Handler for an article's total views over a date range.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::pageviews::{ArticleViewCountQuery, ArticleViewCountResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the summed views of one article over a date range.
///
/// # Endpoint
///
/// `GET /article_view_count`
///
/// # Query Parameters
///
/// - `article_title` (required): Title as it appears upstream, e.g. `Main_Page`
/// - `start_date` (required): First day, `YYYYMMDD`
/// - `end_date` (required): Last day, `YYYYMMDD`, inclusive
///
/// # Response
///
/// ```json
/// { "article_title": "Dog", "view_count": 20 }
/// ```
///
/// An article that never appears in the range reports `view_count: 0`.
///
/// # Errors
///
/// Returns 400 Bad Request for an unparseable query string or missing or malformed parameters.
/// Returns 502 Bad Gateway if the upstream API fails for any day.
pub async fn article_view_count_handler(
    State(state): State<AppState>,
    params: Result<Query<ArticleViewCountQuery>, QueryRejection>,
) -> Result<Json<ArticleViewCountResponse>, AppError> {
    let Query(params) = params?;
    let (article_title, start, end) = params.into_parts()?;

    let view_count = state
        .pageview_service
        .article_view_count(&article_title, start, end)
        .await?;

    Ok(Json(ArticleViewCountResponse {
        article_title,
        view_count,
    }))
}
