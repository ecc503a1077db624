use axum::{extract::State, response::Json};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use utoipa::IntoParams;

use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::Query;
use crate::models::Performance;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPerformancesQuery {
    /// The number of items to skip at the beginning of the API call
    #[serde(default)]
    skip: Option<i64>,
    /// The number of records to return after the skipped records
    #[serde(default)]
    limit: Option<i64>,
    /// Exclude records changed before this date (YYYY-MM-DD)
    #[serde(default)]
    minimum_last_changed_date: Option<String>,
}

/// Get a list of player performances
///
/// Each record carries the week number and the fantasy points scored that
/// week under SWC league scoring.
#[utoipa::path(
    get,
    path = "/v0/performances/",
    tag = "scoring",
    operation_id = "v0_get_performances",
    params(ListPerformancesQuery),
    responses(
        (status = 200, description = "A list of performances", body = Vec<Performance>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn get_performances(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListPerformancesQuery>,
) -> Result<Json<Vec<Performance>>, ApiError> {
    let page = super::page(
        params.skip,
        params.limit,
        params.minimum_last_changed_date.as_deref(),
    )?;

    Ok(Json(db::get_performances(&pool, &page).await?))
}
