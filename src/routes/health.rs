use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{Counts, HealthResponse};

/// Test the root of the API
///
/// Reports liveness along with league, team, and player counts.
#[utoipa::path(
    get,
    path = "/",
    tag = "analytics",
    operation_id = "v0_root",
    responses(
        (status = 200, description = "A successful API health check", body = HealthResponse),
        (status = 500, description = "Data store unavailable", body = ErrorResponse)
    )
)]
pub async fn root(State(pool): State<SqlitePool>) -> Result<Json<HealthResponse>, ApiError> {
    let counts = db::get_counts(&pool).await?;

    Ok(Json(HealthResponse::healthy(counts)))
}

/// Get a series of counts
#[utoipa::path(
    get,
    path = "/v0/counts/",
    tag = "analytics",
    operation_id = "v0_get_counts",
    responses(
        (status = 200, description = "Counts of leagues, teams, and players", body = Counts),
        (status = 500, description = "Data store unavailable", body = ErrorResponse)
    )
)]
pub async fn get_counts(State(pool): State<SqlitePool>) -> Result<Json<Counts>, ApiError> {
    Ok(Json(db::get_counts(&pool).await?))
}
