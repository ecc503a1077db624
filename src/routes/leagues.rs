use axum::{extract::State, response::Json};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use utoipa::IntoParams;

use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::{Path, Query};
use crate::models::{League, Team};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListLeaguesQuery {
    /// The number of items to skip at the beginning of the API call
    #[serde(default)]
    skip: Option<i64>,
    /// The number of records to return after the skipped records
    #[serde(default)]
    limit: Option<i64>,
    /// Exclude records changed before this date (YYYY-MM-DD)
    #[serde(default)]
    minimum_last_changed_date: Option<String>,
    /// The name of the leagues to return
    #[serde(default)]
    league_name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTeamsQuery {
    /// The number of items to skip at the beginning of the API call
    #[serde(default)]
    skip: Option<i64>,
    /// The number of records to return after the skipped records
    #[serde(default)]
    limit: Option<i64>,
    /// Exclude records changed before this date (YYYY-MM-DD)
    #[serde(default)]
    minimum_last_changed_date: Option<String>,
    /// The name of the teams to return
    #[serde(default)]
    team_name: Option<String>,
    /// Only return teams in this league
    #[serde(default)]
    league_id: Option<i64>,
}

/// Get a list of leagues
#[utoipa::path(
    get,
    path = "/v0/leagues/",
    tag = "membership",
    operation_id = "v0_get_leagues",
    params(ListLeaguesQuery),
    responses(
        (status = 200, description = "A list of leagues", body = Vec<League>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn get_leagues(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListLeaguesQuery>,
) -> Result<Json<Vec<League>>, ApiError> {
    let page = super::page(
        params.skip,
        params.limit,
        params.minimum_last_changed_date.as_deref(),
    )?;

    Ok(Json(
        db::get_leagues(&pool, &page, params.league_name.as_deref()).await?,
    ))
}

/// Get details of one league
///
/// Includes the league name, scoring type, and participating teams.
#[utoipa::path(
    get,
    path = "/v0/leagues/{league_id}",
    tag = "membership",
    operation_id = "v0_get_leagues_by_league_id",
    params(("league_id" = i64, Path, description = "SWC league ID")),
    responses(
        (status = 200, description = "One league's details", body = League),
        (status = 404, description = "League not found", body = ErrorResponse)
    )
)]
pub async fn get_league_by_id(
    State(pool): State<SqlitePool>,
    Path(league_id): Path<i64>,
) -> Result<Json<League>, ApiError> {
    let league = db::get_league_by_id(&pool, league_id)
        .await?
        .ok_or(ApiError::NotFound("League"))?;

    Ok(Json(league))
}

/// Get a list of teams
#[utoipa::path(
    get,
    path = "/v0/teams/",
    tag = "membership",
    operation_id = "v0_get_teams",
    params(ListTeamsQuery),
    responses(
        (status = 200, description = "A list of teams", body = Vec<Team>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn get_teams(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListTeamsQuery>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let page = super::page(
        params.skip,
        params.limit,
        params.minimum_last_changed_date.as_deref(),
    )?;

    let teams = db::get_teams(
        &pool,
        &page,
        params.team_name.as_deref(),
        params.league_id,
    )
    .await?;

    Ok(Json(teams))
}
