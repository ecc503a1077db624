use axum::{extract::State, response::Json};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use utoipa::IntoParams;

use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::{Path, Query};
use crate::models::Player;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlayersQuery {
    /// The number of items to skip at the beginning of the API call
    #[serde(default)]
    skip: Option<i64>,
    /// The number of records to return after the skipped records
    #[serde(default)]
    limit: Option<i64>,
    /// Exclude records changed before this date (YYYY-MM-DD)
    #[serde(default)]
    minimum_last_changed_date: Option<String>,
    /// The first name of the players to return
    #[serde(default)]
    first_name: Option<String>,
    /// The last name of the players to return
    #[serde(default)]
    last_name: Option<String>,
}

/// Get a list of players
#[utoipa::path(
    get,
    path = "/v0/players/",
    tag = "player",
    operation_id = "v0_get_players",
    params(ListPlayersQuery),
    responses(
        (status = 200, description = "A list of players", body = Vec<Player>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn get_players(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListPlayersQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let page = super::page(
        params.skip,
        params.limit,
        params.minimum_last_changed_date.as_deref(),
    )?;

    let players = db::get_players(
        &pool,
        &page,
        params.first_name.as_deref(),
        params.last_name.as_deref(),
    )
    .await?;

    tracing::debug!(count = players.len(), "listed players");
    Ok(Json(players))
}

/// Get one player using the SWC player ID
#[utoipa::path(
    get,
    path = "/v0/players/{player_id}",
    tag = "player",
    operation_id = "v0_get_players_by_player_id",
    params(("player_id" = i64, Path, description = "SWC player ID")),
    responses(
        (status = 200, description = "One NFL player", body = Player),
        (status = 404, description = "Player not found", body = ErrorResponse)
    )
)]
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = db::get_player_by_id(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound("Player"))?;

    Ok(Json(player))
}
