//! OpenAPI description of the read-only SWC API, generated from the handler
//! annotations by utoipa.

use axum::response::Json;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::{health, leagues, performances, players};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sports World Central (SWC) Fantasy Football API",
        version = "0.1",
        description = "Read-only access to SportsWorldCentral (SWC) fantasy football data. \
            No authentication is required. Usage is limited to 2000 requests per day; \
            exceeding the limit may result in suspension."
    ),
    paths(
        health::root,
        health::get_counts,
        players::get_players,
        players::get_player_by_id,
        performances::get_performances,
        leagues::get_leagues,
        leagues::get_league_by_id,
        leagues::get_teams,
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "analytics", description = "API health and counts of leagues, teams, and players"),
        (name = "player", description = "NFL players, listed or looked up by player_id"),
        (name = "scoring", description = "Player performances with SWC fantasy points"),
        (name = "membership", description = "SWC fantasy leagues and the teams in them"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
