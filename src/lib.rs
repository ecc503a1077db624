//! Read-only HTTP API over SportsWorldCentral (SWC) fantasy football data.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod openapi;
pub mod routes;

use axum::{http::Method, routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Build the router with every endpoint wired to `pool`
pub fn app(pool: SqlitePool) -> Router {
    // Read-only API: GET is the only method allowed cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        // Analytics
        .route("/", get(routes::health::root))
        .route("/v0/counts", get(routes::health::get_counts))
        .route("/v0/counts/", get(routes::health::get_counts))

        // Player endpoints
        .route("/v0/players", get(routes::players::get_players))
        .route("/v0/players/", get(routes::players::get_players))
        .route("/v0/players/{player_id}", get(routes::players::get_player_by_id))

        // Scoring endpoints
        .route("/v0/performances", get(routes::performances::get_performances))
        .route("/v0/performances/", get(routes::performances::get_performances))

        // Membership endpoints
        .route("/v0/leagues", get(routes::leagues::get_leagues))
        .route("/v0/leagues/", get(routes::leagues::get_leagues))
        .route("/v0/leagues/{league_id}", get(routes::leagues::get_league_by_id))
        .route("/v0/teams", get(routes::leagues::get_teams))
        .route("/v0/teams/", get(routes::leagues::get_teams))

        .route("/openapi.json", get(openapi::openapi_json))
        .fallback(|| async { ApiError::NotFound("Resource") })

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
