mod common;

use axum::http::StatusCode;
use common::{get, ids, seeded_app};

#[tokio::test]
async fn lists_leagues_with_their_teams() {
    let (status, body) = get(seeded_app().await, "/v0/leagues/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "league_id"), vec![5001, 5002]);
    assert_eq!(ids(&body[0]["teams"], "team_id"), vec![6001, 6002]);
    assert_eq!(ids(&body[1]["teams"], "team_id"), vec![6003]);
    assert_eq!(body[1]["scoring_type"], "Half-PPR");
}

#[tokio::test]
async fn filters_leagues_by_name() {
    let (_, body) = get(
        seeded_app().await,
        "/v0/leagues/?league_name=Recurring%20Champions%20League",
    )
    .await;

    assert_eq!(ids(&body, "league_id"), vec![5002]);
}

#[tokio::test]
async fn looks_up_one_league() {
    let (status, body) = get(seeded_app().await, "/v0/leagues/5001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["league_name"], "Pigskin Prodigal Fantasy League");
    assert_eq!(ids(&body["teams"], "team_id"), vec![6001, 6002]);
}

#[tokio::test]
async fn unknown_league_is_not_found() {
    let (status, body) = get(seeded_app().await, "/v0/leagues/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "League not found");
}

#[tokio::test]
async fn lists_teams_with_rosters() {
    let (status, body) = get(seeded_app().await, "/v0/teams/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "team_id"), vec![6001, 6002, 6003]);
    assert_eq!(ids(&body[0]["players"], "player_id"), vec![1001, 1002]);
    assert_eq!(body[2]["players"][0]["last_name"], "Young");
}

#[tokio::test]
async fn filters_teams_by_league_and_date() {
    let (_, body) = get(seeded_app().await, "/v0/teams/?league_id=5001").await;
    assert_eq!(ids(&body, "team_id"), vec![6001, 6002]);

    let (_, body) = get(
        seeded_app().await,
        "/v0/teams/?league_id=5001&minimum_last_changed_date=2024-04-01",
    )
    .await;
    assert_eq!(ids(&body, "team_id"), vec![6001]);
}

#[tokio::test]
async fn filters_teams_by_name() {
    let (_, body) = get(seeded_app().await, "/v0/teams/?team_name=Bench%20Warmers").await;
    assert_eq!(ids(&body, "team_id"), vec![6002]);
}

#[tokio::test]
async fn non_numeric_league_filter_is_json_bad_request() {
    let (status, body) = get(seeded_app().await, "/v0/teams/?league_id=x").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("league_id"));
}

#[tokio::test]
async fn non_numeric_league_id_is_json_bad_request() {
    let (status, body) = get(seeded_app().await, "/v0/leagues/pigskin").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");
}
