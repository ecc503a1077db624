mod common;

use axum::http::StatusCode;
use common::{get, ids, seeded_app};

#[tokio::test]
async fn lists_all_performances() {
    let (status, body) = get(seeded_app().await, "/v0/performances/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "performance_id"), vec![3001, 3002, 3003, 3004, 3005]);
    assert_eq!(body[4]["player_id"], 1003);
    assert_eq!(body[4]["fantasy_points"], 31.1);
    assert_eq!(body[4]["week_number"], "202301");
}

#[tokio::test]
async fn only_recently_changed_performances() {
    let (_, body) = get(
        seeded_app().await,
        "/v0/performances/?minimum_last_changed_date=2024-04-01",
    )
    .await;

    assert_eq!(ids(&body, "performance_id"), vec![3001, 3003, 3005]);
}

#[tokio::test]
async fn limit_zero_returns_empty_list() {
    let (status, body) = get(seeded_app().await, "/v0/performances?limit=0").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn skip_past_the_end_returns_empty_list() {
    let (status, body) = get(seeded_app().await, "/v0/performances/?skip=50").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}
