mod common;

use axum::http::StatusCode;
use common::{get, seeded_app};
use serde_json::json;

#[tokio::test]
async fn root_reports_health_and_counts() {
    let (status, body) = get(seeded_app().await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "API health check successful",
            "league_count": 2,
            "team_count": 3,
            "player_count": 4
        })
    );
}

#[tokio::test]
async fn counts_endpoint_with_and_without_trailing_slash() {
    let expected = json!({ "league_count": 2, "team_count": 3, "player_count": 4 });

    let (status, body) = get(seeded_app().await, "/v0/counts/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);

    let (status, body) = get(seeded_app().await, "/v0/counts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let (status, body) = get(seeded_app().await, "/v1/anything").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");
    assert_eq!(body["error"], "404 Not Found");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = get(seeded_app().await, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["info"]["title"],
        "Sports World Central (SWC) Fantasy Football API"
    );
    assert!(body["paths"]["/v0/players/{player_id}"]["get"].is_object());
}
