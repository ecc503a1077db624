//! Calls the health check over a real socket, the way an API client would.

mod common;

use tokio::net::TcpListener;

#[tokio::test]
async fn health_check_over_http() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let app = common::seeded_app().await;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let response = reqwest::get(format!("{base_url}/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "API health check successful");
    assert_eq!(body["player_count"], 4);
}
