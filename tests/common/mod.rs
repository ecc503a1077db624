#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use swc_fantasy_api::db;
use tower::ServiceExt;

/// In-memory database with the schema applied and the fixture rows loaded
pub async fn seeded_pool() -> SqlitePool {
    // A single long-lived connection keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::migrate(&pool).await.unwrap();
    sqlx::raw_sql(include_str!("../fixtures/seed.sql"))
        .execute(&pool)
        .await
        .unwrap();

    pool
}

pub async fn seeded_app() -> Router {
    swc_fantasy_api::app(seeded_pool().await)
}

pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

/// Collect one integer field from every object in a JSON array
pub fn ids(body: &Value, field: &str) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_i64().unwrap())
        .collect()
}
