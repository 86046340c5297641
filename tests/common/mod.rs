// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use baypolicy_map::config::Config;
use baypolicy_map::routes::create_router;
use baypolicy_map::services::loader::parse_collection;
use baypolicy_map::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Two-city dataset: Oakland adopts `justcause` and `stabilizat`, Berkeley adopts nothing.
pub const FIXTURE_PATH: &str = "tests/fixtures/bay_cities.geojson";

#[allow(dead_code)]
pub fn fixture_json() -> String {
    std::fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture - is tests/fixtures/ committed?")
}

/// Create a test app whose dataset has not arrived yet.
#[allow(dead_code)]
pub fn create_loading_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default()));
    (create_router(state.clone()), state)
}

/// Create a test app with the fixture dataset installed.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_app_with(&fixture_json())
}

/// Create a test app with an inline GeoJSON dataset installed.
#[allow(dead_code)]
pub fn create_app_with(geojson: &str) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default()));
    let collection = parse_collection(geojson).expect("Dataset should parse");
    state
        .dataset
        .install(collection, &state.catalog)
        .expect("Fresh store should accept the dataset");

    (create_router(state.clone()), state)
}

/// Send a GET and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

/// Send a JSON POST and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    payload: serde_json::Value,
) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (axum::http::StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    // Extractor rejections are plain text
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
