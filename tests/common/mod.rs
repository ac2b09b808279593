//! Helpers for driving the HTTP application in-process.

use api::state::AppState;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn create_test_app() -> Router {
    api::app(AppState::in_memory(), false)
}

pub fn create_admin_app() -> Router {
    api::app(AppState::in_memory(), true)
}

/// Sends one request and returns the status with the raw body text.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = match body {
        Some(json) => {
            let body = Body::from(serde_json::to_vec(&json).unwrap());
            send_raw(app, method, uri, Some("application/json"), body).await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    };
    (status, serde_json::from_str(&text).unwrap_or(Value::Null))
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Creates a game between "A" and "B" and returns (game id, player1 id, player2 id).
pub async fn create_game(app: &Router) -> (String, String, String) {
    let (status, game) = post(
        app,
        "/create-game/",
        serde_json::json!({ "player1_name": "A", "player2_name": "B" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    (
        game["id"].as_str().unwrap().to_string(),
        game["player1"]["id"].as_str().unwrap().to_string(),
        game["player2"]["id"].as_str().unwrap().to_string(),
    )
}

pub async fn make_move(app: &Router, game_id: &str, player_id: &str, movement: &str) -> (StatusCode, Value) {
    post(
        app,
        &format!("/games/{}/make_move/", game_id),
        serde_json::json!({ "player_id": player_id, "movement": movement }),
    )
    .await
}
