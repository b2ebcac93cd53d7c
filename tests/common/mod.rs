#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use bloglist_api::{app, states::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_app() -> (Router, AppState) {
    let state = AppState::new("test-secret".into());
    (app(state.clone()), state)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn signup(app: &Router, username: &str, name: &str, password: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/users",
            json!({ "username": username, "name": name, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/login",
            json!({ "username": username, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn create_blog(app: &Router, token: &str, payload: Value) -> Value {
    let (status, body) = send(app, json_request("POST", "/api/blogs", payload, Some(token))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
