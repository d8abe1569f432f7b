#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use reelshelf::{AppState, config::Config};
use serde_json::Value;
use tower::ServiceExt;

/// State over a fresh in-memory database.
pub async fn build_test_state() -> Arc<AppState> {
    AppState::init(Config::in_memory()).await.unwrap()
}

/// Full router over a fresh in-memory database.
pub async fn build_test_app() -> Router {
    reelshelf::app(build_test_state().await)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().method(Method::DELETE).uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body.to_string())).await
}

pub fn json_request(method: Method, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Every movie currently listed by `GET /movies`.
pub async fn list_movies(app: &Router) -> Vec<Value> {
    let response = get(app, "/movies").await;
    assert_eq!(response.status(), 200);
    body_json(response).await.as_array().cloned().unwrap()
}
