//! Integration tests for the sign-in endpoint
mod common;

use crate::common::{create_test_state, register_user};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use memoir_server::build_router;

fn sign_in_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/auth/sign-in")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_sign_in_success_returns_user_and_token() {
    let state = create_test_state().await;
    register_user(&state, "alice", "newpass123").await;
    let app = build_router(state);

    let response = app
        .oneshot(sign_in_request("alice", "newpass123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["user"]["username"], "alice");
    assert!(!json["access_token"].as_str().unwrap().is_empty());
    // The hash must never appear in a response
    assert!(json["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_sign_in_wrong_password_returns_unauthorized() {
    let state = create_test_state().await;
    register_user(&state, "alice", "newpass123").await;
    let app = build_router(state);

    let response = app.oneshot(sign_in_request("alice", "wrong")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_sign_in_unknown_user_returns_unauthorized() {
    let state = create_test_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(sign_in_request("nobody", "newpass123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
