//! Comment API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use uuid::Uuid;

use community_server::domain::Role;

use crate::common::TestApp;

#[test_case(2_000, StatusCode::CREATED; "exactly two thousand characters")]
#[test_case(2_001, StatusCode::BAD_REQUEST; "one character too many")]
#[tokio::test]
async fn test_comment_length_boundary(length: usize, expected: StatusCode) {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);
    let post = app.seed_post(&user, "parent");

    let response = app
        .server
        .post(&format!("/posts/{}/comments", post.id))
        .authorization_bearer(app.token_for(&user))
        .json(&json!({ "content": "c".repeat(length) }))
        .await;

    assert_eq!(response.status_code(), expected);
    if expected == StatusCode::BAD_REQUEST {
        assert_eq!(
            response.json::<Value>()["error"],
            "Comment must be less than 2,000 characters"
        );
    }
}

#[tokio::test]
async fn test_create_comment_returns_row_with_author_name() {
    let app = TestApp::new();
    let owner = app.seed_user(Role::Member);
    let commenter = app.seed_user(Role::Member);
    let post = app.seed_post(&owner, "parent");

    let response = app
        .server
        .post(&format!("/posts/{}/comments", post.id))
        .authorization_bearer(app.token_for(&commenter))
        .json(&json!({ "content": "  great read  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["comment"]["content"], "great read");
    assert_eq!(body["comment"]["post_id"], post.id.to_string());
    assert_eq!(body["comment"]["user_id"], commenter.id.to_string());
    assert_eq!(body["comment"]["author_name"], commenter.full_name.as_str());
}

#[tokio::test]
async fn test_comment_on_unknown_post_is_not_found() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post(&format!("/posts/{}/comments", Uuid::new_v4()))
        .authorization_bearer(app.token_for(&user))
        .json(&json!({ "content": "hello?" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": "Post not found" })
    );
}

#[tokio::test]
async fn test_empty_comment_is_rejected_before_post_lookup() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post(&format!("/posts/{}/comments", Uuid::new_v4()))
        .authorization_bearer(app.token_for(&user))
        .json(&json!({ "content": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Content is required");
}

#[tokio::test]
async fn test_comment_requires_token() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);
    let post = app.seed_post(&user, "parent");

    let response = app
        .server
        .post(&format!("/posts/{}/comments", post.id))
        .json(&json!({ "content": "anonymous" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
