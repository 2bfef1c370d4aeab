//! Post API Tests

use std::future::IntoFuture;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use uuid::Uuid;

use community_server::domain::Role;

use crate::common::TestApp;

#[test_case(10_000, StatusCode::CREATED; "exactly ten thousand characters")]
#[test_case(10_001, StatusCode::BAD_REQUEST; "one character too many")]
#[tokio::test]
async fn test_create_post_length_boundary(length: usize, expected: StatusCode) {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post("/posts")
        .authorization_bearer(app.token_for(&user))
        .json(&json!({ "content": "a".repeat(length) }))
        .await;

    assert_eq!(response.status_code(), expected);
}

#[tokio::test]
async fn test_too_long_post_message() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post("/posts")
        .authorization_bearer(app.token_for(&user))
        .json(&json!({ "content": "é".repeat(10_001) }))
        .await;

    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": "Content must be less than 10,000 characters" })
    );
}

#[test_case(json!({}); "missing content")]
#[test_case(json!({ "content": "" }); "empty content")]
#[test_case(json!({ "content": "   \n\t " }); "whitespace only")]
#[tokio::test]
async fn test_create_post_requires_content(body: Value) {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post("/posts")
        .authorization_bearer(app.token_for(&user))
        .json(&body)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Content is required");
}

#[tokio::test]
async fn test_create_post_stores_trimmed_content_for_acting_user() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post("/posts")
        .authorization_bearer(app.token_for(&user))
        .json(&json!({ "content": "  first post!  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["post"]["content"], "first post!");
    assert_eq!(body["post"]["user_id"], user.id.to_string());
    assert_eq!(body["post"]["likes_count"], 0);

    let id: Uuid = body["post"]["id"].as_str().unwrap().parse().unwrap();
    assert_eq!(app.store.post(id).unwrap().content, "first post!");
}

#[tokio::test]
async fn test_list_posts_newest_first_with_counts() {
    let app = TestApp::new();
    let alice = app.seed_user(Role::Member);
    let bob = app.seed_user(Role::Member);
    let older = app.seed_post(&alice, "older");
    let newer = app.seed_post(&bob, "newer");
    app.seed_comment(&bob, &older, "first");
    app.seed_comment(&alice, &older, "second");

    let response = app
        .server
        .get("/posts")
        .authorization_bearer(app.token_for(&alice))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let posts = response.json::<Value>()["posts"].clone();
    let ids: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![newer.id.to_string(), older.id.to_string()]);
    assert_eq!(posts[0]["author_name"], bob.full_name.as_str());
    assert_eq!(posts[0]["comments_count"], 0);
    assert_eq!(posts[1]["comments_count"], 2);
}

#[tokio::test]
async fn test_list_posts_filters_by_user_newest_first() {
    let app = TestApp::new();
    let alice = app.seed_user(Role::Member);
    let bob = app.seed_user(Role::Member);
    let first = app.seed_post(&alice, "one");
    app.seed_post(&bob, "not mine");
    let second = app.seed_post(&alice, "two");

    let response = app
        .server
        .get("/posts")
        .add_query_param("userId", alice.id)
        .authorization_bearer(app.token_for(&bob))
        .await;

    let body: Value = response.json();
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["user_id"] == alice.id.to_string()));
    assert_eq!(posts[0]["id"], second.id.to_string());
    assert_eq!(posts[1]["id"], first.id.to_string());
}

#[tokio::test]
async fn test_list_posts_with_malformed_user_filter_is_empty() {
    let app = TestApp::new();
    let alice = app.seed_user(Role::Member);
    app.seed_post(&alice, "hello");

    let response = app
        .server
        .get("/posts")
        .add_query_param("userId", "42")
        .authorization_bearer(app.token_for(&alice))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "success": true, "posts": [] }));
}

#[tokio::test]
async fn test_list_posts_pagination() {
    let app = TestApp::new();
    let alice = app.seed_user(Role::Member);
    let posts: Vec<_> = (0..5)
        .map(|i| app.seed_post(&alice, &format!("post {i}")))
        .collect();

    let response = app
        .server
        .get("/posts")
        .add_query_param("limit", 2)
        .add_query_param("offset", 1)
        .authorization_bearer(app.token_for(&alice))
        .await;

    let body: Value = response.json();
    let ids: Vec<&str> = body["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![posts[3].id.to_string(), posts[2].id.to_string()]);
}

#[tokio::test]
async fn test_missing_author_is_unknown_user() {
    let app = TestApp::new();
    let ghost = app.seed_user(Role::Member);
    let reader = app.seed_user(Role::Member);
    let post = app.seed_post(&ghost, "orphaned");
    app.store.delete_user(ghost.id);

    let response = app
        .server
        .get(&format!("/posts/{}", post.id))
        .authorization_bearer(app.token_for(&reader))
        .await;

    assert_eq!(response.json::<Value>()["post"]["author_name"], "Unknown User");
}

#[tokio::test]
async fn test_get_post_with_comments_newest_first() {
    let app = TestApp::new();
    let alice = app.seed_user(Role::Member);
    let bob = app.seed_user(Role::Member);
    let post = app.seed_post(&alice, "parent");
    let early = app.seed_comment(&bob, &post, "early");
    let late = app.seed_comment(&alice, &post, "late");

    let response = app
        .server
        .get(&format!("/posts/{}", post.id))
        .authorization_bearer(app.token_for(&bob))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["post"]["id"], post.id.to_string());
    assert_eq!(body["post"]["author_name"], alice.full_name.as_str());

    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], late.id.to_string());
    assert_eq!(comments[1]["id"], early.id.to_string());
    assert_eq!(comments[1]["author_name"], bob.full_name.as_str());
}

#[test_case("/posts/00000000-0000-0000-0000-000000000000"; "unknown id")]
#[test_case("/posts/not-a-uuid"; "unparseable id")]
#[tokio::test]
async fn test_get_unknown_post_is_not_found(path: &str) {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .get(path)
        .authorization_bearer(app.token_for(&user))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": "Post not found" })
    );
}

#[tokio::test]
async fn test_like_returns_new_count() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);
    let post = app.seed_post(&user, "like me");
    let token = app.token_for(&user);

    for expected in 1..=3 {
        let response = app
            .server
            .post(&format!("/posts/{}/like", post.id))
            .authorization_bearer(&token)
            .await;

        assert_eq!(
            response.json::<Value>(),
            json!({ "success": true, "likes_count": expected })
        );
    }
}

#[tokio::test]
async fn test_concurrent_likes_are_not_lost() {
    let app = TestApp::new();
    let alice = app.seed_user(Role::Member);
    let bob = app.seed_user(Role::Member);
    let post = app.seed_post(&alice, "popular");
    let path = format!("/posts/{}/like", post.id);

    let (first, second) = tokio::join!(
        app.server
            .post(&path)
            .authorization_bearer(app.token_for(&alice))
            .into_future(),
        app.server
            .post(&path)
            .authorization_bearer(app.token_for(&bob))
            .into_future(),
    );

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(app.store.post(post.id).unwrap().likes_count, 2);
}

#[tokio::test]
async fn test_like_unknown_post_is_not_found() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Member);

    let response = app
        .server
        .post(&format!("/posts/{}/like", Uuid::new_v4()))
        .authorization_bearer(app.token_for(&user))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
