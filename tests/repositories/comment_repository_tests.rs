//! PostgreSQL Comment Repository Tests

use pretty_assertions::assert_eq;
use uuid::Uuid;

use community_server::domain::{Comment, CommentRepository};
use community_server::shared::error::{describe_database_error, AppError};

use crate::common::database::{unique_email, TestDatabase};

#[tokio::test]
async fn test_created_comment_carries_author_name() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (owner, _) = db.insert_user(&unique_email(), 60).await;
    let (commenter, commenter_name) = db.insert_user(&unique_email(), 60).await;
    let post = db.insert_post(owner, "hello", 30).await;

    let created = db
        .comments()
        .create(&Comment::new(post.id, commenter, "nice".into()))
        .await
        .unwrap();

    assert_eq!(created.comment.post_id, post.id);
    assert_eq!(created.comment.content, "nice");
    assert_eq!(created.author_name, Some(commenter_name));

    db.cleanup().await;
}

#[tokio::test]
async fn test_comments_are_listed_newest_first() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (owner, _) = db.insert_user(&unique_email(), 60).await;
    let post = db.insert_post(owner, "thread", 30).await;
    let other = db.insert_post(owner, "elsewhere", 30).await;

    let older = db.insert_comment(post.id, owner, "older", 20).await;
    let newer = db.insert_comment(post.id, owner, "newer", 10).await;
    db.insert_comment(other.id, owner, "unrelated", 5).await;

    let listed = db.comments().list_for_post(post.id).await.unwrap();

    let ids: Vec<Uuid> = listed.iter().map(|c| c.comment.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    db.cleanup().await;
}

#[tokio::test]
async fn test_comment_on_missing_post_is_not_found() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (user, _) = db.insert_user(&unique_email(), 60).await;

    let err = db
        .comments()
        .create(&Comment::new(Uuid::new_v4(), user, "hello?".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Post not found"));

    db.cleanup().await;
}

#[tokio::test]
async fn test_comment_by_unknown_user_is_not_reported_as_missing_post() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (owner, _) = db.insert_user(&unique_email(), 60).await;
    let post = db.insert_post(owner, "still here", 30).await;

    let err = db
        .comments()
        .create(&Comment::new(post.id, Uuid::new_v4(), "ghost".into()))
        .await
        .unwrap_err();

    let e = match err {
        AppError::Database(e) => e,
        other => panic!("expected a database error, got {other:?}"),
    };
    assert_eq!(
        describe_database_error(&e),
        "Referenced record does not exist (comments_user_id_fkey)"
    );

    db.cleanup().await;
}

#[tokio::test]
async fn test_comment_without_author_row_has_no_author_name() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (owner, _) = db.insert_user(&unique_email(), 60).await;
    let post = db.insert_post(owner, "hello", 30).await;
    db.drop_author_foreign_keys().await;

    let created = db
        .comments()
        .create(&Comment::new(post.id, Uuid::new_v4(), "from nowhere".into()))
        .await
        .unwrap();
    assert_eq!(created.author_name, None);

    let listed = db.comments().list_for_post(post.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].author_name_or_unknown(), "Unknown User");

    db.cleanup().await;
}
