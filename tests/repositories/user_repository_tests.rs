//! PostgreSQL User Repository Tests

use pretty_assertions::assert_eq;
use uuid::Uuid;

use community_server::domain::{Page, UserRepository};

use crate::common::database::{unique_email, TestDatabase};

#[tokio::test]
async fn test_profile_counts_posts_and_comments() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (author, author_name) = db.insert_user(&unique_email(), 60).await;
    let (other, _) = db.insert_user(&unique_email(), 60).await;

    let first = db.insert_post(author, "one", 30).await;
    db.insert_post(author, "two", 20).await;
    let foreign = db.insert_post(other, "theirs", 15).await;

    db.insert_comment(first.id, author, "self reply", 10).await;
    db.insert_comment(foreign.id, author, "hi", 9).await;
    db.insert_comment(foreign.id, author, "again", 8).await;
    db.insert_comment(first.id, other, "not counted", 7).await;

    let profile = db.users().find_profile(author).await.unwrap().unwrap();
    assert_eq!(profile.user.full_name, author_name);
    assert_eq!(profile.posts_count, 2);
    assert_eq!(profile.comments_count, 3);

    let quiet = db.users().find_profile(other).await.unwrap().unwrap();
    assert_eq!(quiet.posts_count, 1);
    assert_eq!(quiet.comments_count, 1);

    assert!(db.users().find_profile(Uuid::new_v4()).await.unwrap().is_none());

    db.cleanup().await;
}

#[tokio::test]
async fn test_find_by_email_is_exact() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let email = format!("Member.{}@Example.com", Uuid::new_v4().simple());
    let (id, _) = db.insert_user(&email, 60).await;

    let found = db.users().find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert!(found.password_hash.starts_with("$argon2id$"));

    let lowered = db
        .users()
        .find_by_email(&email.to_lowercase())
        .await
        .unwrap();
    assert!(lowered.is_none());

    db.cleanup().await;
}

#[tokio::test]
async fn test_users_are_listed_newest_first() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (oldest, _) = db.insert_user(&unique_email(), 30).await;
    let (middle, _) = db.insert_user(&unique_email(), 20).await;
    let (newest, _) = db.insert_user(&unique_email(), 10).await;
    let repo = db.users();

    let all = repo.list(Page::default()).await.unwrap();
    let ids: Vec<Uuid> = all.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![newest, middle, oldest]);

    let window = repo.list(Page::new(Some(1), Some(1))).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, middle);

    db.cleanup().await;
}
