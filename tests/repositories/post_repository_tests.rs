//! PostgreSQL Post Repository Tests

use pretty_assertions::assert_eq;
use tokio::task::JoinSet;
use uuid::Uuid;

use community_server::domain::{Page, PostRepository};

use crate::common::database::{unique_email, TestDatabase};

#[tokio::test]
async fn test_concurrent_likes_are_all_counted() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (owner, _) = db.insert_user(&unique_email(), 10).await;
    let post = db.insert_post(owner, "like me", 5).await;
    let repo = db.posts();

    let (first, second) = tokio::join!(
        repo.increment_likes(post.id),
        repo.increment_likes(post.id)
    );
    let mut counts = vec![first.unwrap().unwrap(), second.unwrap().unwrap()];
    counts.sort_unstable();
    assert_eq!(counts, vec![1, 2]);

    let post_id = post.id;
    let mut likes = JoinSet::new();
    for _ in 0..20 {
        let repo = repo.clone();
        likes.spawn(async move { repo.increment_likes(post_id).await });
    }
    while let Some(result) = likes.join_next().await {
        assert!(result.unwrap().unwrap().is_some());
    }

    let stored = repo.find_authored(post.id).await.unwrap().unwrap();
    assert_eq!(stored.post.likes_count, 22);

    db.cleanup().await;
}

#[tokio::test]
async fn test_like_unknown_post_returns_none() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };

    let likes = db.posts().increment_likes(Uuid::new_v4()).await.unwrap();
    assert_eq!(likes, None);

    db.cleanup().await;
}

#[tokio::test]
async fn test_feed_is_newest_first_with_comment_counts() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (alice, alice_name) = db.insert_user(&unique_email(), 60).await;
    let (bob, bob_name) = db.insert_user(&unique_email(), 60).await;

    let oldest = db.insert_post(alice, "first", 30).await;
    let middle = db.insert_post(bob, "second", 20).await;
    let newest = db.insert_post(alice, "third", 10).await;

    db.insert_comment(oldest.id, bob, "one", 9).await;
    db.insert_comment(oldest.id, alice, "two", 8).await;
    db.insert_comment(middle.id, alice, "three", 7).await;

    let feed = db.posts().list_summaries(None, Page::default()).await.unwrap();

    let ids: Vec<Uuid> = feed.iter().map(|s| s.post.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    let counts: Vec<i64> = feed.iter().map(|s| s.comments_count).collect();
    assert_eq!(counts, vec![0, 1, 2]);
    assert_eq!(feed[0].author_name.as_deref(), Some(alice_name.as_str()));
    assert_eq!(feed[1].author_name.as_deref(), Some(bob_name.as_str()));

    db.cleanup().await;
}

#[tokio::test]
async fn test_feed_owner_filter_and_window() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let (alice, _) = db.insert_user(&unique_email(), 60).await;
    let (bob, _) = db.insert_user(&unique_email(), 60).await;

    let older = db.insert_post(alice, "older", 30).await;
    db.insert_post(bob, "bob's", 20).await;
    let newer = db.insert_post(alice, "newer", 10).await;
    let repo = db.posts();

    let mine = repo.list_summaries(Some(alice), Page::default()).await.unwrap();
    let ids: Vec<Uuid> = mine.iter().map(|s| s.post.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(mine.iter().all(|s| s.post.user_id == alice));

    let nobody = repo
        .list_summaries(Some(Uuid::new_v4()), Page::default())
        .await
        .unwrap();
    assert!(nobody.is_empty());

    let window = repo
        .list_summaries(None, Page::new(Some(1), Some(2)))
        .await
        .unwrap();
    let ids: Vec<Uuid> = window.iter().map(|s| s.post.id).collect();
    assert_eq!(ids, vec![older.id]);

    db.cleanup().await;
}

#[tokio::test]
async fn test_post_without_author_row_has_no_author_name() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    db.drop_author_foreign_keys().await;
    let orphan = db.insert_post(Uuid::new_v4(), "orphaned", 5).await;
    let repo = db.posts();

    let found = repo.find_authored(orphan.id).await.unwrap().unwrap();
    assert_eq!(found.author_name, None);
    assert_eq!(found.author_name_or_unknown(), "Unknown User");

    let feed = repo.list_summaries(None, Page::default()).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].author_name, None);

    assert!(repo.exists(orphan.id).await.unwrap());
    assert!(repo.find_authored(Uuid::new_v4()).await.unwrap().is_none());

    db.cleanup().await;
}
