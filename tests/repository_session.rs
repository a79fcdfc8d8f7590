mod common;

use chef_pages::domain::repositories::SessionRepository;
use chef_pages::infrastructure::persistence::PgSessionRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_session(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    let session = repo.create(alice, "laptop", "hash123").await.unwrap();

    assert_eq!(session.chef_id, alice);
    assert_eq!(session.name, "laptop");
    assert_eq!(session.token_hash, "hash123");
    assert!(!session.is_revoked());
    assert!(session.last_used_at.is_none());
}

#[sqlx::test]
async fn test_find_chef_by_token(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    repo.create(alice, "laptop", "validhash").await.unwrap();

    let chef = repo.find_chef_by_token("validhash").await.unwrap().unwrap();

    assert_eq!(chef.id, alice);
    assert_eq!(chef.username, "alice");
    assert!(repo.find_chef_by_token("unknown").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_revoked_session_does_not_resolve(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    let session = repo.create(alice, "laptop", "revokedhash").await.unwrap();

    assert!(repo.revoke(session.id).await.unwrap());

    assert!(repo.find_chef_by_token("revokedhash").await.unwrap().is_none());
    assert!(!repo.revoke(session.id).await.unwrap());
}

#[sqlx::test]
async fn test_touch_updates_last_used(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    repo.create(alice, "laptop", "touchhash").await.unwrap();

    repo.touch("touchhash").await.unwrap();

    let sessions = repo.list_for_chef(alice).await.unwrap();
    assert!(sessions[0].last_used_at.is_some());
}

#[sqlx::test]
async fn test_list_for_chef_newest_first(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let bob = common::create_chef(&pool, "bob").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    repo.create(alice, "first", "h1").await.unwrap();
    repo.create(alice, "second", "h2").await.unwrap();
    repo.create(bob, "other", "h3").await.unwrap();

    let names: Vec<String> = repo
        .list_for_chef(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, ["second", "first"]);
}
