#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use chef_pages::api::health_handler;
use chef_pages::application::services::AuthService;
use chef_pages::infrastructure::persistence::PgSessionRepository;
use chef_pages::state::{AppState, CookieSettings};
use chef_pages::web;
use chef_pages::web::middleware::web_auth;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub async fn create_chef(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO chefs (username) VALUES ($1) RETURNING id")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_chef_named(pool: &PgPool, username: &str, display_name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO chefs (username, display_name) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(display_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a recipe created `minutes_ago` minutes before now.
pub async fn create_recipe(pool: &PgPool, author_id: i64, title: &str, minutes_ago: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO recipes (author_id, title, created_at)
         VALUES ($1, $2, NOW() - $3::int * INTERVAL '1 minute')
         RETURNING id",
    )
    .bind(author_id)
    .bind(title)
    .bind(minutes_ago)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts recipes titled `R1..=Rn`, `R1` oldest and `Rn` newest.
pub async fn create_numbered_recipes(pool: &PgPool, author_id: i64, n: i32) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 1..=n {
        ids.push(create_recipe(pool, author_id, &format!("R{i}"), (n - i + 1) * 10).await);
    }
    ids
}

pub async fn add_like(pool: &PgPool, recipe_id: i64, chef_id: i64, minutes_ago: i32) {
    sqlx::query(
        "INSERT INTO recipe_likes (recipe_id, chef_id, created_at)
         VALUES ($1, $2, NOW() - $3::int * INTERVAL '1 minute')",
    )
    .bind(recipe_id)
    .bind(chef_id)
    .bind(minutes_ago)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn add_favorite(pool: &PgPool, recipe_id: i64, chef_id: i64, minutes_ago: i32) {
    sqlx::query(
        "INSERT INTO recipe_favorites (recipe_id, chef_id, created_at)
         VALUES ($1, $2, NOW() - $3::int * INTERVAL '1 minute')",
    )
    .bind(recipe_id)
    .bind(chef_id)
    .bind(minutes_ago)
    .execute(pool)
    .await
    .unwrap();
}

/// Issues a session for the chef and returns the raw token.
pub async fn create_session(pool: &PgPool, chef_id: i64) -> String {
    let repo = Arc::new(PgSessionRepository::new(Arc::new(pool.clone())));
    let auth = AuthService::new(repo, TEST_SECRET.to_string());
    auth.issue(chef_id, "test").await.unwrap().token
}

pub fn session_header(token: &str) -> String {
    format!("{}={}", web_auth::SESSION_COOKIE, token)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_SECRET.to_string(),
        CookieSettings::default(),
    )
}

/// Page routes wired like the server, without path normalization.
pub fn create_test_app(pool: PgPool) -> Router {
    let state = create_test_state(pool);
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .merge(protected)
        .merge(web::routes::public_routes())
        .with_state(state)
}
