mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::PgPool;

/// Titles rendered on the page, in document order.
fn rendered_titles(body: &str) -> Vec<String> {
    body.split("<span class=\"recipe-title\">")
        .skip(1)
        .filter_map(|rest| rest.split_once("</span>"))
        .map(|(title, _)| title.to_string())
        .collect()
}

async fn seeded(pool: PgPool) -> (TestServer, String) {
    let alice = common::create_chef(&pool, "alice").await;
    common::create_numbered_recipes(&pool, alice, 7).await;
    let token = common::create_session(&pool, alice).await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    (server, common::session_header(&token))
}

#[sqlx::test]
async fn test_recipes_first_page(pool: PgPool) {
    let (server, cookie) = seeded(pool).await;

    let response = server
        .get("/dashboard/recipes")
        .add_header("Cookie", cookie)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert_eq!(rendered_titles(&body), ["R7", "R6", "R5", "R4", "R3"]);
    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains("?page=2"));
}

#[sqlx::test]
async fn test_recipes_second_page(pool: PgPool) {
    let (server, cookie) = seeded(pool).await;

    let response = server
        .get("/dashboard/recipes?page=2")
        .add_header("Cookie", cookie)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert_eq!(rendered_titles(&body), ["R2", "R1"]);
    assert!(body.contains("Page 2 of 2"));
}

#[sqlx::test]
async fn test_recipes_last_page(pool: PgPool) {
    let (server, cookie) = seeded(pool).await;

    let body = server
        .get("/dashboard/recipes?page=last")
        .add_header("Cookie", cookie)
        .await
        .text();

    assert_eq!(rendered_titles(&body), ["R2", "R1"]);
}

#[sqlx::test]
async fn test_recipes_empty_page_param_is_first_page(pool: PgPool) {
    let (server, cookie) = seeded(pool).await;

    let body = server
        .get("/dashboard/recipes?page=")
        .add_header("Cookie", cookie)
        .await
        .text();

    assert_eq!(rendered_titles(&body), ["R7", "R6", "R5", "R4", "R3"]);
}

#[sqlx::test]
async fn test_recipes_invalid_pages_are_not_found(pool: PgPool) {
    let (server, cookie) = seeded(pool).await;

    for page in ["0", "3", "-1", "abc", "1.5"] {
        let response = server
            .get(&format!("/dashboard/recipes?page={page}"))
            .add_header("Cookie", cookie.clone())
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "page={page}");
    }
}

#[sqlx::test]
async fn test_recipes_empty_list_has_first_page(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let token = common::create_session(&pool, alice).await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .get("/dashboard/recipes?page=1")
        .add_header("Cookie", common::session_header(&token))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("You have not posted any recipes yet."));
}

#[sqlx::test]
async fn test_favorites_paginated_by_favorite_time(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let bob = common::create_chef(&pool, "bob").await;
    let ids = common::create_numbered_recipes(&pool, bob, 6).await;
    for (i, id) in ids.iter().enumerate() {
        // R1 favorited most recently, R6 first.
        common::add_favorite(&pool, *id, alice, (i as i32 + 1) * 10).await;
    }
    let token = common::create_session(&pool, alice).await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let cookie = common::session_header(&token);

    let first = server
        .get("/dashboard/favorites")
        .add_header("Cookie", cookie.clone())
        .await
        .text();
    let second = server
        .get("/dashboard/favorites?page=2")
        .add_header("Cookie", cookie)
        .await
        .text();

    assert_eq!(rendered_titles(&first), ["R1", "R2", "R3", "R4", "R5"]);
    assert_eq!(rendered_titles(&second), ["R6"]);
}

#[sqlx::test]
async fn test_favorites_out_of_range(pool: PgPool) {
    let alice = common::create_chef(&pool, "alice").await;
    let token = common::create_session(&pool, alice).await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    server
        .get("/dashboard/favorites?page=2")
        .add_header("Cookie", common::session_header(&token))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_lists_require_login(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/dashboard/favorites?page=2").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/login?next=%2Fdashboard%2Ffavorites%3Fpage%3D2"
    );
}
