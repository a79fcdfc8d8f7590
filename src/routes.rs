//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Redirects to the dashboard
//! - `GET  /health`         - Health check (public, JSON)
//! - `GET  /chef/{usrname}` - Public chef profile
//! - `/dashboard*`          - Chef pages (session cookie required)
//! - `/login`, `/logout`    - Session handling
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP limit on login attempts
//! - **Authentication** - Session cookie, redirecting to the login page
//! - **Path normalization** - Trailing slash handling

use crate::api::health_handler;
use crate::state::AppState;
use crate::utils::redirect::DEFAULT_LANDING;
use crate::web;
use crate::web::middleware::{tracing, web_auth};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    let router = Router::new()
        .route("/", get(|| async { Redirect::to(DEFAULT_LANDING) }))
        .route("/health", get(health_handler))
        .merge(protected)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
