//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    authored_recipes_handler, dashboard_handler, favorite_recipes_handler, liked_by_handler,
    login_page_handler, login_submit_handler, logout_handler, profile_handler,
};
use crate::web::middleware::rate_limit;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that require a logged-in chef.
///
/// Protect them with [`crate::web::middleware::web_auth::layer`]; handlers
/// additionally take [`crate::web::extract::CurrentChef`].
///
/// # Endpoints
///
/// - `GET /dashboard` - Dashboard home
/// - `GET /dashboard/liked-by` - Who liked the chef's recipes
/// - `GET /dashboard/recipes` - Authored recipes, paginated
/// - `GET /dashboard/favorites` - Favorited recipes, paginated
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/dashboard/liked-by", get(liked_by_handler))
        .route("/dashboard/recipes", get(authored_recipes_handler))
        .route("/dashboard/favorites", get(favorite_recipes_handler))
}

/// Routes open to anonymous visitors.
///
/// # Endpoints
///
/// - `GET /chef/{usrname}` - Public chef profile
/// - `GET /login` - Login page
/// - `POST /login` - Login form submission, rate limited per client IP
/// - `GET /logout` - Clear the session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/chef/{usrname}", get(profile_handler))
        .route(
            "/login",
            get(login_page_handler)
                .merge(post(login_submit_handler).layer(rate_limit::login_layer())),
        )
        .route("/logout", get(logout_handler))
}
