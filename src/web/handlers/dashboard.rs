//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{Chef, Recipe};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::extract::CurrentChef;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - the chef's latest authored recipes
/// - the chef's latest favorites
/// - a link to the liked-by page when any authored recipe has likes
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub chef: Chef,
    pub recent_recipes: Vec<Recipe>,
    pub recent_likes: Vec<Recipe>,
    pub if_liked_by_any: bool,
}

/// Renders the logged-in chef's dashboard.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Authentication
///
/// Requires a session; anonymous visitors are redirected to the login page.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    CurrentChef(chef): CurrentChef,
) -> Result<DashboardTemplate, AppError> {
    let dashboard = state.chef_service.dashboard(&chef).await?;

    Ok(DashboardTemplate {
        chef,
        recent_recipes: dashboard.recent_recipes,
        recent_likes: dashboard.recent_favorites,
        if_liked_by_any: dashboard.liked_by_any,
    })
}
