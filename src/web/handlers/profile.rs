//! Public chef profile page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::domain::entities::{Chef, Recipe};
use crate::error::AppError;
use crate::state::AppState;

/// Template for a chef's public profile.
///
/// Renders `templates/chef.html` with the chef and their most recent recipes.
#[derive(Template, WebTemplate)]
#[template(path = "chef.html")]
pub struct ChefTemplate {
    pub chef: Chef,
    pub recent_recipes: Vec<Recipe>,
}

/// Renders a chef's public profile.
///
/// # Endpoint
///
/// `GET /chef/{usrname}`
///
/// # Errors
///
/// Returns 404 if no chef has this username.
pub async fn profile_handler(
    State(state): State<AppState>,
    Path(usrname): Path<String>,
) -> Result<ChefTemplate, AppError> {
    let profile = state.chef_service.public_profile(&usrname).await?;

    Ok(ChefTemplate {
        chef: profile.chef,
        recent_recipes: profile.recent_recipes,
    })
}
