//! "Who liked my recipes" page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{Chef, RecipeLikes};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::extract::CurrentChef;

/// Template listing each authored recipe with the chefs who liked it.
///
/// Only the author sees this page: it is built from the session's chef,
/// never from a URL parameter.
#[derive(Template, WebTemplate)]
#[template(path = "wholiked.html")]
pub struct WhoLikedTemplate {
    pub chef: Chef,
    pub recipes: Vec<RecipeLikes>,
}

/// Renders the liked-by page.
///
/// # Endpoint
///
/// `GET /dashboard/liked-by`
pub async fn liked_by_handler(
    State(state): State<AppState>,
    CurrentChef(chef): CurrentChef,
) -> Result<WhoLikedTemplate, AppError> {
    let recipes = state.chef_service.liked_by(&chef).await?;

    Ok(WhoLikedTemplate { chef, recipes })
}
