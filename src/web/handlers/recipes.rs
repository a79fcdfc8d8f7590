//! Paginated authored and favorited recipe lists.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};

use crate::application::pagination::Page;
use crate::domain::entities::{Chef, Recipe};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::PageQuery;
use crate::web::extract::CurrentChef;

/// Template for the chef's own recipes, five per page.
#[derive(Template, WebTemplate)]
#[template(path = "chef_recipes.html")]
pub struct ChefRecipesTemplate {
    pub chef: Chef,
    pub page: Page<Recipe>,
}

/// Template for the chef's favorites, five per page.
#[derive(Template, WebTemplate)]
#[template(path = "chef_favorites.html")]
pub struct ChefFavoritesTemplate {
    pub chef: Chef,
    pub page: Page<Recipe>,
}

/// Renders one page of the chef's authored recipes.
///
/// # Endpoint
///
/// `GET /dashboard/recipes?page=N`
///
/// # Query Parameters
///
/// - `page` (optional): page number or `last` (default: 1)
///
/// # Errors
///
/// Returns 404 for a non-numeric page or one outside the available range.
pub async fn authored_recipes_handler(
    State(state): State<AppState>,
    CurrentChef(chef): CurrentChef,
    Query(params): Query<PageQuery>,
) -> Result<ChefRecipesTemplate, AppError> {
    let request = params.page_request()?;
    let page = state.chef_service.authored_page(&chef, request).await?;

    Ok(ChefRecipesTemplate { chef, page })
}

/// Renders one page of the chef's favorited recipes.
///
/// # Endpoint
///
/// `GET /dashboard/favorites?page=N`
///
/// # Errors
///
/// Returns 404 for a non-numeric page or one outside the available range.
pub async fn favorite_recipes_handler(
    State(state): State<AppState>,
    CurrentChef(chef): CurrentChef,
    Query(params): Query<PageQuery>,
) -> Result<ChefFavoritesTemplate, AppError> {
    let request = params.page_request()?;
    let page = state.chef_service.favorited_page(&chef, request).await?;

    Ok(ChefFavoritesTemplate { chef, page })
}
