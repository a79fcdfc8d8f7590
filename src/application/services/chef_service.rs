//! Read service behind every chef page.

use std::sync::Arc;

use crate::application::pagination::{Page, PageRequest, Paginator};
use crate::domain::entities::{Chef, Recipe, RecipeLikes};
use crate::domain::repositories::{ChefRepository, RecipeRepository};
use crate::error::AppError;
use crate::utils::username::validate_username;
use serde_json::json;

/// Recipes shown on a public profile.
pub const PROFILE_RECENT_LIMIT: i64 = 20;

/// Authored and favorited recipes shown on the dashboard.
pub const DASHBOARD_RECENT_LIMIT: i64 = 10;

/// Page size of the authored and favorited list pages.
pub const LIST_PAGE_SIZE: i64 = 5;

/// A chef's public profile.
#[derive(Debug, Clone)]
pub struct ChefProfile {
    pub chef: Chef,
    pub recent_recipes: Vec<Recipe>,
}

/// Data for the logged-in chef's dashboard.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub recent_recipes: Vec<Recipe>,
    pub recent_favorites: Vec<Recipe>,
    /// `true` when at least one authored recipe has a like.
    pub liked_by_any: bool,
}

/// Service for the profile, dashboard, liked-by and list pages.
///
/// All operations are read-only. Each one is independent of the others.
pub struct ChefService<C: ChefRepository, R: RecipeRepository> {
    chefs: Arc<C>,
    recipes: Arc<R>,
    paginator: Paginator,
}

impl<C: ChefRepository, R: RecipeRepository> ChefService<C, R> {
    /// Creates a new chef service.
    pub fn new(chefs: Arc<C>, recipes: Arc<R>) -> Self {
        Self {
            chefs,
            recipes,
            paginator: Paginator::new(LIST_PAGE_SIZE),
        }
    }

    /// Loads a chef by username with their most recent recipes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no chef has this username, including
    /// names no chef could register with.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn public_profile(&self, username: &str) -> Result<ChefProfile, AppError> {
        if validate_username(username).is_err() {
            return Err(AppError::not_found(
                "Chef not found",
                json!({ "username": username }),
            ));
        }

        let chef = self
            .chefs
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("Chef not found", json!({ "username": username })))?;

        let recent_recipes = self
            .recipes
            .list_authored(chef.id, 0, PROFILE_RECENT_LIMIT)
            .await?;

        Ok(ChefProfile {
            chef,
            recent_recipes,
        })
    }

    /// Builds the dashboard for the logged-in chef.
    ///
    /// The three reads are independent and run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn dashboard(&self, chef: &Chef) -> Result<Dashboard, AppError> {
        let (recent_recipes, recent_favorites, liked_by_any) = tokio::try_join!(
            self.recipes
                .list_authored(chef.id, 0, DASHBOARD_RECENT_LIMIT),
            self.recipes
                .list_favorited(chef.id, 0, DASHBOARD_RECENT_LIMIT),
            self.recipes.has_any_likes(chef.id)
        )?;

        Ok(Dashboard {
            recent_recipes,
            recent_favorites,
            liked_by_any,
        })
    }

    /// Lists every recipe the chef authored, with the chefs who liked each one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn liked_by(&self, chef: &Chef) -> Result<Vec<RecipeLikes>, AppError> {
        let recipes = self.recipes.list_authored_with_likers(chef.id).await?;

        tracing::debug!(
            chef = %chef.username,
            recipes = recipes.len(),
            "Loaded likers for authored recipes"
        );

        Ok(recipes)
    }

    /// Returns one page of the chef's authored recipes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page is out of range.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authored_page(
        &self,
        chef: &Chef,
        request: PageRequest,
    ) -> Result<Page<Recipe>, AppError> {
        let count = self.recipes.count_authored(chef.id).await?;
        let window = self.paginator.window(request, count)?;

        let items = self
            .recipes
            .list_authored(chef.id, window.offset(), window.limit())
            .await?;

        Ok(window.into_page(items))
    }

    /// Returns one page of the chef's favorited recipes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page is out of range.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn favorited_page(
        &self,
        chef: &Chef,
        request: PageRequest,
    ) -> Result<Page<Recipe>, AppError> {
        let count = self.recipes.count_favorited(chef.id).await?;
        let window = self.paginator.window(request, count)?;

        let items = self
            .recipes
            .list_favorited(chef.id, window.offset(), window.limit())
            .await?;

        Ok(window.into_page(items))
    }
}
