//! Repository trait for recipe reads.

use crate::domain::entities::{Recipe, RecipeLikes};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to recipes and their like/favorite relations.
///
/// # Ordering
///
/// - Authored recipes: newest first (`created_at DESC, id DESC`)
/// - Favorited recipes: most recently favorited first, ties broken by recipe id
/// - Likers of a recipe: in the order they liked it
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecipeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_recipe.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Lists recipes authored by a chef.
    ///
    /// # Arguments
    ///
    /// - `author_id` - Chef ID
    /// - `offset` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_authored(
        &self,
        author_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, AppError>;

    /// Counts recipes authored by a chef.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_authored(&self, author_id: i64) -> Result<i64, AppError>;

    /// Lists recipes a chef has favorited.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_favorited(
        &self,
        chef_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, AppError>;

    /// Counts recipes a chef has favorited.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_favorited(&self, chef_id: i64) -> Result<i64, AppError>;

    /// Returns `true` if any recipe authored by the chef has at least one like.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn has_any_likes(&self, author_id: i64) -> Result<bool, AppError>;

    /// Lists every recipe authored by the chef, each with its likers.
    ///
    /// Not paginated. Recipes without likes are included with an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_authored_with_likers(&self, author_id: i64)
    -> Result<Vec<RecipeLikes>, AppError>;
}
