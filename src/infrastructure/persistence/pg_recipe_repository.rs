//! PostgreSQL implementation of recipe repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::rows::{LikerRow, RecipeRow};
use crate::domain::entities::{Chef, Recipe, RecipeLikes};
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;

/// PostgreSQL repository for recipe reads.
///
/// Every query joins the author so list pages can show who wrote a recipe.
pub struct PgRecipeRepository {
    pool: Arc<PgPool>,
}

impl PgRecipeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn list_authored(
        &self,
        author_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.author_id, c.username AS author_username,
                   r.title, r.summary, r.created_at
            FROM recipes r
            JOIN chefs c ON c.id = r.author_id
            WHERE r.author_id = $1
            ORDER BY r.created_at DESC, r.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn count_authored(&self, author_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_favorited(
        &self,
        chef_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.author_id, c.username AS author_username,
                   r.title, r.summary, r.created_at
            FROM recipe_favorites f
            JOIN recipes r ON r.id = f.recipe_id
            JOIN chefs c ON c.id = r.author_id
            WHERE f.chef_id = $1
            ORDER BY f.created_at DESC, r.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(chef_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn count_favorited(&self, chef_id: i64) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM recipe_favorites WHERE chef_id = $1")
                .bind(chef_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn has_any_likes(&self, author_id: i64) -> Result<bool, AppError> {
        let liked: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM recipe_likes l
                JOIN recipes r ON r.id = l.recipe_id
                WHERE r.author_id = $1
            )
            "#,
        )
        .bind(author_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(liked)
    }

    async fn list_authored_with_likers(
        &self,
        author_id: i64,
    ) -> Result<Vec<RecipeLikes>, AppError> {
        let recipes = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.author_id, c.username AS author_username,
                   r.title, r.summary, r.created_at
            FROM recipes r
            JOIN chefs c ON c.id = r.author_id
            WHERE r.author_id = $1
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();

        let likers = sqlx::query_as::<_, LikerRow>(
            r#"
            SELECT l.recipe_id, c.id, c.username, c.display_name, c.joined_at
            FROM recipe_likes l
            JOIN chefs c ON c.id = l.chef_id
            WHERE l.recipe_id = ANY($1)
            ORDER BY l.created_at ASC, c.id ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_recipe: HashMap<i64, Vec<Chef>> = HashMap::new();
        for row in likers {
            by_recipe
                .entry(row.recipe_id)
                .or_default()
                .push(row.chef.into());
        }

        Ok(recipes
            .into_iter()
            .map(|row| {
                let likers = by_recipe.remove(&row.id).unwrap_or_default();
                RecipeLikes {
                    recipe: row.into(),
                    likers,
                }
            })
            .collect())
    }
}
