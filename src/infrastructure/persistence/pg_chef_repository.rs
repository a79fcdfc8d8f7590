//! PostgreSQL implementation of chef repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::ChefRow;
use crate::domain::entities::{Chef, NewChef};
use crate::domain::repositories::ChefRepository;
use crate::error::AppError;

/// PostgreSQL repository for chef accounts.
pub struct PgChefRepository {
    pool: Arc<PgPool>,
}

impl PgChefRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChefRepository for PgChefRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Chef>, AppError> {
        let row = sqlx::query_as::<_, ChefRow>(
            r#"
            SELECT id, username, display_name, joined_at
            FROM chefs
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Chef::from))
    }

    async fn create(&self, new_chef: NewChef) -> Result<Chef, AppError> {
        let result = sqlx::query_as::<_, ChefRow>(
            r#"
            INSERT INTO chefs (username, display_name)
            VALUES ($1, $2)
            RETURNING id, username, display_name, joined_at
            "#,
        )
        .bind(&new_chef.username)
        .bind(&new_chef.display_name)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e)
                if e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Err(AppError::bad_request(
                    "Username is already taken",
                    json!({ "username": new_chef.username }),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<Chef>, AppError> {
        let rows = sqlx::query_as::<_, ChefRow>(
            r#"
            SELECT id, username, display_name, joined_at
            FROM chefs
            ORDER BY username
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Chef::from).collect())
    }
}
