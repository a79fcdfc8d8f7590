//! PostgreSQL implementation of session repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{ChefRow, SessionRow};
use crate::domain::entities::{Chef, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// PostgreSQL repository for login sessions.
///
/// Stores HMAC hashes of session tokens. Raw tokens are never persisted.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn find_chef_by_token(&self, token_hash: &str) -> Result<Option<Chef>, AppError> {
        let row = sqlx::query_as::<_, ChefRow>(
            r#"
            SELECT c.id, c.username, c.display_name, c.joined_at
            FROM chef_sessions s
            JOIN chefs c ON c.id = s.chef_id
            WHERE s.token_hash = $1
              AND s.revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Chef::from))
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE chef_sessions
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn create(
        &self,
        chef_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<Session, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO chef_sessions (chef_id, name, token_hash)
            VALUES ($1, $2, $3)
            RETURNING id, chef_id, name, token_hash, created_at, last_used_at, revoked_at
            "#,
        )
        .bind(chef_id)
        .bind(name)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_chef(&self, chef_id: i64) -> Result<Vec<Session>, AppError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, chef_id, name, token_hash, created_at, last_used_at, revoked_at
            FROM chef_sessions
            WHERE chef_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(chef_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Session::from).collect())
    }

    async fn revoke(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE chef_sessions
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
