//! Repository trait for login sessions.

use crate::domain::entities::{Chef, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for login session management.
///
/// Sessions are looked up by token hash; raw tokens never reach this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_session.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolves a token hash to the chef owning an active session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(chef))` if the session exists and is not revoked
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_chef_by_token(&self, token_hash: &str) -> Result<Option<Chef>, AppError>;

    /// Updates the `last_used_at` timestamp of an active session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a session for a chef.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a hash collision.
    async fn create(&self, chef_id: i64, name: &str, token_hash: &str)
    -> Result<Session, AppError>;

    /// Lists a chef's sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_chef(&self, chef_id: i64) -> Result<Vec<Session>, AppError>;

    /// Revokes a session.
    ///
    /// Returns `Ok(true)` if an active session was revoked, `Ok(false)` if it did
    /// not exist or was already revoked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke(&self, id: i64) -> Result<bool, AppError>;
}
