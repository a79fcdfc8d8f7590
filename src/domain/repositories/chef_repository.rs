//! Repository trait for chef lookups.

use crate::domain::entities::{Chef, NewChef};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for chef accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgChefRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_chef.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChefRepository: Send + Sync {
    /// Finds a chef by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<Chef>, AppError>;

    /// Registers a new chef.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_chef: NewChef) -> Result<Chef, AppError>;

    /// Lists all chefs ordered by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Chef>, AppError>;
}
