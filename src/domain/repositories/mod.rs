//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated with `mockall`
//! for service unit tests.
//!
//! # Available Repositories
//!
//! - [`ChefRepository`] - Chef lookups and registration
//! - [`RecipeRepository`] - Authored, favorited and liked recipe reads
//! - [`SessionRepository`] - Login session storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod chef_repository;
pub mod recipe_repository;
pub mod session_repository;

pub use chef_repository::ChefRepository;
pub use recipe_repository::RecipeRepository;
pub use session_repository::SessionRepository;

#[cfg(test)]
pub use chef_repository::MockChefRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
