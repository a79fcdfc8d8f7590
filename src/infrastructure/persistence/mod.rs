//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! bound parameters for every user-supplied value.
//!
//! # Repositories
//!
//! - [`PgChefRepository`] - Chef lookups and registration
//! - [`PgRecipeRepository`] - Authored, favorited and liked recipe reads
//! - [`PgSessionRepository`] - Session token storage and validation

pub mod pg_chef_repository;
pub mod pg_recipe_repository;
pub mod pg_session_repository;
mod rows;

pub use pg_chef_repository::PgChefRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_session_repository::PgSessionRepository;
