//! Business logic services for the application layer.

pub mod auth_service;
pub mod chef_service;

pub use auth_service::{AuthService, IssuedSession};
pub use chef_service::{ChefProfile, ChefService, Dashboard};
