//! Application layer services implementing the page logic.
//!
//! Services consume repository traits and give handlers a small, typed API.
//!
//! # Contents
//!
//! - [`services::chef_service::ChefService`] - Profile, dashboard, liked-by and list reads
//! - [`services::auth_service::AuthService`] - Session token authentication
//! - [`pagination`] - Page-number pagination shared by the list pages

pub mod pagination;
pub mod services;
