//! Web layer: server-rendered chef pages.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and their templates
//! - [`middleware`] - Session authentication, rate limiting, tracing
//! - [`extract`] - The [`extract::CurrentChef`] guard
//! - [`dto`] - Query-string and form types
//! - [`routes`] - Route tables

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
