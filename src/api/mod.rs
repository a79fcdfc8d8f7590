//! JSON endpoints for operators.
//!
//! - [`health`] - Liveness and database check

pub mod health;

pub use health::health_handler;
