//! Web middleware: session authentication, rate limiting, request tracing.

pub mod rate_limit;
pub mod tracing;
pub mod web_auth;
