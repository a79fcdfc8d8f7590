//! Username validation.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum username length in characters.
pub const USERNAME_MAX_LEN: usize = 150;

/// Letters, digits and `@ . + - _`.
pub static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid username regex"));

/// Validates a username for registration.
///
/// # Rules
///
/// - Length: 1-150 characters
/// - Allowed characters: letters, digits, `@`, `.`, `+`, `-`, `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    let len = username.chars().count();

    if len == 0 || len > USERNAME_MAX_LEN {
        return Err(AppError::bad_request(
            "Username must be 1-150 characters",
            json!({ "provided_length": len }),
        ));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::bad_request(
            "Username may only contain letters, digits and @/./+/-/_",
            json!({ "username": username }),
        ));
    }

    Ok(())
}
