//! Login form and query DTOs.

use serde::Deserialize;
use validator::Validate;

/// `?next=` on the login page.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

/// Submitted login form.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    /// Session token issued with `admin session create`.
    #[validate(length(min = 1, max = 256, message = "Enter the login token you were given"))]
    pub token: String,

    /// Page to return to after logging in.
    #[serde(default)]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_validation() {
        let ok = LoginForm {
            token: "abc".to_string(),
            next: None,
        };
        assert!(ok.validate().is_ok());

        let empty = LoginForm {
            token: String::new(),
            next: None,
        };
        assert!(empty.validate().is_err());

        let huge = LoginForm {
            token: "x".repeat(257),
            next: None,
        };
        assert!(huge.validate().is_err());
    }
}
