//! Session token generation.

use base64::Engine as _;
use rand::RngCore;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 32;

/// Generates a cryptographically secure random session token.
///
/// 32 bytes from the thread-local CSPRNG, encoded as URL-safe base64 without
/// padding, which yields a 43-character cookie-safe string.
pub fn generate_session_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    rand::rng().fill_bytes(&mut buffer);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_has_correct_length() {
        assert_eq!(generate_session_token().len(), 43);
    }

    #[test]
    fn test_token_is_cookie_safe() {
        let token = generate_session_token();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!token.contains('='));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_session_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
