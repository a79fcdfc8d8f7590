//! Authentication service for login session tokens.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Chef, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use crate::utils::token::generate_session_token;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// A freshly issued session together with its raw token.
///
/// The raw token is not recoverable afterwards.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub session: Session,
    pub token: String,
}

/// Service for authenticating chefs by session token.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. Read access to the database alone is not enough to forge or
/// replay a session.
pub struct AuthService<R: SessionRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: SessionRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when sessions were issued
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Resolves a raw token to the chef who owns the session.
    ///
    /// On success, updates the session's `last_used_at`; a failure there is
    /// logged and does not fail the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is empty, unknown, or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Chef, AppError> {
        if token.is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Empty session token"}),
            ));
        }

        let token_hash = self.hash_token(token);

        let chef = self
            .repository
            .find_chef_by_token(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked session token"}),
                )
            })?;

        if let Err(e) = self.repository.touch(&token_hash).await {
            tracing::warn!(chef = %chef.username, error = %e, "Failed to update session usage");
        }

        Ok(chef)
    }

    /// Issues a new session for a chef and returns the raw token once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue(&self, chef_id: i64, name: &str) -> Result<IssuedSession, AppError> {
        let token = generate_session_token();
        let token_hash = self.hash_token(&token);

        let session = self.repository.create(chef_id, name, &token_hash).await?;

        tracing::info!(chef_id, session_id = session.id, "Issued session");

        Ok(IssuedSession { session, token })
    }

    /// Lists a chef's sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn sessions(&self, chef_id: i64) -> Result<Vec<Session>, AppError> {
        self.repository.list_for_chef(chef_id).await
    }

    /// Revokes a session so its token stops authenticating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active session has this ID.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn revoke(&self, session_id: i64) -> Result<(), AppError> {
        if self.repository.revoke(session_id).await? {
            tracing::info!(session_id, "Revoked session");
            Ok(())
        } else {
            Err(AppError::not_found(
                "Active session not found",
                json!({ "session_id": session_id }),
            ))
        }
    }
}
