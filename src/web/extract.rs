//! Request extractors for page handlers.

use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};

use crate::domain::entities::Chef;
use crate::web::middleware::web_auth::redirect_to_login;

/// The authenticated chef making the request.
///
/// Inserted by [`crate::web::middleware::web_auth::layer`]. Taking it as a
/// handler argument is the authentication guard: when the extension is absent
/// the handler never runs and the caller is redirected to the login page.
#[derive(Debug, Clone)]
pub struct CurrentChef(pub Chef);

impl<S> FromRequestParts<S> for CurrentChef
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentChef>()
            .cloned()
            .ok_or_else(|| redirect_to_login(&parts.uri))
    }
}
