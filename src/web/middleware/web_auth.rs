//! Cookie-based authentication middleware for chef pages.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Uri, header::COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect::login_url;
use crate::web::extract::CurrentChef;

/// Name of the cookie carrying the raw session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Authenticates page requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `session_token` cookie from request
/// 2. Resolve it to a chef via [`crate::application::services::AuthService`]
/// 3. On success, store [`CurrentChef`] in request extensions and continue
/// 4. On failure or missing cookie, redirect to `/login?next=<requested path>`
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/dashboard", get(dashboard_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
///
/// # Errors
///
/// Returns a `303 See Other` redirect to the login page if:
/// - `session_token` cookie is missing or empty
/// - The token is unknown or revoked
///
/// Any other failure of the session lookup renders the error page.
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(token) = session_token(req.headers()) else {
        return redirect_to_login(req.uri()).into_response();
    };

    match st.auth_service.authenticate(&token).await {
        Ok(chef) => {
            req.extensions_mut().insert(CurrentChef(chef));
            next.run(req).await
        }
        Err(e @ AppError::Unauthorized { .. }) => {
            tracing::debug!(error = %e, path = %req.uri().path(), "Session rejected");
            redirect_to_login(req.uri()).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Extracts the session token from the `Cookie` header(s).
///
/// Handles several cookies per header and several `Cookie` headers; other
/// cookies are ignored.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Redirect to the login page that comes back to `uri` afterwards.
pub fn redirect_to_login(uri: &Uri) -> Redirect {
    let next = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    Redirect::to(&login_url(next))
}

/// `Set-Cookie` value that stores the session token.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session_token=abc123; lang=en"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_in_second_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("session_token=xyz"));
        assert_eq!(session_token(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_session_token_missing_or_empty() {
        assert!(session_token(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session_token="));
        assert!(session_token(&headers).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("not_session_token=abc"));
        assert!(session_token(&headers).is_none());
    }

    #[test]
    fn test_redirect_keeps_query() {
        let uri: Uri = "/dashboard/recipes?page=2".parse().unwrap();
        let response = redirect_to_login(&uri).into_response();

        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()["location"],
            "/login?next=%2Fdashboard%2Frecipes%3Fpage%3D2"
        );
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok", false);
        assert_eq!(cookie, "session_token=tok; Path=/; HttpOnly; SameSite=Lax");
        assert!(session_cookie("tok", true).ends_with("; Secure"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
