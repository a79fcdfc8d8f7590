//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect::{LOGIN_PATH, safe_next};
use crate::web::dto::{LoginForm, LoginQuery};
use crate::web::middleware::web_auth::{clear_session_cookie, session_cookie};

/// Template for the login page.
///
/// Renders `templates/login.html` with a token form that posts back to
/// `/login`, carrying `next` in a hidden field.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub next: String,
    pub error: Option<String>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login?next=/dashboard`
pub async fn login_page_handler(Query(query): Query<LoginQuery>) -> LoginTemplate {
    LoginTemplate {
        next: safe_next(query.next.as_deref()).to_string(),
        error: None,
    }
}

/// Checks the submitted token and starts a session.
///
/// # Endpoint
///
/// `POST /login` (form: `token`, `next`)
///
/// # Response
///
/// - **303 See Other** to `next` with the session cookie set on success
/// - **400 Bad Request** with the form re-rendered if the token field is invalid
/// - **401 Unauthorized** with the form re-rendered if the token is unknown or revoked
///
/// # Errors
///
/// Returns 500 if the session lookup fails.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let next = safe_next(form.next.as_deref()).to_string();

    if let Err(errors) = form.validate() {
        tracing::debug!(%errors, "Rejected login form");
        let page = LoginTemplate {
            next,
            error: Some("Enter the login token you were given.".to_string()),
        };
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    match state.auth_service.authenticate(form.token.trim()).await {
        Ok(chef) => {
            tracing::info!(chef = %chef.username, "Chef logged in");
            let cookie = session_cookie(form.token.trim(), state.cookies.secure);
            Ok(([(SET_COOKIE, cookie)], Redirect::to(&next)).into_response())
        }
        Err(AppError::Unauthorized { .. }) => {
            let page = LoginTemplate {
                next,
                error: Some("That login token is not valid.".to_string()),
            };
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Ends the browser session.
///
/// # Endpoint
///
/// `GET /logout`
///
/// Clears the cookie only; the stored session stays valid until revoked with
/// `admin session revoke`.
pub async fn logout_handler() -> Response {
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to(LOGIN_PATH)).into_response()
}
