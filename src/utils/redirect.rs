//! Login redirect helpers.

use url::form_urlencoded::byte_serialize;

/// Where to send the user after logging in when no usable `next` was given.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Builds the login URL that returns to `next` after authentication.
///
/// ```
/// use chef_pages::utils::redirect::login_url;
///
/// assert_eq!(login_url("/dashboard/recipes?page=2"), "/login?next=%2Fdashboard%2Frecipes%3Fpage%3D2");
/// ```
pub fn login_url(next: &str) -> String {
    let encoded: String = byte_serialize(next.as_bytes()).collect();
    format!("{LOGIN_PATH}?next={encoded}")
}

/// Returns `next` if it is a same-site path, otherwise [`DEFAULT_LANDING`].
///
/// Rejects absolute URLs, scheme-relative `//host` targets, backslash tricks
/// and anything with control characters.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => DEFAULT_LANDING,
    }
}
