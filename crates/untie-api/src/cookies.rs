//! Session and return-path cookies.

use axum_extra::extract::cookie::{Cookie, SameSite};

use untie_entity::session::Session;

/// Cookie holding the path to resume after login.
pub const RETURN_TO_COOKIE: &str = "return_to";

fn base(name: String, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Session cookie whose `Max-Age` matches the session lifetime.
pub fn session_cookie(name: &str, session: &Session, secure: bool) -> Cookie<'static> {
    let mut cookie = base(name.to_string(), session.token.clone(), secure);
    cookie.set_max_age(time::Duration::seconds(session.lifetime_seconds()));
    cookie
}

/// Short-lived cookie remembering where an anonymous caller was headed.
pub fn return_to_cookie(path: &str, ttl_seconds: u64, secure: bool) -> Cookie<'static> {
    let mut cookie = base(RETURN_TO_COOKIE.to_string(), path.to_string(), secure);
    cookie.set_max_age(time::Duration::seconds(
        i64::try_from(ttl_seconds).unwrap_or(i64::MAX),
    ));
    cookie
}

/// A cookie that deletes `name` on the client (`Max-Age=0`, expiry in the past).
pub fn removal_cookie(name: &str, secure: bool) -> Cookie<'static> {
    let mut cookie = base(name.to_string(), String::new(), secure);
    cookie.make_removal();
    cookie
}

/// Returns `target` when it is a local path safe to redirect to.
///
/// Accepts paths that start with `/` but not `//` or `/\`, and contain no
/// scheme separator.
pub fn safe_return_to(target: &str) -> Option<&str> {
    let local = target.starts_with('/')
        && !target.starts_with("//")
        && !target.starts_with("/\\")
        && !target.contains("://");
    local.then_some(target)
}
