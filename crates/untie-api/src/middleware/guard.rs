//! Route guards for signed-in areas.
//!
//! Both guards expect [`resolve_session`](super::session::resolve_session)
//! to have run. Anonymous callers never reach the wrapped handler.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use untie_core::error::{AppError, ErrorKind};

use crate::cookies::{return_to_cookie, safe_return_to};
use crate::error::ApiError;
use crate::state::AppState;

use super::session::CurrentUser;

/// Path of the interactive login page.
pub const LOGIN_PATH: &str = "/auth/login";

/// Redirects anonymous page requests to the login page.
///
/// The original path and query are remembered in a short-lived cookie so a
/// successful login can resume there.
pub async fn require_page_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<CurrentUser>().is_some() {
        return next.run(request).await;
    }

    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let mut jar = CookieJar::new();
    if let Some(target) = safe_return_to(target) {
        jar = jar.add(return_to_cookie(
            &urlencoding::encode(target),
            state.config.session.return_to_ttl_seconds,
            state.secure_cookies(),
        ));
    }
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}

/// Answers anonymous API requests with `401 not_authenticated`.
pub async fn require_api_auth(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_some() {
        return next.run(request).await;
    }
    ApiError(AppError::new(
        ErrorKind::SessionNotFound,
        "Authentication required",
    ))
    .into_response()
}
