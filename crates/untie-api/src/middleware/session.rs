//! Resolves the session cookie into the caller's identity.
//!
//! Runs on every request. A valid cookie attaches a [`CurrentUser`] to the
//! request extensions; a missing or rejected cookie leaves the caller
//! anonymous, and a rejected one is cleared on the response.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::SET_COOKIE;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use untie_core::clock::Clock;
use untie_entity::session::Session;
use untie_entity::user::User;
use untie_service::RequestContext;

use crate::cookies::removal_cookie;
use crate::state::AppState;

/// The verified caller of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The user as currently stored.
    pub user: User,
    /// The session the request presented.
    pub session: Session,
    /// Context handed to services.
    pub context: RequestContext,
}

/// Middleware that verifies the session cookie, if any.
pub async fn resolve_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.as_str();
    let Some(token) = jar.get(cookie_name).map(|c| c.value().to_string()) else {
        return next.run(request).await;
    };

    match state.auth.verify(&token) {
        Ok(verified) => {
            let context = RequestContext::new(&verified.user, state.clock.now());
            request.extensions_mut().insert(CurrentUser {
                user: verified.user,
                session: verified.session,
                context,
            });
            next.run(request).await
        }
        Err(e) => {
            debug!(reason = %e.kind, "Session cookie rejected");
            let mut response = next.run(request).await;
            if !sets_cookie(&response, cookie_name) {
                let removal = removal_cookie(cookie_name, state.secure_cookies()).to_string();
                if let Ok(value) = HeaderValue::from_str(&removal) {
                    response.headers_mut().append(SET_COOKIE, value);
                }
            }
            response
        }
    }
}

/// Whether the handler already set or cleared the cookie itself.
fn sets_cookie(response: &Response, name: &str) -> bool {
    let prefix = format!("{name}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with(&prefix))
}
