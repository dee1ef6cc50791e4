//! Auth handlers: login, registration, logout, and the current identity.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::cookie::CookieJar;

use untie_core::error::ErrorKind;

use crate::cookies::{RETURN_TO_COOKIE, removal_cookie, safe_return_to, session_cookie};
use crate::dto::request::{LoginForm, LoginRequest, PageQuery, RegisterForm, validate};
use crate::dto::response::{
    ApiResponse, LoginResponse, MeResponse, MessageResponse, SessionResponse, UserResponse,
};
use crate::error::{ApiError, PageError};
use crate::extractors::{AuthUser, MaybeUser};
use crate::middleware::guard::LOGIN_PATH;
use crate::state::AppState;
use crate::views;

/// Errors that send the user back to the form rather than to an error page.
fn is_form_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::InvalidCredentials
            | ErrorKind::Validation
            | ErrorKind::DuplicateEmail
            | ErrorKind::DuplicateIdentifier
    )
}

fn back_to(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?error={}", urlencoding::encode(message)))
}

/// Where to go after a successful login, consuming the `return_to` cookie.
fn resume_target(jar: &CookieJar) -> String {
    jar.get(RETURN_TO_COOKIE)
        .and_then(|c| urlencoding::decode(c.value()).ok())
        .and_then(|target| safe_return_to(&target).map(str::to_string))
        .unwrap_or_else(|| "/".to_string())
}

/// GET /auth/login
pub async fn login_page(MaybeUser(user): MaybeUser, Query(query): Query<PageQuery>) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(views::login_page(query.error.as_deref())).into_response()
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    let result = validate(&form)
        .and_then(|()| state.auth.login(&form.email, &form.password, form.remember()));

    match result {
        Ok(result) => {
            let secure = state.secure_cookies();
            let target = resume_target(&jar);
            let jar = jar
                .add(session_cookie(
                    &state.config.session.cookie_name,
                    &result.session,
                    secure,
                ))
                .add(removal_cookie(RETURN_TO_COOKIE, secure));
            Ok((jar, Redirect::to(&target)).into_response())
        }
        Err(e) if is_form_error(e.kind) => Ok(back_to(LOGIN_PATH, &e.message).into_response()),
        Err(e) => Err(e.into()),
    }
}

/// GET /auth/register
pub async fn register_page(
    MaybeUser(user): MaybeUser,
    Query(query): Query<PageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(views::register_page(query.error.as_deref())).into_response()
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, PageError> {
    let result = validate(&form)
        .and_then(|()| state.auth.register_and_login(&form.email, &form.name, &form.password));

    match result {
        Ok(result) => {
            let jar = jar.add(session_cookie(
                &state.config.session.cookie_name,
                &result.session,
                state.secure_cookies(),
            ));
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(e) if is_form_error(e.kind) => {
            Ok(back_to("/auth/register", &e.message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Invalidates the presented session and returns a jar that clears its cookie.
fn end_session(state: &AppState, jar: CookieJar) -> CookieJar {
    let name = state.config.session.cookie_name.as_str();
    if let Some(cookie) = jar.get(name) {
        state.auth.logout(cookie.value());
    }
    jar.add(removal_cookie(name, state.secure_cookies()))
}

/// GET /auth/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = end_session(&state, jar);
    (jar, Redirect::to(LOGIN_PATH))
}

/// POST /api/v1/auth/login
pub async fn api_login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    let Json(req) = body?;
    validate(&req)?;

    let result = state.auth.login(&req.email, &req.password, req.remember_me)?;
    let jar = jar.add(session_cookie(
        &state.config.session.cookie_name,
        &result.session,
        state.secure_cookies(),
    ));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            user: UserResponse::from(&result.user),
            expires_at: result.session.expires_at,
        })),
    ))
}

/// POST /api/v1/auth/logout
pub async fn api_logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = end_session(&state, jar);
    (
        jar,
        Json(ApiResponse::ok(MessageResponse::new("Logged out successfully"))),
    )
}

/// GET /api/v1/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<MeResponse>> {
    Json(ApiResponse::ok(MeResponse {
        user: UserResponse::from(&auth.user),
        session: SessionResponse::from(&auth.session),
    }))
}
