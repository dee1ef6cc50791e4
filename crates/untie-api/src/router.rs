//! Route definitions for Un-tie.me.
//!
//! Pages live at the root, the JSON API under `/api/v1`. Every request passes
//! through the session resolver; protected groups add a page or API guard.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the session gate.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .merge(public_page_routes())
        .merge(protected_page_routes(state.clone()));

    let api = Router::new()
        .merge(public_api_routes())
        .merge(protected_api_routes());

    Router::new()
        .merge(pages)
        .nest("/api/v1", api)
        .route("/health", get(handlers::health::health))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::resolve_session,
        ))
        .with_state(state)
}

/// Login, registration, and logout pages
fn public_page_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route(
            "/auth/register",
            get(handlers::auth::register_page).post(handlers::auth::register),
        )
        .route("/auth/logout", get(handlers::auth::logout))
}

/// Dashboard and project workspace pages
fn protected_page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route(
            "/projects",
            get(handlers::pages::projects).post(handlers::pages::create_project),
        )
        .route("/projects/{id}", get(handlers::pages::project_detail))
        .route("/projects/{id}/{feature}", get(handlers::pages::feature_page))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::guard::require_page_auth,
        ))
}

/// API endpoints reachable without a session
fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::api_login))
        .route("/auth/logout", post(handlers::auth::api_logout))
}

/// API endpoints that answer 401 without a session
fn protected_api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/status", get(handlers::status::status))
        .route(
            "/users/me",
            get(handlers::user::get_profile)
                .put(handlers::user::update_profile)
                .delete(handlers::user::delete_account),
        )
        .route(
            "/projects",
            get(handlers::project::list).post(handlers::project::create),
        )
        .route(
            "/projects/{id}",
            get(handlers::project::get)
                .put(handlers::project::update)
                .delete(handlers::project::delete),
        )
        .route_layer(axum_middleware::from_fn(middleware::guard::require_api_auth))
}
