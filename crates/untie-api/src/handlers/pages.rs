//! Server-rendered workspace pages. Every route here sits behind the page guard.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use untie_core::error::{AppError, ErrorKind};
use untie_service::CreateProjectRequest;

use crate::dto::request::{PageQuery, ProjectForm};
use crate::error::PageError;
use crate::extractors::{AuthUser, parse_project_id};
use crate::state::AppState;
use crate::views;

const DASHBOARD_RECENT: usize = 3;

/// GET /
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Html<String>, PageError> {
    let recent = state.projects.recent(auth.context(), DASHBOARD_RECENT)?;
    let features = state
        .config
        .features
        .enabled(&state.config.server.environment);
    Ok(Html(views::dashboard(&auth.user, &recent, &features)))
}

/// GET /projects
pub async fn projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let projects = state.projects.list(auth.context())?;
    Ok(Html(views::projects_page(
        &auth.user,
        &projects,
        query.error.as_deref(),
    )))
}

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Form(form): Form<ProjectForm>,
) -> Result<Response, PageError> {
    let req = CreateProjectRequest {
        name: form.name,
        description: form.description,
        ..Default::default()
    };
    match state.projects.create(auth.context(), req) {
        Ok(project) => Ok(Redirect::to(&format!("/projects/{}", project.id)).into_response()),
        Err(e) if e.kind == ErrorKind::Validation => Ok(Redirect::to(&format!(
            "/projects?error={}",
            urlencoding::encode(&e.message)
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// GET /projects/{id}
pub async fn project_detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let project = state.projects.get(auth.context(), parse_project_id(&id)?)?;
    let features = state
        .config
        .features
        .enabled(&state.config.server.environment);
    Ok(Html(views::project_detail(&auth.user, &project, &features)))
}

/// GET /projects/{id}/{feature}
///
/// Disabled or unknown features are reported as missing before the project
/// is looked up; the ownership check still runs for every enabled feature.
pub async fn feature_page(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, feature)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    if !state
        .config
        .features
        .is_enabled(&feature, &state.config.server.environment)
    {
        return Err(AppError::not_found(format!("Unknown page: {feature}")).into());
    }
    let project = state.projects.get(auth.context(), parse_project_id(&id)?)?;
    Ok(Html(views::feature_page(&auth.user, &project, &feature)))
}
