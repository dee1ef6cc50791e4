//! Project JSON handlers. All routes require a session and ownership.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use untie_entity::project::Project;
use untie_service::{CreateProjectRequest, ProjectPatch};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_project_id};
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state.projects.list(auth.context())?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    let Json(req) = body?;
    let project = state.projects.create(auth.context(), req)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

/// GET /api/v1/projects/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state.projects.get(auth.context(), parse_project_id(&id)?)?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<ProjectPatch>, JsonRejection>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let id = parse_project_id(&id)?;
    let Json(patch) = body?;
    let project = state.projects.update(auth.context(), id, patch)?;
    Ok(Json(ApiResponse::ok(project)))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .projects
        .delete(auth.context(), parse_project_id(&id)?)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Project deleted"))))
}
