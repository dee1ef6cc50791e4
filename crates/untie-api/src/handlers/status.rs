//! Workspace status for the signed-in user.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, StatusResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/status
pub async fn status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<StatusResponse>>, ApiError> {
    let environment = state.config.server.environment.clone();
    let features = state
        .config
        .features
        .enabled(&environment)
        .into_iter()
        .map(str::to_string)
        .collect();
    let project_count = state.projects.list(auth.context())?.len();

    Ok(Json(ApiResponse::ok(StatusResponse {
        user: UserResponse::from(&auth.user),
        environment,
        features,
        project_count,
    })))
}
