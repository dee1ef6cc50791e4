//! Profile self-service handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::cookie::CookieJar;

use untie_service::UpdateProfileRequest;

use crate::cookies::removal_cookie;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(auth.context())?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/v1/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let Json(req) = body?;
    let user = state.user_service.update_profile(auth.context(), req)?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// DELETE /api/v1/users/me
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    state.user_service.delete_account(auth.context())?;
    let jar = jar.add(removal_cookie(
        &state.config.session.cookie_name,
        state.secure_cookies(),
    ));
    Ok((jar, Json(ApiResponse::ok(MessageResponse::new("Account deleted")))))
}
