//! Maps domain `AppError` to HTTP responses.
//!
//! [`ApiError`] renders the JSON error envelope used under `/api/v1`.
//! [`PageError`] renders the same failure as a small HTML page.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use untie_core::error::{AppError, ErrorKind};
use untie_core::types::ApiErrorResponse;

use crate::views;

/// HTTP status for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists | ErrorKind::DuplicateIdentifier | ErrorKind::DuplicateEmail => {
            StatusCode::CONFLICT
        }
        ErrorKind::InvalidCredentials | ErrorKind::SessionExpired | ErrorKind::SessionNotFound => {
            StatusCode::UNAUTHORIZED
        }
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Internal failures are logged in full and shown to the client generically.
fn public(err: AppError) -> AppError {
    match err.kind {
        ErrorKind::Configuration | ErrorKind::Internal => {
            tracing::error!(error = %err, "Internal server error");
            AppError::new(err.kind, "Internal server error")
        }
        _ => err,
    }
}

/// JSON error response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = public(self.0);
        let body = ApiErrorResponse::from(&err);
        (status_for(err.kind), Json(body)).into_response()
    }
}

/// HTML error response for interactive pages.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = public(self.0);
        let status = status_for(err.kind);
        (status, Html(views::error_page(status, &err.message))).into_response()
    }
}
