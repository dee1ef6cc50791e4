//! Extractors for the caller resolved by the session middleware.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use untie_core::error::{AppError, ErrorKind};
use untie_service::RequestContext;

use crate::error::ApiError;
use crate::middleware::session::CurrentUser;

/// Authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl AuthUser {
    /// Returns the `RequestContext` for service calls.
    pub fn context(&self) -> &RequestContext {
        &self.0.context
    }
}

impl std::ops::Deref for AuthUser {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                ApiError(AppError::new(
                    ErrorKind::SessionNotFound,
                    "Authentication required",
                ))
            })
    }
}

/// The caller if signed in, `None` otherwise.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<CurrentUser>().cloned()))
    }
}
