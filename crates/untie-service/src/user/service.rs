//! User self-service operations: profile viewing, editing, and account removal.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use untie_auth::{PasswordValidator, SessionRegistry};
use untie_core::clock::Clock;
use untie_core::result::AppResult;
use untie_core::traits::Repository;
use untie_entity::user::{User, normalize_email};
use untie_store::UserRepository;

use crate::context::RequestContext;

/// Data for updating a user's own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name (optional).
    pub name: Option<String>,
    /// New email (optional).
    pub email: Option<String>,
}

/// Handles user self-service operations.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<SessionRegistry>,
    validator: PasswordValidator,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<SessionRegistry>,
        validator: PasswordValidator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            sessions,
            validator,
            clock,
        }
    }

    /// Gets the current user's profile.
    pub fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users.get(&ctx.user_id)
    }

    /// Updates the current user's name and/or email.
    ///
    /// An email already held by another user fails with `DuplicateEmail` and
    /// leaves the profile unchanged.
    pub fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> AppResult<User> {
        let name = match req.name {
            Some(name) => {
                self.validator.validate_name(&name)?;
                Some(name.trim().to_string())
            }
            None => None,
        };
        let email = match req.email {
            Some(email) => {
                self.validator.validate_email(&email)?;
                Some(normalize_email(&email))
            }
            None => None,
        };
        let now = self.clock.now();

        let user = self.users.modify(&ctx.user_id, &mut |user: &mut User| {
            if let Some(name) = &name {
                user.name.clone_from(name);
            }
            if let Some(email) = &email {
                user.email.clone_from(email);
            }
            user.updated_at = now.max(user.created_at);
        })?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Deletes the current user and revokes every session they hold.
    ///
    /// Projects the user owned are left in place and become unreachable.
    pub fn delete_account(&self, ctx: &RequestContext) -> AppResult<()> {
        self.users.delete(&ctx.user_id)?;
        let revoked = self.sessions.revoke_user(ctx.user_id);
        info!(user_id = %ctx.user_id, sessions_revoked = revoked, "Account deleted");
        Ok(())
    }
}
