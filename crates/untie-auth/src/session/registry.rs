//! In-memory session registry.
//!
//! A session is `Active` from `issue` until `now >= expires_at`. Expiry is
//! detected lazily: the first `verify` after that instant removes the entry
//! and reports `SessionExpired`. `invalidate` removes an entry immediately.
//! [`SessionRegistry::purge_expired`] lets a background sweep bound memory.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use untie_core::clock::Clock;
use untie_core::config::SessionConfig;
use untie_core::error::AppError;
use untie_core::result::AppResult;
use untie_core::traits::Repository;
use untie_core::types::UserId;
use untie_entity::session::Session;
use untie_entity::user::User;
use untie_store::UserRepository;

use super::token::generate_token;

/// A session that passed verification, with its user read fresh from the store.
#[derive(Debug, Clone)]
pub struct VerifiedSession {
    /// The session after its `last_active_at` was bumped.
    pub session: Session,
    /// The owning user as currently stored.
    pub user: User,
}

/// Token-keyed registry of live sessions.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("live", &self.sessions.read().len())
            .field("config", &self.config)
            .finish()
    }
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new(
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        config: SessionConfig,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            users,
            clock,
            config,
        }
    }

    /// Issues a new session for `user`.
    ///
    /// The lifetime is the short TTL, or the long TTL when `remember_me` is
    /// set. A token collision with a live session is reported as an internal
    /// error.
    pub fn issue(&self, user: &User, remember_me: bool) -> AppResult<Session> {
        let now = self.clock.now();
        let session = Session {
            token: generate_token(),
            user_id: user.id,
            created_at: now,
            expires_at: now + self.config.ttl(remember_me),
            last_active_at: now,
            remember_me,
        };

        {
            let mut sessions = self.sessions.write();
            if sessions.contains_key(&session.token) {
                return Err(AppError::internal("Session token collision"));
            }
            sessions.insert(session.token.clone(), session.clone());
        }

        info!(
            user_id = %user.id,
            remember_me,
            expires_at = %session.expires_at,
            "Session issued"
        );
        Ok(session)
    }

    /// Verifies a token and resolves its user.
    ///
    /// Fails with `SessionNotFound` for unknown tokens and `SessionExpired`
    /// (dropping the entry) once the expiry has passed. If the user has been
    /// deleted since the session was issued the entry is dropped and the
    /// call fails with `NotFound`.
    pub fn verify(&self, token: &str) -> AppResult<VerifiedSession> {
        let now = self.clock.now();

        let session = {
            let mut sessions = self.sessions.write();
            let Some(entry) = sessions.get_mut(token) else {
                return Err(AppError::session_not_found());
            };
            if entry.is_expired_at(now) {
                let user_id = entry.user_id;
                sessions.remove(token);
                debug!(user_id = %user_id, "Expired session removed on lookup");
                return Err(AppError::session_expired());
            }
            entry.last_active_at = now;
            entry.clone()
        };

        match self.users.find_by_id(&session.user_id)? {
            Some(user) => Ok(VerifiedSession { session, user }),
            None => {
                self.sessions.write().remove(token);
                warn!(user_id = %session.user_id, "Session belonged to a deleted user");
                Err(AppError::not_found("Session user no longer exists"))
            }
        }
    }

    /// Removes a session. Unknown tokens are ignored.
    pub fn invalidate(&self, token: &str) {
        if let Some(session) = self.sessions.write().remove(token) {
            info!(user_id = %session.user_id, "Session invalidated");
        }
    }

    /// Removes every session belonging to `user_id`. Returns how many were removed.
    pub fn revoke_user(&self, user_id: UserId) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, s| s.user_id != user_id);
        let removed = before - sessions.len();
        if removed > 0 {
            info!(user_id = %user_id, count = removed, "Sessions revoked");
        }
        removed
    }

    /// Removes every expired session. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        before - sessions.len()
    }

    /// Number of stored sessions, expired or not.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether the registry holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Session settings this registry was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
