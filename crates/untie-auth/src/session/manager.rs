//! Authentication flows: register, login, logout, and session verification.

use std::sync::Arc;

use tracing::{error, info, warn};

use untie_core::clock::Clock;
use untie_core::config::SeedConfig;
use untie_core::error::{AppError, ErrorKind};
use untie_core::result::AppResult;
use untie_core::traits::Repository;
use untie_entity::session::Session;
use untie_entity::user::{User, UserRole};
use untie_store::UserRepository;

use crate::password::{PasswordHasher, PasswordValidator};

use super::registry::{SessionRegistry, VerifiedSession};

/// Result of a successful login or registration.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The freshly issued session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Credential checks and session lifecycle on top of the user store.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<SessionRegistry>,
    hasher: Arc<PasswordHasher>,
    validator: PasswordValidator,
    clock: Arc<dyn Clock>,
    /// Verified against when the email is unknown so both failure paths cost one hash.
    dummy_hash: String,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("validator", &self.validator)
            .finish()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<SessionRegistry>,
        hasher: Arc<PasswordHasher>,
        validator: PasswordValidator,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash_password("untie-dummy-password")?;
        Ok(Self {
            users,
            sessions,
            hasher,
            validator,
            clock,
            dummy_hash,
        })
    }

    /// Checks an email/password pair.
    ///
    /// Unknown emails and wrong passwords produce the same
    /// `InvalidCredentials` error. On success `last_login_at` is stamped.
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.users.find_by_email(email)? else {
            let _ = self.hasher.verify_password(password, &self.dummy_hash);
            warn!("Login attempt for unknown email");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        match self.users.touch_last_login(&user.id, self.clock.now()) {
            Ok(user) => Ok(user),
            Err(e) if e.kind == ErrorKind::NotFound => Err(AppError::invalid_credentials()),
            Err(e) => Err(e),
        }
    }

    /// Authenticates and issues a session.
    pub fn login(&self, email: &str, password: &str, remember_me: bool) -> AppResult<LoginResult> {
        let user = self.authenticate(email, password)?;
        let session = self.sessions.issue(&user, remember_me)?;
        info!(user_id = %user.id, "Login successful");
        Ok(LoginResult { session, user })
    }

    /// Creates a new account. The caller decides whether to start a session.
    pub fn register(&self, email: &str, name: &str, password: &str) -> AppResult<User> {
        self.validator.validate_email(email)?;
        self.validator.validate_name(name)?;
        self.validator.validate(password)?;

        let hash = self.hasher.hash_password(password)?;
        let user = User::new(email, name.trim(), UserRole::User, hash, self.clock.now());
        let user = self.users.create(user)?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Registers and immediately issues a short-lived session.
    ///
    /// If issuing fails the account remains and the error is returned.
    pub fn register_and_login(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> AppResult<LoginResult> {
        let user = self.register(email, name, password)?;
        let session = self.start_session(&user, false).map_err(|e| {
            error!(user_id = %user.id, error = %e, "Registered user but could not start session");
            e
        })?;
        Ok(LoginResult { session, user })
    }

    /// Issues a session for an already-authenticated user.
    pub fn start_session(&self, user: &User, remember_me: bool) -> AppResult<Session> {
        self.sessions.issue(user, remember_me)
    }

    /// Ends a session. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        self.sessions.invalidate(token);
    }

    /// Resolves a session token to its session and current user.
    pub fn verify(&self, token: &str) -> AppResult<VerifiedSession> {
        self.sessions.verify(token)
    }

    /// Creates the configured development account if it does not already exist.
    ///
    /// Returns the existing or created user, or `None` when seeding is off.
    pub fn seed_user(&self, seed: &SeedConfig) -> AppResult<Option<User>> {
        if !seed.enabled {
            return Ok(None);
        }
        if let Some(existing) = self.users.find_by_email(&seed.email)? {
            return Ok(Some(existing));
        }

        let role: UserRole = seed.role.parse()?;
        self.validator.validate_email(&seed.email)?;
        self.validator.validate(&seed.password)?;
        let hash = self.hasher.hash_password(&seed.password)?;
        let user = self
            .users
            .create(User::new(&seed.email, seed.name.trim(), role, hash, self.clock.now()))?;
        info!(user_id = %user.id, role = %user.role, "Seeded development account");
        Ok(Some(user))
    }

    /// The underlying session registry.
    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }
}
