//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use untie_auth::{AuthService, PasswordHasher, PasswordValidator, SessionRegistry};
use untie_core::clock::{Clock, SystemClock};
use untie_core::config::AppConfig;
use untie_core::result::AppResult;
use untie_entity::project::Project;
use untie_service::{ProjectService, UserService};
use untie_store::{MemoryResourceStore, MemoryUserStore, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Time source for request contexts
    pub clock: Arc<dyn Clock>,

    // ── Stores ───────────────────────────────────────────────
    /// Identity store
    pub users: Arc<dyn UserRepository>,
    /// Live sessions
    pub sessions: Arc<SessionRegistry>,

    // ── Services ─────────────────────────────────────────────
    /// Login, registration, and session verification
    pub auth: Arc<AuthService>,
    /// Owner-scoped project operations
    pub projects: Arc<ProjectService>,
    /// Profile self-service
    pub user_service: Arc<UserService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.server.environment)
            .field("sessions", &self.sessions)
            .finish()
    }
}

impl AppState {
    /// Wires the in-memory stores and services for production use.
    pub fn build(config: AppConfig) -> AppResult<Self> {
        Self::with_parts(config, Arc::new(SystemClock), PasswordHasher::new())
    }

    /// Wires the state with an explicit clock and hasher.
    pub fn with_parts(
        config: AppConfig,
        clock: Arc<dyn Clock>,
        hasher: PasswordHasher,
    ) -> AppResult<Self> {
        let users: Arc<dyn UserRepository> = Arc::new(MemoryUserStore::new());
        let project_store = Arc::new(MemoryResourceStore::<Project>::new());
        let sessions = Arc::new(SessionRegistry::new(
            Arc::clone(&users),
            Arc::clone(&clock),
            config.session.clone(),
        ));
        let validator = PasswordValidator::new(&config.auth);

        let auth = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&sessions),
            Arc::new(hasher),
            validator.clone(),
            Arc::clone(&clock),
        )?);
        let projects = Arc::new(ProjectService::new(project_store, Arc::clone(&clock)));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&sessions),
            validator,
            Arc::clone(&clock),
        ));

        Ok(Self {
            config: Arc::new(config),
            clock,
            users,
            sessions,
            auth,
            projects,
            user_service,
        })
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.config.server.secure_cookies
    }
}
