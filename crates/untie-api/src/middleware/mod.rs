//! Tower and axum middleware.

pub mod cors;
pub mod guard;
pub mod logging;
pub mod session;

pub use guard::{require_api_auth, require_page_auth};
pub use session::{CurrentUser, resolve_session};
