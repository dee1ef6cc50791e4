//! Identity store contract.

use chrono::{DateTime, Utc};

use untie_core::result::AppResult;
use untie_core::traits::Repository;
use untie_core::types::UserId;
use untie_entity::user::User;

/// Users indexed by identifier and by email.
///
/// Implementations keep exactly one user per normalized email. `create`
/// reports `DuplicateIdentifier` or `DuplicateEmail`, and an `update` whose
/// new email belongs to someone else fails with `DuplicateEmail` without
/// touching either index.
pub trait UserRepository: Repository<User> {
    /// Find a user by email. Matching is case-insensitive.
    fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Apply `change` to the stored user inside the store's write lock.
    ///
    /// Fields the closure leaves alone keep whatever value is stored at that
    /// moment, so concurrent writers to different fields never undo each
    /// other. The id cannot be changed. Email rules match `update`.
    fn modify(&self, id: &UserId, change: &mut dyn FnMut(&mut User)) -> AppResult<User>;

    /// Record a successful login. Only `last_login_at` is written.
    fn touch_last_login(&self, id: &UserId, at: DateTime<Utc>) -> AppResult<User> {
        self.modify(id, &mut |user: &mut User| user.last_login_at = Some(at))
    }
}
