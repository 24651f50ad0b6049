//! Port abstraction for the registered-user store.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Keyed storage of registered users.
///
/// Implementations must make [`UserStore::insert`] atomic per username: two
/// concurrent inserts of the same key resolve to exactly one success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with [`Error::InvalidUserData`] when the username is already
    /// registered; the stored record is left untouched.
    async fn insert(&self, user: User) -> Result<(), Error>;

    /// Fetch the user registered under `username`.
    ///
    /// Fails with [`Error::UserNotFound`] when no such user exists.
    async fn find(&self, username: &str) -> Result<User, Error>;
}
