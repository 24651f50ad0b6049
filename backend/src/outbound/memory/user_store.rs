//! In-memory implementation of the [`UserStore`] port.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::UserStore;
use crate::domain::{Error, User, Username};

/// Users held in a map keyed by username.
///
/// Registration takes the write lock for the whole check-then-insert, so
/// concurrent registrations of one username cannot both succeed.
///
/// # Examples
/// ```
/// use user_registry::domain::User;
/// use user_registry::domain::ports::UserStore;
/// use user_registry::outbound::memory::InMemoryUserStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryUserStore::new();
/// let user = User::try_from_parts("alice", "a@x.com").expect("valid user");
/// store.insert(user.clone()).await.expect("first insert succeeds");
/// assert_eq!(store.find("alice").await, Ok(user));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Username, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), Error> {
        let mut users = self.users.write().await;
        match users.entry(user.username().clone()) {
            Entry::Occupied(existing) => {
                debug!(username = %existing.key(), "rejected duplicate registration");
                Err(Error::user_already_exists())
            }
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }

    async fn find(&self, username: &str) -> Result<User, Error> {
        self.users
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or_else(|| Error::user_not_found(username))
    }
}
