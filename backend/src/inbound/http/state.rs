//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable with isolated stores.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_registry::inbound::http::state::HttpState;
/// use user_registry::outbound::memory::InMemoryUserStore;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStore::new()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
