//! Domain ports implemented by outbound adapters.

mod user_store;

#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;
