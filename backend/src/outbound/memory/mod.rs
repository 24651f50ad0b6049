//! In-process adapters whose state lives for the lifetime of the process.

mod user_store;

pub use user_store::InMemoryUserStore;
