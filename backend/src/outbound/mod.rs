//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and whatever backs
//! them. The only backing today is process memory:
//!
//! - **memory**: in-process user store, reset on restart.

pub mod memory;
