//! Domain primitives, errors, and ports.
//!
//! Purpose: define the user record, the transport-agnostic error taxonomy,
//! and the store port the inbound adapters depend on. Nothing in this module
//! knows about HTTP.
//!
//! Public surface:
//! - User / Username — the registered user record and its unique key.
//! - Error / ErrorCode — domain failures and their stable symbolic codes.
//! - ports::UserStore — keyed storage of registered users.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, USER_ALREADY_EXISTS_MESSAGE};
pub use self::user::{User, UserValidationError, Username};
