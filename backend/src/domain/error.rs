//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and JSON bodies; nothing here carries protocol data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message reported when registering a username that is already taken.
pub const USER_ALREADY_EXISTS_MESSAGE: &str = "User already exists.";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No user is registered under the requested username.
    UserNotFound,
    /// The submitted user data was rejected.
    InvalidUserData,
}

/// Domain failure raised by the store and the request handlers.
///
/// The `Display` output is the client-facing message.
///
/// # Examples
/// ```
/// use user_registry::domain::{Error, ErrorCode};
///
/// let err = Error::user_not_found("bob");
/// assert_eq!(err.code(), ErrorCode::UserNotFound);
/// assert_eq!(err.to_string(), "User with ID bob not found.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Lookup of a username that was never registered.
    #[error("User with ID {username} not found.")]
    UserNotFound { username: String },
    /// Registration data that cannot be accepted.
    #[error("{message}")]
    InvalidUserData { message: String },
}

impl Error {
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    pub fn invalid_user_data(message: impl Into<String>) -> Self {
        Self::InvalidUserData {
            message: message.into(),
        }
    }

    /// Convenience constructor for a duplicate registration.
    pub fn user_already_exists() -> Self {
        Self::invalid_user_data(USER_ALREADY_EXISTS_MESSAGE)
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UserNotFound { .. } => ErrorCode::UserNotFound,
            Self::InvalidUserData { .. } => ErrorCode::InvalidUserData,
        }
    }
}
