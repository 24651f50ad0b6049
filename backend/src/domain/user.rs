//! User data model.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`User::try_from_parts`] and [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Unique key identifying a registered user.
///
/// The raw value is kept verbatim, whitespace included; only the empty
/// string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::Username;
    ///
    /// let name = Username::new("alice").expect("valid username");
    /// assert_eq!(name.as_ref(), "alice");
    /// assert!(Username::new("").is_err());
    /// assert_eq!(Username::new("  ").expect("whitespace is kept").as_ref(), "  ");
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

// Lets keyed collections be queried with `&str`; Hash and Eq agree with `String`.
impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A registered user.
///
/// Serialised as `{"username": "...", "email": "..."}`. The email address is
/// stored as given; it is not checked beyond being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = String, example = "alice")]
    username: Username,
    #[schema(example = "alice@example.com")]
    email: String,
}

impl User {
    /// Build a user from an already validated username.
    pub fn new(username: Username, email: impl Into<String>) -> Self {
        Self {
            username,
            email: email.into(),
        }
    }

    /// Validate raw request fields and build a user.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::{User, UserValidationError};
    ///
    /// let user = User::try_from_parts("alice", "a@x.com").expect("valid user");
    /// assert_eq!(user.email(), "a@x.com");
    /// assert_eq!(
    ///     User::try_from_parts("", "a@x.com"),
    ///     Err(UserValidationError::EmptyUsername)
    /// );
    /// ```
    pub fn try_from_parts(
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(Username::new(username)?, email))
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
