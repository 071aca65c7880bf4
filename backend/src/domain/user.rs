//! User identity model.

use std::fmt;

use outcome::Failure;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameValidationError {
    /// Username was blank once trimmed.
    #[error("username must not be empty")]
    Empty,
    /// Username is shorter than [`USERNAME_MIN`].
    #[error("username must be at least {min} characters")]
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// Username is longer than [`USERNAME_MAX`].
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Username contains characters outside the allowed set.
    #[error("username may only contain letters, digits, underscores, or hyphens")]
    InvalidCharacters,
}

impl From<UsernameValidationError> for Failure {
    fn from(value: UsernameValidationError) -> Self {
        Self::validation(value.to_string())
    }
}

/// Stable user identifier stored as a UUID.
///
/// # Examples
/// ```
/// use chat_backend::domain::UserId;
///
/// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(UserId::new("not-a-uuid").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier, returning `None` when it is not a UUID.
    pub fn new(id: impl AsRef<str>) -> Option<Self> {
        Uuid::parse_str(id.as_ref()).ok().map(Self)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique, human-chosen account name.
///
/// ## Invariants
/// - Stored trimmed of surrounding whitespace.
/// - Between [`USERNAME_MIN`] and [`USERNAME_MAX`] characters.
/// - Only ASCII letters, digits, `_` and `-`.
///
/// # Examples
/// ```
/// use chat_backend::domain::{Username, UsernameValidationError};
///
/// let name = Username::new("  ada_l  ").unwrap();
/// assert_eq!(name.as_ref(), "ada_l");
/// assert_eq!(Username::new("a b c"), Err(UsernameValidationError::InvalidCharacters));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl AsRef<str>) -> Result<Self, UsernameValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }

        let length = trimmed.chars().count();
        if length < USERNAME_MIN {
            return Err(UsernameValidationError::TooShort { min: USERNAME_MIN });
        }
        if length > USERNAME_MAX {
            return Err(UsernameValidationError::TooLong { max: USERNAME_MAX });
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
        if !trimmed.chars().all(allowed) {
            return Err(UsernameValidationError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
