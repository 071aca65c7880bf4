//! Authentication inputs: login credentials and registration forms.
//!
//! Inbound adapters hand raw strings to these constructors; every rule is
//! checked before a service talks to a port.

use std::fmt;

use outcome::Failure;
use zeroize::Zeroizing;

use super::user::{Username, UsernameValidationError};

/// Domain error returned when login or registration inputs are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Username failed validation.
    Username(UsernameValidationError),
    /// Password was empty.
    EmptyPassword,
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UsernameValidationError> for CredentialsValidationError {
    fn from(value: UsernameValidationError) -> Self {
        Self::Username(value)
    }
}

impl From<CredentialsValidationError> for Failure {
    fn from(value: CredentialsValidationError) -> Self {
        Self::validation(value.to_string())
    }
}

/// Validated login credentials used by the account service.
///
/// ## Invariants
/// - `username` satisfies the [`Username`] rules.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use chat_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "secret").unwrap();
/// assert_eq!(creds.username().as_ref(), "ada");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Validated username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration form.
///
/// Built from a username, a password and its confirmation; the two password
/// fields must match exactly.
///
/// # Examples
/// ```
/// use chat_backend::domain::{CredentialsValidationError, Registration};
///
/// let err = Registration::try_from_parts("ada", "one", "two").unwrap_err();
/// assert_eq!(err, CredentialsValidationError::PasswordMismatch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: LoginCredentials,
}

impl Registration {
    /// Validate a registration form.
    pub fn try_from_parts(
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let credentials = LoginCredentials::try_from_parts(username, password)?;
        if credentials.password() != confirmation {
            return Err(CredentialsValidationError::PasswordMismatch);
        }
        Ok(Self { credentials })
    }

    /// Username being registered.
    pub fn username(&self) -> &Username {
        self.credentials.username()
    }

    /// Chosen password.
    pub fn password(&self) -> &str {
        self.credentials.password()
    }
}
