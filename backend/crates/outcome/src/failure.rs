//! Failure taxonomy carried on the error channel of [`crate::Outcome`].
//!
//! A [`Failure`] is classified along two axes, severity ([`ErrorLevel`]) and
//! category ([`ErrorType`]), and carries a human-readable message. A
//! [`FailureKind`] marker distinguishes ordinary reported failures from the
//! authentication failure (which selects the unauthorised reply status) and
//! from callback failures (unexpected faults captured by a combinator).
//!
//! Only [`FailureBody`] crosses the wire. The kind marker and any captured
//! [`Fault`] stay on the server.

use std::any::Any;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message carried by every authentication failure.
pub const AUTHENTICATION_MESSAGE: &str = "the user was not found";

/// Client-facing message carried by every callback failure.
pub const CALLBACK_MESSAGE: &str = "an unexpected error occurred while processing the request";

/// Message used when a reply cannot be classified any further.
pub const UNCLASSIFIED_MESSAGE: &str = "unclassified system error";

/// Severity of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorLevel {
    /// The operation cannot continue and the failure needs attention.
    Critical,
    /// The operation was refused but the system is healthy.
    Warning,
    /// Informational failure, typically a no-op request.
    Information,
}

/// Category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Infrastructure or unexpected runtime failure.
    System,
    /// Failure while reading or writing data through a collaborator.
    DataProcess,
    /// Input rejected by validation rules.
    Validation,
}

/// Distinguishes the failure shapes that need special handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An ordinary failure constructed by application code.
    Reported,
    /// The caller could not be authenticated.
    Authentication,
    /// A chained step raised an unexpected fault.
    Callback,
}

/// Validation errors emitted by the [`Failure`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureValidationError {
    /// The message was empty once trimmed of whitespace.
    #[error("failure message must not be empty")]
    EmptyMessage,
}

/// Diagnostic record of an unexpected fault raised inside a chained step.
///
/// # Examples
/// ```
/// use outcome::Fault;
///
/// let payload: Box<dyn std::any::Any + Send> = Box::new("socket closed");
/// assert_eq!(Fault::from_panic(payload.as_ref()).message(), "socket closed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Record a fault from an explicit description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Recover the message from a panic payload.
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else
    /// is recorded as an opaque payload.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with a non-string payload".to_owned());
        Self { message }
    }

    /// Record a foreign error together with its source chain.
    ///
    /// # Examples
    /// ```
    /// use outcome::Fault;
    ///
    /// let io = std::io::Error::other("disk full");
    /// assert_eq!(Fault::from_error(&io).message(), "disk full");
    /// ```
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message }
    }

    /// Text describing the original fault.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Wire representation of a [`Failure`].
///
/// # Examples
/// ```
/// use outcome::{Failure, FailureBody};
/// use serde_json::json;
///
/// let body = Failure::validation("passwords do not match").body();
/// assert_eq!(
///     serde_json::to_value(&body).unwrap(),
///     json!({
///         "level": "warning",
///         "category": "validation",
///         "message": "passwords do not match"
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FailureBody {
    /// Severity of the failure.
    pub level: ErrorLevel,
    /// Category of the failure.
    pub category: ErrorType,
    /// Human-readable description.
    pub message: String,
}

/// Classified failure carried by [`crate::Outcome`].
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
/// - Authentication failures always carry [`AUTHENTICATION_MESSAGE`] with
///   `Critical`/`Validation` classification.
/// - Callback failures are always `Critical`/`System` and keep the captured
///   [`Fault`].
///
/// # Examples
/// ```
/// use outcome::{ErrorLevel, ErrorType, Failure, FailureKind};
///
/// let failure = Failure::new(ErrorLevel::Warning, ErrorType::Validation, "too short");
/// assert_eq!(failure.kind(), FailureKind::Reported);
/// assert_eq!(failure.message(), "too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "FailureBody")]
pub struct Failure {
    level: ErrorLevel,
    category: ErrorType,
    message: String,
    kind: FailureKind,
    fault: Option<Fault>,
}

impl Failure {
    /// Create a reported failure, panicking if validation fails.
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed. Use [`Failure::try_new`]
    /// for messages that are not compile-time constants.
    pub fn new(level: ErrorLevel, category: ErrorType, message: impl Into<String>) -> Self {
        match Self::try_new(level, category, message) {
            Ok(value) => value,
            Err(err) => panic!("failure messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        level: ErrorLevel,
        category: ErrorType,
        message: impl Into<String>,
    ) -> Result<Self, FailureValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(FailureValidationError::EmptyMessage);
        }
        Ok(Self {
            level,
            category,
            message,
            kind: FailureKind::Reported,
            fault: None,
        })
    }

    /// Input rejected by a validation step (`Warning`/`Validation`).
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed, as [`Failure::new`] does.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorLevel::Warning, ErrorType::Validation, message)
    }

    /// Collaborator refused or failed to process data (`Warning`/`DataProcess`).
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed, as [`Failure::new`] does.
    pub fn data_process(message: impl Into<String>) -> Self {
        Self::new(ErrorLevel::Warning, ErrorType::DataProcess, message)
    }

    /// Infrastructure failure (`Critical`/`System`).
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed, as [`Failure::new`] does.
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(ErrorLevel::Critical, ErrorType::System, message)
    }

    /// The caller's identity could not be established.
    pub fn authentication() -> Self {
        Self {
            level: ErrorLevel::Critical,
            category: ErrorType::Validation,
            message: AUTHENTICATION_MESSAGE.to_owned(),
            kind: FailureKind::Authentication,
            fault: None,
        }
    }

    /// Wrap an unexpected fault raised inside a chained step.
    pub fn callback(fault: Fault) -> Self {
        Self {
            level: ErrorLevel::Critical,
            category: ErrorType::System,
            message: CALLBACK_MESSAGE.to_owned(),
            kind: FailureKind::Callback,
            fault: Some(fault),
        }
    }

    /// Generic system failure for replies that cannot be classified.
    pub fn unclassified() -> Self {
        Self::system(UNCLASSIFIED_MESSAGE)
    }

    /// Severity of the failure.
    pub fn level(&self) -> ErrorLevel {
        self.level
    }

    /// Category of the failure.
    pub fn category(&self) -> ErrorType {
        self.category
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Marker distinguishing authentication and callback failures.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Original fault captured by a combinator, if any.
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Wire representation of this failure.
    pub fn body(&self) -> FailureBody {
        FailureBody {
            level: self.level,
            category: self.category,
            message: self.message.clone(),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.fault.as_ref().map(|fault| fault as &(dyn StdError + 'static))
    }
}

impl From<Failure> for FailureBody {
    fn from(value: Failure) -> Self {
        let Failure {
            level,
            category,
            message,
            ..
        } = value;
        Self {
            level,
            category,
            message,
        }
    }
}

#[cfg(test)]
mod tests;
