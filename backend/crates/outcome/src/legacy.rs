//! Compatibility facade for call sites that still return a two-variant
//! success/failure value instead of [`Outcome`].
//!
//! [`Either`] converts into an [`Outcome`] and reaches the wire through the
//! same adapter, so both shapes always produce identical replies.

use serde::Serialize;

use crate::transport::{IntoReply, Reply};
use crate::{Failure, Outcome};

/// Legacy two-variant result.
///
/// # Examples
/// ```
/// use outcome::legacy::Either;
/// use outcome::{Failure, IntoReply, ReplyStatus};
///
/// let legacy: Either<u32, Failure> = Either::Failure(Failure::authentication());
/// assert_eq!(legacy.into_reply().status(), ReplyStatus::Unauthorized);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<S, F> {
    /// Successful value.
    Success(S),
    /// Failure value in the caller's own error vocabulary.
    Failure(F),
}

impl<S, F> Either<S, F> {
    /// Whether this is the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Transform the success value.
    pub fn map_success<U>(self, f: impl FnOnce(S) -> U) -> Either<U, F> {
        match self {
            Self::Success(value) => Either::Success(f(value)),
            Self::Failure(failure) => Either::Failure(failure),
        }
    }

    /// Convert into an [`Outcome`], classifying the failure on the way.
    pub fn into_outcome(self) -> Outcome<S>
    where
        F: Into<Failure>,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure.into()),
        }
    }
}

impl<S> From<Outcome<S>> for Either<S, Failure> {
    fn from(value: Outcome<S>) -> Self {
        match value {
            Ok(success) => Self::Success(success),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<S, F> IntoReply for Either<S, F>
where
    S: Serialize,
    F: Into<Failure>,
{
    fn into_reply(self) -> Reply {
        self.into_outcome().into_reply()
    }
}
