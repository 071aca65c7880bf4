//! Synchronous combinators over [`Outcome`].
//!
//! Every combinator skips its continuation when the outcome is already a
//! failure, and converts a panic raised by the continuation into a
//! [`FailureKind::Callback`](crate::FailureKind::Callback) failure. This module
//! and [`crate::chain_async`] are the only places where unwinding is caught.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use crate::{Failure, Fault, Outcome, Unit};

/// Railway combinators for [`Outcome`].
///
/// The inherent `Result::map` and `Result::and_then` do not contain panics;
/// request pipelines use these methods instead.
///
/// # Examples
/// ```
/// use outcome::{Chain, Failure, Outcome};
///
/// fn non_empty(raw: &str) -> Outcome<String> {
///     if raw.trim().is_empty() {
///         Err(Failure::validation("name must not be empty"))
///     } else {
///         Ok(raw.trim().to_owned())
///     }
/// }
///
/// let greeting = non_empty(" Ada ")
///     .and_step(|name| Ok(format!("hello {name}")))
///     .map_step(|text| text.len());
/// assert_eq!(greeting, Ok(9));
///
/// let rejected = non_empty("   ").map_step(|name| name.len());
/// assert_eq!(rejected.unwrap_err().message(), "name must not be empty");
/// ```
pub trait Chain<T>: Sized {
    /// Transform the success value.
    fn map_step<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U;

    /// Transform the failure; successes pass through untouched.
    fn map_failure<G>(self, g: G) -> Outcome<T>
    where
        G: FnOnce(Failure) -> Failure;

    /// Continue with another fallible step (monadic bind).
    fn and_step<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>;

    /// Discard the success value.
    fn discard(self) -> Outcome<Unit>;
}

impl<T> Chain<T> for Outcome<T> {
    fn map_step<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        let value = self?;
        guard(move || Ok(f(value)))
    }

    fn map_failure<G>(self, g: G) -> Outcome<T>
    where
        G: FnOnce(Failure) -> Failure,
    {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => guard(move || Err(g(failure))),
        }
    }

    fn and_step<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        let value = self?;
        guard(move || f(value))
    }

    fn discard(self) -> Outcome<Unit> {
        self.map(|_| Unit)
    }
}

/// Run `step`, converting a panic into a callback failure.
pub(crate) fn guard<U>(step: impl FnOnce() -> Outcome<U>) -> Outcome<U> {
    panic::catch_unwind(AssertUnwindSafe(step)).unwrap_or_else(|payload| Err(contain(&*payload)))
}

/// Normalise a panic payload into a callback failure and log it once.
pub(crate) fn contain(payload: &(dyn Any + Send)) -> Failure {
    let fault = Fault::from_panic(payload);
    error!(fault = %fault, "chained step panicked; normalised to a callback failure");
    Failure::callback(fault)
}
