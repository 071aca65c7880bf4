//! Railway-style outcome composition shared by the chat backend services.
//!
//! Purpose: give every service one way to describe the result of a fallible
//! operation, chain such operations without nested branching, contain
//! unexpected faults raised inside chained steps, and collapse the final
//! outcome into a status-classified reply.
//!
//! Public surface:
//! - [`Outcome`]: `Result<T, Failure>`, the only outcome type.
//! - [`Failure`] with [`ErrorLevel`], [`ErrorType`], [`FailureKind`] and
//!   [`Fault`]: the failure taxonomy.
//! - [`Unit`]: success marker for operations without a payload.
//! - [`Chain`], [`ChainAsync`] and [`OutcomeFuture`]: combinators.
//! - [`IntoReply`], [`into_reply_async`] and [`Reply`]: transport adapter.
//! - [`legacy::Either`]: compatibility facade for older call sites.
//!
//! # Examples
//! ```
//! use outcome::{Chain, Failure, IntoReply, Outcome, ReplyStatus};
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     raw.parse().map_err(|_| Failure::validation("age must be a number"))
//! }
//!
//! let reply = parse_age("42").map_step(|age| age + 1).into_reply();
//! assert_eq!(reply.status(), ReplyStatus::Ok);
//!
//! let reply = parse_age("old").map_step(|age| age + 1).into_reply();
//! assert_eq!(reply.status(), ReplyStatus::BadRequest);
//! ```

pub mod chain;
pub mod chain_async;
pub mod failure;
pub mod legacy;
pub mod transport;
pub mod unit;

pub use self::chain::Chain;
pub use self::chain_async::{ChainAsync, OutcomeFuture};
pub use self::failure::{
    ErrorLevel, ErrorType, Failure, FailureBody, FailureKind, FailureValidationError, Fault,
};
pub use self::transport::{IntoReply, Reply, ReplyBody, ReplyStatus, into_reply_async};
pub use self::unit::Unit;

/// Outcome of a fallible operation: a value or a classified [`Failure`].
///
/// # Examples
/// ```
/// use outcome::{Failure, Outcome, Unit};
///
/// fn persist() -> Outcome<Unit> {
///     Err(Failure::system("store unavailable"))
/// }
///
/// assert!(persist().is_err());
/// ```
pub type Outcome<T> = Result<T, Failure>;

/// Successful outcome carrying no payload.
///
/// # Examples
/// ```
/// use outcome::{Unit, done};
///
/// assert_eq!(done(), Ok(Unit));
/// ```
pub const fn done() -> Outcome<Unit> {
    Ok(Unit)
}
