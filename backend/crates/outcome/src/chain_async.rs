//! Asynchronous combinators over [`Outcome`] and pending outcomes.
//!
//! Each combinator has exactly one suspension point: awaiting the
//! continuation. When the incoming outcome is a failure the continuation is
//! never called, so its future is never constructed and none of its side
//! effects can start. Panics raised while building or polling the
//! continuation become callback failures.
//!
//! Chains are strictly sequential; nothing here spawns tasks.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt as _;

use crate::chain::{Chain, contain};
use crate::transport::{IntoReply, Reply};
use crate::{Failure, Outcome};

/// Asynchronous continuations for a ready [`Outcome`].
///
/// # Examples
/// ```
/// use outcome::{ChainAsync, Failure, Outcome};
///
/// async fn lookup(id: u32) -> Outcome<String> {
///     if id == 7 {
///         Ok("ada".to_owned())
///     } else {
///         Err(Failure::data_process("no such user"))
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let name = Ok::<_, Failure>(7).and_step_async(lookup).await;
/// assert_eq!(name, Ok("ada".to_owned()));
/// # });
/// ```
pub trait ChainAsync<T>: Sized {
    /// Asynchronous [`Chain::map_step`].
    fn map_step_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Asynchronous [`Chain::and_step`].
    fn and_step_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>;
}

impl<T> ChainAsync<T> for Outcome<T> {
    fn map_step_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        map_async(self, f)
    }

    fn and_step_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        bind_async(self, f)
    }
}

async fn map_async<T, U, F, Fut>(outcome: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = U>,
{
    let value = outcome?;
    let pending = start(move || f(value))?;
    settle(pending).await
}

async fn bind_async<T, U, F, Fut>(outcome: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    let value = outcome?;
    let pending = start(move || f(value))?;
    settle(pending).await?
}

/// Continue a chain whose outcome is still pending.
///
/// Implemented for every future resolving to an [`Outcome`], so a handler
/// can build one sequential pipeline and await it once.
///
/// # Examples
/// ```
/// use outcome::{Failure, Outcome, OutcomeFuture, ReplyStatus, Unit};
///
/// async fn insert(name: &str) -> Outcome<u32> {
///     if name.is_empty() {
///         Err(Failure::validation("name must not be empty"))
///     } else {
///         Ok(1)
///     }
/// }
///
/// async fn notify(_id: u32) -> Outcome<Unit> {
///     Ok(Unit)
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let reply = insert("ada").and_step_async(notify).into_reply_async().await;
/// assert_eq!(reply.status(), ReplyStatus::Ok);
///
/// let reply = insert("").and_step_async(notify).into_reply_async().await;
/// assert_eq!(reply.status(), ReplyStatus::BadRequest);
/// # });
/// ```
pub trait OutcomeFuture<T>: Future<Output = Outcome<T>> + Sized {
    /// Await, then apply [`Chain::map_step`].
    fn map_step<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map_step(f) }
    }

    /// Await, then apply [`Chain::map_failure`].
    fn map_failure<G>(self, g: G) -> impl Future<Output = Outcome<T>>
    where
        G: FnOnce(Failure) -> Failure,
    {
        async move { self.await.map_failure(g) }
    }

    /// Await, then apply [`Chain::and_step`].
    fn and_step<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.and_step(f) }
    }

    /// Await, then apply [`ChainAsync::map_step_async`].
    fn map_step_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_step_async(f).await }
    }

    /// Await, then apply [`ChainAsync::and_step_async`].
    fn and_step_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.and_step_async(f).await }
    }

    /// Await, then collapse into a [`Reply`].
    fn into_reply_async(self) -> impl Future<Output = Reply>
    where
        Outcome<T>: IntoReply,
    {
        async move { self.await.into_reply() }
    }
}

impl<T, P> OutcomeFuture<T> for P where P: Future<Output = Outcome<T>> {}

/// Build the continuation's future, containing a panic in the constructor.
fn start<Fut>(build: impl FnOnce() -> Fut) -> Outcome<Fut> {
    panic::catch_unwind(AssertUnwindSafe(build)).map_err(|payload| contain(&*payload))
}

/// Poll the continuation to completion, containing a panic while polling.
async fn settle<Fut: Future>(pending: Fut) -> Outcome<Fut::Output> {
    AssertUnwindSafe(pending)
        .catch_unwind()
        .await
        .map_err(|payload| contain(&*payload))
}
