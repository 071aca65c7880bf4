//! Transport adapter collapsing an outcome into a status-classified reply.
//!
//! The reply is framework agnostic. Inbound adapters translate
//! [`ReplyStatus`] and [`ReplyBody`] into their own response types. The
//! failure-to-status table lives in [`status_for`] and nowhere else.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::{Failure, FailureBody, FailureKind, Outcome};

/// Status vocabulary shared by every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyStatus {
    /// 200: the operation succeeded.
    Ok,
    /// 400: the operation failed for any reason other than authentication.
    BadRequest,
    /// 401: the caller could not be authenticated.
    Unauthorized,
}

impl ReplyStatus {
    /// Numeric HTTP status code.
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
        }
    }
}

/// Body of a [`Reply`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    /// Success without payload.
    Empty,
    /// Serialised success payload.
    Payload(Value),
    /// Wire representation of a failure.
    Failure(FailureBody),
}

impl ReplyBody {
    /// Whether the body carries nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Terminal, status-classified result of a request.
///
/// Replies are only produced by [`IntoReply`]; they never re-enter a chain.
///
/// # Examples
/// ```
/// use outcome::{Failure, IntoReply, ReplyBody, ReplyStatus};
/// use serde_json::json;
///
/// let reply = Ok::<_, Failure>(42).into_reply();
/// assert_eq!(reply.status(), ReplyStatus::Ok);
/// assert_eq!(reply.body(), &ReplyBody::Payload(json!(42)));
///
/// let reply = Err::<u8, _>(Failure::authentication()).into_reply();
/// assert_eq!(reply.status().as_u16(), 401);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    status: ReplyStatus,
    body: ReplyBody,
}

impl Reply {
    /// Status classification.
    pub fn status(&self) -> ReplyStatus {
        self.status
    }

    /// Reply body.
    pub fn body(&self) -> &ReplyBody {
        &self.body
    }

    /// Split the reply into status and body.
    pub fn into_parts(self) -> (ReplyStatus, ReplyBody) {
        (self.status, self.body)
    }

    /// Successful reply. Any payload serialising to `null` renders as an
    /// empty body, so `Ok(Unit)`, `Ok(())` and `Ok(None::<T>)` are all
    /// indistinguishable on the wire.
    fn success(payload: Value) -> Self {
        let body = if payload.is_null() {
            ReplyBody::Empty
        } else {
            ReplyBody::Payload(payload)
        };
        Self {
            status: ReplyStatus::Ok,
            body,
        }
    }

    fn failure(failure: &Failure) -> Self {
        let status = status_for(failure);
        info!(
            status = status.as_u16(),
            level = ?failure.level(),
            category = ?failure.category(),
            message = failure.message(),
            "request resolved to a failure"
        );
        Self {
            status,
            body: ReplyBody::Failure(failure.body()),
        }
    }
}

/// Map a failure to its reply status.
pub fn status_for(failure: &Failure) -> ReplyStatus {
    match failure.kind() {
        FailureKind::Authentication => ReplyStatus::Unauthorized,
        FailureKind::Reported | FailureKind::Callback => ReplyStatus::BadRequest,
    }
}

/// Collapse a value into a [`Reply`]. Apply exactly once per request.
pub trait IntoReply {
    /// Produce the reply.
    fn into_reply(self) -> Reply;
}

impl<T: Serialize> IntoReply for Outcome<T> {
    fn into_reply(self) -> Reply {
        match self {
            Ok(value) => match serde_json::to_value(&value) {
                Ok(payload) => Reply::success(payload),
                Err(err) => {
                    error!(error = %err, "success payload could not be serialised");
                    Reply::failure(&Failure::unclassified())
                }
            },
            Err(failure) => Reply::failure(&failure),
        }
    }
}

/// Await a pending value, then collapse it into a [`Reply`].
///
/// # Examples
/// ```
/// use outcome::{Failure, ReplyStatus, into_reply_async};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let reply = into_reply_async(async { Err::<(), _>(Failure::validation("bad")) }).await;
/// assert_eq!(reply.status(), ReplyStatus::BadRequest);
/// # });
/// ```
pub async fn into_reply_async<P>(pending: impl Future<Output = P>) -> Reply
where
    P: IntoReply,
{
    pending.await.into_reply()
}
