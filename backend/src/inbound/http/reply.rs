//! Actix binding for the transport reply.
//!
//! Purpose: keep [`outcome::Reply`] framework-free while letting handlers
//! return it directly. Status selection already happened in the outcome
//! crate; this module only renders the result.

use actix_web::body::BoxBody;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use outcome::{Failure, IntoReply, Outcome, Reply, ReplyBody, ReplyStatus, Unit};
use tracing::debug;

/// Responder wrapping a [`Reply`].
///
/// # Examples
/// ```
/// use chat_backend::inbound::http::HttpReply;
/// use outcome::{Failure, IntoReply};
///
/// let reply: HttpReply = Ok::<_, Failure>(42).into_reply().into();
/// assert_eq!(reply.status_code().as_u16(), 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply(Reply);

impl HttpReply {
    /// HTTP status the response will carry.
    pub fn status_code(&self) -> StatusCode {
        status_code(self.0.status())
    }

    /// Unwrap the transport reply.
    pub fn into_inner(self) -> Reply {
        self.0
    }
}

impl From<Reply> for HttpReply {
    fn from(value: Reply) -> Self {
        Self(value)
    }
}

fn status_code(status: ReplyStatus) -> StatusCode {
    match status {
        ReplyStatus::Ok => StatusCode::OK,
        ReplyStatus::BadRequest => StatusCode::BAD_REQUEST,
        ReplyStatus::Unauthorized => StatusCode::UNAUTHORIZED,
    }
}

impl Responder for HttpReply {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let (status, body) = self.0.into_parts();
        let mut builder = HttpResponse::build(status_code(status));
        match body {
            ReplyBody::Empty => builder.finish(),
            ReplyBody::Payload(payload) => builder.json(payload),
            ReplyBody::Failure(failure) => builder.json(failure),
        }
    }
}

/// JSON extractor configuration whose rejections render as failure bodies.
///
/// Register it with `App::app_data` so a malformed request body yields the
/// same `{level, category, message}` reply as any other validation failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = %req.path(), "rejected request body");
    let rejected: Outcome<Unit> = Err(Failure::validation(format!(
        "invalid request body: {err}"
    )));
    let response = HttpReply::from(rejected.into_reply()).respond_to(req);
    InternalError::from_response(err, response).into()
}
