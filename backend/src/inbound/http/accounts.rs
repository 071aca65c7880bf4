//! Account API handlers.
//!
//! ```text
//! POST /api/v1/register {"username":"ada","password":"pw","confirmation":"pw"}
//! POST /api/v1/login {"username":"ada","password":"pw"}
//! ```
//!
//! Each handler runs one outcome chain and collapses it into exactly one
//! reply.

use actix_web::{post, web};
use outcome::OutcomeFuture;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::inbound::http::reply::HttpReply;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/v1/register`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Requested username.
    pub username: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub confirmation: String,
}

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Identifier of the authenticated account.
    pub user_id: UserId,
}

/// Register a new account.
///
/// Replies 200 with an empty body, or 400 with a failure body.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> HttpReply {
    let request = payload.into_inner();
    state
        .accounts
        .register(&request.username, &request.password, &request.confirmation)
        .into_reply_async()
        .await
        .into()
}

/// Authenticate an account.
///
/// Replies 200 with `{"userId": ...}`, 401 for unknown credentials, or 400
/// for malformed input.
#[post("/login")]
pub async fn login(state: web::Data<HttpState>, payload: web::Json<LoginRequest>) -> HttpReply {
    let request = payload.into_inner();
    state
        .accounts
        .login(&request.username, &request.password)
        .map_step(|user_id| LoginResponse { user_id })
        .into_reply_async()
        .await
        .into()
}
