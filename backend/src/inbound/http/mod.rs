//! HTTP inbound adapter exposing the account endpoints.

pub mod accounts;
pub mod reply;
pub mod state;

pub use reply::{HttpReply, json_config};
