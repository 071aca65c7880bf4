//! Domain primitives, ports and account use-cases.
//!
//! Purpose: define the strongly typed account model and the services that
//! compose fallible port calls into a single [`outcome::Outcome`]. Nothing in
//! here knows about HTTP; inbound adapters collapse outcomes into replies.
//!
//! Public surface:
//! - [`UserId`], [`Username`]: account identity.
//! - [`LoginCredentials`], [`Registration`]: validated inputs.
//! - [`AccountService`]: registration and login chains.
//! - [`ports`]: driven ports implemented by outbound adapters.

pub mod accounts;
pub mod auth;
pub mod ports;
pub mod user;

pub use self::accounts::AccountService;
pub use self::auth::{CredentialsValidationError, LoginCredentials, Registration};
pub use self::user::{USERNAME_MAX, USERNAME_MIN, UserId, Username, UsernameValidationError};
