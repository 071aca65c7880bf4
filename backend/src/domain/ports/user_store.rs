//! Driven port for account persistence.
//!
//! The store is opaque to the domain: adapters report duplicates and
//! infrastructure problems as [`Failure`](outcome::Failure) values so the
//! account service can chain calls without translating errors.

use async_trait::async_trait;
use outcome::Outcome;

use crate::domain::{LoginCredentials, Registration, UserId};

/// Persistence port for registered accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account and return its identifier.
    ///
    /// Fails with a data-process failure when the username is taken.
    async fn insert(&self, registration: &Registration) -> Outcome<UserId>;

    /// Look up the account matching both username and password.
    ///
    /// `Ok(None)` means no account matched; the caller decides how to report
    /// it.
    async fn find_by_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Outcome<Option<UserId>>;
}
