//! Driven port announcing new accounts to the identity service.

use async_trait::async_trait;
use outcome::{Outcome, Unit};
use tracing::info;

use crate::domain::{UserId, Username};

/// Port notifying the identity/token service about a new account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvisioner: Send + Sync {
    /// Create the identity record for a freshly persisted account.
    async fn provision(&self, id: &UserId, username: &Username) -> Outcome<Unit>;
}

/// Development provisioner that only records the request in the logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityProvisioner;

#[async_trait]
impl IdentityProvisioner for FixtureIdentityProvisioner {
    async fn provision(&self, id: &UserId, username: &Username) -> Outcome<Unit> {
        info!(user_id = %id, username = %username, "identity provisioning skipped in fixture mode");
        Ok(Unit)
    }
}
