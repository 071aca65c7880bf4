//! Account use-cases: registration and login.
//!
//! Both operations are single railway chains. Validation runs first and a
//! rejected input never reaches the store or the provisioner.

use std::sync::Arc;

use outcome::{ChainAsync, Failure, Outcome, OutcomeFuture, Unit};

use super::ports::{IdentityProvisioner, UserStore};
use super::{LoginCredentials, Registration, UserId};

/// Account service composed over the driven ports.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    provisioner: Arc<dyn IdentityProvisioner>,
}

impl AccountService {
    /// Build the service from its collaborators.
    pub fn new(store: Arc<dyn UserStore>, provisioner: Arc<dyn IdentityProvisioner>) -> Self {
        Self { store, provisioner }
    }

    /// Register a new account.
    ///
    /// Validate, persist, then provision the identity. A provisioning failure
    /// after persistence is reported as-is; the stored account is not rolled
    /// back.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use chat_backend::domain::AccountService;
    /// use chat_backend::domain::ports::FixtureIdentityProvisioner;
    /// use chat_backend::outbound::memory::MemoryUserStore;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let service = AccountService::new(
    ///     Arc::new(MemoryUserStore::default()),
    ///     Arc::new(FixtureIdentityProvisioner),
    /// );
    /// assert!(service.register("ada", "pw", "pw").await.is_ok());
    /// assert!(service.register("ada", "pw", "pw").await.is_err());
    /// # });
    /// ```
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Outcome<Unit> {
        Registration::try_from_parts(username, password, confirmation)
            .map_err(Failure::from)
            .and_step_async(|registration| async move {
                let id = self.store.insert(&registration).await?;
                Ok((id, registration))
            })
            .and_step_async(|(id, registration)| async move {
                self.provisioner
                    .provision(&id, registration.username())
                    .await
            })
            .await
    }

    /// Authenticate an account and return its identifier.
    ///
    /// Unknown usernames and wrong passwords both produce the authentication
    /// failure.
    pub async fn login(&self, username: &str, password: &str) -> Outcome<UserId> {
        LoginCredentials::try_from_parts(username, password)
            .map_err(Failure::from)
            .and_step_async(|credentials| async move {
                self.store.find_by_credentials(&credentials).await
            })
            .and_step(|found| found.ok_or_else(Failure::authentication))
            .await
    }
}
