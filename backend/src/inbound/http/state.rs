//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain services and stay testable without I/O.

use std::sync::Arc;

use crate::domain::AccountService;
use crate::domain::ports::{IdentityProvisioner, UserStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and login use-cases.
    pub accounts: Arc<AccountService>,
}

impl HttpState {
    /// Wire the account service over the given ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use chat_backend::domain::ports::FixtureIdentityProvisioner;
    /// use chat_backend::inbound::http::state::HttpState;
    /// use chat_backend::outbound::memory::MemoryUserStore;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(MemoryUserStore::default()),
    ///     Arc::new(FixtureIdentityProvisioner),
    /// );
    /// let _shared = actix_web::web::Data::new(state);
    /// ```
    pub fn new(store: Arc<dyn UserStore>, provisioner: Arc<dyn IdentityProvisioner>) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(store, provisioner)),
        }
    }
}
