//! In-memory `UserStore` adapter.
//!
//! Accounts live in a mutex-guarded map keyed by username. Intended for
//! development servers and behaviour tests; nothing survives a restart.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use outcome::{Failure, Outcome};
use tracing::{debug, error};
use zeroize::Zeroizing;

use crate::domain::ports::UserStore;
use crate::domain::{LoginCredentials, Registration, UserId, Username};

/// Message reported when a username is already registered.
pub const USERNAME_TAKEN: &str = "username is already taken";

struct StoredAccount {
    id: UserId,
    password: Zeroizing<String>,
}

/// Mutex-backed account store.
///
/// # Examples
/// ```
/// use chat_backend::domain::Username;
/// use chat_backend::outbound::memory::MemoryUserStore;
///
/// let store = MemoryUserStore::default();
/// assert_eq!(store.contains(&Username::new("ada").unwrap()), Ok(false));
/// ```
#[derive(Default)]
pub struct MemoryUserStore {
    accounts: Mutex<HashMap<Username, StoredAccount>>,
}

impl MemoryUserStore {
    /// Whether an account with this username has been stored.
    ///
    /// # Errors
    /// Returns a system failure when the store lock is poisoned.
    pub fn contains(&self, username: &Username) -> Outcome<bool> {
        self.lock().map(|accounts| accounts.contains_key(username))
    }

    fn lock(&self) -> Outcome<MutexGuard<'_, HashMap<Username, StoredAccount>>> {
        self.accounts.lock().map_err(|err| {
            error!(error = %err, "user store mutex poisoned");
            Failure::system("user store is unavailable")
        })
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, registration: &Registration) -> Outcome<UserId> {
        let mut accounts = self.lock()?;
        if accounts.contains_key(registration.username()) {
            debug!(username = %registration.username(), "duplicate registration rejected");
            return Err(Failure::data_process(USERNAME_TAKEN));
        }
        let id = UserId::random();
        accounts.insert(
            registration.username().clone(),
            StoredAccount {
                id,
                password: Zeroizing::new(registration.password().to_owned()),
            },
        );
        Ok(id)
    }

    async fn find_by_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Outcome<Option<UserId>> {
        let accounts = self.lock()?;
        Ok(accounts
            .get(credentials.username())
            .filter(|account| account.password.as_str() == credentials.password())
            .map(|account| account.id))
    }
}
