//! In-memory auth provider for tests and single-process deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tiffin_types::OwnerId;
use tracing::info;

use crate::error::{AuthError, AuthResult};
use crate::traits::{AuthProvider, MIN_PASSWORD_LEN};

/// An in-memory implementation of [`AuthProvider`].
///
/// Accounts live in a `HashMap` keyed by lowercased email. Passwords are held
/// only to honor the length check at creation; there is no sign-in path that
/// would ever read them back.
pub struct InMemoryAuthProvider {
    accounts: RwLock<HashMap<String, Account>>,
}

struct Account {
    id: OwnerId,
    #[allow(dead_code)]
    password: String,
}

impl InMemoryAuthProvider {
    /// Create a provider with no accounts.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of provisioned accounts.
    pub fn len(&self) -> usize {
        self.accounts.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no accounts exist.
    pub fn is_empty(&self) -> bool {
        self.accounts.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn create_user(&self, email: &str, password: &str) -> AuthResult<OwnerId> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let key = email.trim().to_ascii_lowercase();
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| AuthError::Unavailable(format!("lock poisoned: {e}")))?;

        if accounts.contains_key(&key) {
            return Err(AuthError::EmailAlreadyRegistered(email.to_string()));
        }

        let id = OwnerId::generate();
        info!(email = %key, id = %id, "account created");
        accounts.insert(
            key,
            Account {
                id: id.clone(),
                password: password.to_string(),
            },
        );
        Ok(id)
    }
}

impl std::fmt::Debug for InMemoryAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAuthProvider")
            .field("account_count", &self.len())
            .finish()
    }
}
