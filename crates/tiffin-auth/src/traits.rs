use async_trait::async_trait;

use tiffin_types::OwnerId;

use crate::error::AuthResult;

/// Minimum password length enforced on account creation.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account provisioning backend.
///
/// Implementations must be thread-safe (`Send + Sync`). Email format is not
/// validated — the address is an opaque login name — but each email maps to
/// at most one account.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an account and return its opaque unique id.
    ///
    /// Fails with [`AuthError::EmailAlreadyRegistered`] if an account already
    /// exists for `email` and [`AuthError::WeakPassword`] if the password is
    /// shorter than [`MIN_PASSWORD_LEN`].
    ///
    /// [`AuthError::EmailAlreadyRegistered`]: crate::AuthError::EmailAlreadyRegistered
    /// [`AuthError::WeakPassword`]: crate::AuthError::WeakPassword
    async fn create_user(&self, email: &str, password: &str) -> AuthResult<OwnerId>;
}
