use thiserror::Error;

/// Errors from auth provider operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An account already exists for this email.
    #[error("email already registered: {0}")]
    EmailAlreadyRegistered(String),

    /// The password is shorter than the provider's minimum.
    #[error("password too short: minimum {min} characters")]
    WeakPassword { min: usize },

    /// The auth backend is unreachable.
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
