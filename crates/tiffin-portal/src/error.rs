use thiserror::Error;

/// Errors surfaced by portal operations.
///
/// Lower-layer errors are wrapped rather than flattened so callers can still
/// distinguish validation failures, missing records, conflicts, and backend
/// unavailability.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("invalid input: {0}")]
    Validation(#[from] tiffin_types::TypeError),

    #[error("auth error: {0}")]
    Auth(#[from] tiffin_auth::AuthError),

    #[error("store error: {0}")]
    Store(#[from] tiffin_store::StoreError),

    #[error("media error: {0}")]
    Media(#[from] tiffin_media::MediaError),
}

/// Result alias for portal operations.
pub type PortalResult<T> = Result<T, PortalError>;
