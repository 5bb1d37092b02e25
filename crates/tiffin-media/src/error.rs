use thiserror::Error;

/// Errors from media store operations.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The uploaded content type is not an accepted image format.
    #[error("unsupported content type: {0} (accepted: image/jpeg, image/png)")]
    UnsupportedContentType(String),

    /// The upload carried no bytes.
    #[error("empty image payload")]
    EmptyPayload,

    /// The storage backend is unreachable or rejected the upload.
    #[error("media store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
