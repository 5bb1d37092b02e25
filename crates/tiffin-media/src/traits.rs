use async_trait::async_trait;

use crate::error::MediaResult;

/// Bucket-style object storage for uploaded images.
///
/// Implementations must be thread-safe (`Send + Sync`). Uploads are
/// fire-and-forget from the portal's perspective: once `upload` returns a
/// URL, the object is publicly resolvable and never mutated or deleted. A
/// record write failing after a successful upload leaves an orphaned object;
/// the portal does not roll uploads back.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload `bytes` under `key` and return the public URL.
    ///
    /// Fails with [`MediaError::UnsupportedContentType`] for anything other
    /// than JPEG or PNG and [`MediaError::EmptyPayload`] for a zero-byte
    /// body.
    ///
    /// [`MediaError::UnsupportedContentType`]: crate::MediaError::UnsupportedContentType
    /// [`MediaError::EmptyPayload`]: crate::MediaError::EmptyPayload
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> MediaResult<String>;
}
