//! In-memory media store for tests and single-process deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{MediaError, MediaResult};
use crate::traits::MediaStore;

/// An in-memory implementation of [`MediaStore`].
///
/// Objects live in a `HashMap` behind a `RwLock` and "public" URLs are
/// minted by joining the configured base URL with the object key.
pub struct InMemoryMediaStore {
    base_url: String,
    objects: RwLock<HashMap<String, StoredImage>>,
}

#[derive(Clone)]
struct StoredImage {
    content_type: String,
    bytes: Vec<u8>,
}

impl InMemoryMediaStore {
    /// Create a store minting URLs under `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Read back an object's bytes by key. Test support.
    pub fn bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .expect("lock poisoned")
            .get(key)
            .map(|img| img.bytes.clone())
    }

    /// The content type declared when `key` was uploaded. Test support.
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects
            .read()
            .expect("lock poisoned")
            .get(key)
            .map(|img| img.content_type.clone())
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> MediaResult<String> {
        if !matches!(content_type, "image/jpeg" | "image/jpg" | "image/png") {
            return Err(MediaError::UnsupportedContentType(content_type.to_string()));
        }
        if bytes.is_empty() {
            return Err(MediaError::EmptyPayload);
        }

        let mut objects = self
            .objects
            .write()
            .map_err(|e| MediaError::Unavailable(format!("lock poisoned: {e}")))?;
        debug!(key = %key, size = bytes.len(), "image uploaded");
        objects.insert(
            key.to_string(),
            StoredImage {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(format!("{}/{key}", self.base_url))
    }
}

impl std::fmt::Debug for InMemoryMediaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMediaStore")
            .field("base_url", &self.base_url)
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryMediaStore {
        InMemoryMediaStore::new("https://media.test")
    }

    #[tokio::test]
    async fn upload_returns_public_url() {
        let media = store();
        let url = media
            .upload("menu/abc.jpg", vec![1, 2, 3], "image/jpeg")
            .await
            .unwrap();
        assert_eq!(url, "https://media.test/menu/abc.jpg");
        assert_eq!(media.bytes("menu/abc.jpg").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            media.content_type("menu/abc.jpg").unwrap(),
            "image/jpeg"
        );
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_normalized() {
        let media = InMemoryMediaStore::new("https://media.test/");
        let url = media
            .upload("menu/x.png", vec![9], "image/png")
            .await
            .unwrap();
        assert_eq!(url, "https://media.test/menu/x.png");
    }

    #[tokio::test]
    async fn rejects_unsupported_content_type() {
        let err = store()
            .upload("menu/x.gif", vec![1], "image/gif")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedContentType(_)));
    }

    #[tokio::test]
    async fn rejects_empty_payload() {
        let err = store()
            .upload("menu/x.jpg", Vec::new(), "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::EmptyPayload));
    }

    #[tokio::test]
    async fn upload_under_same_key_overwrites() {
        let media = store();
        media
            .upload("menu/x.jpg", vec![1], "image/jpeg")
            .await
            .unwrap();
        media
            .upload("menu/x.jpg", vec![2], "image/jpeg")
            .await
            .unwrap();
        assert_eq!(media.len(), 1);
        assert_eq!(media.bytes("menu/x.jpg").unwrap(), vec![2]);
    }
}
