//! Object key generation for uploads.

use uuid::Uuid;

use crate::error::{MediaError, MediaResult};

/// Generate a fresh object key for a menu image.
///
/// Keys have the shape `menu/<uuid>.<ext>` with the extension derived from
/// the declared content type. Only JPEG and PNG are accepted.
pub fn menu_image_key(content_type: &str) -> MediaResult<String> {
    let ext = extension_for(content_type)?;
    Ok(format!("menu/{}.{ext}", Uuid::new_v4()))
}

fn extension_for(content_type: &str) -> MediaResult<&'static str> {
    match content_type {
        "image/jpeg" | "image/jpg" => Ok("jpg"),
        "image/png" => Ok("png"),
        other => Err(MediaError::UnsupportedContentType(other.to_string())),
    }
}
