//! Object storage for the Tiffin ordering portal.
//!
//! Menu item images are uploaded to a bucket-style store under a fresh
//! random key and referenced afterwards only by the publicly resolvable URL
//! the upload returned. The store never transforms or inspects image bytes
//! beyond the content-type gate.
//!
//! # Storage Backends
//!
//! All backends implement the [`MediaStore`] trait:
//!
//! - [`InMemoryMediaStore`] — `HashMap`-based store for tests and embedding

pub mod error;
pub mod key;
pub mod memory;
pub mod traits;

pub use error::{MediaError, MediaResult};
pub use key::menu_image_key;
pub use memory::InMemoryMediaStore;
pub use traits::MediaStore;
