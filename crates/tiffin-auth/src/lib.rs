//! Account provisioning for the Tiffin ordering portal.
//!
//! The admin flow creates one auth account per hotel; the opaque id the
//! provider returns becomes the hotel's storage key. There is no further
//! account lifecycle — no password reset, no deactivation, no sign-in flow.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{AuthError, AuthResult};
pub use memory::InMemoryAuthProvider;
pub use traits::{AuthProvider, MIN_PASSWORD_LEN};
