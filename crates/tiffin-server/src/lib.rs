//! HTTP server for the Tiffin ordering portal.
//!
//! Exposes the three role views over a JSON/multipart REST surface:
//! admin onboarding, owner menu and order management, and customer
//! registration, browsing, and ordering. Backends are in-memory; the portal
//! handles are injected through [`AppState`], so any other backend
//! implementing the service traits can be swapped in.
//!
//! [`AppState`]: state::AppState

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use server::PortalServer;
pub use state::AppState;
