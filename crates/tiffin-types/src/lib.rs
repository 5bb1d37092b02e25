//! Foundation types for the Tiffin ordering portal.
//!
//! This crate provides the identity, scalar, and record types used throughout
//! the Tiffin system. Every other Tiffin crate depends on `tiffin-types`.
//!
//! # Key Types
//!
//! - [`OwnerId`] — Auth-issued hotel owner identifier; doubles as the hotel's
//!   storage key
//! - [`CustomerId`], [`MenuItemId`], [`OrderId`] — Generated UUID keys
//! - [`Role`] — Operator role tag with default fallthrough to Customer
//! - [`OrderStatus`] — Two-state order lifecycle with one forward transition
//! - [`Mobile`], [`Price`] — Boundary-validated scalars
//! - [`Hotel`], [`MenuItem`], [`Customer`], [`Order`] — Stored records

pub mod customer;
pub mod error;
pub mod hotel;
pub mod id;
pub mod mobile;
pub mod order;
pub mod price;
pub mod role;

pub use customer::Customer;
pub use error::TypeError;
pub use hotel::{Hotel, MenuItem};
pub use id::{CustomerId, MenuItemId, OrderId, OwnerId};
pub use mobile::Mobile;
pub use order::{Order, OrderStatus};
pub use price::Price;
pub use role::Role;
