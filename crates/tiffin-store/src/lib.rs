//! Structured storage for the Tiffin ordering portal.
//!
//! This crate defines the [`PortalStore`] trait — the storage seam behind the
//! three role views — and an in-memory backend for tests, demos, and
//! single-process deployments.
//!
//! # Operations
//!
//! The trait mirrors the portal's data shapes rather than a generic key-value
//! surface:
//!
//! - Hotels: write-by-key (`put_hotel`) and read-all (`hotels`)
//! - Menu items: append-with-generated-key under an owner (`append_menu_item`)
//!   and read-all-under-path (`menu`)
//! - Customers: write-by-key (`put_customer`)
//! - Orders: append (`append_order`), read-all (`orders`), filter-by-equality
//!   on the hotel id (`orders_for_hotel`), and the conditional status
//!   transition (`transition_order`)
//!
//! # Design Rules
//!
//! 1. Records are created and never deleted; hotels and menu items are never
//!    updated.
//! 2. The one mutation in the system — the order status flip — is a
//!    compare-and-swap keyed on the expected prior status, so concurrent
//!    confirmers produce exactly one transition.
//! 3. An order's `hotel_id` is stored as supplied; the store does not check
//!    it against existing hotels.
//! 4. All backend failures are propagated as [`StoreError`], never silently
//!    ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPortalStore;
pub use traits::PortalStore;
