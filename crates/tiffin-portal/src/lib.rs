//! Role views for the Tiffin ordering portal.
//!
//! The [`Portal`] facade owns handles to the three backing services — the
//! structured store, the media store, and the auth provider — and hands out
//! one view per operator role:
//!
//! - [`AdminView`] — add hotels, list every order
//! - [`OwnerView`] — add menu items, list and confirm a hotel's orders
//! - [`CustomerView`] — register, browse hotels and menus, place orders
//!
//! Service handles are injected explicitly (no module-level singletons), so
//! any backend implementing the service traits can sit behind a view. Role
//! dispatch is stateless: every call to [`Portal::view`] re-evaluates the
//! tag, and an unrecognized tag falls through to the customer view.

pub mod admin;
pub mod customer;
pub mod error;
pub mod owner;
pub mod portal;

pub use admin::{AddHotelForm, AdminView};
pub use customer::{CustomerView, PlaceOrderForm, RegisterForm};
pub use error::{PortalError, PortalResult};
pub use owner::{AddMenuItemForm, ImageUpload, OwnerView};
pub use portal::{Portal, RoleView};
