//! The [`PortalStore`] trait defining the structured storage interface.
//!
//! Any backend (in-memory, document store, key-path tree) implements this
//! trait to hold the portal's records.

use tiffin_types::{
    Customer, CustomerId, Hotel, MenuItem, MenuItemId, Order, OrderId, OrderStatus, OwnerId,
};

use crate::error::StoreResult;

/// Storage backend for portal records.
///
/// Implementations must be thread-safe (`Send + Sync`). List operations
/// return results sorted by key so callers see a stable order.
pub trait PortalStore: Send + Sync {
    /// Write (create or replace) the hotel record keyed by `owner`.
    fn put_hotel(&self, owner: &OwnerId, hotel: &Hotel) -> StoreResult<()>;

    /// Read one hotel record.
    ///
    /// Returns `Ok(None)` if no hotel exists under `owner`.
    fn hotel(&self, owner: &OwnerId) -> StoreResult<Option<Hotel>>;

    /// List every hotel record.
    fn hotels(&self) -> StoreResult<Vec<(OwnerId, Hotel)>>;

    /// Append a menu item under `owner` and return its generated key.
    ///
    /// The nested path is created on first append; the store does not require
    /// a hotel record to exist under `owner`.
    fn append_menu_item(&self, owner: &OwnerId, item: &MenuItem) -> StoreResult<MenuItemId>;

    /// List the menu items nested under `owner`.
    ///
    /// An owner with no menu (or no hotel at all) yields an empty list, not
    /// an error.
    fn menu(&self, owner: &OwnerId) -> StoreResult<Vec<(MenuItemId, MenuItem)>>;

    /// Write (create or replace) the customer record keyed by `id`.
    fn put_customer(&self, id: &CustomerId, customer: &Customer) -> StoreResult<()>;

    /// Read one customer record.
    ///
    /// Returns `Ok(None)` if no customer exists under `id`.
    fn customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>>;

    /// Append an order and return its generated key.
    fn append_order(&self, order: &Order) -> StoreResult<OrderId>;

    /// Read one order.
    ///
    /// Returns `Ok(None)` if the order does not exist.
    fn order(&self, id: &OrderId) -> StoreResult<Option<Order>>;

    /// List every order across all hotels.
    fn orders(&self) -> StoreResult<Vec<(OrderId, Order)>>;

    /// Conditionally move an order from `expected` to `next`.
    ///
    /// This is the store's only mutation. It must be atomic: the status is
    /// compared and swapped under one critical section. Fails with
    /// [`StoreError::StatusConflict`] when the current status differs from
    /// `expected`, with [`StoreError::IllegalTransition`] when the transition
    /// is not allowed by [`OrderStatus::can_transition_to`], and with
    /// [`StoreError::OrderNotFound`] when the order does not exist. Returns
    /// the updated record.
    ///
    /// [`StoreError::StatusConflict`]: crate::StoreError::StatusConflict
    /// [`StoreError::IllegalTransition`]: crate::StoreError::IllegalTransition
    /// [`StoreError::OrderNotFound`]: crate::StoreError::OrderNotFound
    fn transition_order(
        &self,
        id: &OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> StoreResult<Order>;

    /// List the orders whose `hotel_id` equals `owner`.
    ///
    /// Default implementation filters [`PortalStore::orders`]. Backends with
    /// a native equality filter may override.
    fn orders_for_hotel(&self, owner: &OwnerId) -> StoreResult<Vec<(OrderId, Order)>> {
        let orders = self.orders()?;
        Ok(orders
            .into_iter()
            .filter(|(_, order)| &order.hotel_id == owner)
            .collect())
    }
}
