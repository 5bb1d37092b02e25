//! In-memory portal store for tests and single-process deployments.
//!
//! [`InMemoryPortalStore`] keeps every record family in a `HashMap` behind
//! one `RwLock`. Data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use tiffin_types::{
    Customer, CustomerId, Hotel, MenuItem, MenuItemId, Order, OrderId, OrderStatus, OwnerId,
};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::PortalStore;

/// An in-memory implementation of [`PortalStore`].
///
/// All record families live behind a single `RwLock`, so the conditional
/// order transition observes and updates the status in one critical section.
pub struct InMemoryPortalStore {
    inner: RwLock<PortalState>,
}

#[derive(Default)]
struct PortalState {
    hotels: HashMap<OwnerId, Hotel>,
    menus: HashMap<OwnerId, HashMap<MenuItemId, MenuItem>>,
    customers: HashMap<CustomerId, Customer>,
    orders: HashMap<OrderId, Order>,
}

impl InMemoryPortalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PortalState::default()),
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, PortalState>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, PortalState>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryPortalStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted<K: Ord, V>(map: impl Iterator<Item = (K, V)>) -> Vec<(K, V)> {
    let mut entries: Vec<(K, V)> = map.collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
}

impl PortalStore for InMemoryPortalStore {
    fn put_hotel(&self, owner: &OwnerId, hotel: &Hotel) -> StoreResult<()> {
        let mut state = self.write()?;
        debug!(owner = %owner, name = %hotel.name, "put hotel");
        state.hotels.insert(owner.clone(), hotel.clone());
        Ok(())
    }

    fn hotel(&self, owner: &OwnerId) -> StoreResult<Option<Hotel>> {
        let state = self.read()?;
        Ok(state.hotels.get(owner).cloned())
    }

    fn hotels(&self) -> StoreResult<Vec<(OwnerId, Hotel)>> {
        let state = self.read()?;
        Ok(sorted(
            state.hotels.iter().map(|(k, v)| (k.clone(), v.clone())),
        ))
    }

    fn append_menu_item(&self, owner: &OwnerId, item: &MenuItem) -> StoreResult<MenuItemId> {
        let mut state = self.write()?;
        let id = MenuItemId::new();
        debug!(owner = %owner, item = %item.name, id = %id, "append menu item");
        state
            .menus
            .entry(owner.clone())
            .or_default()
            .insert(id, item.clone());
        Ok(id)
    }

    fn menu(&self, owner: &OwnerId) -> StoreResult<Vec<(MenuItemId, MenuItem)>> {
        let state = self.read()?;
        match state.menus.get(owner) {
            Some(items) => Ok(sorted(items.iter().map(|(k, v)| (*k, v.clone())))),
            None => Ok(Vec::new()),
        }
    }

    fn put_customer(&self, id: &CustomerId, customer: &Customer) -> StoreResult<()> {
        let mut state = self.write()?;
        debug!(id = %id, "put customer");
        state.customers.insert(*id, customer.clone());
        Ok(())
    }

    fn customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>> {
        let state = self.read()?;
        Ok(state.customers.get(id).cloned())
    }

    fn append_order(&self, order: &Order) -> StoreResult<OrderId> {
        let mut state = self.write()?;
        let id = OrderId::new();
        debug!(id = %id, hotel = %order.hotel_id, item = %order.item, "append order");
        state.orders.insert(id, order.clone());
        Ok(id)
    }

    fn order(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        let state = self.read()?;
        Ok(state.orders.get(id).cloned())
    }

    fn orders(&self) -> StoreResult<Vec<(OrderId, Order)>> {
        let state = self.read()?;
        Ok(sorted(state.orders.iter().map(|(k, v)| (*k, v.clone()))))
    }

    fn transition_order(
        &self,
        id: &OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> StoreResult<Order> {
        if !expected.can_transition_to(next) {
            return Err(StoreError::IllegalTransition {
                id: *id,
                from: expected,
                to: next,
            });
        }

        let mut state = self.write()?;
        let order = state
            .orders
            .get_mut(id)
            .ok_or(StoreError::OrderNotFound(*id))?;

        if order.status != expected {
            return Err(StoreError::StatusConflict {
                id: *id,
                expected,
                actual: order.status,
            });
        }

        order.status = next;
        debug!(id = %id, from = %expected, to = %next, "order transitioned");
        Ok(order.clone())
    }
}

impl std::fmt::Debug for InMemoryPortalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.read() {
            Ok(state) => f
                .debug_struct("InMemoryPortalStore")
                .field("hotels", &state.hotels.len())
                .field("customers", &state.customers.len())
                .field("orders", &state.orders.len())
                .finish(),
            Err(_) => f.write_str("InMemoryPortalStore(poisoned)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_types::{Mobile, Price};

    fn owner(raw: &str) -> OwnerId {
        OwnerId::new(raw).unwrap()
    }

    fn test_hotel(name: &str) -> Hotel {
        Hotel::new(name, format!("{name} description"))
    }

    fn test_item(name: &str, price: f64) -> MenuItem {
        MenuItem::new(name, Price::new(price).unwrap(), "https://cdn/img.jpg")
    }

    fn test_order(hotel: &OwnerId, item: &str) -> Order {
        Order::pending(
            hotel.clone(),
            item,
            Price::new(120.0).unwrap(),
            Mobile::new("9876543210").unwrap(),
        )
    }

    // -----------------------------------------------------------------------
    // Hotels
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_read_hotel() {
        let store = InMemoryPortalStore::new();
        let id = owner("u1");
        let hotel = test_hotel("Grand");

        store.put_hotel(&id, &hotel).unwrap();

        let read = store.hotel(&id).unwrap().expect("should exist");
        assert_eq!(read, hotel);
    }

    #[test]
    fn read_missing_hotel_returns_none() {
        let store = InMemoryPortalStore::new();
        assert!(store.hotel(&owner("ghost")).unwrap().is_none());
    }

    #[test]
    fn hotels_lists_all_sorted_by_key() {
        let store = InMemoryPortalStore::new();
        store.put_hotel(&owner("b"), &test_hotel("B")).unwrap();
        store.put_hotel(&owner("a"), &test_hotel("A")).unwrap();
        store.put_hotel(&owner("c"), &test_hotel("C")).unwrap();

        let hotels = store.hotels().unwrap();
        let keys: Vec<&str> = hotels.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn put_hotel_replaces_existing() {
        // Write-by-key semantics: a second write under the same key wins.
        let store = InMemoryPortalStore::new();
        let id = owner("u1");
        store.put_hotel(&id, &test_hotel("Old")).unwrap();
        store.put_hotel(&id, &test_hotel("New")).unwrap();

        assert_eq!(store.hotel(&id).unwrap().unwrap().name, "New");
        assert_eq!(store.hotels().unwrap().len(), 1);
    }

    // -----------------------------------------------------------------------
    // Menu items
    // -----------------------------------------------------------------------

    #[test]
    fn append_and_list_menu_items() {
        let store = InMemoryPortalStore::new();
        let id = owner("u1");

        let k1 = store.append_menu_item(&id, &test_item("Dosa", 40.0)).unwrap();
        let k2 = store
            .append_menu_item(&id, &test_item("Biryani", 120.0))
            .unwrap();
        assert_ne!(k1, k2);

        let menu = store.menu(&id).unwrap();
        assert_eq!(menu.len(), 2);
        assert!(menu.iter().any(|(_, m)| m.name == "Dosa"));
        assert!(menu.iter().any(|(_, m)| m.name == "Biryani"));
    }

    #[test]
    fn menu_for_unknown_owner_is_empty() {
        let store = InMemoryPortalStore::new();
        assert!(store.menu(&owner("nobody")).unwrap().is_empty());
    }

    #[test]
    fn menu_appends_without_hotel_record() {
        // The nested path is created on first append even when no hotel
        // record exists under the owner.
        let store = InMemoryPortalStore::new();
        let id = owner("unregistered");
        store.append_menu_item(&id, &test_item("Idli", 30.0)).unwrap();
        assert_eq!(store.menu(&id).unwrap().len(), 1);
        assert!(store.hotel(&id).unwrap().is_none());
    }

    #[test]
    fn menus_are_scoped_per_owner() {
        let store = InMemoryPortalStore::new();
        store
            .append_menu_item(&owner("u1"), &test_item("Dosa", 40.0))
            .unwrap();
        store
            .append_menu_item(&owner("u2"), &test_item("Thali", 90.0))
            .unwrap();

        let menu = store.menu(&owner("u1")).unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].1.name, "Dosa");
    }

    // -----------------------------------------------------------------------
    // Customers
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_read_customer() {
        let store = InMemoryPortalStore::new();
        let id = CustomerId::new();
        let customer = Customer::new("Asha", Mobile::new("9999999999").unwrap(), "V", "Addr");

        store.put_customer(&id, &customer).unwrap();

        let read = store.customer(&id).unwrap().expect("should exist");
        assert_eq!(read, customer);
        assert_eq!(read.mobile.as_str(), "9999999999");
    }

    #[test]
    fn read_missing_customer_returns_none() {
        let store = InMemoryPortalStore::new();
        assert!(store.customer(&CustomerId::new()).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    #[test]
    fn append_and_read_order() {
        let store = InMemoryPortalStore::new();
        let hotel = owner("u1");
        let id = store.append_order(&test_order(&hotel, "Biryani")).unwrap();

        let read = store.order(&id).unwrap().expect("should exist");
        assert_eq!(read.item, "Biryani");
        assert_eq!(read.status, OrderStatus::Pending);
    }

    #[test]
    fn orders_lists_across_all_hotels() {
        let store = InMemoryPortalStore::new();
        store.append_order(&test_order(&owner("u1"), "A")).unwrap();
        store.append_order(&test_order(&owner("u2"), "B")).unwrap();
        store.append_order(&test_order(&owner("u3"), "C")).unwrap();

        assert_eq!(store.orders().unwrap().len(), 3);
    }

    #[test]
    fn orders_for_hotel_filters_by_equality() {
        let store = InMemoryPortalStore::new();
        let u1 = owner("u1");
        let u2 = owner("u2");
        store.append_order(&test_order(&u1, "A")).unwrap();
        store.append_order(&test_order(&u2, "B")).unwrap();
        store.append_order(&test_order(&u1, "C")).unwrap();

        let scoped = store.orders_for_hotel(&u1).unwrap();
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|(_, o)| o.hotel_id == u1));
    }

    #[test]
    fn orders_for_hotel_with_no_orders_is_empty() {
        let store = InMemoryPortalStore::new();
        store.append_order(&test_order(&owner("u1"), "A")).unwrap();
        assert!(store.orders_for_hotel(&owner("u9")).unwrap().is_empty());
    }

    #[test]
    fn order_hotel_id_is_not_validated_against_hotels() {
        // The reference is stored verbatim; no hotel record is required.
        let store = InMemoryPortalStore::new();
        let id = store
            .append_order(&test_order(&owner("no-such-hotel"), "A"))
            .unwrap();
        assert!(store.order(&id).unwrap().is_some());
    }

    // -----------------------------------------------------------------------
    // Status transition (compare-and-swap)
    // -----------------------------------------------------------------------

    #[test]
    fn transition_pending_to_confirmed() {
        let store = InMemoryPortalStore::new();
        let id = store.append_order(&test_order(&owner("u1"), "A")).unwrap();

        let updated = store
            .transition_order(&id, OrderStatus::Pending, OrderStatus::Confirmed)
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Confirmed);
        assert_eq!(
            store.order(&id).unwrap().unwrap().status,
            OrderStatus::Confirmed
        );
    }

    #[test]
    fn second_transition_conflicts() {
        let store = InMemoryPortalStore::new();
        let id = store.append_order(&test_order(&owner("u1"), "A")).unwrap();
        store
            .transition_order(&id, OrderStatus::Pending, OrderStatus::Confirmed)
            .unwrap();

        let err = store
            .transition_order(&id, OrderStatus::Pending, OrderStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::StatusConflict {
                actual: OrderStatus::Confirmed,
                ..
            }
        ));
    }

    #[test]
    fn transition_missing_order() {
        let store = InMemoryPortalStore::new();
        let err = store
            .transition_order(&OrderId::new(), OrderStatus::Pending, OrderStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(err, StoreError::OrderNotFound(_)));
    }

    #[test]
    fn reverse_transition_is_illegal() {
        let store = InMemoryPortalStore::new();
        let id = store.append_order(&test_order(&owner("u1"), "A")).unwrap();

        let err = store
            .transition_order(&id, OrderStatus::Confirmed, OrderStatus::Pending)
            .unwrap_err();
        assert!(matches!(err, StoreError::IllegalTransition { .. }));
    }

    #[test]
    fn concurrent_confirmers_produce_exactly_one_transition() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryPortalStore::new());
        let id = store.append_order(&test_order(&owner("u1"), "A")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .transition_order(&id, OrderStatus::Pending, OrderStatus::Confirmed)
                        .is_ok()
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(
            store.order(&id).unwrap().unwrap().status,
            OrderStatus::Confirmed
        );
    }

    // -----------------------------------------------------------------------
    // Debug
    // -----------------------------------------------------------------------

    #[test]
    fn debug_format() {
        let store = InMemoryPortalStore::new();
        store.put_hotel(&owner("u1"), &test_hotel("Grand")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryPortalStore"));
        assert!(debug.contains("hotels"));
    }
}
