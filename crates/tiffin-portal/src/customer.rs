//! The customer view: registration, browsing, and ordering.

use std::sync::Arc;

use tiffin_store::PortalStore;
use tiffin_types::{
    Customer, CustomerId, Hotel, MenuItem, MenuItemId, Mobile, Order, OrderId, OwnerId, Price,
};
use tracing::info;

use crate::error::PortalResult;

/// Submitted fields of the registration form.
#[derive(Clone, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub mobile: String,
    pub village: String,
    pub address: String,
}

/// Submitted fields of the order form.
///
/// `mobile` is whatever the customer typed at order time. Registration is not
/// a prerequisite and the number is never checked against registered
/// customers.
#[derive(Clone, Debug)]
pub struct PlaceOrderForm {
    pub hotel_id: String,
    pub item: String,
    pub price: f64,
    pub mobile: String,
}

/// View-controller for the customer role.
pub struct CustomerView {
    store: Arc<dyn PortalStore>,
}

impl CustomerView {
    pub(crate) fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    /// Register a customer under a fresh generated key.
    ///
    /// The returned id links to nothing: browsing and ordering work without
    /// it.
    pub fn register(&self, form: RegisterForm) -> PortalResult<(CustomerId, Customer)> {
        let mobile = Mobile::new(form.mobile)?;
        let customer = Customer::new(form.name, mobile, form.village, form.address);

        let id = CustomerId::new();
        self.store.put_customer(&id, &customer)?;

        info!(customer = %id, "customer registered");
        Ok((id, customer))
    }

    /// Every hotel on the portal.
    pub fn browse_hotels(&self) -> PortalResult<Vec<(OwnerId, Hotel)>> {
        Ok(self.store.hotels()?)
    }

    /// The menu nested under one hotel.
    ///
    /// An unknown hotel or an empty menu yields an empty list.
    pub fn browse_menu(&self, hotel_id: &str) -> PortalResult<Vec<(MenuItemId, MenuItem)>> {
        let hotel = OwnerId::new(hotel_id)?;
        Ok(self.store.menu(&hotel)?)
    }

    /// Place an order with status pending.
    ///
    /// The hotel reference is stored as supplied, never validated against
    /// existing hotels. Repeated submissions create repeated orders; there is
    /// no idempotency key.
    pub fn place_order(&self, form: PlaceOrderForm) -> PortalResult<(OrderId, Order)> {
        let hotel = OwnerId::new(form.hotel_id)?;
        let price = Price::new(form.price)?;
        let mobile = Mobile::new(form.mobile)?;

        let order = Order::pending(hotel, form.item, price, mobile);
        let id = self.store.append_order(&order)?;

        info!(order = %id, hotel = %order.hotel_id, item = %order.item, "order placed");
        Ok((id, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::Portal;
    use crate::PortalError;
    use tiffin_types::{OrderStatus, TypeError};

    fn portal() -> Portal {
        Portal::in_memory("https://media.test")
    }

    fn register_form(mobile: &str) -> RegisterForm {
        RegisterForm {
            name: "Asha".into(),
            mobile: mobile.into(),
            village: "V".into(),
            address: "Addr".into(),
        }
    }

    fn order_form(hotel: &str) -> PlaceOrderForm {
        PlaceOrderForm {
            hotel_id: hotel.into(),
            item: "Biryani".into(),
            price: 120.0,
            mobile: "9999999999".into(),
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn register_stores_mobile_verbatim() {
        let portal = portal();
        let (_, customer) = portal
            .customer()
            .register(register_form("9999999999"))
            .unwrap();
        assert_eq!(customer.mobile.as_str(), "9999999999");
        assert_eq!(customer.name, "Asha");
    }

    #[tokio::test]
    async fn register_rejects_eleven_character_mobile() {
        let portal = portal();
        let err = portal
            .customer()
            .register(register_form("99999999990"))
            .unwrap_err();
        assert!(matches!(
            err,
            PortalError::Validation(TypeError::MobileTooLong { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Browsing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn browse_menu_of_empty_hotel_is_empty_not_error() {
        let portal = portal();
        assert!(portal.customer().browse_menu("u1").unwrap().is_empty());
    }

    #[tokio::test]
    async fn browse_hotels_empty_portal() {
        let portal = portal();
        assert!(portal.customer().browse_hotels().unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Ordering
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn placed_order_is_pending() {
        let portal = portal();
        let (id, order) = portal.customer().place_order(order_form("h1")).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item, "Biryani");
        assert_eq!(order.price.value(), 120.0);

        let listed = portal.admin().list_orders().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, id);
    }

    #[tokio::test]
    async fn ordering_requires_no_registration() {
        let portal = portal();
        // No register call; the raw mobile travels with the order.
        let (_, order) = portal.customer().place_order(order_form("h1")).unwrap();
        assert_eq!(order.customer_mobile.as_str(), "9999999999");
    }

    #[tokio::test]
    async fn repeated_submission_creates_repeated_orders() {
        let portal = portal();
        portal.customer().place_order(order_form("h1")).unwrap();
        portal.customer().place_order(order_form("h1")).unwrap();
        assert_eq!(portal.admin().list_orders().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn blank_hotel_id_is_rejected() {
        let portal = portal();
        let err = portal.customer().place_order(order_form(" ")).unwrap_err();
        assert!(matches!(
            err,
            PortalError::Validation(TypeError::BlankOwnerId)
        ));
    }
}
