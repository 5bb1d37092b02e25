//! The admin view: hotel onboarding and global order oversight.

use std::sync::Arc;

use tiffin_auth::AuthProvider;
use tiffin_store::PortalStore;
use tiffin_types::{Hotel, Order, OrderId, OwnerId};
use tracing::info;

use crate::error::PortalResult;

/// Submitted fields of the add-hotel form.
#[derive(Clone, Debug)]
pub struct AddHotelForm {
    pub name: String,
    pub description: String,
    pub owner_email: String,
    pub owner_password: String,
}

/// View-controller for the admin role.
pub struct AdminView {
    store: Arc<dyn PortalStore>,
    auth: Arc<dyn AuthProvider>,
}

impl AdminView {
    pub(crate) fn new(store: Arc<dyn PortalStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// Onboard a hotel: provision the owner account, then write the hotel
    /// record keyed by the new owner id.
    ///
    /// A duplicate owner email fails before anything is written. If the
    /// record write fails after account creation, the account remains — there
    /// is no account lifecycle management to roll it back with.
    pub async fn add_hotel(&self, form: AddHotelForm) -> PortalResult<(OwnerId, Hotel)> {
        let owner_id = self
            .auth
            .create_user(&form.owner_email, &form.owner_password)
            .await?;

        let hotel = Hotel::new(form.name, form.description);
        self.store.put_hotel(&owner_id, &hotel)?;

        info!(owner = %owner_id, hotel = %hotel.name, "hotel added");
        Ok((owner_id, hotel))
    }

    /// Every order across all hotels, unfiltered.
    pub fn list_orders(&self) -> PortalResult<Vec<(OrderId, Order)>> {
        Ok(self.store.orders()?)
    }
}
