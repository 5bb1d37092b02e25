//! The hotel owner view: menu management and order confirmation.

use std::sync::Arc;

use tiffin_media::{menu_image_key, MediaStore};
use tiffin_store::{PortalStore, StoreError};
use tiffin_types::{MenuItem, MenuItemId, Order, OrderId, OrderStatus, OwnerId, Price};
use tracing::info;

use crate::error::PortalResult;

/// An uploaded image: raw bytes plus the declared content type.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Submitted fields of the add-menu form.
///
/// `owner_id` arrives as the raw string the operator pasted from the admin
/// flow; there is no session binding it to an authenticated account.
#[derive(Clone, Debug)]
pub struct AddMenuItemForm {
    pub owner_id: String,
    pub name: String,
    pub price: f64,
    pub image: ImageUpload,
}

/// View-controller for the hotel owner role.
pub struct OwnerView {
    store: Arc<dyn PortalStore>,
    media: Arc<dyn MediaStore>,
}

impl OwnerView {
    pub(crate) fn new(store: Arc<dyn PortalStore>, media: Arc<dyn MediaStore>) -> Self {
        Self { store, media }
    }

    /// Add a menu item: upload the image under a fresh key, then append the
    /// record under the owner.
    ///
    /// The owner id and price are validated before the upload, so a blank id
    /// never reaches the media store. If the record append fails after a
    /// successful upload, the object is orphaned; there is no rollback.
    pub async fn add_menu_item(
        &self,
        form: AddMenuItemForm,
    ) -> PortalResult<(MenuItemId, MenuItem)> {
        let owner = OwnerId::new(form.owner_id)?;
        let price = Price::new(form.price)?;

        let key = menu_image_key(&form.image.content_type)?;
        let image_url = self
            .media
            .upload(&key, form.image.bytes, &form.image.content_type)
            .await?;

        let item = MenuItem::new(form.name, price, image_url);
        let id = self.store.append_menu_item(&owner, &item)?;

        info!(owner = %owner, item = %item.name, id = %id, "menu item added");
        Ok((id, item))
    }

    /// Orders whose `hotel_id` equals this owner's id, pending and confirmed
    /// alike.
    pub fn orders(&self, owner_id: &str) -> PortalResult<Vec<(OrderId, Order)>> {
        let owner = OwnerId::new(owner_id)?;
        Ok(self.store.orders_for_hotel(&owner)?)
    }

    /// Confirm an order.
    ///
    /// The underlying transition is a compare-and-swap on the pending status:
    /// with any number of concurrent confirmers, exactly one performs the
    /// flip. A repeat confirmation of an already-confirmed order is reported
    /// as success with the unchanged record.
    pub fn confirm_order(&self, id: &OrderId) -> PortalResult<Order> {
        match self
            .store
            .transition_order(id, OrderStatus::Pending, OrderStatus::Confirmed)
        {
            Ok(order) => {
                info!(order = %id, "order confirmed");
                Ok(order)
            }
            Err(StoreError::StatusConflict {
                actual: OrderStatus::Confirmed,
                ..
            }) => {
                // Repeat click; the order is already where the caller wants it.
                let order = self
                    .store
                    .order(id)?
                    .ok_or(StoreError::OrderNotFound(*id))?;
                Ok(order)
            }
            Err(e) => Err(e.into()),
        }
    }
}
