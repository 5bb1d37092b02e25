use std::sync::Arc;

use tiffin_auth::{AuthProvider, InMemoryAuthProvider};
use tiffin_media::{InMemoryMediaStore, MediaStore};
use tiffin_store::{InMemoryPortalStore, PortalStore};
use tiffin_types::Role;

use crate::admin::AdminView;
use crate::customer::CustomerView;
use crate::owner::OwnerView;

/// The portal facade: injected service handles plus role dispatch.
#[derive(Clone)]
pub struct Portal {
    store: Arc<dyn PortalStore>,
    media: Arc<dyn MediaStore>,
    auth: Arc<dyn AuthProvider>,
}

/// The view selected for one interaction cycle.
pub enum RoleView {
    Admin(AdminView),
    HotelOwner(OwnerView),
    Customer(CustomerView),
}

impl Portal {
    /// Build a portal over explicit service handles.
    pub fn new(
        store: Arc<dyn PortalStore>,
        media: Arc<dyn MediaStore>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self { store, media, auth }
    }

    /// Build a portal over fresh in-memory backends.
    ///
    /// Media URLs are minted under `media_base_url`.
    pub fn in_memory(media_base_url: &str) -> Self {
        Self::new(
            Arc::new(InMemoryPortalStore::new()),
            Arc::new(InMemoryMediaStore::new(media_base_url)),
            Arc::new(InMemoryAuthProvider::new()),
        )
    }

    /// Dispatch to the view for `role`.
    ///
    /// Stateless: nothing persists across calls, and every call re-evaluates
    /// the role.
    pub fn view(&self, role: Role) -> RoleView {
        match role {
            Role::Admin => RoleView::Admin(self.admin()),
            Role::HotelOwner => RoleView::HotelOwner(self.owner()),
            Role::Customer => RoleView::Customer(self.customer()),
        }
    }

    /// The admin view.
    pub fn admin(&self) -> AdminView {
        AdminView::new(Arc::clone(&self.store), Arc::clone(&self.auth))
    }

    /// The hotel owner view.
    pub fn owner(&self) -> OwnerView {
        OwnerView::new(Arc::clone(&self.store), Arc::clone(&self.media))
    }

    /// The customer view.
    pub fn customer(&self) -> CustomerView {
        CustomerView::new(Arc::clone(&self.store))
    }
}

impl std::fmt::Debug for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Portal")
    }
}
