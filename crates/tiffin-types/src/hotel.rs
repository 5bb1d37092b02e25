use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::Price;

/// A hotel record, keyed in storage by the owner's auth-issued id.
///
/// One hotel per owner id; there is no update or delete path once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Create a hotel record stamped with the current time.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

/// A menu item nested under exactly one hotel.
///
/// `image_url` is the publicly resolvable URL returned by the media store at
/// creation time. There is no update or delete path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Create a menu item record stamped with the current time.
    pub fn new(name: impl Into<String>, price: Price, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: image_url.into(),
            created_at: Utc::now(),
        }
    }
}
