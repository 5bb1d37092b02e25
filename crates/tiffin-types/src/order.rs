use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::OwnerId;
use crate::mobile::Mobile;
use crate::price::Price;

/// Lifecycle state of an order.
///
/// The only legal transition is `Pending -> Confirmed`. There is no reverse
/// transition and no cancellation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
}

impl OrderStatus {
    /// Returns `true` if this status may move to `next`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!((self, next), (Self::Pending, Self::Confirmed))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Confirmed => f.write_str("confirmed"),
        }
    }
}

/// An order, keyed by a generated [`OrderId`].
///
/// `hotel_id` references the hotel the order targets but is never validated
/// against existing hotels. `customer_mobile` is the raw value typed at order
/// time, not a link to a registered customer.
///
/// [`OrderId`]: crate::OrderId
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub hotel_id: OwnerId,
    pub customer_mobile: Mobile,
    pub item: String,
    pub price: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a pending order stamped with the current time.
    pub fn pending(
        hotel_id: OwnerId,
        item: impl Into<String>,
        price: Price,
        customer_mobile: Mobile,
    ) -> Self {
        Self {
            hotel_id,
            customer_mobile,
            item: item.into(),
            price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
