use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mobile::Mobile;

/// A registered customer record, keyed by a generated [`CustomerId`].
///
/// Registration is independent of ordering: an order captures whatever mobile
/// string the customer types at order time and is never joined against this
/// record.
///
/// [`CustomerId`]: crate::CustomerId
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub mobile: Mobile,
    pub village: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a customer record stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        mobile: Mobile,
        village: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile,
            village: village.into(),
            address: address.into(),
            created_at: Utc::now(),
        }
    }
}
