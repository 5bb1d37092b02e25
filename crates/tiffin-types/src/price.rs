use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A non-negative menu price.
///
/// Stored as the raw number the form submitted. `new` rejects negative and
/// non-finite values; no currency or precision handling beyond that.
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Validate and wrap a price.
    pub fn new(value: f64) -> Result<Self, TypeError> {
        if !value.is_finite() {
            return Err(TypeError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(TypeError::NegativePrice(value));
        }
        Ok(Self(value))
    }

    /// Zero price.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = TypeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}
