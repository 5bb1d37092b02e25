use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A customer mobile number, at most [`Mobile::MAX_LEN`] characters.
///
/// The value is otherwise opaque: the portal never dials it and the original
/// form accepted any characters. Length is the only enforced constraint, and
/// over-long input is rejected rather than truncated so that caller mistakes
/// surface at the boundary.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mobile(String);

impl Mobile {
    /// Maximum accepted length in characters.
    pub const MAX_LEN: usize = 10;

    /// Validate and wrap a mobile number.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypeError> {
        let raw = raw.into();
        let actual = raw.chars().count();
        if actual > Self::MAX_LEN {
            return Err(TypeError::MobileTooLong {
                max: Self::MAX_LEN,
                actual,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Mobile {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mobile> for String {
    fn from(mobile: Mobile) -> Self {
        mobile.0
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mobile({})", self.0)
    }
}
