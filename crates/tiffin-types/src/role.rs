use std::fmt;

use serde::{Deserialize, Serialize};

/// Operator role selecting which view-controller is active.
///
/// The portal has no error path for an unrecognized tag: anything that is not
/// recognizably admin or hotel owner falls through to the customer view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    HotelOwner,
    Customer,
}

impl Role {
    /// Resolve an operator-supplied role tag.
    ///
    /// Matching is case-insensitive. Unrecognized tags resolve to
    /// `Role::Customer` (the default branch), never to an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "hotel owner" | "hotel_owner" | "owner" => Self::HotelOwner,
            _ => Self::Customer,
        }
    }

    /// The canonical tag for this role.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HotelOwner => "hotel_owner",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags() {
        assert_eq!(Role::from_tag("admin"), Role::Admin);
        assert_eq!(Role::from_tag("Admin"), Role::Admin);
        assert_eq!(Role::from_tag("hotel owner"), Role::HotelOwner);
        assert_eq!(Role::from_tag("hotel_owner"), Role::HotelOwner);
        assert_eq!(Role::from_tag("owner"), Role::HotelOwner);
        assert_eq!(Role::from_tag("customer"), Role::Customer);
    }

    #[test]
    fn unrecognized_tag_falls_through_to_customer() {
        assert_eq!(Role::from_tag(""), Role::Customer);
        assert_eq!(Role::from_tag("root"), Role::Customer);
        assert_eq!(Role::from_tag("ADMINISTRATOR"), Role::Customer);
    }

    #[test]
    fn tag_round_trip() {
        for role in [Role::Admin, Role::HotelOwner, Role::Customer] {
            assert_eq!(Role::from_tag(role.tag()), role);
        }
    }
}
