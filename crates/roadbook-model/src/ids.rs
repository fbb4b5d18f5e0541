//! Typed record identifiers
//!
//! Each entity kind gets its own newtype over [`Uuid`] so a stop id can
//! never be passed where a tour id is expected. The store assigns ids;
//! `new()` exists for fixtures and tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random id
            #[inline]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Tour identifier
    TourId
);
entity_id!(
    /// Tour-stop identifier
    StopId
);
entity_id!(
    /// Hotel identifier
    HotelId
);
entity_id!(
    /// Task identifier
    TaskId
);
entity_id!(
    /// Travel-leg identifier
    TravelId
);
entity_id!(
    /// Guest-entry identifier
    GuestId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(StopId::new(), StopId::new());
        assert_ne!(TourId::new(), TourId::new());
    }

    #[test]
    fn id_display_matches_uuid() {
        let raw = Uuid::new_v4();
        let id = StopId::from(raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = TaskId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
        assert!(json.starts_with('"'));
    }
}
