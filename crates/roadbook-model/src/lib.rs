//! Roadbook Model - typed entity shapes for touring-logistics records
//!
//! Defines the six record kinds fetched from the record store:
//! - Tour (the top-level itinerary)
//! - TourStop (a dated show at a venue)
//! - Hotel (at most one per stop)
//! - Task (production to-dos)
//! - TravelLeg (transport between locations)
//! - GuestEntry (guest-list rows per stop)
//!
//! All entities are immutable once fetched; a new fetch replaces the batch
//! wholesale. Shape validation only lives here (identity and foreign keys) -
//! business rules belong to the derivation layer.

pub mod guest;
pub mod hotel;
pub mod ids;
pub mod stop;
pub mod task;
pub mod tour;
pub mod travel;

pub use guest::{GuestEntry, PassType};
pub use hotel::Hotel;
pub use ids::{GuestId, HotelId, StopId, TaskId, TourId, TravelId};
pub use stop::{Coordinate, StopStatus, TourStop};
pub use task::{Task, TaskPriority, TaskStatus};
pub use tour::{Tour, TourStatus};
pub use travel::{TransportType, TravelLeg};

/// Placeholder text for absent optional fields
///
/// Referential and field gaps render as this value; they never propagate as
/// errors past the layer that detects them.
pub const UNKNOWN: &str = "unknown";

/// Render an optional text field, falling back to the shared placeholder
#[inline]
#[must_use]
pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// Entities addressable by a typed identity
pub trait HasId {
    /// Identity type for this entity
    type Id: Copy + PartialEq;

    /// Entity identity
    fn id(&self) -> Self::Id;
}

/// Check that a foreign key resolves within a fetch batch
///
/// An unresolved key is a data-quality condition, not an error: callers
/// render the "unknown" placeholder instead of failing.
#[inline]
#[must_use]
pub fn resolves_foreign_key<P: HasId>(foreign_key: P::Id, parents: &[P]) -> bool {
    parents.iter().any(|p| p.id() == foreign_key)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn or_unknown_fallback() {
        assert_eq!(or_unknown(Some("The Wiltern")), "The Wiltern");
        assert_eq!(or_unknown(None), UNKNOWN);
    }

    #[test]
    fn foreign_key_resolution() {
        let tour = Tour::new(
            TourId::new(),
            "Neon Nights",
            "The Volts",
            NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
        );
        let tours = vec![tour.clone()];

        assert!(resolves_foreign_key(tour.id, &tours));
        assert!(!resolves_foreign_key(TourId::new(), &tours));
    }
}
