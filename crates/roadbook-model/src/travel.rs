//! Travel-leg entity
//!
//! Transport between locations. Cost is a monetary decimal; aggregation
//! must never accumulate floating-point error.

use crate::ids::{TourId, TravelId};
use crate::HasId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transport mode for a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    /// Tour bus
    Bus,
    /// Commercial or charter flight
    Flight,
    /// Rail
    Train,
    /// Van run
    Van,
    /// Anything else
    Other,
}

impl TransportType {
    /// Display label for this mode
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Flight => "Flight",
            Self::Train => "Train",
            Self::Van => "Van",
            Self::Other => "Other",
        }
    }
}

/// A travel leg between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLeg {
    /// Identity
    pub id: TravelId,
    /// Owning tour
    pub tour_id: TourId,
    /// Origin
    pub from_location: String,
    /// Destination
    pub to_location: String,
    /// Departure time
    pub departure: DateTime<Utc>,
    /// Arrival time, when known
    pub arrival: Option<DateTime<Utc>>,
    /// Transport mode
    pub transport: TransportType,
    /// Booking confirmation number
    pub confirmation_number: Option<String>,
    /// Leg cost (monetary, exact); missing cost aggregates as zero
    pub cost: Option<Decimal>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl TravelLeg {
    /// Create a leg with required fields; optionals default empty
    #[must_use]
    pub fn new(
        id: TravelId,
        tour_id: TourId,
        from_location: impl Into<String>,
        to_location: impl Into<String>,
        departure: DateTime<Utc>,
        transport: TransportType,
    ) -> Self {
        Self {
            id,
            tour_id,
            from_location: from_location.into(),
            to_location: to_location.into(),
            departure,
            arrival: None,
            transport,
            confirmation_number: None,
            cost: None,
            notes: None,
        }
    }

    /// With cost
    #[inline]
    #[must_use]
    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = Some(cost);
        self
    }

    /// With arrival time
    #[inline]
    #[must_use]
    pub fn with_arrival(mut self, arrival: DateTime<Utc>) -> Self {
        self.arrival = Some(arrival);
        self
    }
}

impl HasId for TravelLeg {
    type Id = TravelId;

    fn id(&self) -> TravelId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn transport_labels() {
        assert_eq!(TransportType::Bus.label(), "Bus");
        assert_eq!(TransportType::Flight.label(), "Flight");
        assert_eq!(TransportType::Other.label(), "Other");
    }

    #[test]
    fn leg_builder() {
        let departure = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
        let leg = TravelLeg::new(
            TravelId::new(),
            TourId::new(),
            "Los Angeles, CA",
            "San Francisco, CA",
            departure,
            TransportType::Bus,
        )
        .with_cost(Decimal::new(1_200, 0));

        assert_eq!(leg.cost, Some(Decimal::new(1_200, 0)));
        assert!(leg.arrival.is_none());
    }
}
