//! Tour-stop entity and coordinate validity
//!
//! Stops are the spine of the system: routing, hotel joins, and guest lists
//! all key off them. Collections used for routing must be interpreted in
//! `show_date` ascending order; consumers sort explicitly rather than trust
//! the store's ordering.

use crate::ids::{StopId, TourId};
use crate::HasId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Stop lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    /// Penciled in
    Scheduled,
    /// Contract signed
    Confirmed,
    /// Called off
    Cancelled,
    /// Show played
    Completed,
}

impl StopStatus {
    /// Store-facing label for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

/// A geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate
    #[inline]
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite (NaN and infinities are invalid geometry)
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A tour stop: one dated show at one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStop {
    /// Identity
    pub id: StopId,
    /// Owning tour
    pub tour_id: TourId,
    /// Venue name
    pub venue_name: String,
    /// Venue street address
    pub venue_address: Option<String>,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Country
    pub country: String,
    /// Latitude (required for route inclusion)
    pub latitude: Option<f64>,
    /// Longitude (required for route inclusion)
    pub longitude: Option<f64>,
    /// Show date (route ordering key)
    pub show_date: NaiveDate,
    /// Doors/show time
    pub show_time: Option<NaiveTime>,
    /// Load-in time
    pub load_in_time: Option<NaiveTime>,
    /// Soundcheck time
    pub sound_check_time: Option<NaiveTime>,
    /// Venue capacity
    pub capacity: Option<u32>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Lifecycle status
    pub status: StopStatus,
}

impl TourStop {
    /// Create a stop with required fields; optionals default empty
    #[must_use]
    pub fn new(
        id: StopId,
        tour_id: TourId,
        venue_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        show_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            tour_id,
            venue_name: venue_name.into(),
            venue_address: None,
            city: city.into(),
            state: state.into(),
            country: "USA".to_string(),
            latitude: None,
            longitude: None,
            show_date,
            show_time: None,
            load_in_time: None,
            sound_check_time: None,
            capacity: None,
            notes: None,
            status: StopStatus::Scheduled,
        }
    }

    /// With coordinates
    #[inline]
    #[must_use]
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.latitude = Some(lat);
        self.longitude = Some(lng);
        self
    }

    /// With lifecycle status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: StopStatus) -> Self {
        self.status = status;
        self
    }

    /// With venue capacity
    #[inline]
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// With show time
    #[inline]
    #[must_use]
    pub fn with_show_time(mut self, show_time: NaiveTime) -> Self {
        self.show_time = Some(show_time);
        self
    }

    /// Venue coordinate, if present and valid
    ///
    /// Returns `None` when either component is missing or non-finite. Stops
    /// without a valid coordinate are excluded from spatial rendering but
    /// stay in every list-based view.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => {
                let coord = Coordinate::new(lat, lng);
                coord.is_valid().then_some(coord)
            }
            _ => None,
        }
    }

    /// "City, State" label used by list rows and markers
    #[inline]
    #[must_use]
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl HasId for TourStop {
    type Id = StopId;

    fn id(&self) -> StopId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(lat: Option<f64>, lng: Option<f64>) -> TourStop {
        let mut s = TourStop::new(
            StopId::new(),
            TourId::new(),
            "The Wiltern",
            "Los Angeles",
            "CA",
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        );
        s.latitude = lat;
        s.longitude = lng;
        s
    }

    #[test]
    fn coordinate_requires_both_components() {
        assert!(stop(Some(34.0), Some(-118.2)).coordinate().is_some());
        assert!(stop(Some(34.0), None).coordinate().is_none());
        assert!(stop(None, Some(-118.2)).coordinate().is_none());
        assert!(stop(None, None).coordinate().is_none());
    }

    #[test]
    fn coordinate_rejects_non_finite() {
        assert!(stop(Some(f64::NAN), Some(-118.2)).coordinate().is_none());
        assert!(stop(Some(34.0), Some(f64::INFINITY)).coordinate().is_none());
    }

    #[test]
    fn location_label_format() {
        assert_eq!(stop(None, None).location_label(), "Los Angeles, CA");
    }
}
