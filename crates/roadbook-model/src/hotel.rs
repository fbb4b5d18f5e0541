//! Hotel entity
//!
//! At most one hotel per stop; if the store returns duplicates, the first
//! row wins at the index layer.

use crate::ids::{HotelId, StopId};
use crate::HasId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A hotel booking tied to one tour stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Identity
    pub id: HotelId,
    /// Owning stop
    pub tour_stop_id: StopId,
    /// Hotel name
    pub hotel_name: String,
    /// Street address
    pub hotel_address: Option<String>,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Check-in date
    pub check_in_date: NaiveDate,
    /// Check-out date
    pub check_out_date: NaiveDate,
    /// Booking confirmation number
    pub confirmation_number: Option<String>,
    /// Front-desk phone
    pub contact_phone: Option<String>,
    /// Rooms held
    pub total_rooms: u32,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Hotel {
    /// Create a hotel with required fields; optionals default empty
    #[must_use]
    pub fn new(
        id: HotelId,
        tour_stop_id: StopId,
        hotel_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            tour_stop_id,
            hotel_name: hotel_name.into(),
            hotel_address: None,
            city: city.into(),
            state: state.into(),
            check_in_date,
            check_out_date,
            confirmation_number: None,
            contact_phone: None,
            total_rooms: 0,
            notes: None,
        }
    }

    /// With rooms held
    #[inline]
    #[must_use]
    pub fn with_rooms(mut self, total_rooms: u32) -> Self {
        self.total_rooms = total_rooms;
        self
    }

    /// With confirmation number
    #[inline]
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.confirmation_number = Some(confirmation.into());
        self
    }
}

impl HasId for Hotel {
    type Id = HotelId;

    fn id(&self) -> HotelId {
        self.id
    }
}
