//! Tour entity
//!
//! The top-level itinerary record. Stops, tasks, and travel legs all hang
//! off a tour by foreign key.

use crate::ids::TourId;
use crate::HasId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tour lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourStatus {
    /// Dates booked, not yet on the road
    Planning,
    /// Currently touring
    Active,
    /// Wrapped
    Completed,
    /// Called off
    Cancelled,
}

impl TourStatus {
    /// Store-facing label for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A tour record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Identity
    pub id: TourId,
    /// Tour name
    pub name: String,
    /// Headlining artist
    pub artist_name: String,
    /// First show date
    pub start_date: NaiveDate,
    /// Last show date
    pub end_date: NaiveDate,
    /// Lifecycle status
    pub status: TourStatus,
    /// Crew head count
    pub total_crew: u32,
    /// Tour budget (monetary, exact)
    pub budget: Option<Decimal>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Tour {
    /// Create a tour with required fields; optionals default empty
    #[must_use]
    pub fn new(
        id: TourId,
        name: impl Into<String>,
        artist_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            artist_name: artist_name.into(),
            start_date,
            end_date,
            status: TourStatus::Planning,
            total_crew: 0,
            budget: None,
            notes: None,
        }
    }

    /// With lifecycle status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TourStatus) -> Self {
        self.status = status;
        self
    }

    /// With crew head count
    #[inline]
    #[must_use]
    pub fn with_crew(mut self, total_crew: u32) -> Self {
        self.total_crew = total_crew;
        self
    }

    /// With budget
    #[inline]
    #[must_use]
    pub fn with_budget(mut self, budget: Decimal) -> Self {
        self.budget = Some(budget);
        self
    }
}

impl HasId for Tour {
    type Id = TourId;

    fn id(&self) -> TourId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn tour_builder() {
        let tour = Tour::new(
            TourId::new(),
            "Neon Nights",
            "The Volts",
            date(2026, 2, 15),
            date(2026, 3, 20),
        )
        .with_status(TourStatus::Active)
        .with_crew(24)
        .with_budget(Decimal::new(850_000, 0));

        assert_eq!(tour.status, TourStatus::Active);
        assert_eq!(tour.total_crew, 24);
        assert_eq!(tour.budget, Some(Decimal::new(850_000, 0)));
        assert!(tour.notes.is_none());
    }

    #[test]
    fn status_serde_snake_case() {
        let json = serde_json::to_string(&TourStatus::Planning).unwrap();
        assert_eq!(json, "\"planning\"");
        let back: TourStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, TourStatus::Cancelled);
    }
}
