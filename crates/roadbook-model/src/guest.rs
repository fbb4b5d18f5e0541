//! Guest-list entry entity
//!
//! Guest entries belong to a stop. Pass types mirror the store's string
//! palette; anything unrecognized classifies as `Other` rather than failing
//! the fetch.

use crate::ids::{GuestId, StopId};
use crate::HasId;
use serde::{Deserialize, Serialize};

/// Guest pass type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PassType {
    /// Backstage access
    Backstage,
    /// VIP section
    Vip,
    /// Photo pit access
    PhotoPass,
    /// General admission
    General,
    /// Plus-one of another guest
    PlusOne,
    /// Unrecognized pass string, preserved verbatim
    Other(String),
}

impl PassType {
    /// Classify a store string; unknown values become `Other`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "backstage" => Self::Backstage,
            "vip" => Self::Vip,
            "photo_pass" => Self::PhotoPass,
            "general" => Self::General,
            "plus_one" => Self::PlusOne,
            other => Self::Other(other.to_string()),
        }
    }

    /// Store-facing label for this pass
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backstage => "backstage",
            Self::Vip => "vip",
            Self::PhotoPass => "photo_pass",
            Self::General => "general",
            Self::PlusOne => "plus_one",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for PassType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<PassType> for String {
    fn from(value: PassType) -> Self {
        value.as_str().to_string()
    }
}

/// A guest-list row for one stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestEntry {
    /// Identity
    pub id: GuestId,
    /// Owning stop
    pub tour_stop_id: StopId,
    /// Guest name
    pub guest_name: String,
    /// Contact email
    pub guest_email: Option<String>,
    /// Pass type
    pub pass_type: PassType,
    /// Heads covered by this entry (non-negative by construction)
    pub number_of_guests: u32,
    /// Approved by tour management
    pub approved: bool,
    /// Free-form notes
    pub notes: Option<String>,
}

impl GuestEntry {
    /// Create an entry with required fields; optionals default empty
    #[must_use]
    pub fn new(
        id: GuestId,
        tour_stop_id: StopId,
        guest_name: impl Into<String>,
        pass_type: PassType,
    ) -> Self {
        Self {
            id,
            tour_stop_id,
            guest_name: guest_name.into(),
            guest_email: None,
            pass_type,
            number_of_guests: 1,
            approved: false,
            notes: None,
        }
    }

    /// With head count
    #[inline]
    #[must_use]
    pub fn with_guests(mut self, number_of_guests: u32) -> Self {
        self.number_of_guests = number_of_guests;
        self
    }

    /// Mark approved
    #[inline]
    #[must_use]
    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }
}

impl HasId for GuestEntry {
    type Id = GuestId;

    fn id(&self) -> GuestId {
        self.id
    }
}
