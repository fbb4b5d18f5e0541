//! Controller configuration
//!
//! The tour under view is an explicit input threaded through every
//! controller, never ambient state.

use roadbook_model::TourId;
use serde::{Deserialize, Serialize};

/// Which tour the controllers present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// The tour every controller scopes its fetches to
    pub tour_id: TourId,
}

impl ViewConfig {
    /// Config for one tour
    #[inline]
    #[must_use]
    pub fn new(tour_id: TourId) -> Self {
        Self { tour_id }
    }
}
