//! Hotels controller: bookings joined back to their shows

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use roadbook_model::{or_unknown, Hotel, StopId, TourStop};
use roadbook_store::{Query, RecordStore, SortField, StoreError};
use roadbook_views::route_order;
use std::collections::HashMap;

/// One booking with the show it covers
#[derive(Debug, Clone)]
pub struct HotelRow {
    /// The booking
    pub hotel: Hotel,
    /// "City, ST" of the show, or the unknown placeholder when the stop
    /// foreign key does not resolve
    pub show_label: String,
}

/// The hotels page: every booking on the tour, labelled by show
#[derive(Debug)]
pub struct HotelsView {
    config: ViewConfig,
    state: ViewState<Vec<HotelRow>>,
}

impl HotelsView {
    /// A hotels view for one tour, initially loading
    #[inline]
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            state: ViewState::Loading,
        }
    }

    /// Current view state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ViewState<Vec<HotelRow>> {
        &self.state
    }

    /// Re-fetch stops and bookings as a unit
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        match self.load(store).await {
            Ok(rows) => {
                tracing::info!("hotels loaded: {} bookings", rows.len());
                self.state = ViewState::Ready(rows);
            }
            Err(e) => {
                tracing::error!("hotels load failed: {e}");
                self.state = ViewState::Failed(e);
            }
        }
    }

    async fn load(&self, store: &dyn RecordStore) -> Result<Vec<HotelRow>, StoreError> {
        let stops = store
            .fetch_stops(&Query::new().tour(self.config.tour_id).sort_by(SortField::ShowDate))
            .await?;
        let stops = route_order(&stops);
        let stop_ids: Vec<StopId> = stops.iter().map(|s| s.id).collect();
        let hotels = store.fetch_hotels(&Query::new().stops_in(stop_ids)).await?;

        let by_id: HashMap<StopId, &TourStop> = stops.iter().map(|s| (s.id, s)).collect();
        let rows = hotels
            .into_iter()
            .map(|hotel| {
                let show_label = by_id
                    .get(&hotel.tour_stop_id)
                    .map_or_else(|| or_unknown(None).to_string(), |s| s.location_label());
                HotelRow { hotel, show_label }
            })
            .collect();
        Ok(rows)
    }
}
