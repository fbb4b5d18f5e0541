//! Stops controller: itinerary list with expandable detail cards

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use roadbook_index::RelationalIndex;
use roadbook_model::StopId;
use roadbook_state::ListSelection;
use roadbook_store::{Query, RecordStore, SortField, StoreError};
use roadbook_views::route_order;

/// The itinerary page: stops in route order with their hotels
///
/// Selection is a toggle - tapping the open card closes it. It survives a
/// refresh even if the selected stop no longer exists; lookups simply come
/// back empty.
#[derive(Debug)]
pub struct StopsView {
    config: ViewConfig,
    state: ViewState<RelationalIndex>,
    selection: ListSelection,
}

impl StopsView {
    /// An itinerary view for one tour, initially loading
    #[inline]
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            state: ViewState::Loading,
            selection: ListSelection::new(),
        }
    }

    /// Current view state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ViewState<RelationalIndex> {
        &self.state
    }

    /// The open card, if any
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<StopId> {
        self.selection.selected()
    }

    /// Toggle a stop's card open or closed
    pub fn toggle(&mut self, stop_id: StopId) {
        self.selection.select(stop_id);
    }

    /// Re-fetch stops and their hotels as a unit
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        match self.load(store).await {
            Ok(index) => {
                tracing::info!(
                    "itinerary loaded: {} stops, {} hotels",
                    index.len(),
                    index.hotels().len()
                );
                self.state = ViewState::Ready(index);
            }
            Err(e) => {
                tracing::error!("itinerary load failed: {e}");
                self.state = ViewState::Failed(e);
            }
        }
    }

    async fn load(&self, store: &dyn RecordStore) -> Result<RelationalIndex, StoreError> {
        let stops = store
            .fetch_stops(&Query::new().tour(self.config.tour_id).sort_by(SortField::ShowDate))
            .await?;
        let stops = route_order(&stops);
        let stop_ids: Vec<StopId> = stops.iter().map(|s| s.id).collect();
        let hotels = store.fetch_hotels(&Query::new().stops_in(stop_ids)).await?;

        Ok(RelationalIndex::build(stops, hotels, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadbook_test_utils::seeded_world;

    #[tokio::test]
    async fn itinerary_joins_hotels_in_route_order() {
        let world = seeded_world();
        let mut view = StopsView::new(ViewConfig::new(world.tour_id));
        view.refresh(&world.store).await;

        let index = view.state().ready().unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.stops()[0].city, "Denver");
        // The Fargo stop has no hotel booked.
        let fargo = index.stops()[2].id;
        assert!(index.hotel_for(fargo).is_none());
        assert_eq!(index.hotel_for(index.stops()[0].id).unwrap().hotel_name, "Oxford");
    }

    #[tokio::test]
    async fn second_tap_closes_the_card() {
        let world = seeded_world();
        let mut view = StopsView::new(ViewConfig::new(world.tour_id));
        view.refresh(&world.store).await;

        let first = view.state().ready().unwrap().stops()[0].id;
        view.toggle(first);
        assert_eq!(view.selected(), Some(first));
        view.toggle(first);
        assert_eq!(view.selected(), None);
    }

    #[tokio::test]
    async fn selection_survives_refresh() {
        let world = seeded_world();
        let mut view = StopsView::new(ViewConfig::new(world.tour_id));
        view.refresh(&world.store).await;

        let first = view.state().ready().unwrap().stops()[0].id;
        view.toggle(first);
        view.refresh(&world.store).await;
        assert_eq!(view.selected(), Some(first));
    }
}
