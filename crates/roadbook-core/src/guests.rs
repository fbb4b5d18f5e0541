//! Guest-list controller: per-show tabs, badges, and head counts

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use roadbook_index::RelationalIndex;
use roadbook_model::{GuestEntry, StopId};
use roadbook_state::TabFilter;
use roadbook_store::{Query, RecordStore, SortField, StoreError};
use roadbook_views::{
    filter_guests, guest_aggregate, guest_counts_by_stop, route_order, GuestAggregate,
    GuestCounts, GuestTab,
};

/// The guest-list page: one tab per show plus an All tab
///
/// Entries whose stop foreign key does not resolve still appear under All
/// and still count toward its badge.
#[derive(Debug)]
pub struct GuestListView {
    config: ViewConfig,
    state: ViewState<RelationalIndex>,
    filter: TabFilter<GuestTab>,
}

impl GuestListView {
    /// A guest-list view for one tour, initially loading on the All tab
    #[inline]
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            state: ViewState::Loading,
            filter: TabFilter::new(GuestTab::All),
        }
    }

    /// Current view state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ViewState<RelationalIndex> {
        &self.state
    }

    /// The active tab
    #[inline]
    #[must_use]
    pub fn active_tab(&self) -> GuestTab {
        self.filter.active()
    }

    /// Switch tabs
    pub fn select_tab(&mut self, tab: GuestTab) {
        self.filter.select(tab);
    }

    /// Badge counts, All and one per stop in route order
    #[must_use]
    pub fn counts(&self) -> GuestCounts {
        self.state.ready().map(guest_counts_by_stop).unwrap_or_default()
    }

    /// Entries visible under the active tab
    #[must_use]
    pub fn visible(&self) -> Vec<&GuestEntry> {
        self.state
            .ready()
            .map(|index| filter_guests(index, self.filter.active()))
            .unwrap_or_default()
    }

    /// Head-count roll-up of the visible entries
    #[must_use]
    pub fn aggregate(&self) -> GuestAggregate {
        guest_aggregate(&self.visible())
    }

    /// Re-fetch stops and their guest entries as a unit
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        match self.load(store).await {
            Ok(index) => {
                tracing::info!(
                    "guest list loaded: {} entries across {} stops",
                    index.guest_total(),
                    index.len()
                );
                self.state = ViewState::Ready(index);
            }
            Err(e) => {
                tracing::error!("guest list load failed: {e}");
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
        let guests = store.fetch_guests(&Query::new().stops_in(stop_ids)).await?;

        Ok(RelationalIndex::build(stops, Vec::new(), guests))
    }
}
