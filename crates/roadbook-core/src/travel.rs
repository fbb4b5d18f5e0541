//! Travel controller: legs in departure order with cost totals

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use roadbook_model::TravelLeg;
use roadbook_store::{Query, RecordStore, SortField};
use roadbook_views::{travel_aggregate, TravelAggregate};

/// Legs plus the roll-up the page header shows
#[derive(Debug, Clone)]
pub struct TravelSnapshot {
    /// Legs in departure order
    pub legs: Vec<TravelLeg>,
    /// Totals: cost, leg count, flights, buses
    pub aggregate: TravelAggregate,
}

/// The travel page
#[derive(Debug)]
pub struct TravelView {
    config: ViewConfig,
    state: ViewState<TravelSnapshot>,
}

impl TravelView {
    /// A travel view for one tour, initially loading
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
    pub fn state(&self) -> &ViewState<TravelSnapshot> {
        &self.state
    }

    /// Re-fetch legs, departure ascending
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        let query = Query::new().tour(self.config.tour_id).sort_by(SortField::Departure);
        match store.fetch_travel(&query).await {
            Ok(legs) => {
                let aggregate = travel_aggregate(&legs);
                tracing::info!(
                    "travel loaded: {} legs, total cost {}",
                    aggregate.total_legs,
                    aggregate.total_cost
                );
                self.state = ViewState::Ready(TravelSnapshot { legs, aggregate });
            }
            Err(e) => {
                tracing::error!("travel load failed: {e}");
                self.state = ViewState::Failed(e);
            }
        }
    }
}
