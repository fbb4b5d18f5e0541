//! Dashboard controller: tour header stats, urgent tasks, next show

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use chrono::{DateTime, Utc};
use roadbook_model::{Task, Tour, TourStop};
use roadbook_store::{Query, RecordStore, SortField, StoreError};
use roadbook_views::{days_until, route_order, upcoming_stop, urgent_tasks};
use rust_decimal::Decimal;

/// Everything the dashboard renders from one settled fetch
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// The tour, when the configured id resolved to a row
    pub tour: Option<Tour>,
    /// Stops in route order
    pub stops: Vec<TourStop>,
    /// Open tasks in the high/urgent priority band
    pub urgent: Vec<Task>,
    /// The next show in route order, if any stops exist
    pub upcoming: Option<TourStop>,
}

impl DashboardSnapshot {
    /// Show count
    #[inline]
    #[must_use]
    pub fn total_shows(&self) -> usize {
        self.stops.len()
    }

    /// Whole days until the tour starts; zero or negative once underway
    #[must_use]
    pub fn days_until(&self, now: DateTime<Utc>) -> Option<i64> {
        self.tour.as_ref().map(|t| days_until(t, now))
    }

    /// Crew head count
    #[inline]
    #[must_use]
    pub fn total_crew(&self) -> Option<u32> {
        self.tour.as_ref().map(|t| t.total_crew)
    }

    /// Tour budget, when one was set
    #[inline]
    #[must_use]
    pub fn budget(&self) -> Option<Decimal> {
        self.tour.as_ref().and_then(|t| t.budget)
    }
}

/// The dashboard page
#[derive(Debug)]
pub struct DashboardView {
    config: ViewConfig,
    state: ViewState<DashboardSnapshot>,
}

impl DashboardView {
    /// A dashboard for one tour, initially loading
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
    pub fn state(&self) -> &ViewState<DashboardSnapshot> {
        &self.state
    }

    /// Re-fetch and re-derive; the three collections settle as a unit
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        match self.load(store).await {
            Ok(snapshot) => {
                tracing::info!(
                    "dashboard loaded: {} stops, {} urgent tasks",
                    snapshot.total_shows(),
                    snapshot.urgent.len()
                );
                self.state = ViewState::Ready(snapshot);
            }
            Err(e) => {
                tracing::error!("dashboard load failed: {e}");
                self.state = ViewState::Failed(e);
            }
        }
    }

    async fn load(&self, store: &dyn RecordStore) -> Result<DashboardSnapshot, StoreError> {
        let tour_id = self.config.tour_id;
        let tour_query = Query::new().tour(tour_id);
        let stop_query = Query::new().tour(tour_id).sort_by(SortField::ShowDate);
        let task_query = Query::new().tour(tour_id).sort_by(SortField::DueDate);
        let (tours, stops, tasks) = futures::try_join!(
            store.fetch_tours(&tour_query),
            store.fetch_stops(&stop_query),
            store.fetch_tasks(&task_query),
        )?;

        let tour = tours.into_iter().next();
        if tour.is_none() {
            tracing::warn!("tour {tour_id} not found");
        }
        let stops = route_order(&stops);
        let urgent = urgent_tasks(&tasks).into_iter().cloned().collect();
        let upcoming = upcoming_stop(&stops).cloned();

        Ok(DashboardSnapshot {
            tour,
            stops,
            urgent,
            upcoming,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadbook_store::MemoryStore;
    use roadbook_test_utils::seeded_world;

    #[tokio::test]
    async fn dashboard_derives_header_stats() {
        let world = seeded_world();
        let mut view = DashboardView::new(ViewConfig::new(world.tour_id));
        view.refresh(&world.store).await;

        let snapshot = view.state().ready().unwrap();
        assert_eq!(snapshot.total_shows(), 3);
        assert_eq!(snapshot.total_crew(), Some(14));
        // Urgent band: the urgent todo and the high in-progress task,
        // not the completed high one.
        assert_eq!(snapshot.urgent.len(), 2);
        // Denver has the earliest show date, so it leads the route.
        assert_eq!(snapshot.upcoming.as_ref().unwrap().city, "Denver");
        assert_eq!(snapshot.stops[0].city, "Denver");
    }

    #[tokio::test]
    async fn unknown_tour_yields_empty_header() {
        let world = seeded_world();
        let mut view = DashboardView::new(ViewConfig::new(roadbook_model::TourId::new()));
        view.refresh(&world.store).await;

        let snapshot = view.state().ready().unwrap();
        assert!(snapshot.tour.is_none());
        assert_eq!(snapshot.total_shows(), 0);
        assert_eq!(snapshot.total_crew(), None);
    }

    #[tokio::test]
    async fn outage_parks_the_view_in_failed() {
        let store = MemoryStore::new().failing("connection refused");
        let mut view = DashboardView::new(ViewConfig::new(roadbook_model::TourId::new()));
        view.refresh(&store).await;

        assert!(view.state().failure().is_some());
    }
}
