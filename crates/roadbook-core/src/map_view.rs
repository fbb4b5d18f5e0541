//! Map controller: route plan, marker selection, surface rendering

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use roadbook_map::{apply_event, MapDriver, MapSurface, MarkerEvent, RenderOutcome, RoutePlan};
use roadbook_model::StopId;
use roadbook_state::MapSelection;
use roadbook_store::{Query, RecordStore, SortField, StoreError};

/// The map page: the tour route drawn on a surface
///
/// Marker selection is sticky - re-tapping the selected marker keeps it
/// selected; only an explicit dismiss clears it.
#[derive(Debug)]
pub struct MapView {
    config: ViewConfig,
    state: ViewState<RoutePlan>,
    selection: MapSelection,
}

impl MapView {
    /// A map view for one tour, initially loading
    #[inline]
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            state: ViewState::Loading,
            selection: MapSelection::new(),
        }
    }

    /// Current view state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ViewState<RoutePlan> {
        &self.state
    }

    /// The selected marker, if any
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<StopId> {
        self.selection.selected()
    }

    /// Apply a marker interaction
    pub fn handle(&mut self, event: MarkerEvent) {
        apply_event(&mut self.selection, event);
    }

    /// Draw the current plan onto a surface
    ///
    /// An unmappable plan touches the surface not at all; the condition is
    /// reported in the outcome and logged.
    pub fn render(&self, surface: &mut dyn MapSurface) -> Option<RenderOutcome> {
        let plan = self.state.ready()?;
        let outcome = MapDriver::render(plan, surface);
        match &outcome {
            RenderOutcome::NoMappableStops => {
                tracing::warn!("no stop has usable coordinates; map left untouched");
            }
            RenderOutcome::Rendered { markers, unmapped } => {
                tracing::info!("map rendered: {markers} markers, {unmapped} without geometry");
            }
        }
        Some(outcome)
    }

    /// Re-fetch stops and rebuild the route plan
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        match self.load(store).await {
            Ok(plan) => {
                tracing::info!(
                    "route plan built: {} mappable, {} unmapped",
                    plan.points.len(),
                    plan.unmapped.len()
                );
                self.state = ViewState::Ready(plan);
            }
            Err(e) => {
                tracing::error!("map load failed: {e}");
                self.state = ViewState::Failed(e);
            }
        }
    }

    async fn load(&self, store: &dyn RecordStore) -> Result<RoutePlan, StoreError> {
        let stops = store
            .fetch_stops(&Query::new().tour(self.config.tour_id).sort_by(SortField::ShowDate))
            .await?;
        Ok(RoutePlan::build(&stops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadbook_test_utils::seeded_world;

    #[tokio::test]
    async fn plan_splits_mappable_from_unmapped() {
        let world = seeded_world();
        let mut view = MapView::new(ViewConfig::new(world.tour_id));
        view.refresh(&world.store).await;

        let plan = view.state().ready().unwrap();
        assert_eq!(plan.points.len(), 2);
        assert_eq!(plan.unmapped.len(), 1);
        assert_eq!(plan.unmapped[0].label, "Fargo Hall");
        // Route order, not fetch order: Denver's show comes first.
        assert_eq!(plan.points[0].label, "Denver Hall");
    }

    #[tokio::test]
    async fn marker_selection_is_sticky() {
        let world = seeded_world();
        let mut view = MapView::new(ViewConfig::new(world.tour_id));
        view.refresh(&world.store).await;

        let first = view.state().ready().unwrap().points[0].stop_id;
        view.handle(MarkerEvent::Clicked(first));
        view.handle(MarkerEvent::Clicked(first));
        assert_eq!(view.selected(), Some(first));
        view.handle(MarkerEvent::Dismissed);
        assert_eq!(view.selected(), None);
    }
}
