//! Marker events: explicit messages from the substrate to selection state
//!
//! The substrate reports interactions as plain messages. Modeling the
//! wiring this way keeps both toggle semantics testable without any
//! rendering surface in the loop.

use roadbook_model::StopId;
use roadbook_state::MapSelection;
use serde::{Deserialize, Serialize};

/// An interaction reported by the map substrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerEvent {
    /// A marker was clicked
    Clicked(StopId),
    /// The detail card's dismiss control was used
    Dismissed,
}

/// Apply a substrate event to the map's sticky selection
pub fn apply_event(selection: &mut MapSelection, event: MarkerEvent) {
    match event {
        MarkerEvent::Clicked(id) => selection.select(id),
        MarkerEvent::Dismissed => selection.dismiss(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn click_selects_and_stays_selected() {
        let a = StopId::new();
        let mut selection = MapSelection::new();

        apply_event(&mut selection, MarkerEvent::Clicked(a));
        assert_eq!(selection.selected(), Some(a));

        // Second click on the same marker keeps the selection
        apply_event(&mut selection, MarkerEvent::Clicked(a));
        assert_eq!(selection.selected(), Some(a));
    }

    #[test]
    fn dismiss_clears_selection() {
        let a = StopId::new();
        let mut selection = MapSelection::new();

        apply_event(&mut selection, MarkerEvent::Clicked(a));
        apply_event(&mut selection, MarkerEvent::Dismissed);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn click_switches_between_markers() {
        let a = StopId::new();
        let b = StopId::new();
        let mut selection = MapSelection::new();

        apply_event(&mut selection, MarkerEvent::Clicked(a));
        apply_event(&mut selection, MarkerEvent::Clicked(b));
        assert_eq!(selection.selected(), Some(b));
    }
}
