//! Roadbook State - per-view interactive state machines
//!
//! Each view owns its own small machine; nothing is shared globally.
//! Transitions are synchronous and UI-triggered only - no background
//! writer ever mutates selection state.
//!
//! The two stop-selection machines deliberately differ:
//! - [`ListSelection`] (expandable stop list): re-selecting the open row
//!   closes it.
//! - [`MapSelection`] (map markers): re-clicking the selected marker keeps
//!   it selected; only an explicit dismiss clears.
//!
//! They stay separate types until product decides whether the two actions
//! should unify.

use roadbook_model::StopId;
use serde::{Deserialize, Serialize};

/// One active tab out of a fixed enumerated key set
///
/// Selecting a key replaces the active one; there is no terminal state -
/// the machine lives for the session. The derived subset behind the tab is
/// recomputed by the view layer on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabFilter<K> {
    active: K,
}

impl<K: Copy + PartialEq> TabFilter<K> {
    /// Start on the given tab (views start on their "all" key)
    #[inline]
    #[must_use]
    pub fn new(initial: K) -> Self {
        Self { active: initial }
    }

    /// The active tab
    #[inline]
    #[must_use]
    pub fn active(&self) -> K {
        self.active
    }

    /// Activate a tab
    #[inline]
    pub fn select(&mut self, key: K) {
        self.active = key;
    }
}

/// Row selection for the expandable stop list: toggle-close semantics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSelection {
    selected: Option<StopId>,
}

impl ListSelection {
    /// Nothing expanded
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The expanded row, if any
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    /// Select a row; selecting the open row again closes it
    pub fn select(&mut self, id: StopId) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Close whatever is open
    #[inline]
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Marker selection for the map view: sticky semantics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSelection {
    selected: Option<StopId>,
}

impl MapSelection {
    /// Nothing selected
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected marker's stop, if any
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    /// Select a marker; re-clicking the selected marker keeps it selected
    #[inline]
    pub fn select(&mut self, id: StopId) {
        self.selected = Some(id);
    }

    /// Explicit dismiss - the only way back to no selection
    #[inline]
    pub fn dismiss(&mut self) {
        self.selected = None;
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        All,
        Other,
    }

    #[test]
    fn tab_filter_replaces_active_key() {
        let mut filter = TabFilter::new(Tab::All);
        assert_eq!(filter.active(), Tab::All);

        filter.select(Tab::Other);
        assert_eq!(filter.active(), Tab::Other);

        // Re-selecting is a no-op, not a toggle
        filter.select(Tab::Other);
        assert_eq!(filter.active(), Tab::Other);
    }

    #[test]
    fn list_selection_toggles_closed_on_same_id() {
        let a = StopId::new();
        let mut selection = ListSelection::new();

        selection.select(a);
        assert_eq!(selection.selected(), Some(a));

        selection.select(a);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn list_selection_switches_between_rows() {
        let a = StopId::new();
        let b = StopId::new();
        let mut selection = ListSelection::new();

        selection.select(a);
        selection.select(b);
        assert_eq!(selection.selected(), Some(b));
    }

    #[test]
    fn map_selection_is_sticky_on_same_id() {
        let a = StopId::new();
        let mut selection = MapSelection::new();

        selection.select(a);
        selection.select(a);
        assert_eq!(selection.selected(), Some(a));

        selection.dismiss();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn map_and_list_semantics_differ_on_double_select() {
        let a = StopId::new();

        let mut list = ListSelection::new();
        let mut map = MapSelection::new();
        list.select(a);
        list.select(a);
        map.select(a);
        map.select(a);

        assert_eq!(list.selected(), None);
        assert_eq!(map.selected(), Some(a));
    }
}
