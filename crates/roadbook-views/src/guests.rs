//! Guest-list derivations: tab badges, filtering, and head counts

use indexmap::IndexMap;
use roadbook_index::RelationalIndex;
use roadbook_model::{GuestEntry, StopId};
use serde::{Deserialize, Serialize};

/// Tab keys of the guest-list view: the whole tour, or one show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestTab {
    /// Every entry on the tour
    All,
    /// Entries for one stop
    Stop(StopId),
}

/// Badge counts for the guest-list filter tabs
///
/// Per-stop buckets iterate in stop order so the tab row renders stably.
/// The `all` bucket is the full guest-list length - entries whose stop
/// foreign key did not resolve are counted there and only there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCounts {
    /// Full guest-list length, unresolved entries included
    pub all: usize,
    /// Entry count per stop, in stop order
    pub per_stop: IndexMap<StopId, usize>,
}

impl GuestCounts {
    /// The badge for one tab
    #[inline]
    #[must_use]
    pub fn for_tab(&self, tab: GuestTab) -> usize {
        match tab {
            GuestTab::All => self.all,
            GuestTab::Stop(id) => self.per_stop.get(&id).copied().unwrap_or(0),
        }
    }
}

/// Head-count aggregate over a set of guest entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestAggregate {
    /// Number of entries
    pub entries: usize,
    /// Total heads across entries
    pub total_guests: u64,
    /// Entries approved by tour management
    pub approved_entries: usize,
}

/// Badge counts per stop plus the "all" bucket
#[must_use]
pub fn guest_counts_by_stop(index: &RelationalIndex) -> GuestCounts {
    let per_stop = index
        .stops()
        .iter()
        .map(|s| (s.id, index.guests_for(s.id).len()))
        .collect();
    GuestCounts {
        all: index.guest_total(),
        per_stop,
    }
}

/// The entries behind one tab, source order preserved
///
/// The `All` tab includes entries with an unresolved stop foreign key;
/// per-stop tabs never do.
#[must_use]
pub fn filter_guests(index: &RelationalIndex, tab: GuestTab) -> Vec<&GuestEntry> {
    match tab {
        GuestTab::All => index.guests().iter().collect(),
        GuestTab::Stop(id) => index.guests_for(id),
    }
}

/// Head counts over a set of entries
#[must_use]
pub fn guest_aggregate(entries: &[&GuestEntry]) -> GuestAggregate {
    let mut agg = GuestAggregate {
        entries: entries.len(),
        ..GuestAggregate::default()
    };
    for entry in entries {
        agg.total_guests += u64::from(entry.number_of_guests);
        if entry.approved {
            agg.approved_entries += 1;
        }
    }
    agg
}
