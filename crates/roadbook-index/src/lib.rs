//! Roadbook Index - in-memory join structures over one fetch batch
//!
//! Provides [`RelationalIndex`] for O(1) foreign-key lookups:
//! stop -> hotel (at most one, first match wins) and stop -> guest entries
//! (source order preserved). Built once per fetch and immutable afterward;
//! a new fetch builds a new index.
//!
//! Referential gaps never fail the build: a hotel or guest entry whose stop
//! foreign key does not resolve is kept aside so list views can still count
//! and render it with a placeholder.

use indexmap::IndexMap;
use roadbook_model::{GuestEntry, Hotel, StopId, TourStop};
use std::collections::HashMap;

/// Join structure over one fetched batch of stops, hotels, and guests
///
/// Owns the collections it was built from; accessors hand out references.
/// Iteration over per-stop buckets follows stop fetch order.
#[derive(Debug, Clone)]
pub struct RelationalIndex {
    stops: Vec<TourStop>,
    stop_pos: HashMap<StopId, usize>,
    hotels: Vec<Hotel>,
    hotel_by_stop: HashMap<StopId, usize>,
    guests: Vec<GuestEntry>,
    guests_by_stop: IndexMap<StopId, Vec<usize>>,
    unresolved_guests: Vec<usize>,
    duplicate_hotels: usize,
}

impl RelationalIndex {
    /// Build the index from freshly fetched collections
    ///
    /// Input order is preserved everywhere; nothing is re-sorted here -
    /// route ordering is the derivation layer's job.
    #[must_use]
    pub fn build(stops: Vec<TourStop>, hotels: Vec<Hotel>, guests: Vec<GuestEntry>) -> Self {
        let stop_pos: HashMap<StopId, usize> =
            stops.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

        // First match wins; extra rows are a data-quality condition
        let mut hotel_by_stop: HashMap<StopId, usize> = HashMap::new();
        let mut duplicate_hotels = 0;
        for (i, hotel) in hotels.iter().enumerate() {
            if !stop_pos.contains_key(&hotel.tour_stop_id) {
                continue;
            }
            if hotel_by_stop.contains_key(&hotel.tour_stop_id) {
                duplicate_hotels += 1;
            } else {
                hotel_by_stop.insert(hotel.tour_stop_id, i);
            }
        }

        // Bucket order follows stop fetch order so badge rows are stable
        let mut guests_by_stop: IndexMap<StopId, Vec<usize>> =
            stops.iter().map(|s| (s.id, Vec::new())).collect();
        let mut unresolved_guests = Vec::new();
        for (i, guest) in guests.iter().enumerate() {
            match guests_by_stop.get_mut(&guest.tour_stop_id) {
                Some(bucket) => bucket.push(i),
                None => unresolved_guests.push(i),
            }
        }

        Self {
            stops,
            stop_pos,
            hotels,
            hotel_by_stop,
            guests,
            guests_by_stop,
            unresolved_guests,
            duplicate_hotels,
        }
    }

    /// The stops this index was built from, in fetch order
    #[inline]
    #[must_use]
    pub fn stops(&self) -> &[TourStop] {
        &self.stops
    }

    /// All hotel rows, in fetch order
    #[inline]
    #[must_use]
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// All guest entries, in fetch order
    #[inline]
    #[must_use]
    pub fn guests(&self) -> &[GuestEntry] {
        &self.guests
    }

    /// Lookup a stop by id
    #[inline]
    #[must_use]
    pub fn stop(&self, stop_id: StopId) -> Option<&TourStop> {
        self.stop_pos.get(&stop_id).map(|&i| &self.stops[i])
    }

    /// The hotel for a stop, if any (first match wins on duplicates)
    #[inline]
    #[must_use]
    pub fn hotel_for(&self, stop_id: StopId) -> Option<&Hotel> {
        self.hotel_by_stop.get(&stop_id).map(|&i| &self.hotels[i])
    }

    /// Guest entries for a stop, in source order
    #[must_use]
    pub fn guests_for(&self, stop_id: StopId) -> Vec<&GuestEntry> {
        self.guests_by_stop
            .get(&stop_id)
            .map(|bucket| bucket.iter().map(|&i| &self.guests[i]).collect())
            .unwrap_or_default()
    }

    /// Guest entries whose stop foreign key did not resolve in this batch
    ///
    /// Counted only in the "all" bucket downstream; rendered with an
    /// unknown-show placeholder.
    #[must_use]
    pub fn unresolved_guests(&self) -> Vec<&GuestEntry> {
        self.unresolved_guests
            .iter()
            .map(|&i| &self.guests[i])
            .collect()
    }

    /// Total guest entries in the batch, resolved or not
    #[inline]
    #[must_use]
    pub fn guest_total(&self) -> usize {
        self.guests.len()
    }

    /// Hotel rows beyond the first for some stop (data-quality signal)
    #[inline]
    #[must_use]
    pub fn duplicate_hotels(&self) -> usize {
        self.duplicate_hotels
    }

    /// Number of stops in the batch
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// True when the batch had no stops
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
