//! In-memory record store
//!
//! Seeded collections behind the [`RecordStore`] trait. Used by the test
//! suites and by anything driving the engine without a live backend. A
//! store can also be flipped into a failing mode to exercise the error
//! path.

use crate::error::StoreError;
use crate::query::{Direction, Query, SortField};
use crate::store::RecordStore;
use async_trait::async_trait;
use roadbook_model::{GuestEntry, Hotel, StopId, Task, Tour, TourId, TourStop, TravelLeg};

/// Seeded, in-process record store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tours: Vec<Tour>,
    stops: Vec<TourStop>,
    hotels: Vec<Hotel>,
    tasks: Vec<Task>,
    travel: Vec<TravelLeg>,
    guests: Vec<GuestEntry>,
    outage: Option<String>,
}

impl MemoryStore {
    /// Empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seeded tours
    #[inline]
    #[must_use]
    pub fn with_tours(mut self, tours: Vec<Tour>) -> Self {
        self.tours = tours;
        self
    }

    /// With seeded stops
    #[inline]
    #[must_use]
    pub fn with_stops(mut self, stops: Vec<TourStop>) -> Self {
        self.stops = stops;
        self
    }

    /// With seeded hotels
    #[inline]
    #[must_use]
    pub fn with_hotels(mut self, hotels: Vec<Hotel>) -> Self {
        self.hotels = hotels;
        self
    }

    /// With seeded tasks
    #[inline]
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// With seeded travel legs
    #[inline]
    #[must_use]
    pub fn with_travel(mut self, travel: Vec<TravelLeg>) -> Self {
        self.travel = travel;
        self
    }

    /// With seeded guest entries
    #[inline]
    #[must_use]
    pub fn with_guests(mut self, guests: Vec<GuestEntry>) -> Self {
        self.guests = guests;
        self
    }

    /// Make every fetch fail with `StoreError::Unavailable`
    #[inline]
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.outage = Some(reason.into());
        self
    }

    fn check_outage(&self) -> Result<(), StoreError> {
        match &self.outage {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

fn tour_matches(tour: &Tour, query: &Query) -> bool {
    query.tour_filter().map_or(true, |id| tour.id == id)
}

fn owned_by_tour(tour_id: TourId, query: &Query) -> bool {
    query.tour_filter().map_or(true, |id| tour_id == id)
}

fn in_stop_set(stop_id: StopId, query: &Query) -> bool {
    query
        .stop_set_filter()
        .map_or(true, |ids| ids.contains(&stop_id))
}

fn apply_direction<T>(rows: &mut [T], direction: Direction) {
    if direction == Direction::Descending {
        rows.reverse();
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_tours(&self, query: &Query) -> Result<Vec<Tour>, StoreError> {
        self.check_outage()?;
        Ok(self
            .tours
            .iter()
            .filter(|t| tour_matches(t, query))
            .cloned()
            .collect())
    }

    async fn fetch_stops(&self, query: &Query) -> Result<Vec<TourStop>, StoreError> {
        self.check_outage()?;
        let mut rows: Vec<TourStop> = self
            .stops
            .iter()
            .filter(|s| owned_by_tour(s.tour_id, query) && in_stop_set(s.id, query))
            .cloned()
            .collect();
        if let Some(sort) = query.sort {
            if sort.field == SortField::ShowDate {
                rows.sort_by_key(|s| s.show_date);
                apply_direction(&mut rows, sort.direction);
            }
        }
        Ok(rows)
    }

    async fn fetch_hotels(&self, query: &Query) -> Result<Vec<Hotel>, StoreError> {
        self.check_outage()?;
        Ok(self
            .hotels
            .iter()
            .filter(|h| in_stop_set(h.tour_stop_id, query))
            .cloned()
            .collect())
    }

    async fn fetch_tasks(&self, query: &Query) -> Result<Vec<Task>, StoreError> {
        self.check_outage()?;
        let mut rows: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| owned_by_tour(t.tour_id, query))
            .cloned()
            .collect();
        if let Some(sort) = query.sort {
            if sort.field == SortField::DueDate {
                // Undated tasks sort last, like a NULLS LAST store
                rows.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
                apply_direction(&mut rows, sort.direction);
            }
        }
        Ok(rows)
    }

    async fn fetch_travel(&self, query: &Query) -> Result<Vec<TravelLeg>, StoreError> {
        self.check_outage()?;
        let mut rows: Vec<TravelLeg> = self
            .travel
            .iter()
            .filter(|l| owned_by_tour(l.tour_id, query))
            .cloned()
            .collect();
        if let Some(sort) = query.sort {
            if sort.field == SortField::Departure {
                rows.sort_by_key(|l| l.departure);
                apply_direction(&mut rows, sort.direction);
            }
        }
        Ok(rows)
    }

    async fn fetch_guests(&self, query: &Query) -> Result<Vec<GuestEntry>, StoreError> {
        self.check_outage()?;
        Ok(self
            .guests
            .iter()
            .filter(|g| in_stop_set(g.tour_stop_id, query))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use roadbook_model::{TaskId, TaskPriority};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stop(tour_id: TourId, venue: &str, show_date: NaiveDate) -> TourStop {
        TourStop::new(StopId::new(), tour_id, venue, "Austin", "TX", show_date)
    }

    #[tokio::test]
    async fn stops_filter_by_tour_and_sort_by_show_date() {
        let tour_id = TourId::new();
        let other_tour = TourId::new();
        let store = MemoryStore::new().with_stops(vec![
            stop(tour_id, "Venue A", date(2026, 3, 1)),
            stop(other_tour, "Elsewhere", date(2026, 2, 1)),
            stop(tour_id, "Venue B", date(2026, 2, 15)),
        ]);

        let rows = store
            .fetch_stops(&Query::new().tour(tour_id).sort_by(SortField::ShowDate))
            .await
            .unwrap();

        let venues: Vec<&str> = rows.iter().map(|s| s.venue_name.as_str()).collect();
        assert_eq!(venues, vec!["Venue B", "Venue A"]);
    }

    #[tokio::test]
    async fn tasks_sort_undated_last() {
        let tour_id = TourId::new();
        let dated = Task::new(TaskId::new(), tour_id, "Advance venue")
            .with_due_date(date(2026, 2, 1))
            .with_priority(TaskPriority::High);
        let undated = Task::new(TaskId::new(), tour_id, "Order merch");
        let store = MemoryStore::new().with_tasks(vec![undated.clone(), dated.clone()]);

        let rows = store
            .fetch_tasks(&Query::new().tour(tour_id).sort_by(SortField::DueDate))
            .await
            .unwrap();

        assert_eq!(rows[0].id, dated.id);
        assert_eq!(rows[1].id, undated.id);
    }

    #[tokio::test]
    async fn guests_filter_by_stop_set() {
        let in_set = StopId::new();
        let out_of_set = StopId::new();
        let store = MemoryStore::new().with_guests(vec![
            GuestEntry::new(
                roadbook_model::GuestId::new(),
                in_set,
                "Dana",
                roadbook_model::PassType::Vip,
            ),
            GuestEntry::new(
                roadbook_model::GuestId::new(),
                out_of_set,
                "Sam",
                roadbook_model::PassType::General,
            ),
        ]);

        let rows = store
            .fetch_guests(&Query::new().stops_in(vec![in_set]))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].guest_name, "Dana");
    }

    #[tokio::test]
    async fn failing_store_reports_outage() {
        let store = MemoryStore::new().failing("maintenance window");
        let err = store.fetch_tours(&Query::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(err.is_transient());
    }
}
