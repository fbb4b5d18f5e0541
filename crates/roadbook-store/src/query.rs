//! Query shapes accepted by the record store
//!
//! The engine only ever asks for equality on `tour_id`, membership of
//! `tour_stop_id` in a set, and ascending sorts on a date field. Anything
//! richer belongs to the store, not here.

use roadbook_model::{StopId, TourId};
use serde::{Deserialize, Serialize};

/// Equality predicate on a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Rows owned by this tour (matches a tour's own id on the tours
    /// collection)
    TourIdEq(TourId),
    /// Rows whose stop foreign key is in this set
    StopIdIn(Vec<StopId>),
}

/// Sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Stop show date
    ShowDate,
    /// Task due date
    DueDate,
    /// Travel-leg departure time
    Departure,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Ascending (the only direction the engine requests)
    Ascending,
    /// Descending
    Descending,
}

/// An explicit sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Field to sort by
    pub field: SortField,
    /// Direction
    pub direction: Direction,
}

impl Sort {
    /// Ascending sort on a field
    #[inline]
    #[must_use]
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }
}

/// A collection fetch request: equality filters plus an optional sort
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Equality predicates, all of which must match
    pub equals: Vec<Predicate>,
    /// Explicit sort, when ordering matters to the caller
    pub sort: Option<Sort>,
}

impl Query {
    /// Empty query (full collection, store order)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter to rows owned by a tour
    #[inline]
    #[must_use]
    pub fn tour(mut self, tour_id: TourId) -> Self {
        self.equals.push(Predicate::TourIdEq(tour_id));
        self
    }

    /// Filter to rows whose stop foreign key is in the set
    #[inline]
    #[must_use]
    pub fn stops_in(mut self, stop_ids: Vec<StopId>) -> Self {
        self.equals.push(Predicate::StopIdIn(stop_ids));
        self
    }

    /// Request an ascending sort
    #[inline]
    #[must_use]
    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort = Some(Sort::ascending(field));
        self
    }

    /// The tour filter, if one was set
    #[must_use]
    pub fn tour_filter(&self) -> Option<TourId> {
        self.equals.iter().find_map(|p| match p {
            Predicate::TourIdEq(id) => Some(*id),
            Predicate::StopIdIn(_) => None,
        })
    }

    /// The stop-set filter, if one was set
    #[must_use]
    pub fn stop_set_filter(&self) -> Option<&[StopId]> {
        self.equals.iter().find_map(|p| match p {
            Predicate::StopIdIn(ids) => Some(ids.as_slice()),
            Predicate::TourIdEq(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_accumulates() {
        let tour_id = TourId::new();
        let stop_id = StopId::new();
        let query = Query::new()
            .tour(tour_id)
            .stops_in(vec![stop_id])
            .sort_by(SortField::ShowDate);

        assert_eq!(query.tour_filter(), Some(tour_id));
        assert_eq!(query.stop_set_filter(), Some(&[stop_id][..]));
        assert_eq!(query.sort, Some(Sort::ascending(SortField::ShowDate)));
    }

    #[test]
    fn empty_query_has_no_filters() {
        let query = Query::new();
        assert!(query.tour_filter().is_none());
        assert!(query.stop_set_filter().is_none());
        assert!(query.sort.is_none());
    }
}
