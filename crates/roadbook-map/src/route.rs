//! Route plan: ordered markers, polyline, and bounds

use roadbook_model::{Coordinate, StopId, TourStop};
use roadbook_views::route_order;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over routed coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Southernmost latitude
    pub min_lat: f64,
    /// Northernmost latitude
    pub max_lat: f64,
    /// Westernmost longitude
    pub min_lng: f64,
    /// Easternmost longitude
    pub max_lng: f64,
}

impl Bounds {
    /// A degenerate box around a single coordinate
    #[inline]
    #[must_use]
    pub fn around(coord: Coordinate) -> Self {
        Self {
            min_lat: coord.lat,
            max_lat: coord.lat,
            min_lng: coord.lng,
            max_lng: coord.lng,
        }
    }

    /// Grow the box to cover a coordinate
    pub fn extend(&mut self, coord: Coordinate) {
        self.min_lat = self.min_lat.min(coord.lat);
        self.max_lat = self.max_lat.max(coord.lat);
        self.min_lng = self.min_lng.min(coord.lng);
        self.max_lng = self.max_lng.max(coord.lng);
    }

    /// True when the box covers the coordinate
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.lat >= self.min_lat
            && coord.lat <= self.max_lat
            && coord.lng >= self.min_lng
            && coord.lng <= self.max_lng
    }
}

/// One routed marker: sequence number, coordinate, and label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// 1-based position along the route
    pub seq: usize,
    /// The stop this marker selects
    pub stop_id: StopId,
    /// Marker coordinate
    pub coordinate: Coordinate,
    /// Marker label (venue name)
    pub label: String,
}

/// A stop listed in the side panel but absent from the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmappedStop {
    /// The stop
    pub stop_id: StopId,
    /// Its label, rendered with a "location unknown" marker state
    pub label: String,
}

/// Presentation-ready route over one stop batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Routed markers in show-date order
    pub points: Vec<RoutePoint>,
    /// Polyline path: the same ordered coordinates
    pub polyline: Vec<Coordinate>,
    /// Fit-bounds request covering every routed coordinate
    pub bounds: Option<Bounds>,
    /// Stops without valid geometry, still listed
    pub unmapped: Vec<UnmappedStop>,
}

impl RoutePlan {
    /// Build the plan from a stop batch
    ///
    /// Sorts into route order first - an unsorted fetch never produces a
    /// crossed route. Sequence numbers follow route order across mappable
    /// stops only, matching the numbered markers on the surface.
    #[must_use]
    pub fn build(stops: &[TourStop]) -> Self {
        let ordered = route_order(stops);

        let mut points = Vec::new();
        let mut polyline = Vec::new();
        let mut bounds: Option<Bounds> = None;
        let mut unmapped = Vec::new();

        for stop in &ordered {
            match stop.coordinate() {
                Some(coord) => {
                    points.push(RoutePoint {
                        seq: points.len() + 1,
                        stop_id: stop.id,
                        coordinate: coord,
                        label: stop.venue_name.clone(),
                    });
                    polyline.push(coord);
                    match bounds.as_mut() {
                        Some(b) => b.extend(coord),
                        None => bounds = Some(Bounds::around(coord)),
                    }
                }
                None => unmapped.push(UnmappedStop {
                    stop_id: stop.id,
                    label: stop.venue_name.clone(),
                }),
            }
        }

        Self {
            points,
            polyline,
            bounds,
            unmapped,
        }
    }

    /// True when at least one stop has a valid coordinate
    #[inline]
    #[must_use]
    pub fn is_mappable(&self) -> bool {
        !self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use roadbook_model::TourId;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn stop(venue: &str, show: NaiveDate, coord: Option<(f64, f64)>) -> TourStop {
        let s = TourStop::new(StopId::new(), TourId::new(), venue, "City", "ST", show);
        match coord {
            Some((lat, lng)) => s.with_coordinates(lat, lng),
            None => s,
        }
    }

    #[test]
    fn unsorted_batch_routes_by_show_date() {
        let stops = vec![
            stop("Venue A", date(3, 1), Some((34.0, -118.2))),
            stop("Venue B", date(2, 15), Some((37.8, -122.4))),
        ];
        let plan = RoutePlan::build(&stops);

        let labels: Vec<&str> = plan.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Venue B", "Venue A"]);
        assert_eq!(plan.polyline.len(), 2);
        assert_eq!(plan.polyline[0], Coordinate::new(37.8, -122.4));
        assert_eq!(plan.polyline[1], Coordinate::new(34.0, -118.2));

        let bounds = plan.bounds.unwrap();
        assert!(bounds.contains(Coordinate::new(34.0, -118.2)));
        assert!(bounds.contains(Coordinate::new(37.8, -122.4)));
    }

    #[test]
    fn sequence_numbers_are_one_based_route_order() {
        let stops = vec![
            stop("Third", date(3, 10), Some((40.0, -105.0))),
            stop("First", date(3, 1), Some((34.0, -118.2))),
            stop("Second", date(3, 5), Some((37.8, -122.4))),
        ];
        let plan = RoutePlan::build(&stops);
        let seqs: Vec<(usize, &str)> = plan
            .points
            .iter()
            .map(|p| (p.seq, p.label.as_str()))
            .collect();
        assert_eq!(seqs, vec![(1, "First"), (2, "Second"), (3, "Third")]);
    }

    #[test]
    fn missing_geometry_is_listed_not_routed() {
        let stops = vec![
            stop("Mapped", date(3, 1), Some((34.0, -118.2))),
            stop("No coords", date(3, 2), None),
        ];
        let plan = RoutePlan::build(&stops);

        assert_eq!(plan.points.len(), 1);
        assert_eq!(plan.polyline.len(), 1);
        assert_eq!(plan.unmapped.len(), 1);
        assert_eq!(plan.unmapped[0].label, "No coords");

        let bounds = plan.bounds.unwrap();
        assert_eq!(bounds.min_lat, 34.0);
        assert_eq!(bounds.max_lat, 34.0);
    }

    #[test]
    fn invalid_geometry_counts_as_missing() {
        let stops = vec![stop("NaN venue", date(3, 1), Some((f64::NAN, -118.2)))];
        let plan = RoutePlan::build(&stops);
        assert!(!plan.is_mappable());
        assert_eq!(plan.unmapped.len(), 1);
    }

    #[test]
    fn zero_mappable_stops() {
        let stops = vec![
            stop("A", date(3, 1), None),
            stop("B", date(3, 2), None),
        ];
        let plan = RoutePlan::build(&stops);
        assert!(!plan.is_mappable());
        assert!(plan.bounds.is_none());
        assert!(plan.polyline.is_empty());
        assert_eq!(plan.unmapped.len(), 2);
    }

    #[test]
    fn empty_batch_builds_empty_plan() {
        let plan = RoutePlan::build(&[]);
        assert!(!plan.is_mappable());
        assert!(plan.unmapped.is_empty());
    }
}
