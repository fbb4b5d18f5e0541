//! Schedule derivations: countdown and route ordering

use chrono::{DateTime, NaiveTime, Utc};
use roadbook_model::{Tour, TourStop};

const SECS_PER_DAY: i64 = 86_400;

/// Whole days until the tour starts, rounded up
///
/// Zero or negative once the tour has started - intentionally so; the
/// presentation layer decides how to label a tour already on the road.
#[must_use]
pub fn days_until(tour: &Tour, now: DateTime<Utc>) -> i64 {
    let start = tour.start_date.and_time(NaiveTime::MIN).and_utc();
    let delta_secs = (start - now).num_seconds();
    // Ceiling division that stays correct for negative deltas
    (delta_secs + SECS_PER_DAY - 1).div_euclid(SECS_PER_DAY)
}

/// Stops in route order: `show_date` ascending, stable on ties
///
/// The store's sort is a contract, not a guarantee - an unsorted batch is
/// tolerated by sorting here before any route is derived. Idempotent.
#[must_use]
pub fn route_order(stops: &[TourStop]) -> Vec<TourStop> {
    let mut ordered = stops.to_vec();
    ordered.sort_by_key(|s| s.show_date);
    ordered
}

/// The next stop on the route: earliest `show_date`, first on ties
#[must_use]
pub fn upcoming_stop(stops: &[TourStop]) -> Option<&TourStop> {
    stops.iter().fold(None, |best: Option<&TourStop>, s| match best {
        Some(b) if b.show_date <= s.show_date => Some(b),
        _ => Some(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use roadbook_model::{StopId, TourId};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn stop(venue: &str, show_date: NaiveDate) -> TourStop {
        TourStop::new(StopId::new(), TourId::new(), venue, "Austin", "TX", show_date)
    }

    fn tour(start: NaiveDate) -> Tour {
        Tour::new(TourId::new(), "Neon Nights", "The Volts", start, date(3, 20))
    }

    #[test]
    fn days_until_rounds_up() {
        let tour = tour(date(2, 15));
        // 18:00 the day before: 6 hours out rounds up to 1 day
        let now = Utc.with_ymd_and_hms(2026, 2, 14, 18, 0, 0).unwrap();
        assert_eq!(days_until(&tour, now), 1);
    }

    #[test]
    fn days_until_zero_on_start_midnight() {
        let tour = tour(date(2, 15));
        let now = Utc.with_ymd_and_hms(2026, 2, 15, 0, 0, 0).unwrap();
        assert_eq!(days_until(&tour, now), 0);
    }

    #[test]
    fn days_until_negative_after_start() {
        let tour = tour(date(2, 15));
        let now = Utc.with_ymd_and_hms(2026, 2, 18, 12, 0, 0).unwrap();
        assert!(days_until(&tour, now) < 0);
    }

    #[test]
    fn route_order_sorts_unsorted_batch() {
        let stops = vec![stop("Venue A", date(3, 1)), stop("Venue B", date(2, 15))];
        let ordered = route_order(&stops);
        let venues: Vec<&str> = ordered.iter().map(|s| s.venue_name.as_str()).collect();
        assert_eq!(venues, vec!["Venue B", "Venue A"]);
    }

    #[test]
    fn route_order_is_idempotent() {
        let stops = vec![
            stop("C", date(3, 5)),
            stop("A", date(2, 15)),
            stop("B", date(3, 1)),
        ];
        let once = route_order(&stops);
        let twice = route_order(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn route_order_stable_on_ties() {
        let first = stop("First booked", date(3, 1));
        let second = stop("Second booked", date(3, 1));
        let ordered = route_order(&[first.clone(), second.clone()]);
        assert_eq!(ordered[0].id, first.id);
        assert_eq!(ordered[1].id, second.id);
    }

    #[test]
    fn upcoming_stop_earliest_first_on_tie() {
        let a = stop("A", date(3, 1));
        let b = stop("B", date(2, 15));
        let b_twin = stop("B twin", date(2, 15));
        let stops = vec![a, b.clone(), b_twin];
        assert_eq!(upcoming_stop(&stops).unwrap().id, b.id);
        assert!(upcoming_stop(&[]).is_none());
    }
}
