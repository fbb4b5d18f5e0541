//! Testing utilities for the roadbook workspace
//!
//! Shared fixtures: a small seeded tour world plus helpers for
//! building individual records with sensible defaults.

#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use roadbook_model::{
    GuestEntry, GuestId, Hotel, HotelId, PassType, StopId, Task, TaskId, TaskPriority, TaskStatus,
    Tour, TourId, TourStop, TransportType, TravelId, TravelLeg,
};
use roadbook_store::MemoryStore;
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn sample_tour(id: TourId) -> Tour {
    Tour::new(id, "Night Circuit", "The Low Meridian", date(2026, 3, 1), date(2026, 3, 20))
        .with_crew(14)
        .with_budget(Decimal::new(250_000, 0))
}

pub fn stop_at(
    tour: TourId,
    city: &str,
    state: &str,
    show_date: NaiveDate,
    lat: f64,
    lng: f64,
) -> TourStop {
    TourStop::new(StopId::new(), tour, format!("{city} Hall"), city, state, show_date)
        .with_coordinates(lat, lng)
}

pub fn stop_without_coordinates(
    tour: TourId,
    city: &str,
    state: &str,
    show_date: NaiveDate,
) -> TourStop {
    TourStop::new(StopId::new(), tour, format!("{city} Hall"), city, state, show_date)
}

pub fn hotel_for(stop: StopId, name: &str, city: &str, night: NaiveDate) -> Hotel {
    Hotel::new(
        HotelId::new(),
        stop,
        name,
        city,
        "US",
        night,
        night.succ_opt().unwrap(),
    )
    .with_rooms(12)
    .with_confirmation(format!("CNF-{name}"))
}

pub fn task_with(
    tour: TourId,
    title: &str,
    priority: TaskPriority,
    status: TaskStatus,
) -> Task {
    Task::new(TaskId::new(), tour, title)
        .with_priority(priority)
        .with_status(status)
}

pub fn travel_leg(
    tour: TourId,
    transport: TransportType,
    departure: DateTime<Utc>,
    cost: Option<Decimal>,
) -> TravelLeg {
    let leg = TravelLeg::new(TravelId::new(), tour, "Austin, TX", "Denver, CO", departure, transport);
    match cost {
        Some(c) => leg.with_cost(c),
        None => leg,
    }
}

pub fn guest_for(stop: StopId, name: &str, guests: u32) -> GuestEntry {
    GuestEntry::new(GuestId::new(), stop, name, PassType::Vip).with_guests(guests)
}

/// A fully seeded in-memory world: one tour, three stops (the third
/// without coordinates), hotels on the first two stops, a mixed task
/// board, two travel legs, and guests on every stop.
pub struct SeededWorld {
    pub tour_id: TourId,
    pub stop_ids: Vec<StopId>,
    pub store: MemoryStore,
}

pub fn seeded_world() -> SeededWorld {
    let tour_id = TourId::new();
    let tour = sample_tour(tour_id);

    // Intentionally out of date order to exercise sorting downstream.
    let austin = stop_at(tour_id, "Austin", "TX", date(2026, 3, 5), 30.2672, -97.7431);
    let denver = stop_at(tour_id, "Denver", "CO", date(2026, 3, 2), 39.7392, -104.9903);
    let remote = stop_without_coordinates(tour_id, "Fargo", "ND", date(2026, 3, 9));
    let stop_ids = vec![austin.id, denver.id, remote.id];

    let hotels = vec![
        hotel_for(austin.id, "Driskill", "Austin", date(2026, 3, 5)),
        hotel_for(denver.id, "Oxford", "Denver", date(2026, 3, 2)),
    ];

    let tasks = vec![
        task_with(tour_id, "Advance Austin", TaskPriority::Urgent, TaskStatus::Todo)
            .with_due_date(date(2026, 3, 4)),
        task_with(tour_id, "Book backline", TaskPriority::High, TaskStatus::InProgress),
        task_with(tour_id, "Settle Denver", TaskPriority::High, TaskStatus::Completed),
        task_with(tour_id, "Print laminates", TaskPriority::Low, TaskStatus::Todo),
    ];

    let travel = vec![
        travel_leg(tour_id, TransportType::Flight, instant(2026, 3, 1, 9), Some(Decimal::new(500, 0))),
        travel_leg(tour_id, TransportType::Bus, instant(2026, 3, 3, 7), None),
    ];

    let guests = vec![
        guest_for(austin.id, "Reyes", 2),
        guest_for(denver.id, "Okafor", 1).approved(),
        guest_for(remote.id, "Lind", 3),
    ];

    let store = MemoryStore::new()
        .with_tours(vec![tour])
        .with_stops(vec![austin, denver, remote])
        .with_hotels(hotels)
        .with_tasks(tasks)
        .with_travel(travel)
        .with_guests(guests);

    SeededWorld { tour_id, stop_ids, store }
}
