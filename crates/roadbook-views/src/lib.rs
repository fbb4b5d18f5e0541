//! Roadbook Views - pure derived computations
//!
//! Every function here is referentially transparent over (entities,
//! relational index): no caching, no invalidation, recomputed on each call.
//! That is a designed property - counts are O(n) over small collections and
//! always consistent with the current snapshot.
//!
//! Empty results are first-class values, never errors.

pub mod guests;
pub mod schedule;
pub mod tasks;
pub mod travel;

pub use guests::{filter_guests, guest_aggregate, guest_counts_by_stop, GuestAggregate, GuestCounts, GuestTab};
pub use schedule::{days_until, route_order, upcoming_stop};
pub use tasks::{filter_tasks, task_counts, urgent_tasks, TaskCounts, TaskTab};
pub use travel::{travel_aggregate, TravelAggregate};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
