//! Roadbook Core - per-view controllers
//!
//! One controller per page of the tour book. Each controller owns its
//! view state, fetches its collections from a [`RecordStore`] as a unit,
//! and derives the presentation data through the index and view layers.
//!
//! A refresh that fails leaves the controller in [`ViewState::Failed`];
//! derived computation never runs on a partial fetch. In-flight fetches
//! are not cancelled when a new refresh starts - the last one to settle
//! wins.

pub mod config;
pub mod dashboard;
pub mod guests;
pub mod hotels;
pub mod map_view;
pub mod stops;
pub mod tasks;
pub mod travel;
pub mod view_state;

pub use config::ViewConfig;
pub use dashboard::{DashboardSnapshot, DashboardView};
pub use guests::GuestListView;
pub use hotels::{HotelRow, HotelsView};
pub use map_view::MapView;
pub use stops::StopsView;
pub use tasks::TasksView;
pub use travel::{TravelSnapshot, TravelView};
pub use view_state::ViewState;

pub use roadbook_store::{RecordStore, StoreError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
