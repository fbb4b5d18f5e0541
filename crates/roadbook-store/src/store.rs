//! The record-store capability surface
//!
//! One typed fetch per collection. Every call is a single best-effort bulk
//! request: a full result set or a [`StoreError`], never partial rows.

use crate::error::StoreError;
use crate::query::Query;
use async_trait::async_trait;
use roadbook_model::{GuestEntry, Hotel, Task, Tour, TourStop, TravelLeg};

/// Read access to the six entity collections
///
/// Implementations must honor the query's equality filters and explicit
/// sort. Consumers still re-sort where ordering is an invariant (see the
/// route derivation) - the sort here is a contract, not a guarantee the
/// engine leans on.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch tours
    async fn fetch_tours(&self, query: &Query) -> Result<Vec<Tour>, StoreError>;

    /// Fetch tour stops
    async fn fetch_stops(&self, query: &Query) -> Result<Vec<TourStop>, StoreError>;

    /// Fetch hotels
    async fn fetch_hotels(&self, query: &Query) -> Result<Vec<Hotel>, StoreError>;

    /// Fetch tasks
    async fn fetch_tasks(&self, query: &Query) -> Result<Vec<Task>, StoreError>;

    /// Fetch travel legs
    async fn fetch_travel(&self, query: &Query) -> Result<Vec<TravelLeg>, StoreError>;

    /// Fetch guest-list entries
    async fn fetch_guests(&self, query: &Query) -> Result<Vec<GuestEntry>, StoreError>;
}
