//! Roadbook Store - the record-store query surface
//!
//! The engine reads six entity collections from an external store through
//! [`RecordStore`]: a best-effort bulk fetch per collection with equality
//! filters and an explicit sort key. The store either returns a full result
//! set or a hard failure - no partial-row streaming.
//!
//! [`MemoryStore`] is the in-process implementation used by tests and by
//! anything that wants to run the engine against seeded data.

pub mod error;
pub mod memory;
pub mod query;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{Direction, Predicate, Query, Sort, SortField};
pub use store::RecordStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
