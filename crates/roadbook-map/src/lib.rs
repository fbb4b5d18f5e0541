//! Roadbook Map - the geospatial route renderer
//!
//! Turns the route-ordered stop sequence into a presentation-ready plan
//! (numbered markers, a polyline over the same ordered coordinates, and a
//! fit-bounds request), then drives an abstract [`MapSurface`]. Marker
//! clicks come back as explicit [`MarkerEvent`] messages - never closures
//! over view state - and land in the map's sticky selection machine.
//!
//! Geometry gaps are not errors: a stop without a valid coordinate is
//! excluded from the polyline and bounds but still listed with a
//! "location unknown" marker state. When no stop is mappable at all, the
//! driver touches the surface not at all and reports the condition.

pub mod events;
pub mod route;
pub mod surface;

pub use events::{apply_event, MarkerEvent};
pub use route::{Bounds, RoutePlan, RoutePoint, UnmappedStop};
pub use surface::{MapDriver, MapSurface, RenderOutcome};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
