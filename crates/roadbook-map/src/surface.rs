//! The map-substrate capability surface and the driver over it

use crate::route::{Bounds, RoutePlan, RoutePoint};
use roadbook_model::Coordinate;

/// What the engine needs from a mapping widget
///
/// Three capabilities, nothing more: markers at coordinates, a polyline
/// over ordered coordinates, and viewport fitting. Click events flow back
/// separately as [`crate::MarkerEvent`] messages.
pub trait MapSurface {
    /// Render the numbered route markers
    fn render_markers(&mut self, markers: &[RoutePoint]);

    /// Draw the route polyline over ordered coordinates
    fn draw_polyline(&mut self, path: &[Coordinate]);

    /// Fit the viewport to cover the routed coordinates
    fn fit_bounds(&mut self, bounds: Bounds);
}

/// Outcome of driving a plan onto a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Markers, polyline, and fit-bounds were issued
    Rendered {
        /// Markers placed
        markers: usize,
        /// Stops listed without geometry
        unmapped: usize,
    },
    /// No stop had a valid coordinate; the surface was not touched
    NoMappableStops,
}

/// Drives a [`RoutePlan`] onto a [`MapSurface`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MapDriver;

impl MapDriver {
    /// Issue the draw calls for a plan
    ///
    /// An unmappable plan produces zero surface calls and an explicit
    /// [`RenderOutcome::NoMappableStops`] for the shell to surface.
    pub fn render(plan: &RoutePlan, surface: &mut dyn MapSurface) -> RenderOutcome {
        if !plan.is_mappable() {
            return RenderOutcome::NoMappableStops;
        }

        surface.render_markers(&plan.points);
        surface.draw_polyline(&plan.polyline);
        if let Some(bounds) = plan.bounds {
            surface.fit_bounds(bounds);
        }

        RenderOutcome::Rendered {
            markers: plan.points.len(),
            unmapped: plan.unmapped.len(),
        }
    }
}
