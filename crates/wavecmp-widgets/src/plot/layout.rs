//! Placement of the plot area inside the canvas

use iced::{Point, Rectangle, Size};
use wavecmp_core::plot::SurfacePoint;

/// Space reserved around the plot area for title, ticks and labels
pub const MARGIN_LEFT: f32 = 64.0;
pub const MARGIN_RIGHT: f32 = 16.0;
pub const MARGIN_TOP: f32 = 34.0;
pub const MARGIN_BOTTOM: f32 = 42.0;

/// Geometry of one plot inside its canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    /// Plot area in canvas-local coordinates
    pub area: Rectangle,
}

impl PlotLayout {
    /// Layout for a canvas of the given size
    ///
    /// The plot area never collapses below one pixel, so normalized positions
    /// stay finite on tiny windows.
    pub fn new(canvas: Size) -> Self {
        let width = (canvas.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let height = (canvas.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        Self {
            area: Rectangle::new(Point::new(MARGIN_LEFT, MARGIN_TOP), Size::new(width, height)),
        }
    }

    /// Normalized position of a canvas-local point relative to the plot area
    ///
    /// Points outside the area give coordinates outside `[0, 1]`.
    pub fn surface_point(&self, position: Point) -> SurfacePoint {
        SurfacePoint::new(
            ((position.x - self.area.x) / self.area.width) as f64,
            ((position.y - self.area.y) / self.area.height) as f64,
        )
    }

    /// Pointer movement as a fraction of the plot area
    pub fn delta_fraction(&self, from: Point, to: Point) -> (f64, f64) {
        (
            ((to.x - from.x) / self.area.width) as f64,
            ((to.y - from.y) / self.area.height) as f64,
        )
    }

    pub fn contains(&self, position: Point) -> bool {
        self.area.contains(position)
    }
}
