//! Pointer-anchored scroll zoom
//!
//! Scrolling over a plot scales both axes around the data point under the
//! pointer: that point keeps its relative position inside the new bounds, so
//! the content under the mouse stays put while everything else grows or
//! shrinks around it.

use crate::plot::{AxisRange, PlotBounds};
use crate::types::DEFAULT_ZOOM_BASE;

/// Scroll wheel direction, already reduced from toolkit-specific deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Zoom in
    Up,
    /// Zoom out
    Down,
    /// Anything else (horizontal scroll, zero delta); no zoom
    Other,
}

impl ScrollDirection {
    /// Classify a vertical wheel delta (positive = away from the user)
    pub fn from_vertical_delta(delta: f32) -> Self {
        if delta > 0.0 {
            ScrollDirection::Up
        } else if delta < 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Other
        }
    }
}

/// Scale one axis around an anchor value
///
/// With `rel = (max - anchor) / (max - min)`, the result is
/// `[anchor - w * (1 - rel), anchor + w * rel]` where `w = width * scale`.
/// Zero-width axes and a scale of 1 return the range unchanged.
pub fn zoom_axis(range: AxisRange, anchor: f64, scale: f64) -> AxisRange {
    let width = range.width();
    if scale == 1.0 || width == 0.0 || !width.is_finite() {
        return range;
    }

    let new_width = width * scale;
    let rel = (range.max - anchor) / width;
    AxisRange::new(anchor - new_width * (1.0 - rel), anchor + new_width * rel)
}

/// Scroll-to-zoom behaviour shared by every plot surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    base: f64,
}

impl ZoomController {
    /// Zoom by `base` per scroll step
    ///
    /// Bases that wouldn't zoom at all (`<= 1`, NaN) fall back to the default.
    pub fn new(base: f64) -> Self {
        if base > 1.0 && base.is_finite() {
            Self { base }
        } else {
            log::warn!("Invalid zoom base {}, using {}", base, DEFAULT_ZOOM_BASE);
            Self {
                base: DEFAULT_ZOOM_BASE,
            }
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    /// Width multiplier for a scroll direction
    pub fn scale_factor(&self, direction: ScrollDirection) -> f64 {
        match direction {
            ScrollDirection::Up => 1.0 / self.base,
            ScrollDirection::Down => self.base,
            ScrollDirection::Other => 1.0,
        }
    }

    /// New bounds after one scroll step anchored at data point `anchor`
    pub fn zoom(&self, bounds: PlotBounds, anchor: (f64, f64), direction: ScrollDirection) -> PlotBounds {
        let scale = self.scale_factor(direction);
        PlotBounds::new(
            zoom_axis(bounds.x, anchor.0, scale),
            zoom_axis(bounds.y, anchor.1, scale),
        )
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            base: DEFAULT_ZOOM_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: AxisRange, b: AxisRange) -> bool {
        (a.min - b.min).abs() < EPS && (a.max - b.max).abs() < EPS
    }

    #[test]
    fn test_scale_factor() {
        let zoom = ZoomController::new(2.0);
        assert_eq!(zoom.scale_factor(ScrollDirection::Up), 0.5);
        assert_eq!(zoom.scale_factor(ScrollDirection::Down), 2.0);
        assert_eq!(zoom.scale_factor(ScrollDirection::Other), 1.0);
    }

    #[test]
    fn test_invalid_base_falls_back() {
        assert_eq!(ZoomController::new(1.0).base(), DEFAULT_ZOOM_BASE);
        assert_eq!(ZoomController::new(f64::NAN).base(), DEFAULT_ZOOM_BASE);
        assert_eq!(ZoomController::new(3.0).base(), 3.0);
    }

    #[test]
    fn test_zoom_in_keeps_anchor_relative_position() {
        let zoom = ZoomController::default();
        let bounds = PlotBounds::new(AxisRange::new(0.0, 100.0), AxisRange::new(-1.0, 1.0));
        let anchor = (25.0, 0.5);

        let zoomed = zoom.zoom(bounds, anchor, ScrollDirection::Up);

        assert!((zoomed.x.width() - 50.0).abs() < EPS);
        assert!((zoomed.y.width() - 1.0).abs() < EPS);
        assert!((zoomed.x.fraction_of(anchor.0) - bounds.x.fraction_of(anchor.0)).abs() < EPS);
        assert!((zoomed.y.fraction_of(anchor.1) - bounds.y.fraction_of(anchor.1)).abs() < EPS);
        assert!(approx(zoomed.x, AxisRange::new(12.5, 62.5)));
    }

    #[test]
    fn test_zoom_out_keeps_anchor_relative_position() {
        let zoom = ZoomController::new(3.0);
        let bounds = PlotBounds::new(AxisRange::new(10.0, 20.0), AxisRange::new(0.0, 4.0));
        let anchor = (18.0, 1.0);

        let zoomed = zoom.zoom(bounds, anchor, ScrollDirection::Down);

        assert!((zoomed.x.width() - 30.0).abs() < EPS);
        assert!((zoomed.x.fraction_of(anchor.0) - 0.8).abs() < EPS);
        assert!((zoomed.y.fraction_of(anchor.1) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_zoom_in_then_out_restores_bounds() {
        let zoom = ZoomController::default();
        let bounds = PlotBounds::new(AxisRange::new(-3.5, 1151.5), AxisRange::new(-0.73, 0.91));

        for anchor in [(0.0, 0.0), (400.0, -0.2), (1151.5, 0.91), (-3.5, -0.73), (2000.0, 5.0)] {
            let zin = zoom.zoom(bounds, anchor, ScrollDirection::Up);
            let back = zoom.zoom(zin, anchor, ScrollDirection::Down);
            assert!(approx(back.x, bounds.x), "anchor {:?}: {:?}", anchor, back);
            assert!(approx(back.y, bounds.y), "anchor {:?}: {:?}", anchor, back);
        }
    }

    #[test]
    fn test_other_direction_is_noop() {
        let zoom = ZoomController::default();
        let bounds = PlotBounds::default();
        assert_eq!(zoom.zoom(bounds, (0.3, 0.1), ScrollDirection::Other), bounds);
    }

    #[test]
    fn test_zero_width_axis_unchanged() {
        let range = AxisRange::new(1.0, 1.0);
        assert_eq!(zoom_axis(range, 1.0, 0.5), range);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(ScrollDirection::from_vertical_delta(1.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_vertical_delta(-0.2), ScrollDirection::Down);
        assert_eq!(ScrollDirection::from_vertical_delta(0.0), ScrollDirection::Other);
    }
}
