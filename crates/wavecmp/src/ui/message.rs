//! UI messages

use wavecmp_core::plot::SurfacePoint;
use wavecmp_core::zoom::ScrollDirection;
use wavecmp_core::Surface;

#[derive(Debug, Clone)]
pub enum Message {
    /// Frame index field edited (not yet submitted)
    IndexChanged(String),
    /// Enter pressed in the frame index field
    IndexSubmitted,
    StepPrevious,
    StepNext,
    /// Wheel over a plot, pointer position relative to its plot area
    Scroll(Surface, ScrollDirection, SurfacePoint),
    /// Drag on a plot, as a fraction of its plot area
    Pan(Surface, f64, f64),
    ResetView(Surface),
}
