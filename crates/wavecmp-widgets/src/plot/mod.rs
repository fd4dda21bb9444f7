//! Plot widget
//!
//! Renders a core [`Plot`](wavecmp_core::plot::Plot) with axes, ticks, title
//! and legend. Scrolling over the plot area publishes a zoom request anchored
//! at the pointer; dragging with the left button publishes pan deltas.

mod canvas;
mod layout;
mod ticks;
mod trace;
mod view;

pub use canvas::{PlotCanvas, PlotInteraction};
pub use layout::PlotLayout;
pub use ticks::{format_tick, nice_ticks};
pub use trace::trace_points;
pub use view::plot_view;
