//! iced widgets for the wavecmp viewer
//!
//! Same split as the rest of our iced code:
//!
//! - **State**: the toolkit-independent [`Plot`](wavecmp_core::plot::Plot) from core
//! - **View functions**: take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: custom drawing and event-to-callback translation
//!
//! Nothing here mutates plot state; scroll and drag gestures are published as
//! messages and applied by the application.

pub mod plot;
pub mod theme;

pub use plot::{nice_ticks, plot_view, trace_points, PlotInteraction, PlotLayout};
pub use theme::{series_color, SERIES_COLORS};
