//! The two comparison views
//!
//! - **Overview**: per-frame summaries of both tracks across the whole signal
//! - **Inspector**: raw samples of a single frame from both tracks
//!
//! Views hold no state of their own; they draw into a [`PlotSurface`].
//!
//! [`PlotSurface`]: crate::plot::PlotSurface

mod inspector;
mod overview;

pub use inspector::{FrameInspector, InspectorError};
pub use overview::render_overview;
