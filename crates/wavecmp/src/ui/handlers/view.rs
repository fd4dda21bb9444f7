//! Plot view handlers
//!
//! Handles: Scroll, Pan, ResetView

use iced::Task;
use wavecmp_core::plot::SurfacePoint;
use wavecmp_core::session::Command;
use wavecmp_core::zoom::ScrollDirection;
use wavecmp_core::Surface;

use super::super::app::WavecmpApp;
use super::super::message::Message;

impl WavecmpApp {
    /// Zoom a plot around the pointer
    ///
    /// The canvas only publishes while the pointer is over it; positions over
    /// the tick margins fall outside the plot area and are ignored.
    pub fn handle_scroll(
        &mut self,
        surface: Surface,
        direction: ScrollDirection,
        position: SurfacePoint,
    ) -> Task<Message> {
        self.apply(Command::Scroll {
            surface,
            direction,
            position: Some(position),
        })
    }

    pub fn handle_pan(&mut self, surface: Surface, dfx: f64, dfy: f64) -> Task<Message> {
        self.apply(Command::Pan { surface, dfx, dfy })
    }

    pub fn handle_reset_view(&mut self, surface: Surface) -> Task<Message> {
        log::debug!("Resetting {} view", surface);
        self.apply(Command::ResetView(surface))
    }
}
