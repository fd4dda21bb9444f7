//! Comparison session: all interactive state behind one dispatch function
//!
//! A [`Session`] owns both tracks, their frame summaries, the navigation cursor
//! and the two plot surfaces. Every user interaction arrives as a [`Command`]
//! and is handled to completion by [`Session::dispatch`] before the next one,
//! which keeps the cursor, the inspector plot and the displayed index in sync.
//!
//! The UI toolkit only has to turn its events into commands. Anything that can
//! produce commands one at a time implements [`EventSource`] and can drive a
//! session with [`Session::run`]; the iced application feeds commands directly
//! from its update loop.

use std::collections::VecDeque;

use thiserror::Error;

use crate::audio_file::Track;
use crate::frames::{FrameComparison, FrameError};
use crate::navigation::{NavigationController, NavigationError};
use crate::plot::{Plot, PlotSurface, SurfacePoint};
use crate::types::{Surface, DEFAULT_FRAME_SIZE, DEFAULT_ZOOM_BASE};
use crate::views::{render_overview, FrameInspector, InspectorError};
use crate::zoom::{ScrollDirection, ZoomController};

/// One discrete user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Jump to a typed frame index
    SubmitIndex(String),
    /// Move one frame back
    StepPrevious,
    /// Move one frame forward
    StepNext,
    /// Scroll wheel over a surface; `position` is `None` when the pointer
    /// isn't over it
    Scroll {
        surface: Surface,
        direction: ScrollDirection,
        position: Option<SurfacePoint>,
    },
    /// Drag on a surface, as a fraction of its width/height
    Pan { surface: Surface, dfx: f64, dfy: f64 },
    /// Return a surface to its home view
    ResetView(Surface),
}

/// What a successfully dispatched command changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cursor moved (or was re-confirmed) and the inspector was redrawn
    FrameSelected(usize),
    /// Bounds of a surface changed
    ViewChanged(Surface),
    /// Nothing to do (e.g. scroll outside a surface)
    Ignored,
}

/// Recoverable command failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Inspector(#[from] InspectorError),
}

/// Parameters fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Samples per frame
    pub frame_size: usize,
    /// Circular shift applied to the decoded track's summary
    pub shift: i64,
    /// Zoom factor per scroll step
    pub zoom_base: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            shift: 0,
            zoom_base: DEFAULT_ZOOM_BASE,
        }
    }
}

/// Produces user commands one at a time
pub trait EventSource {
    /// Next command, or `None` when the source is exhausted
    fn next_command(&mut self) -> Option<Command>;
}

impl EventSource for VecDeque<Command> {
    fn next_command(&mut self) -> Option<Command> {
        self.pop_front()
    }
}

impl<I: Iterator<Item = Command>> EventSource for std::iter::Fuse<I> {
    fn next_command(&mut self) -> Option<Command> {
        self.next()
    }
}

/// State of one comparison
#[derive(Debug)]
pub struct Session {
    reference: Track,
    decoded: Track,
    comparison: FrameComparison,
    navigation: NavigationController,
    zoom: ZoomController,
    overview: Plot,
    inspector: Plot,
    index_text: String,
    status: Option<String>,
}

impl Session {
    /// Aggregate both tracks and draw the initial views
    ///
    /// The overview is drawn once here; the inspector shows frame 0 (or stays
    /// empty when the tracks are shorter than one frame).
    pub fn new(reference: Track, decoded: Track, settings: SessionSettings) -> Result<Self, FrameError> {
        let comparison = FrameComparison::build(&reference, &decoded, settings.frame_size, settings.shift)?;
        let num_frames = comparison.num_frames();

        let mut overview = Plot::new();
        render_overview(&mut overview, &comparison, &reference.name, &decoded.name);

        let mut session = Self {
            reference,
            decoded,
            comparison,
            navigation: NavigationController::new(num_frames),
            zoom: ZoomController::new(settings.zoom_base),
            overview,
            inspector: Plot::new(),
            index_text: String::new(),
            status: None,
        };

        match session.navigation.cursor().current() {
            Some(frame) => {
                // Frame 0 always exists when the cursor isn't empty
                if let Err(e) = session.redraw_inspector(frame) {
                    log::error!("Initial inspector draw failed: {}", e);
                }
            }
            None => {
                log::warn!(
                    "Tracks are shorter than one frame ({} samples), nothing to inspect",
                    settings.frame_size
                );
                session.status = Some(NavigationError::NoFrames.to_string());
            }
        }

        Ok(session)
    }

    /// Handle one command to completion
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::SubmitIndex(text) => {
                let result = self.navigation.submit_index(&text);
                self.finish_navigation(result)
            }
            Command::StepPrevious => {
                let result = self.navigation.step_previous();
                self.finish_navigation(result)
            }
            Command::StepNext => {
                let result = self.navigation.step_next();
                self.finish_navigation(result)
            }
            Command::Scroll {
                surface,
                direction,
                position,
            } => Ok(self.scroll(surface, direction, position)),
            Command::Pan { surface, dfx, dfy } => {
                if !(dfx.is_finite() && dfy.is_finite()) || (dfx == 0.0 && dfy == 0.0) {
                    return Ok(Outcome::Ignored);
                }
                let plot = self.plot_mut(surface);
                plot.set_bounds(plot.bounds().panned(dfx, dfy));
                Ok(Outcome::ViewChanged(surface))
            }
            Command::ResetView(surface) => {
                self.plot_mut(surface).reset_view();
                Ok(Outcome::ViewChanged(surface))
            }
        }
    }

    /// Drain an event source, dispatching each command in order
    ///
    /// Failures are recoverable: they are already reflected in the status line,
    /// so the loop keeps going. Returns the number of commands handled.
    pub fn run<E: EventSource + ?Sized>(&mut self, source: &mut E) -> usize {
        let mut handled = 0;
        while let Some(command) = source.next_command() {
            if let Err(e) = self.dispatch(command) {
                log::debug!("run: command failed: {}", e);
            }
            handled += 1;
        }
        handled
    }

    fn finish_navigation(&mut self, result: Result<usize, NavigationError>) -> Result<Outcome, CommandError> {
        match result {
            Ok(frame) => {
                self.redraw_inspector(frame)?;
                Ok(Outcome::FrameSelected(frame))
            }
            Err(e) => {
                log::warn!("{}", e);
                self.status = Some(e.to_string());
                self.sync_index_text();
                Err(e.into())
            }
        }
    }

    fn redraw_inspector(&mut self, frame: usize) -> Result<(), InspectorError> {
        let inspector = FrameInspector::new(
            &self.reference.samples,
            &self.decoded.samples,
            self.comparison.frame_size,
            self.comparison.num_frames(),
        );
        inspector.render(&mut self.inspector, frame)?;
        self.status = None;
        self.sync_index_text();
        Ok(())
    }

    fn scroll(&mut self, surface: Surface, direction: ScrollDirection, position: Option<SurfacePoint>) -> Outcome {
        let Some(position) = position.filter(SurfacePoint::is_inside) else {
            return Outcome::Ignored;
        };
        if direction == ScrollDirection::Other {
            return Outcome::Ignored;
        }

        let zoom = self.zoom;
        let plot = self.plot_mut(surface);
        let bounds = plot.bounds();
        let anchor = bounds.data_at(position);
        plot.set_bounds(zoom.zoom(bounds, anchor, direction));
        Outcome::ViewChanged(surface)
    }

    fn sync_index_text(&mut self) {
        self.index_text = self
            .navigation
            .cursor()
            .current()
            .map(|f| f.to_string())
            .unwrap_or_default();
    }

    fn plot_mut(&mut self, surface: Surface) -> &mut Plot {
        match surface {
            Surface::Overview => &mut self.overview,
            Surface::Inspector => &mut self.inspector,
        }
    }

    /// Plot for a surface
    pub fn plot(&self, surface: Surface) -> &Plot {
        match surface {
            Surface::Overview => &self.overview,
            Surface::Inspector => &self.inspector,
        }
    }

    /// Selected frame, `None` when there are no frames
    pub fn current_frame(&self) -> Option<usize> {
        self.navigation.cursor().current()
    }

    pub fn num_frames(&self) -> usize {
        self.navigation.cursor().num_frames()
    }

    pub fn comparison(&self) -> &FrameComparison {
        &self.comparison
    }

    pub fn reference(&self) -> &Track {
        &self.reference
    }

    pub fn decoded(&self) -> &Track {
        &self.decoded
    }

    /// Text shown in the frame index field
    pub fn index_text(&self) -> &str {
        &self.index_text
    }

    /// Update the frame index field while the user types
    ///
    /// Only the displayed text changes; the cursor moves on submit.
    pub fn edit_index_text(&mut self, text: String) {
        self.index_text = text;
    }

    /// Last recoverable error, cleared by the next successful move
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
