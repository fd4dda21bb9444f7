//! Sample-level view of a single frame

use thiserror::Error;

use crate::plot::PlotSurface;

/// Errors from drawing a frame
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    /// Callers are expected to clamp the frame index before drawing
    #[error("Frame {frame} is out of range (track has {num_frames} frames)")]
    FrameOutOfRange { frame: usize, num_frames: usize },
}

/// Draws the raw samples of one frame from both tracks
///
/// Borrows the full sample arrays; the decoded track is shown unshifted, so the
/// inspector always shows what is really at that position in each file.
#[derive(Debug, Clone, Copy)]
pub struct FrameInspector<'a> {
    reference: &'a [f32],
    decoded: &'a [f32],
    frame_size: usize,
    num_frames: usize,
}

impl<'a> FrameInspector<'a> {
    pub fn new(reference: &'a [f32], decoded: &'a [f32], frame_size: usize, num_frames: usize) -> Self {
        Self {
            reference,
            decoded,
            frame_size,
            num_frames,
        }
    }

    /// Sample range covered by a frame
    pub fn sample_range(&self, frame: usize) -> std::ops::Range<usize> {
        let start = frame * self.frame_size;
        start..start + self.frame_size
    }

    /// Replace the surface contents with the given frame
    pub fn render<S: PlotSurface + ?Sized>(&self, surface: &mut S, frame: usize) -> Result<(), InspectorError> {
        if frame >= self.num_frames {
            return Err(InspectorError::FrameOutOfRange {
                frame,
                num_frames: self.num_frames,
            });
        }

        let range = self.sample_range(frame);

        surface.clear();
        surface.add_series("Audio 1", slice_within(self.reference, &range));
        surface.add_series("Audio 2", slice_within(self.decoded, &range));
        surface.set_title(&format!("Frame {} Comparison", frame));
        surface.set_axis_labels("Sample", "Amplitude");
        surface.show_legend(true);
        surface.autoscale();

        Ok(())
    }
}

fn slice_within<'s>(samples: &'s [f32], range: &std::ops::Range<usize>) -> &'s [f32] {
    let start = range.start.min(samples.len());
    let end = range.end.min(samples.len());
    &samples[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{AxisRange, Plot};

    fn fixture() -> (Vec<f32>, Vec<f32>) {
        let a: Vec<f32> = (0..24).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..24).map(|i| -(i as f32)).collect();
        (a, b)
    }

    #[test]
    fn test_render_selected_frame() {
        let (a, b) = fixture();
        let inspector = FrameInspector::new(&a, &b, 8, 3);
        let mut plot = Plot::new();

        inspector.render(&mut plot, 1).unwrap();

        assert_eq!(plot.title, "Frame 1 Comparison");
        assert_eq!(plot.series.len(), 2);
        assert_eq!(plot.series[0].values, (8..16).map(|i| i as f32).collect::<Vec<_>>());
        assert_eq!(plot.series[1].values[0], -8.0);
        assert_eq!(plot.x_label, "Sample");
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let (a, b) = fixture();
        let inspector = FrameInspector::new(&a, &b, 8, 3);
        let mut plot = Plot::new();

        inspector.render(&mut plot, 0).unwrap();
        plot.set_bounds(plot.bounds().panned(0.5, 0.5));
        inspector.render(&mut plot, 2).unwrap();

        assert_eq!(plot.series.len(), 2);
        assert_eq!(plot.series[0].values[0], 16.0);
        assert_eq!(plot.bounds(), plot.home());
        assert_eq!(plot.bounds().x, AxisRange::padded(0.0, 7.0, crate::plot::AUTOSCALE_MARGIN));
    }

    #[test]
    fn test_render_out_of_range() {
        let (a, b) = fixture();
        let inspector = FrameInspector::new(&a, &b, 8, 3);
        let mut plot = Plot::new();

        assert_eq!(
            inspector.render(&mut plot, 3),
            Err(InspectorError::FrameOutOfRange { frame: 3, num_frames: 3 })
        );
        assert!(plot.series.is_empty());
    }
}
