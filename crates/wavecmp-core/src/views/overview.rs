//! Overview of both summary series

use crate::frames::FrameComparison;
use crate::plot::{AxisRange, PlotSurface};

/// Draw both (possibly shifted) summary series on one surface
///
/// Each series is labeled with the identifier of the track it came from. The x
/// axis spans exactly `[0, num_frames - 1]`; the y axis autoscales.
pub fn render_overview<S: PlotSurface + ?Sized>(
    surface: &mut S,
    comparison: &FrameComparison,
    reference_label: &str,
    decoded_label: &str,
) {
    surface.clear();
    surface.add_series(reference_label, &comparison.reference);
    surface.add_series(decoded_label, &comparison.decoded);
    surface.set_title("Waveform Comparison");
    surface.set_axis_labels("Frame", "Amplitude");
    surface.show_legend(true);
    surface.autoscale();

    // A single frame would give a zero-width axis; keep the autoscaled one
    if comparison.num_frames() > 1 {
        let last = (comparison.num_frames() - 1) as f64;
        surface.set_x_limits(AxisRange::new(0.0, last));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_file::Track;
    use crate::plot::Plot;

    #[test]
    fn test_overview_series_and_axis() {
        let samples: Vec<f32> = (0..40).map(|i| i as f32 / 40.0).collect();
        let a = Track::new("ref.wav", samples.clone(), 8000);
        let b = Track::new("dec.wav", samples, 8000);
        let cmp = FrameComparison::build(&a, &b, 4, 0).unwrap();

        let mut plot = Plot::new();
        render_overview(&mut plot, &cmp, &a.name, &b.name);

        assert_eq!(plot.series.len(), 2);
        assert_eq!(plot.series[0].label, "ref.wav");
        assert_eq!(plot.series[1].label, "dec.wav");
        assert_eq!(plot.series[0].values.len(), 10);
        assert_eq!(plot.bounds().x, AxisRange::new(0.0, 9.0));
        assert_eq!(plot.home().x, AxisRange::new(0.0, 9.0));
        assert!(plot.legend);
        assert_eq!(plot.title, "Waveform Comparison");
    }

    #[test]
    fn test_overview_redraw_does_not_accumulate() {
        let a = Track::new("a", vec![0.1; 16], 8000);
        let cmp = FrameComparison::build(&a, &a, 4, 0).unwrap();

        let mut plot = Plot::new();
        render_overview(&mut plot, &cmp, "a", "b");
        render_overview(&mut plot, &cmp, "a", "b");
        assert_eq!(plot.series.len(), 2);
    }
}
