//! Per-frame aggregation of two sample sequences
//!
//! Both tracks are reduced to one mean amplitude per frame so that a whole
//! track fits on one plot. The second series can be rotated to compensate for a
//! known encoder/decoder group delay before the two are compared.

use thiserror::Error;

use crate::audio_file::Track;

/// Errors from building a frame comparison
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A frame must hold at least one sample
    #[error("Frame size must be positive")]
    ZeroFrameSize,
}

/// Mean amplitude of each complete frame
///
/// Element `k` is the mean of `samples[k * frame_size .. (k + 1) * frame_size]`.
/// A trailing partial frame is dropped, never padded. Sums are accumulated in
/// `f64` left to right, so identical input always gives identical output.
///
/// Returns an empty series when `frame_size` is zero.
pub fn aggregate(samples: &[f32], frame_size: usize) -> Vec<f32> {
    if frame_size == 0 {
        return Vec::new();
    }

    samples
        .chunks_exact(frame_size)
        .map(|frame| {
            let sum: f64 = frame.iter().map(|&s| s as f64).sum();
            (sum / frame_size as f64) as f32
        })
        .collect()
}

/// Circularly rotate a series by `shift` positions
///
/// Positive shifts move elements toward higher indices (the last element wraps
/// to the front). Any shift is reduced modulo the length; a shift of zero
/// returns the series unchanged.
pub fn apply_shift(series: &[f32], shift: i64) -> Vec<f32> {
    let mut out = series.to_vec();
    if out.is_empty() {
        return out;
    }

    let len = out.len() as i64;
    let k = shift.rem_euclid(len) as usize;
    out.rotate_right(k);
    out
}

/// Number of frames both series can be compared over
pub fn compute_frame_count(a: &[f32], b: &[f32]) -> usize {
    a.len().min(b.len())
}

/// Summary series of two tracks, truncated to a common length
#[derive(Debug, Clone, PartialEq)]
pub struct FrameComparison {
    /// Samples per frame used for aggregation
    pub frame_size: usize,
    /// Rotation applied to the decoded series
    pub shift: i64,
    /// Per-frame means of the reference track
    pub reference: Vec<f32>,
    /// Per-frame means of the decoded track (after shifting)
    pub decoded: Vec<f32>,
}

impl FrameComparison {
    /// Aggregate both tracks and line up their summaries
    ///
    /// The two tracks are aggregated on the rayon pool; the result is the same
    /// as aggregating them one after the other.
    pub fn build(
        reference: &Track,
        decoded: &Track,
        frame_size: usize,
        shift: i64,
    ) -> Result<Self, FrameError> {
        if frame_size == 0 {
            return Err(FrameError::ZeroFrameSize);
        }

        let (mut summary_a, summary_b) = rayon::join(
            || aggregate(&reference.samples, frame_size),
            || aggregate(&decoded.samples, frame_size),
        );

        let mut shifted_b = apply_shift(&summary_b, shift);

        let num_frames = compute_frame_count(&summary_a, &shifted_b);
        summary_a.truncate(num_frames);
        shifted_b.truncate(num_frames);

        Ok(Self {
            frame_size,
            shift,
            reference: summary_a,
            decoded: shifted_b,
        })
    }

    /// Number of comparable frames
    pub fn num_frames(&self) -> usize {
        self.reference.len()
    }

    /// Absolute difference of the two summaries per frame
    pub fn differences(&self) -> Vec<f32> {
        self.reference
            .iter()
            .zip(&self.decoded)
            .map(|(a, b)| (a - b).abs())
            .collect()
    }

    /// Frame whose summaries differ most, with that difference
    ///
    /// Only finite differences are ranked; see [`Self::non_finite_frames`] for
    /// the rest. Ties resolve to the earliest frame. `None` when no frame has a
    /// finite difference.
    pub fn most_divergent_frame(&self) -> Option<(usize, f32)> {
        self.differences()
            .into_iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .fold(None, |best, (i, d)| match best {
                Some((_, best_d)) if best_d >= d => best,
                _ => Some((i, d)),
            })
    }

    /// Frames whose summaries can't be compared (NaN or infinite in either track)
    pub fn non_finite_frames(&self) -> Vec<usize> {
        self.differences()
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| (!d.is_finite()).then_some(i))
            .collect()
    }
}
