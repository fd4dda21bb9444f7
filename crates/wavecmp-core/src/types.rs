//! Core types shared across the comparison engine

/// Samples per frame used when nothing else is configured
///
/// 1152 is one MPEG-1 Layer III frame (two granules of 576 samples), which is
/// the block length decoders emit and the natural unit for spotting
/// per-frame decode errors.
pub const DEFAULT_FRAME_SIZE: usize = 1152;

/// Default zoom base (scroll up halves the visible range, scroll down doubles it)
pub const DEFAULT_ZOOM_BASE: f64 = 2.0;

/// Which of the two compared tracks a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackSide {
    /// First track (usually the reference signal)
    Reference,
    /// Second track (usually the decoder output)
    Decoded,
}

impl TrackSide {
    /// Both sides in display order
    pub const ALL: [TrackSide; 2] = [TrackSide::Reference, TrackSide::Decoded];

    /// Index into per-side arrays
    pub fn index(self) -> usize {
        match self {
            TrackSide::Reference => 0,
            TrackSide::Decoded => 1,
        }
    }
}

/// The two plot surfaces of a comparison session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Per-frame summary of both tracks
    Overview,
    /// Raw samples of the selected frame
    Inspector,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Overview => write!(f, "overview"),
            Surface::Inspector => write!(f, "inspector"),
        }
    }
}
