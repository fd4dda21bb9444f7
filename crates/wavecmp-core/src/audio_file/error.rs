//! Audio loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a track
#[derive(Error, Debug)]
pub enum AudioFileError {
    /// File not found or couldn't be opened
    #[error("Failed to open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Container or codec not recognised
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Container holds no decodable audio track
    #[error("No audio track found")]
    NoAudioTrack,

    /// Codec parameters don't carry a sample rate
    #[error("Unknown sample rate")]
    UnknownSampleRate,

    /// Requested channel doesn't exist in the file
    #[error("Channel {requested} requested but file has {available} channel(s)")]
    ChannelOutOfRange { requested: usize, available: usize },

    /// The two tracks can't be compared sample by sample
    #[error("Sample rates of the two tracks do not match: {first} Hz vs {second} Hz")]
    SampleRateMismatch { first: u32, second: u32 },
}

/// Result type for track loading
pub type AudioFileResult<T> = Result<T, AudioFileError>;
