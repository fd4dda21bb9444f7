//! Audio track loading
//!
//! Decodes an audio file into a single channel of `f32` samples plus its sample
//! rate. Container parsing and codec work is delegated to Symphonia; this module
//! only picks the track, selects the channel and reports failures.

mod error;

pub use error::{AudioFileError, AudioFileResult};

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// A fully loaded mono track
///
/// Immutable after load. The whole signal lives in memory so that any frame can
/// be inspected instantly.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Identifier the track was loaded from (used as its plot label)
    pub name: String,
    /// Amplitude samples of the selected channel
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Track {
    /// Create a track from already decoded samples
    pub fn new(name: impl Into<String>, samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            name: name.into(),
            samples,
            sample_rate,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the track has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Anything that can turn an identifier into a decoded track
pub trait SampleSource {
    /// Load the track named by `identifier`
    fn load(&self, identifier: &str) -> AudioFileResult<Track>;
}

/// Loads tracks from files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource {
    /// Channel to keep from multichannel files (0 = first/left)
    pub channel: usize,
}

impl FileSource {
    /// Create a source that keeps the given channel
    pub fn new(channel: usize) -> Self {
        Self { channel }
    }
}

impl SampleSource for FileSource {
    fn load(&self, identifier: &str) -> AudioFileResult<Track> {
        let path = Path::new(identifier);
        let (interleaved, sample_rate, channels) = decode_file(path)?;
        let samples = select_channel(&interleaved, channels, self.channel)?;

        log::info!(
            "Loaded {:?}: {} samples @ {} Hz (channel {} of {})",
            path,
            samples.len(),
            sample_rate,
            self.channel,
            channels
        );

        Ok(Track::new(identifier, samples, sample_rate))
    }
}

/// Load both tracks and make sure they can be compared
///
/// Fails on the first unreadable source, and with
/// [`AudioFileError::SampleRateMismatch`] when the rates differ. There is no
/// degraded mode: no comparison happens on mismatched rates.
pub fn load_pair<S: SampleSource + ?Sized>(
    source: &S,
    first: &str,
    second: &str,
) -> AudioFileResult<(Track, Track)> {
    let a = source.load(first)?;
    let b = source.load(second)?;

    if a.sample_rate != b.sample_rate {
        return Err(AudioFileError::SampleRateMismatch {
            first: a.sample_rate,
            second: b.sample_rate,
        });
    }

    Ok((a, b))
}

/// Pick one channel out of interleaved samples
fn select_channel(interleaved: &[f32], channels: usize, channel: usize) -> AudioFileResult<Vec<f32>> {
    if channel >= channels {
        return Err(AudioFileError::ChannelOutOfRange {
            requested: channel,
            available: channels,
        });
    }

    if channels == 1 {
        return Ok(interleaved.to_vec());
    }

    Ok(interleaved
        .chunks_exact(channels)
        .map(|frame| frame[channel])
        .collect())
}

/// Decode a whole file to interleaved f32 samples
///
/// Returns the samples, the sample rate and the channel count.
fn decode_file(path: &Path) -> AudioFileResult<(Vec<f32>, u32, usize)> {
    let file = File::open(path).map_err(|e| AudioFileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| AudioFileError::UnsupportedFormat(e.to_string()))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(AudioFileError::NoAudioTrack)?;

    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(AudioFileError::UnknownSampleRate)?;

    let mut channels = track.codec_params.channels.map(|c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioFileError::UnsupportedFormat(e.to_string()))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                log::warn!("Error reading packet from {:?}: {}", path, e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::warn!("Error decoding packet from {:?}: {}", path, e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let needed = decoded.capacity() * spec.channels.count();
        if sample_buf.as_ref().map_or(true, |buf| buf.capacity() < needed) {
            channels.get_or_insert(spec.channels.count());
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    Ok((samples, sample_rate, channels.unwrap_or(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MemorySource(HashMap<&'static str, Track>);

    impl SampleSource for MemorySource {
        fn load(&self, identifier: &str) -> AudioFileResult<Track> {
            self.0
                .get(identifier)
                .cloned()
                .ok_or_else(|| AudioFileError::UnsupportedFormat(identifier.to_string()))
        }
    }

    fn write_wav(path: &Path, channels: u16, sample_rate: u32, frames: &[Vec<i16>]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for frame in frames {
            for &s in frame {
                writer.write_sample(s).unwrap();
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_select_channel() {
        let interleaved = [0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
        assert_eq!(select_channel(&interleaved, 2, 0).unwrap(), vec![0.1, 0.2, 0.3]);
        assert_eq!(select_channel(&interleaved, 2, 1).unwrap(), vec![-0.1, -0.2, -0.3]);
        assert!(matches!(
            select_channel(&interleaved, 2, 2),
            Err(AudioFileError::ChannelOutOfRange { requested: 2, available: 2 })
        ));
    }

    #[test]
    fn test_load_pair_rejects_rate_mismatch() {
        let mut tracks = HashMap::new();
        tracks.insert("a", Track::new("a", vec![0.0; 16], 44100));
        tracks.insert("b", Track::new("b", vec![0.0; 16], 48000));
        let source = MemorySource(tracks);

        let result = load_pair(&source, "a", "b");
        assert!(matches!(
            result,
            Err(AudioFileError::SampleRateMismatch { first: 44100, second: 48000 })
        ));
    }

    #[test]
    fn test_load_pair_propagates_missing_source() {
        let mut tracks = HashMap::new();
        tracks.insert("a", Track::new("a", vec![0.0; 16], 44100));
        let source = MemorySource(tracks);

        assert!(load_pair(&source, "a", "missing").is_err());
    }

    #[test]
    fn test_file_source_reads_selected_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let frames: Vec<Vec<i16>> = (0..64).map(|i| vec![i as i16 * 100, -(i as i16) * 100]).collect();
        write_wav(&path, 2, 44100, &frames);

        let left = FileSource::new(0).load(path.to_str().unwrap()).unwrap();
        let right = FileSource::new(1).load(path.to_str().unwrap()).unwrap();

        assert_eq!(left.sample_rate, 44100);
        assert_eq!(left.len(), 64);
        assert_eq!(right.len(), 64);
        assert!(left.samples[10] > 0.0);
        assert!(right.samples[10] < 0.0);
        assert!((left.samples[10] + right.samples[10]).abs() < 1e-6);
    }

    #[test]
    fn test_file_source_missing_file() {
        let result = FileSource::default().load("/nonexistent/path/track.wav");
        assert!(matches!(result, Err(AudioFileError::Io { .. })));
    }

    #[test]
    fn test_file_source_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.wav");
        std::fs::write(&path, b"definitely not a riff file").unwrap();

        let result = FileSource::default().load(path.to_str().unwrap());
        assert!(matches!(result, Err(AudioFileError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_track_duration() {
        let track = Track::new("t", vec![0.0; 44100], 44100);
        assert!((track.duration_seconds() - 1.0).abs() < 1e-9);
        assert!(Track::new("e", Vec::new(), 0).is_empty());
    }
}
