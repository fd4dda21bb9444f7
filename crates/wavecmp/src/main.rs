//! wavecmp - frame-by-frame comparison of two PCM tracks
//!
//! Opens a window with an overview of both tracks (mean amplitude per frame)
//! and an inspector showing the raw samples of one frame. Typically used to
//! compare a decoder's output against a reference decode of the same file.
//!
//! ```text
//! wavecmp reference.wav decoded.wav [--frame-size 1152] [--shift 0]
//! ```
//!
//! Set `RUST_LOG=debug` for verbose output.

use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use iced::Size;

use wavecmp::config::{self, Config};
use wavecmp::ui::{Message, WavecmpApp};
use wavecmp_core::audio_file::{load_pair, FileSource};
use wavecmp_core::config::{load_config, save_config};
use wavecmp_core::session::{Session, SessionSettings};

#[derive(Parser, Debug)]
#[command(name = "wavecmp", version, about = "Compare two audio tracks frame by frame")]
struct Args {
    /// Reference track (e.g. a known-good decode)
    reference: String,

    /// Track to check against the reference (e.g. decoder output)
    decoded: String,

    /// Samples per frame
    #[arg(long)]
    frame_size: Option<usize>,

    /// Circularly shift the decoded track's overview by this many frames
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Channel to compare in multichannel files
    #[arg(long)]
    channel: Option<usize>,

    /// Zoom factor per scroll step
    #[arg(long)]
    zoom_base: Option<f64>,

    /// Config file (default: ~/.config/wavecmp/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store the effective settings (file values plus the flags above) in the
    /// config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config::default_config_path)
    }

    /// File config with command line overrides applied
    fn resolve_config(&self) -> Config {
        let mut config: Config = load_config(&self.config_path());

        if let Some(frame_size) = self.frame_size {
            config.frame_size = frame_size;
        }
        if let Some(shift) = self.shift {
            config.shift_frames = shift;
        }
        if let Some(channel) = self.channel {
            config.channel = channel;
        }
        if let Some(zoom_base) = self.zoom_base {
            config.zoom_base = zoom_base;
        }

        config.validate();
        config
    }
}

fn build_session(args: &Args, config: &Config) -> anyhow::Result<Session> {
    let source = FileSource::new(config.channel);
    let (reference, decoded) = load_pair(&source, &args.reference, &args.decoded)
        .with_context(|| format!("Failed to load {} and {}", args.reference, args.decoded))?;

    let settings = SessionSettings {
        frame_size: config.frame_size,
        shift: config.shift_frames,
        zoom_base: config.zoom_base,
    };
    let session = Session::new(reference, decoded, settings).context("Failed to compare tracks")?;

    log::info!(
        "{} frames of {} samples (shift {}), {:.2}s vs {:.2}s",
        session.num_frames(),
        settings.frame_size,
        settings.shift,
        session.reference().duration_seconds(),
        session.decoded().duration_seconds()
    );
    if let Some((frame, difference)) = session.comparison().most_divergent_frame() {
        log::info!("Largest mean difference {:.6} at frame {}", difference, frame);
    }
    let non_finite = session.comparison().non_finite_frames();
    if let Some(first) = non_finite.first() {
        log::warn!(
            "{} frame(s) contain NaN or infinite samples, first at frame {}",
            non_finite.len(),
            first
        );
    }

    Ok(session)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = args.resolve_config();

    if args.save_config {
        // Not fatal: the comparison still opens with these settings
        if let Err(e) = save_config(&config, &args.config_path()) {
            log::warn!("{:#}", e);
        }
    }

    let session = match build_session(&args, &config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // iced wants a Fn boot function; it is only called once
    let session_cell = RefCell::new(Some(session));

    let result = iced::application(
        move || {
            let app = session_cell.borrow_mut().take().map(WavecmpApp::new);
            (app, iced::Task::<Message>::none())
        },
        update,
        view,
    )
    .title(title)
    .theme(theme)
    .window_size(Size::new(config.window.width, config.window.height))
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// The boot state is an Option so a second boot call can't panic; it is always
// Some in practice.

fn update(app: &mut Option<WavecmpApp>, message: Message) -> iced::Task<Message> {
    match app {
        Some(app) => app.update(message),
        None => iced::Task::none(),
    }
}

fn view(app: &Option<WavecmpApp>) -> iced::Element<'_, Message> {
    match app {
        Some(app) => app.view(),
        None => iced::widget::text("No comparison loaded").into(),
    }
}

fn title(app: &Option<WavecmpApp>) -> String {
    app.as_ref().map(WavecmpApp::title).unwrap_or_else(|| "wavecmp".to_string())
}

fn theme(app: &Option<WavecmpApp>) -> iced::Theme {
    app.as_ref().map(WavecmpApp::theme).unwrap_or(iced::Theme::Dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "frame_size: 576\nshift_frames: 3\nchannel: 1\n").unwrap();

        let args = Args::parse_from([
            "wavecmp",
            "a.wav",
            "b.wav",
            "--shift",
            "-2",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = args.resolve_config();

        assert_eq!(config.frame_size, 576);
        assert_eq!(config.shift_frames, -2);
        assert_eq!(config.channel, 1);
    }

    #[test]
    fn test_invalid_override_is_validated() {
        let args = Args::parse_from([
            "wavecmp",
            "a.wav",
            "b.wav",
            "--frame-size",
            "0",
            "--config",
            "/nonexistent/wavecmp.yaml",
        ]);
        assert_eq!(args.resolve_config().frame_size, 1);
    }

    #[test]
    fn test_saved_overrides_become_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let path_arg = path.to_str().unwrap();

        let args = Args::parse_from([
            "wavecmp",
            "a.wav",
            "b.wav",
            "--frame-size",
            "576",
            "--zoom-base",
            "1.5",
            "--save-config",
            "--config",
            path_arg,
        ]);
        assert!(args.save_config);
        save_config(&args.resolve_config(), &args.config_path()).unwrap();

        let plain = Args::parse_from(["wavecmp", "a.wav", "b.wav", "--config", path_arg]);
        let config = plain.resolve_config();
        assert_eq!(config.frame_size, 576);
        assert_eq!(config.zoom_base, 1.5);
        assert_eq!(config.shift_frames, 0);
    }

    #[test]
    fn test_missing_file_fails() {
        let args = Args::parse_from(["wavecmp", "/nonexistent/a.wav", "/nonexistent/b.wav"]);
        assert!(build_session(&args, &Config::default()).is_err());
    }
}
