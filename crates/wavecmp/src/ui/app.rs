//! Application state and top-level update/view

use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};
use wavecmp_core::session::{Command, Session};
use wavecmp_core::Surface;
use wavecmp_widgets::plot_view;

use super::controls::view_controls;
use super::message::Message;

/// The comparison window
///
/// All comparison state lives in the [`Session`]; this type only translates
/// messages into session commands and lays out the widgets.
pub struct WavecmpApp {
    pub(crate) session: Session,
}

impl WavecmpApp {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn title(&self) -> String {
        format!(
            "wavecmp - {} vs {}",
            self.session.reference().name,
            self.session.decoded().name
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::IndexChanged(text) => self.handle_index_changed(text),
            Message::IndexSubmitted => self.handle_index_submitted(),
            Message::StepPrevious => self.handle_step_previous(),
            Message::StepNext => self.handle_step_next(),
            Message::Scroll(surface, direction, position) => self.handle_scroll(surface, direction, position),
            Message::Pan(surface, dfx, dfy) => self.handle_pan(surface, dfx, dfy),
            Message::ResetView(surface) => self.handle_reset_view(surface),
        }
    }

    /// Run one session command; failures are already in the status line
    pub(crate) fn apply(&mut self, command: Command) -> Task<Message> {
        if let Err(e) = self.session.dispatch(command) {
            log::debug!("Command rejected: {}", e);
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let overview = plot_view(
            self.session.plot(Surface::Overview),
            |direction, point| Message::Scroll(Surface::Overview, direction, point),
            |dfx, dfy| Message::Pan(Surface::Overview, dfx, dfy),
        );
        let inspector = plot_view(
            self.session.plot(Surface::Inspector),
            |direction, point| Message::Scroll(Surface::Inspector, direction, point),
            |dfx, dfy| Message::Pan(Surface::Inspector, dfx, dfy),
        );

        let summary = text(self.summary_line()).size(13);

        let main = column![overview, inspector, view_controls(&self.session), summary].spacing(8);

        container(main)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(12)
            .into()
    }

    fn summary_line(&self) -> String {
        let reference = self.session.reference();
        let comparison = self.session.comparison();
        let mut line = format!(
            "{} frames of {} samples at {} Hz, shift {}",
            comparison.num_frames(),
            comparison.frame_size,
            reference.sample_rate,
            comparison.shift
        );
        if let Some((frame, difference)) = comparison.most_divergent_frame() {
            line.push_str(&format!(" | largest mean difference {:.6} at frame {}", difference, frame));
        }
        let non_finite = comparison.non_finite_frames();
        if let Some(first) = non_finite.first() {
            line.push_str(&format!(" | {} non-finite frame(s), first {}", non_finite.len(), first));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecmp_core::audio_file::Track;
    use wavecmp_core::plot::{PlotSurface, SurfacePoint};
    use wavecmp_core::session::SessionSettings;
    use wavecmp_core::zoom::ScrollDirection;

    fn app() -> WavecmpApp {
        let a: Vec<f32> = (0..11_520).map(|i| ((i / 1152) as f32) * 0.1).collect();
        let mut b = a.clone();
        for s in &mut b[4 * 1152..5 * 1152] {
            *s += 0.3;
        }
        let session = Session::new(
            Track::new("out.wav", a, 44100),
            Track::new("22.wav", b, 44100),
            SessionSettings::default(),
        )
        .unwrap();
        WavecmpApp::new(session)
    }

    #[test]
    fn test_typed_index_is_applied_on_submit() {
        let mut app = app();
        let _ = app.update(Message::IndexChanged("7".into()));
        assert_eq!(app.session().current_frame(), Some(0));

        let _ = app.update(Message::IndexSubmitted);
        assert_eq!(app.session().current_frame(), Some(7));
        assert_eq!(app.session().index_text(), "7");
    }

    #[test]
    fn test_invalid_index_reverts_field() {
        let mut app = app();
        let _ = app.update(Message::StepNext);
        let _ = app.update(Message::IndexChanged("x1".into()));
        let _ = app.update(Message::IndexSubmitted);

        assert_eq!(app.session().current_frame(), Some(1));
        assert_eq!(app.session().index_text(), "1");
        assert!(app.session().status().is_some());
    }

    #[test]
    fn test_scroll_and_reset() {
        let mut app = app();
        let home = app.session().plot(Surface::Overview).home();

        let _ = app.update(Message::Scroll(
            Surface::Overview,
            ScrollDirection::Up,
            SurfacePoint::new(0.5, 0.5),
        ));
        assert_ne!(app.session().plot(Surface::Overview).bounds(), home);

        let _ = app.update(Message::ResetView(Surface::Overview));
        assert_eq!(app.session().plot(Surface::Overview).bounds(), home);
    }

    #[test]
    fn test_summary_reports_non_finite_frames() {
        let a = vec![0.25f32; 6 * 4];
        let mut b = a.clone();
        b[9] = f32::NAN;
        b[17] = 1.0;
        let session = Session::new(
            Track::new("a.wav", a, 8000),
            Track::new("b.wav", b, 8000),
            SessionSettings {
                frame_size: 4,
                ..SessionSettings::default()
            },
        )
        .unwrap();
        let line = WavecmpApp::new(session).summary_line();

        assert!(line.contains("at frame 4"), "{}", line);
        assert!(line.ends_with("1 non-finite frame(s), first 2"), "{}", line);
    }

    #[test]
    fn test_summary_reports_divergent_frame() {
        let app = app();
        assert!(app.summary_line().starts_with("10 frames of 1152 samples at 44100 Hz"));
        assert!(app.summary_line().ends_with("at frame 4"));
        assert_eq!(app.title(), "wavecmp - out.wav vs 22.wav");
    }
}
