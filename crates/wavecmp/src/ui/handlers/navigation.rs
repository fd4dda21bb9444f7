//! Frame navigation handlers
//!
//! Handles: IndexChanged, IndexSubmitted, StepPrevious, StepNext

use iced::Task;
use wavecmp_core::session::Command;

use super::super::app::WavecmpApp;
use super::super::message::Message;

impl WavecmpApp {
    pub fn handle_index_changed(&mut self, text: String) -> Task<Message> {
        self.session.edit_index_text(text);
        Task::none()
    }

    /// Submit whatever is in the index field
    ///
    /// Invalid text leaves the frame unchanged; the session restores the field
    /// and reports the problem in the status line.
    pub fn handle_index_submitted(&mut self) -> Task<Message> {
        let text = self.session.index_text().to_string();
        self.apply(Command::SubmitIndex(text))
    }

    pub fn handle_step_previous(&mut self) -> Task<Message> {
        self.apply(Command::StepPrevious)
    }

    pub fn handle_step_next(&mut self) -> Task<Message> {
        self.apply(Command::StepNext)
    }
}
