//! Navigation bar below the plots

use iced::widget::{button, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Length};
use wavecmp_core::session::Session;
use wavecmp_core::Surface;

use super::message::Message;

const STATUS_COLOR: Color = Color::from_rgb(0.95, 0.45, 0.4);

/// `<` [index] `>` with the frame count, status and view reset buttons
pub fn view_controls(session: &Session) -> Element<'_, Message> {
    let has_frames = session.num_frames() > 0;

    let previous = button(text("<")).on_press_maybe(has_frames.then_some(Message::StepPrevious));
    let next = button(text(">")).on_press_maybe(has_frames.then_some(Message::StepNext));

    let index = text_input("frame", session.index_text())
        .on_input(Message::IndexChanged)
        .on_submit(Message::IndexSubmitted)
        .width(Length::Fixed(80.0));

    let count = text(format!("of {}", session.num_frames())).size(14);

    let status: Element<Message> = match session.status() {
        Some(message) => text(message.to_string()).size(14).color(STATUS_COLOR).into(),
        None => Space::new().into(),
    };

    let reset_overview = button(text("Reset overview").size(13))
        .on_press(Message::ResetView(Surface::Overview))
        .style(button::secondary);
    let reset_inspector = button(text("Reset frame view").size(13))
        .on_press(Message::ResetView(Surface::Inspector))
        .style(button::secondary);

    row![
        previous,
        index,
        next,
        count,
        status,
        Space::new().width(Length::Fill),
        reset_overview,
        reset_inspector,
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
