//! Plot view function

use iced::widget::Canvas;
use iced::{Element, Length};
use wavecmp_core::plot::{Plot, SurfacePoint};
use wavecmp_core::zoom::ScrollDirection;

use super::canvas::PlotCanvas;

/// Create a plot element filling the available space
///
/// ```ignore
/// let overview = plot_view(
///     session.plot(Surface::Overview),
///     |direction, point| Message::Scroll(Surface::Overview, direction, point),
///     |dfx, dfy| Message::Pan(Surface::Overview, dfx, dfy),
/// );
/// ```
pub fn plot_view<'a, Message>(
    plot: &'a Plot,
    on_scroll: impl Fn(ScrollDirection, SurfacePoint) -> Message + 'a,
    on_pan: impl Fn(f64, f64) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(PlotCanvas {
        plot,
        on_scroll,
        on_pan,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
