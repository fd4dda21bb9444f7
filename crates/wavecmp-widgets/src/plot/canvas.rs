//! Canvas Program for plot rendering
//!
//! Follows the callback pattern of our other canvases: the program borrows its
//! state and turns mouse events into messages through closures.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};
use wavecmp_core::plot::{Plot, PlotBounds, PlotSurface, SurfacePoint};
use wavecmp_core::zoom::ScrollDirection;
use wavecmp_core::TrackSide;

use super::layout::PlotLayout;
use super::ticks::{format_tick, nice_ticks};
use super::trace::trace_points;
use crate::theme;

/// Target tick count per axis
const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;

/// Canvas state for drag-to-pan
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotInteraction {
    /// Last pointer position while the left button is held
    pub drag_from: Option<Point>,
}

/// Canvas program drawing one [`Plot`]
///
/// `on_scroll` receives the wheel direction and the pointer position relative
/// to the plot area (outside `[0, 1]` over the margins). `on_pan` receives drag
/// deltas as fractions of the plot area.
pub struct PlotCanvas<'a, Message, F, G>
where
    F: Fn(ScrollDirection, SurfacePoint) -> Message,
    G: Fn(f64, f64) -> Message,
{
    pub plot: &'a Plot,
    pub on_scroll: F,
    pub on_pan: G,
}

impl<'a, Message, F, G> Program<Message> for PlotCanvas<'a, Message, F, G>
where
    Message: Clone,
    F: Fn(ScrollDirection, SurfacePoint) -> Message,
    G: Fn(f64, f64) -> Message,
{
    type State = PlotInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let layout = PlotLayout::new(bounds.size());

        let Some(position) = cursor.position_in(bounds) else {
            if matches!(event, Event::Mouse(mouse::Event::ButtonReleased(_))) {
                interaction.drag_from = None;
            }
            return None;
        };

        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let dy = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                let direction = ScrollDirection::from_vertical_delta(dy);
                let point = layout.surface_point(position);
                return Some(canvas::Action::publish((self.on_scroll)(direction, point)).and_capture());
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if layout.contains(position) {
                    interaction.drag_from = Some(position);
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                interaction.drag_from = None;
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(from) = interaction.drag_from {
                    interaction.drag_from = Some(position);
                    let (dfx, dfy) = layout.delta_fraction(from, position);
                    return Some(canvas::Action::publish((self.on_pan)(dfx, dfy)));
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let layout = PlotLayout::new(bounds.size());
        match cursor.position_in(bounds) {
            Some(_) if interaction.drag_from.is_some() => mouse::Interaction::Grabbing,
            Some(position) if layout.contains(position) => mouse::Interaction::Crosshair,
            _ => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let layout = PlotLayout::new(bounds.size());
        let area = layout.area;
        let view = self.plot.bounds();

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::BACKGROUND);
        frame.fill_rectangle(area.position(), area.size(), theme::PLOT_AREA);

        draw_ticks(&mut frame, area, &view);

        frame.with_clip(area, |clipped| {
            for (n, series) in self.plot.series.iter().enumerate() {
                let points = trace_points(&series.values, &view, area.size());
                if points.len() < 2 {
                    continue;
                }
                let line = Path::new(|builder| {
                    builder.move_to(points[0]);
                    for &p in &points[1..] {
                        builder.line_to(p);
                    }
                });
                clipped.stroke(
                    &line,
                    Stroke::default()
                        .with_color(series_color(n))
                        .with_width(theme::SERIES_WIDTH),
                );
            }
        });

        frame.stroke(
            &Path::rectangle(area.position(), area.size()),
            Stroke::default().with_color(theme::AXIS).with_width(1.0),
        );

        draw_labels(&mut frame, self.plot, area, bounds.size());

        if self.plot.legend {
            draw_legend(&mut frame, self.plot, area);
        }

        vec![frame.into_geometry()]
    }
}

fn series_color(index: usize) -> Color {
    TrackSide::ALL
        .get(index)
        .map(|&side| theme::series_color(side))
        .unwrap_or(theme::AXIS)
}

fn draw_ticks(frame: &mut Frame, area: Rectangle, view: &PlotBounds) {
    let bottom = area.y + area.height;

    let x_ticks = nice_ticks(view.x, X_TICKS);
    let x_step = tick_step(&x_ticks);
    for &value in &x_ticks {
        let x = area.x + (view.x.fraction_of(value) * area.width as f64) as f32;
        frame.stroke(
            &Path::line(Point::new(x, area.y), Point::new(x, bottom)),
            Stroke::default().with_color(theme::GRID).with_width(1.0),
        );
        frame.fill_text(Text {
            content: format_tick(value, x_step),
            position: Point::new(x, bottom + 4.0),
            size: theme::TICK_SIZE.into(),
            color: theme::AXIS,
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Top.into(),
            ..Text::default()
        });
    }

    let y_ticks = nice_ticks(view.y, Y_TICKS);
    let y_step = tick_step(&y_ticks);
    for &value in &y_ticks {
        let y = area.y + ((1.0 - view.y.fraction_of(value)) * area.height as f64) as f32;
        frame.stroke(
            &Path::line(Point::new(area.x, y), Point::new(area.x + area.width, y)),
            Stroke::default().with_color(theme::GRID).with_width(1.0),
        );
        frame.fill_text(Text {
            content: format_tick(value, y_step),
            position: Point::new(area.x - 6.0, y),
            size: theme::TICK_SIZE.into(),
            color: theme::AXIS,
            align_x: Horizontal::Right.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_labels(frame: &mut Frame, plot: &Plot, area: Rectangle, canvas: Size) {
    frame.fill_text(Text {
        content: plot.title.clone(),
        position: Point::new(area.x + area.width / 2.0, 8.0),
        size: theme::TITLE_SIZE.into(),
        color: theme::TEXT,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Top.into(),
        ..Text::default()
    });

    frame.fill_text(Text {
        content: plot.x_label.clone(),
        position: Point::new(area.x + area.width / 2.0, canvas.height - 4.0),
        size: theme::LABEL_SIZE.into(),
        color: theme::TEXT,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Bottom.into(),
        ..Text::default()
    });

    // No rotated text on canvas; y label sits above the tick column
    frame.fill_text(Text {
        content: plot.y_label.clone(),
        position: Point::new(6.0, area.y - 6.0),
        size: theme::LABEL_SIZE.into(),
        color: theme::TEXT,
        align_x: Horizontal::Left.into(),
        align_y: Vertical::Bottom.into(),
        ..Text::default()
    });
}

fn draw_legend(frame: &mut Frame, plot: &Plot, area: Rectangle) {
    const ROW_HEIGHT: f32 = 18.0;
    const SWATCH: f32 = 18.0;
    const PADDING: f32 = 8.0;

    if plot.series.is_empty() {
        return;
    }

    // Rough width estimate; canvas text has no measurement API
    let longest = plot.series.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
    let width = (PADDING * 3.0 + SWATCH + longest as f32 * theme::LABEL_SIZE * 0.6).min(area.width);
    let height = PADDING * 2.0 + ROW_HEIGHT * plot.series.len() as f32;
    let origin = Point::new(area.x + area.width - width - PADDING, area.y + PADDING);

    frame.fill_rectangle(origin, Size::new(width, height), theme::LEGEND_BACKGROUND);

    for (n, series) in plot.series.iter().enumerate() {
        let y = origin.y + PADDING + ROW_HEIGHT * (n as f32 + 0.5);
        let x = origin.x + PADDING;
        frame.stroke(
            &Path::line(Point::new(x, y), Point::new(x + SWATCH, y)),
            Stroke::default().with_color(series_color(n)).with_width(2.5),
        );
        frame.fill_text(Text {
            content: series.label.clone(),
            position: Point::new(x + SWATCH + PADDING, y),
            size: theme::LABEL_SIZE.into(),
            color: theme::TEXT,
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });
    }
}
