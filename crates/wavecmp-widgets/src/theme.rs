//! Colors and sizes for plot rendering

use iced::Color;
use wavecmp_core::TrackSide;

/// Line colors for the two tracks (reference, decoded)
pub const SERIES_COLORS: [Color; 2] = [
    Color::from_rgb(0.12, 0.47, 0.71), // Reference - Blue (#1F77B4)
    Color::from_rgb(1.0, 0.5, 0.05),   // Decoded - Orange (#FF7F0E)
];

pub const BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.12);
pub const PLOT_AREA: Color = Color::from_rgb(0.13, 0.13, 0.16);
pub const AXIS: Color = Color::from_rgb(0.6, 0.6, 0.65);
pub const GRID: Color = Color::from_rgba(0.5, 0.5, 0.55, 0.2);
pub const TEXT: Color = Color::from_rgb(0.85, 0.85, 0.9);
pub const LEGEND_BACKGROUND: Color = Color::from_rgba(0.08, 0.08, 0.1, 0.85);

pub const TITLE_SIZE: f32 = 16.0;
pub const LABEL_SIZE: f32 = 13.0;
pub const TICK_SIZE: f32 = 11.0;
pub const SERIES_WIDTH: f32 = 1.5;

/// Color of a track's line
pub fn series_color(side: TrackSide) -> Color {
    SERIES_COLORS[side.index()]
}
