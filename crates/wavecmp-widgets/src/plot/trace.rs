//! Series to screen-space polyline

use iced::{Point, Size};
use wavecmp_core::plot::PlotBounds;

/// Polyline of a series in plot-area coordinates
///
/// Only the visible index range (plus one point past each edge) is traced.
/// When there are more visible points than twice the pixel width, each pixel
/// column is reduced to its minimum and maximum so peaks survive. NaN samples
/// are skipped.
pub fn trace_points(values: &[f32], bounds: &PlotBounds, area: Size) -> Vec<Point> {
    let x_width = bounds.x.width();
    let y_width = bounds.y.width();
    if values.is_empty() || !(x_width > 0.0 && y_width > 0.0) || area.width <= 0.0 {
        return Vec::new();
    }

    let first = bounds.x.min.floor().max(0.0);
    let last = bounds.x.max.ceil();
    if last < 0.0 || first >= values.len() as f64 {
        return Vec::new();
    }
    let first = first as usize;
    let last = (last as usize).min(values.len() - 1);

    let to_x = |i: usize| ((i as f64 - bounds.x.min) / x_width * area.width as f64) as f32;
    let to_y = |v: f32| ((bounds.y.max - v as f64) / y_width * area.height as f64) as f32;

    let visible = last - first + 1;
    let columns = area.width.ceil() as usize;

    if visible <= columns * 2 {
        return (first..=last)
            .filter(|&i| !values[i].is_nan())
            .map(|i| Point::new(to_x(i), to_y(values[i])))
            .collect();
    }

    let mut points = Vec::with_capacity(columns * 2);
    let mut column_start = first;
    for column in 0..columns {
        let column_end = (first + visible * (column + 1) / columns).min(last + 1);
        if column_end <= column_start {
            continue;
        }

        let (lo, hi) = values[column_start..column_end]
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if lo <= hi {
            let x = to_x(column_start);
            points.push(Point::new(x, to_y(lo)));
            points.push(Point::new(x, to_y(hi)));
        }
        column_start = column_end;
    }
    points
}
