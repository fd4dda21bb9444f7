//! Axis tick placement

use wavecmp_core::plot::AxisRange;

/// Tick positions at a 1/2/5 x 10^k spacing, at most roughly `max_ticks` of them
///
/// Returns an empty list for empty, inverted or non-finite ranges.
pub fn nice_ticks(range: AxisRange, max_ticks: usize) -> Vec<f64> {
    let width = range.width();
    if !(width.is_finite() && width > 0.0) || max_ticks == 0 {
        return Vec::new();
    }

    let step = nice_step(width / max_ticks as f64);
    let first = (range.min / step).ceil() as i64;
    let last = (range.max / step).floor() as i64;

    (first..=last).map(|k| k as f64 * step).collect()
}

/// Smallest 1/2/5 x 10^k step no smaller than `raw`
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick label with just enough decimals for the tick spacing
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    // Avoid "-0"
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}
