//! Toolkit-independent plot surface
//!
//! Views draw into anything implementing [`PlotSurface`]; [`Plot`] is the
//! in-memory implementation that the UI layer renders and that tests inspect.
//! Series use their element index as the x coordinate, which is all the two
//! comparison views need (frame index, or sample offset within a frame).

/// Fraction of the data span added on each side when autoscaling
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Half-width used when all data sits on a single value
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Visible interval of one axis in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Span covering `[lo, hi]` plus a relative margin on both sides
    ///
    /// A zero-width span is widened to a fixed half-width so the axis stays
    /// usable (and zoomable).
    pub fn padded(lo: f64, hi: f64, margin: f64) -> Self {
        if !(lo.is_finite() && hi.is_finite()) {
            return Self::new(-DEGENERATE_HALF_WIDTH, DEGENERATE_HALF_WIDTH);
        }
        let span = hi - lo;
        if span <= 0.0 {
            return Self::new(lo - DEGENERATE_HALF_WIDTH, hi + DEGENERATE_HALF_WIDTH);
        }
        Self::new(lo - span * margin, hi + span * margin)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Relative position of `value` (0.0 at `min`, 1.0 at `max`)
    pub fn fraction_of(&self, value: f64) -> f64 {
        (value - self.min) / self.width()
    }

    /// Data value at a relative position
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction * self.width()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Normalized pointer position on a surface, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// 0.0 at the left edge, 1.0 at the right edge
    pub fx: f64,
    /// 0.0 at the top edge, 1.0 at the bottom edge
    pub fy: f64,
}

impl SurfacePoint {
    pub fn new(fx: f64, fy: f64) -> Self {
        Self { fx, fy }
    }

    /// Whether the point lies on the surface
    pub fn is_inside(&self) -> bool {
        (0.0..=1.0).contains(&self.fx) && (0.0..=1.0).contains(&self.fy)
    }
}

/// Visible rectangle of a plot in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotBounds {
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y }
    }

    /// Data coordinates under a surface point (screen y grows downward)
    pub fn data_at(&self, point: SurfacePoint) -> (f64, f64) {
        (self.x.value_at(point.fx), self.y.value_at(1.0 - point.fy))
    }

    /// Surface point of a data coordinate
    pub fn surface_point(&self, x: f64, y: f64) -> SurfacePoint {
        SurfacePoint::new(self.x.fraction_of(x), 1.0 - self.y.fraction_of(y))
    }

    /// Bounds moved as if the content was dragged by a surface-relative delta
    ///
    /// Dragging right reveals data further left, dragging down reveals data
    /// further up.
    pub fn panned(&self, dfx: f64, dfy: f64) -> Self {
        let dx = -dfx * self.x.width();
        let dy = dfy * self.y.width();
        Self {
            x: AxisRange::new(self.x.min + dx, self.x.max + dx),
            y: AxisRange::new(self.y.min + dy, self.y.max + dy),
        }
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self::new(AxisRange::new(0.0, 1.0), AxisRange::new(-1.0, 1.0))
    }
}

/// One labeled line on a plot
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    /// y values; x is the element index
    pub values: Vec<f32>,
}

impl Series {
    /// Smallest and largest finite value
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| {
                let v = v as f64;
                match acc {
                    None => Some((v, v)),
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                }
            })
    }
}

/// Drawing operations the comparison views need from a 2D plot
pub trait PlotSurface {
    /// Remove all series and labels, and reset the view
    fn clear(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str);

    fn add_series(&mut self, label: &str, values: &[f32]);

    fn show_legend(&mut self, visible: bool);

    /// Fit the view (and its home position) to the current series
    fn autoscale(&mut self);

    /// Pin the x axis of the view and its home position
    fn set_x_limits(&mut self, range: AxisRange);

    /// Current visible rectangle
    fn bounds(&self) -> PlotBounds;

    /// Move the visible rectangle (zoom, pan)
    fn set_bounds(&mut self, bounds: PlotBounds);

    /// Return to the rectangle set by the last autoscale/limits call
    fn reset_view(&mut self);
}

/// In-memory plot surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub legend: bool,
    bounds: PlotBounds,
    home: PlotBounds,
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Longest series length
    pub fn max_len(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
    }

    /// Rectangle the view returns to on reset
    pub fn home(&self) -> PlotBounds {
        self.home
    }
}

impl PlotSurface for Plot {
    fn clear(&mut self) {
        self.title.clear();
        self.x_label.clear();
        self.y_label.clear();
        self.series.clear();
        self.legend = false;
        self.bounds = PlotBounds::default();
        self.home = self.bounds;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
    }

    fn add_series(&mut self, label: &str, values: &[f32]) {
        self.series.push(Series {
            label: label.to_string(),
            values: values.to_vec(),
        });
    }

    fn show_legend(&mut self, visible: bool) {
        self.legend = visible;
    }

    fn autoscale(&mut self) {
        let last_x = self.max_len().saturating_sub(1) as f64;
        let x = AxisRange::padded(0.0, last_x, AUTOSCALE_MARGIN);

        let y = self
            .series
            .iter()
            .filter_map(Series::value_range)
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
            .map(|(lo, hi)| AxisRange::padded(lo, hi, AUTOSCALE_MARGIN))
            .unwrap_or_else(|| AxisRange::padded(0.0, 0.0, AUTOSCALE_MARGIN));

        self.home = PlotBounds::new(x, y);
        self.bounds = self.home;
    }

    fn set_x_limits(&mut self, range: AxisRange) {
        self.home.x = range;
        self.bounds.x = range;
    }

    fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: PlotBounds) {
        self.bounds = bounds;
    }

    fn reset_view(&mut self) {
        self.bounds = self.home;
    }
}
