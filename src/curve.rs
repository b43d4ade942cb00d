//! Domain sampling and the plottable curve dataset.
//!
//! A [`Curve`] is two equal-length ordered sequences of doubles (domain,
//! range) plus the display metadata needed to render it: a title and axis
//! labels. Curves are created per evaluation and discarded after rendering;
//! they carry no state beyond their samples.

/// Generate `n` evenly spaced values over the inclusive interval `[start, stop]`.
///
/// Endpoints are included and the step is `(stop - start) / (n - 1)`. With
/// `n == 1` the single sample is `start`; with `start == stop` all samples
/// collapse onto that value.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// A 2-D curve dataset ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Domain samples (voltage or position)
    pub x: Vec<f64>,
    /// Range samples (current or concentration)
    pub y: Vec<f64>,
    /// Plot title
    pub title: &'static str,
    /// Horizontal axis label
    pub x_label: &'static str,
    /// Vertical axis label
    pub y_label: &'static str,
}

impl Curve {
    /// Create a curve from equal-length domain and range sequences.
    ///
    /// # Panics
    /// Panics if `x` and `y` differ in length; the generators always produce
    /// matched sequences.
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
    ) -> Self {
        assert_eq!(x.len(), y.len(), "curve domain/range length mismatch");
        Self {
            x,
            y,
            title,
            x_label,
            y_label,
        }
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the curve has no sample points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` sample pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Smallest range value, or 0.0 for an empty curve.
    pub fn y_min(&self) -> f64 {
        if self.y.is_empty() {
            0.0
        } else {
            self.y.iter().copied().fold(f64::INFINITY, f64::min)
        }
    }

    /// Largest range value, or 0.0 for an empty curve.
    pub fn y_max(&self) -> f64 {
        if self.y.is_empty() {
            0.0
        } else {
            self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        }
    }
}
