//! Plot rendering via plotters.
//!
//! The backend is picked from the output path's extension: `.svg` renders
//! through the SVG backend, anything else through the PNG bitmap backend.
//! Each curve renders as a single line series with its title and axis labels.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::curve::Curve;
use crate::error::{DevsimError, Result};

/// Rendering options for [`render`].
#[derive(Debug, Clone, Copy)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Draw mesh grid lines behind the series (off by default; the junction
    /// plot is the only reference figure drawn with a grid)
    pub grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            grid: false,
        }
    }
}

impl PlotConfig {
    /// Same configuration with grid lines enabled.
    pub fn with_grid(self) -> Self {
        Self { grid: true, ..self }
    }
}

/// Render a curve to the given path, choosing the backend from the extension.
pub fn render(curve: &Curve, path: &Path, config: &PlotConfig) -> Result<()> {
    if curve.is_empty() {
        return Err(DevsimError::EmptyCurve);
    }

    let is_svg = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    let size = (config.width, config.height);
    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_chart(&root, curve, config)
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_chart(&root, curve, config)
    }
}

fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, curve: &Curve, config: &PlotConfig) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)
        .map_err(|e| DevsimError::render(e.to_string()))?;

    let (x_range, y_range) = axis_ranges(curve);

    let mut chart = ChartBuilder::on(root)
        .caption(curve.title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| DevsimError::render(e.to_string()))?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(curve.x_label).y_desc(curve.y_label);
    if !config.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(|e| DevsimError::render(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(curve.points(), &BLUE))
        .map_err(|e| DevsimError::render(e.to_string()))?;

    root.present()
        .map_err(|e| DevsimError::render(e.to_string()))?;
    Ok(())
}

/// Axis ranges with headroom; degenerate (constant) axes are widened so the
/// coordinate system never has zero extent.
fn axis_ranges(curve: &Curve) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let x_min = curve.x.first().copied().unwrap_or(0.0);
    let x_max = curve.x.last().copied().unwrap_or(1.0);
    let x_range = if x_max > x_min {
        x_min..x_max
    } else {
        x_min..x_min + 1.0
    };

    let (y_min, y_max) = (curve.y_min(), curve.y_max());
    let pad = (y_max - y_min) * 0.05;
    let y_range = if pad > 0.0 {
        (y_min - pad)..(y_max + pad)
    } else {
        (y_min - 1.0)..(y_max + 1.0)
    };

    (x_range, y_range)
}
