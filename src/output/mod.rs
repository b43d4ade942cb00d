//! Output surface for generated curves (CLI only).
//!
//! - [`plot`] - render a curve to a PNG or SVG image via plotters
//! - [`csv`] - export the raw (x, y) samples for external analysis
//!
//! Both accept any [`Curve`](crate::Curve); nothing here re-enters the
//! generators.

pub mod csv;
pub mod plot;

pub use csv::export_csv;
pub use plot::{render, PlotConfig};
