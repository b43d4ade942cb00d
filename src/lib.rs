//! # Devsim Core
//!
//! An educational semiconductor device curve generator.
//!
//! This library provides:
//! - A square-law MOSFET I-V curve generator (triode + saturation regions)
//! - A PN-junction I-V curve generator (simplified Shockley equation)
//! - A step doping profile generator
//! - Plot rendering (PNG/SVG) and CSV export for the generated curves
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`params`] - Validated/clamped device parameter sets with fixed ranges
//! - [`curve`] - Domain sampling and the plottable curve dataset type
//! - [`devices`] - The three curve generators (MOSFET, PN junction, doping)
//! - [`output`] - Plot rendering and CSV export (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! devsim mosfet --vgs 2.0 --kn 120 -o mosfet.png
//! devsim junction --is-sat 1e-12 --csv -o junction.csv
//! devsim all -o curves/
//! ```
//!
//! ### Library
//!
//! ```
//! use devsim_core::devices::mosfet;
//! use devsim_core::params::MosfetParams;
//!
//! let curve = mosfet::iv_curve(&MosfetParams::default());
//! assert_eq!(curve.len(), devsim_core::CURVE_POINTS);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { mosfet_curve } from 'devsim_core';
//!
//! const curve = mosfet_curve(1.0, 2.0, 1.0, 100.0);
//! plot(curve.x(), curve.y());
//! ```
//!
//! ## Computation Model
//!
//! Every generator is a pure function of its scalar inputs: it samples a fixed
//! domain at [`CURVE_POINTS`] evenly spaced points, evaluates a closed-form
//! textbook equation at each point, and returns the (domain, range) pair as a
//! [`Curve`]. There is no shared state, no iteration, and no numerical solving.

pub mod curve;
pub mod devices;
pub mod error;
pub mod params;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use curve::Curve;
pub use error::{DevsimError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCurve;

/// Number of sample points in every generated curve.
pub const CURVE_POINTS: usize = 200;

/// Exponential coefficient of the simplified Shockley equation (1/V).
///
/// Rounded approximation of q/(kT) ~ 1/VT at room temperature (VT ~ 26mV).
/// Kept as a literal constant rather than recomputed from physical constants
/// so generated curves match the reference output exactly.
pub const SHOCKLEY_COEFF: f64 = 38.92;
