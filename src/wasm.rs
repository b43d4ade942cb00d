//! WASM bindings for Devsim Core.
//!
//! This module provides JavaScript-friendly bindings so an interactive web
//! frontend (sliders + a canvas plot) can regenerate curves on every input
//! change.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { mosfet_curve, junction_curve, doping_profile } from 'devsim_core';
//!
//! await init();
//!
//! const curve = mosfet_curve(1.0, 2.0, 1.0, 100.0);
//! drawPlot(curve.x(), curve.y(), curve.title(), curve.x_label(), curve.y_label());
//! ```
//!
//! Out-of-range slider values are clamped rather than rejected, matching the
//! behavior of range-constrained input widgets.

use wasm_bindgen::prelude::*;

use crate::curve::Curve;
use crate::devices::{doping, junction, mosfet};
use crate::params::{DopingParams, JunctionParams, MosfetParams};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A generated curve exposed to JavaScript.
///
/// Wraps the native [`Curve`] and hands out copies of the sample arrays as
/// `Float64Array`s plus the display metadata for plot labeling.
#[wasm_bindgen]
pub struct WasmCurve {
    curve: Curve,
}

#[wasm_bindgen]
impl WasmCurve {
    /// Domain samples (voltage or position).
    pub fn x(&self) -> Vec<f64> {
        self.curve.x.clone()
    }

    /// Range samples (current or concentration).
    pub fn y(&self) -> Vec<f64> {
        self.curve.y.clone()
    }

    /// Plot title.
    pub fn title(&self) -> String {
        self.curve.title.to_string()
    }

    /// Horizontal axis label.
    pub fn x_label(&self) -> String {
        self.curve.x_label.to_string()
    }

    /// Vertical axis label.
    pub fn y_label(&self) -> String {
        self.curve.y_label.to_string()
    }

    /// Number of sample points.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.curve.len()
    }
}

impl From<Curve> for WasmCurve {
    fn from(curve: Curve) -> Self {
        Self { curve }
    }
}

/// Generate the MOSFET I-V curve; inputs are clamped into their valid ranges.
#[wasm_bindgen]
pub fn mosfet_curve(vgs: f64, vds_max: f64, vth: f64, kn: f64) -> WasmCurve {
    let params = MosfetParams::clamped(vgs, vds_max, vth, kn);
    mosfet::iv_curve(&params).into()
}

/// Generate the PN-junction I-V curve; Is is clamped into its valid range.
#[wasm_bindgen]
pub fn junction_curve(is_sat: f64) -> WasmCurve {
    let params = JunctionParams::clamped(is_sat);
    junction::iv_curve(&params).into()
}

/// Generate the step doping profile; Nd and Na are clamped into range.
#[wasm_bindgen]
pub fn doping_profile(nd: u32, na: u32) -> WasmCurve {
    let params = DopingParams::clamped(nd, na);
    doping::profile(&params).into()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
