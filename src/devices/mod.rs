//! Device curve generators.
//!
//! Three independent generators, each a pure function from a parameter set to
//! a plottable [`Curve`](crate::Curve):
//!
//! - [`mosfet`] - square-law MOSFET I-V sweep (triode + saturation)
//! - [`junction`] - PN-junction I-V sweep (simplified Shockley equation)
//! - [`doping`] - step doping profile over a 1 um device cross-section
//!
//! No generator depends on another and none holds state between calls.

pub mod doping;
pub mod junction;
pub mod mosfet;
