//! Device parameter sets with fixed valid ranges.
//!
//! Each parameter carries an inclusive `[MIN, MAX]` range and a default value.
//! Two construction paths are provided, matching the two input boundaries:
//!
//! - [`MosfetParams::new`] (and friends) validates and returns an error for
//!   out-of-range values. This is the library API boundary.
//! - [`MosfetParams::clamped`] (and friends) silently clamps into range, the
//!   way an interactive slider widget constrains its value.
//!
//! Once constructed, a parameter set is guaranteed in-range, so the curve
//! generators never see out-of-domain values.

use crate::error::{DevsimError, Result};

/// Parameters for the square-law MOSFET I-V curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosfetParams {
    /// Gate-source voltage Vgs (V)
    pub vgs: f64,
    /// Sweep endpoint for the drain-source voltage Vds (V)
    pub vds_max: f64,
    /// Threshold voltage Vth (V)
    pub vth: f64,
    /// Transconductance parameter Kn (mA/V^2)
    pub kn: f64,
}

impl MosfetParams {
    /// Valid range for Vgs (V).
    pub const VGS_RANGE: (f64, f64) = (0.0, 5.0);
    /// Valid range for Vds_max (V).
    pub const VDS_MAX_RANGE: (f64, f64) = (0.0, 5.0);
    /// Valid range for Vth (V).
    pub const VTH_RANGE: (f64, f64) = (0.5, 2.0);
    /// Valid range for Kn (mA/V^2).
    pub const KN_RANGE: (f64, f64) = (50.0, 500.0);

    /// Slider step for the voltage inputs (V), for interactive frontends.
    pub const VOLTAGE_STEP: f64 = 0.1;

    /// Create a validated parameter set.
    pub fn new(vgs: f64, vds_max: f64, vth: f64, kn: f64) -> Result<Self> {
        check_range("Vgs", vgs, Self::VGS_RANGE)?;
        check_range("Vds_max", vds_max, Self::VDS_MAX_RANGE)?;
        check_range("Vth", vth, Self::VTH_RANGE)?;
        check_range("Kn", kn, Self::KN_RANGE)?;
        Ok(Self {
            vgs,
            vds_max,
            vth,
            kn,
        })
    }

    /// Create a parameter set, clamping each value into its valid range.
    pub fn clamped(vgs: f64, vds_max: f64, vth: f64, kn: f64) -> Self {
        Self {
            vgs: clamp(vgs, Self::VGS_RANGE),
            vds_max: clamp(vds_max, Self::VDS_MAX_RANGE),
            vth: clamp(vth, Self::VTH_RANGE),
            kn: clamp(kn, Self::KN_RANGE),
        }
    }

    /// Gate overdrive voltage Vgs - Vth (V).
    ///
    /// May be negative; the curve generator reproduces the resulting flat
    /// near-zero saturation branch as-is rather than clamping to device-off.
    pub fn overdrive(&self) -> f64 {
        self.vgs - self.vth
    }
}

impl Default for MosfetParams {
    fn default() -> Self {
        Self {
            vgs: 1.0,
            vds_max: 2.0,
            vth: 1.0,
            kn: 100.0,
        }
    }
}

/// Parameters for the PN-junction I-V curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JunctionParams {
    /// Reverse saturation current Is (A)
    pub is_sat: f64,
}

impl JunctionParams {
    /// Valid range for Is (A).
    pub const IS_RANGE: (f64, f64) = (1e-12, 1e-6);

    /// Create a validated parameter set.
    pub fn new(is_sat: f64) -> Result<Self> {
        check_range("Is", is_sat, Self::IS_RANGE)?;
        Ok(Self { is_sat })
    }

    /// Create a parameter set, clamping Is into its valid range.
    pub fn clamped(is_sat: f64) -> Self {
        Self {
            is_sat: clamp(is_sat, Self::IS_RANGE),
        }
    }
}

impl Default for JunctionParams {
    fn default() -> Self {
        Self { is_sat: 1e-12 }
    }
}

/// Parameters for the step doping profile.
///
/// Concentrations are integer slider values in units of 10^15 cm^-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DopingParams {
    /// Donor concentration Nd (10^15 cm^-3)
    pub nd: u32,
    /// Acceptor concentration Na (10^15 cm^-3)
    pub na: u32,
}

impl DopingParams {
    /// Valid range for Nd and Na (10^15 cm^-3).
    pub const CONCENTRATION_RANGE: (u32, u32) = (1, 100);

    /// Create a validated parameter set.
    pub fn new(nd: u32, na: u32) -> Result<Self> {
        let (min, max) = Self::CONCENTRATION_RANGE;
        for (param, value) in [("Nd", nd), ("Na", na)] {
            if value < min || value > max {
                return Err(DevsimError::out_of_range(
                    param,
                    value as f64,
                    min as f64,
                    max as f64,
                ));
            }
        }
        Ok(Self { nd, na })
    }

    /// Create a parameter set, clamping both concentrations into range.
    pub fn clamped(nd: u32, na: u32) -> Self {
        let (min, max) = Self::CONCENTRATION_RANGE;
        Self {
            nd: nd.clamp(min, max),
            na: na.clamp(min, max),
        }
    }
}

impl Default for DopingParams {
    fn default() -> Self {
        Self { nd: 10, na: 10 }
    }
}

fn check_range(param: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    // NaN never satisfies the range test and is rejected as well
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(DevsimError::out_of_range(param, value, min, max))
    }
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}
