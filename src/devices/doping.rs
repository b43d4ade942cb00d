//! Step doping profile across an abrupt PN junction.
//!
//! The profile covers a 1e-4 cm (1 um) device cross-section with the
//! metallurgical junction at the midpoint: N(x) = Nd on the donor side
//! (x < 0.5e-4 cm) and Na on the acceptor side. The core formula works in cm;
//! the cm -> um conversion happens only when the display dataset is assembled.

use crate::curve::{linspace, Curve};
use crate::params::DopingParams;
use crate::CURVE_POINTS;

/// Extent of the profiled cross-section (cm).
pub const PROFILE_DEPTH_CM: f64 = 1e-4;
/// Position of the metallurgical junction (cm).
pub const JUNCTION_DEPTH_CM: f64 = 0.5e-4;
/// Display-unit conversion factor, cm to um.
const CM_TO_UM: f64 = 1e4;

/// Doping concentration (10^15 cm^-3) at a position in cm.
pub fn concentration(params: &DopingParams, x_cm: f64) -> f64 {
    if x_cm < JUNCTION_DEPTH_CM {
        params.nd as f64
    } else {
        params.na as f64
    }
}

/// Sample the profile over `[0, PROFILE_DEPTH_CM]` and produce the display
/// curve with positions in um.
pub fn profile(params: &DopingParams) -> Curve {
    let x_cm = linspace(0.0, PROFILE_DEPTH_CM, CURVE_POINTS);
    let n = x_cm.iter().map(|&x| concentration(params, x)).collect();
    let x_um = x_cm.into_iter().map(|x| x * CM_TO_UM).collect();
    Curve::new(
        x_um,
        n,
        "Doping Profile",
        "Position (µm)",
        "Doping Concentration (10^15 cm^-3)",
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_step_at_junction_depth() {
        let p = DopingParams::new(10, 50).unwrap();
        assert_eq!(concentration(&p, 0.0), 10.0);
        assert_eq!(concentration(&p, JUNCTION_DEPTH_CM - 1e-9), 10.0);
        // Boundary belongs to the acceptor side
        assert_eq!(concentration(&p, JUNCTION_DEPTH_CM), 50.0);
        assert_eq!(concentration(&p, PROFILE_DEPTH_CM), 50.0);
    }

    #[test]
    fn test_profile_sides_for_any_in_range_pair() {
        for (nd, na) in [(1, 100), (100, 1), (37, 37)] {
            let p = DopingParams::new(nd, na).unwrap();
            let x = linspace(0.0, PROFILE_DEPTH_CM, CURVE_POINTS);
            for &xi in &x {
                let expected = if xi < JUNCTION_DEPTH_CM { nd } else { na };
                assert_eq!(concentration(&p, xi), expected as f64);
            }
        }
    }

    #[test]
    fn test_display_domain_in_micrometers() {
        let curve = profile(&DopingParams::default());
        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(curve.x[0], 0.0);
        assert_relative_eq!(curve.x[CURVE_POINTS - 1], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_profile_values_follow_parameters() {
        let curve = profile(&DopingParams::new(10, 50).unwrap());
        assert_eq!(curve.y[0], 10.0);
        assert_eq!(curve.y[CURVE_POINTS - 1], 50.0);
        // Exactly the two concentration levels appear
        assert!(curve.y.iter().all(|&n| n == 10.0 || n == 50.0));
    }
}
