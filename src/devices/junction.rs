//! PN-junction I-V curve via the simplified Shockley equation.
//!
//! I = Is * (exp(SHOCKLEY_COEFF * V) - 1)
//!
//! The sweep covers [-0.5, 0.7] V. At the upper bound the exponent is
//! 38.92 * 0.7 ~ 27.24, comfortably finite in f64 (overflow starts near
//! exp(709)), so no limiting is applied and any out-of-sweep overflow would
//! simply propagate as infinity.

use crate::curve::{linspace, Curve};
use crate::params::JunctionParams;
use crate::{CURVE_POINTS, SHOCKLEY_COEFF};

/// Lower bound of the voltage sweep (V).
pub const V_MIN: f64 = -0.5;
/// Upper bound of the voltage sweep (V).
pub const V_MAX: f64 = 0.7;

/// Junction current I (A) at a single bias voltage.
pub fn junction_current(params: &JunctionParams, v: f64) -> f64 {
    params.is_sat * ((SHOCKLEY_COEFF * v).exp() - 1.0)
}

/// Sweep V over `[V_MIN, V_MAX]` and produce the I-V curve.
pub fn iv_curve(params: &JunctionParams) -> Curve {
    let v = linspace(V_MIN, V_MAX, CURVE_POINTS);
    let i = v.iter().map(|&x| junction_current(params, x)).collect();
    Curve::new(
        v,
        i,
        "PN Junction I-V Curve",
        "Voltage V (V)",
        "Current I (A)",
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_zero_bias_gives_exactly_zero_current() {
        for is_sat in [1e-12, 1e-9, 1e-6] {
            let p = JunctionParams::new(is_sat).unwrap();
            assert_eq!(junction_current(&p, 0.0), 0.0);
        }
    }

    #[test]
    fn test_strictly_increasing_in_voltage() {
        let p = JunctionParams::default();
        let curve = iv_curve(&p);
        assert!(curve
            .y
            .windows(2)
            .all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_reverse_bias_approaches_negative_is() {
        let p = JunctionParams::new(1e-9).unwrap();
        let i = junction_current(&p, -0.5);
        assert!(i < 0.0);
        assert!(i > -p.is_sat);
        assert_relative_eq!(i, -p.is_sat, max_relative = 1e-6);
    }

    #[test]
    fn test_forward_bias_upper_bound_finite() {
        // Is=1e-12, V=0.7: I = 1e-12*(exp(27.244)-1) ~ 0.69 A
        let p = JunctionParams::new(1e-12).unwrap();
        let i = junction_current(&p, V_MAX);
        assert!(i.is_finite());
        assert!(i > 0.0);
        assert_relative_eq!(i, 0.69, max_relative = 0.02);
    }

    #[test]
    fn test_curve_domain_and_labels() {
        let curve = iv_curve(&JunctionParams::default());
        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(curve.x[0], V_MIN);
        assert_relative_eq!(curve.x[CURVE_POINTS - 1], V_MAX, max_relative = 1e-12);
        assert_eq!(curve.title, "PN Junction I-V Curve");
        assert!(curve.y.iter().all(|i| i.is_finite()));
    }
}
