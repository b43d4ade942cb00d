//! Square-law MOSFET I-V curve (Shichman-Hodges style, simplified).
//!
//! For a gate overdrive Vov = Vgs - Vth, the drain current at a given Vds is:
//!
//!   triode     (Vds <  Vov):  Ids = Kn * (Vov * Vds - 0.5 * Vds^2)
//!   saturation (Vds >= Vov):  Ids = 0.5 * Kn * Vov^2
//!
//! Both branches agree at Vds = Vov, so the curve is continuous across the
//! region boundary. A negative overdrive is evaluated as-is: the triode branch
//! never fires (Vds >= 0 > Vov) and the sweep degenerates to the flat
//! saturation value 0.5 * Kn * Vov^2.

use crate::curve::{linspace, Curve};
use crate::params::MosfetParams;
use crate::CURVE_POINTS;

/// Drain current Ids (mA) at a single drain-source voltage.
pub fn drain_current(params: &MosfetParams, vds: f64) -> f64 {
    let vov = params.overdrive();
    if vds < vov {
        params.kn * (vov * vds - 0.5 * vds * vds)
    } else {
        0.5 * params.kn * vov * vov
    }
}

/// Sweep Vds over `[0, vds_max]` and produce the I-V curve.
pub fn iv_curve(params: &MosfetParams) -> Curve {
    let vds = linspace(0.0, params.vds_max, CURVE_POINTS);
    let ids = vds.iter().map(|&v| drain_current(params, v)).collect();
    Curve::new(vds, ids, "MOSFET I-V Curve", "Vds (V)", "Ids (mA)")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_zero_vds_gives_zero_current_when_device_on() {
        // Holds whenever Vgs >= Vth; a negative overdrive lands on the
        // saturation branch even at Vds=0 (see the no-clamp test below)
        for (vgs, vth, kn) in [(1.0, 1.0, 100.0), (5.0, 0.5, 500.0), (2.0, 2.0, 50.0)] {
            let p = MosfetParams::new(vgs, 2.0, vth, kn).unwrap();
            assert_eq!(drain_current(&p, 0.0), 0.0);
        }
    }

    #[test]
    fn test_zero_vds_with_negative_overdrive_is_nonzero() {
        // Vgs=0, Vth=2: Vov=-2, so Vds=0 is not below Vov and the
        // saturation formula gives 0.5*50*4 = 100
        let p = MosfetParams::new(0.0, 2.0, 2.0, 50.0).unwrap();
        assert_eq!(drain_current(&p, 0.0), 100.0);
    }

    #[test]
    fn test_continuity_at_region_boundary() {
        let p = MosfetParams::new(3.0, 5.0, 1.0, 200.0).unwrap();
        let vov = p.overdrive();

        // Evaluate both branch formulas at the boundary voltage
        let triode = p.kn * (vov * vov - 0.5 * vov * vov);
        let saturation = 0.5 * p.kn * vov * vov;
        assert_relative_eq!(triode, saturation, max_relative = 1e-12);

        // And just below/above it through the public entry point
        let eps = 1e-9;
        let below = drain_current(&p, vov - eps);
        let above = drain_current(&p, vov + eps);
        assert_relative_eq!(below, above, max_relative = 1e-6);
    }

    #[test]
    fn test_triode_region_values() {
        // Vgs=3, Vth=1, Kn=100: at Vds=1 (triode), Ids = 100*(2*1 - 0.5) = 150
        let p = MosfetParams::new(3.0, 5.0, 1.0, 100.0).unwrap();
        assert_relative_eq!(drain_current(&p, 1.0), 150.0, max_relative = 1e-12);
    }

    #[test]
    fn test_saturation_region_values() {
        // Vgs=3, Vth=1, Kn=100: beyond Vds=2, Ids = 0.5*100*4 = 200
        let p = MosfetParams::new(3.0, 5.0, 1.0, 100.0).unwrap();
        assert_relative_eq!(drain_current(&p, 3.0), 200.0, max_relative = 1e-12);
        assert_relative_eq!(drain_current(&p, 5.0), 200.0, max_relative = 1e-12);
    }

    #[test]
    fn test_vgs_equal_vth_yields_flat_zero_curve() {
        let p = MosfetParams::new(1.0, 2.0, 1.0, 100.0).unwrap();
        let curve = iv_curve(&p);
        assert_eq!(curve.len(), CURVE_POINTS);
        assert!(curve.y.iter().all(|&i| i == 0.0));
    }

    #[test]
    fn test_negative_overdrive_reproduced_without_clamp() {
        // Vgs=0.5, Vth=1.5: Vov=-1, saturation branch everywhere, Ids=0.5*Kn
        let p = MosfetParams::new(0.5, 2.0, 1.5, 100.0).unwrap();
        let curve = iv_curve(&p);
        for (_, ids) in curve.points() {
            assert_relative_eq!(ids, 50.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_curve_domain_and_labels() {
        let p = MosfetParams::default();
        let curve = iv_curve(&p);
        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(curve.x[0], 0.0);
        assert_relative_eq!(curve.x[CURVE_POINTS - 1], p.vds_max, max_relative = 1e-12);
        assert_eq!(curve.x_label, "Vds (V)");
        assert_eq!(curve.y_label, "Ids (mA)");
    }

    #[test]
    fn test_zero_vds_max_collapses_domain() {
        let p = MosfetParams::new(2.0, 0.0, 1.0, 100.0).unwrap();
        let curve = iv_curve(&p);
        assert_eq!(curve.len(), CURVE_POINTS);
        assert!(curve.x.iter().all(|&v| v == 0.0));
        assert!(curve.y.iter().all(|&i| i == 0.0));
    }
}
