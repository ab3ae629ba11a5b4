//! Dimensionless shape descriptors for particles and 2-D profiles.
//!
//! Each descriptor compares a shape against the most compact reference shape
//! (sphere or circle) and equals 1.0 when they coincide.
//!
//! # Reference
//! Rhodes, Martin J., *Introduction to Particle Technology*, 2E. Wiley, 2008.

use std::f64::consts::PI;

use wasm_bindgen::prelude::*;

/// Sphericity of a particle with surface area `A` (m²) and volume `V` (m³).
///
/// Ratio of the surface area of a sphere with volume `V` to the actual
/// surface area: `psi = pi^(1/3) * (6V)^(2/3) / A`. Equals 1.0 for a perfect
/// sphere and falls below 1.0 for any other shape.
///
/// Inputs are not validated: `A = 0` yields infinity and a negative `V`
/// yields NaN.
#[wasm_bindgen]
pub fn sphericity(A: f64, V: f64) -> f64 {
    PI.powf(1.0 / 3.0) * (6.0 * V).powf(2.0 / 3.0) / A
}

/// Aspect ratio of a shape with minimum and maximum dimensions
/// `Dmin` and `Dmax` (m): `Dmin / Dmax`.
///
/// Typically in `[0, 1]` when the arguments are passed in order.
/// `Dmax = 0` yields infinity (or NaN when `Dmin` is also zero).
#[wasm_bindgen]
pub fn aspect_ratio(Dmin: f64, Dmax: f64) -> f64 {
    Dmin / Dmax
}

/// Circularity of a 2-D shape with area `A` (m²) and perimeter `P` (m):
/// `4 * pi * A / P^2`.
///
/// Equals 1.0 for a circle and falls below 1.0 for less compact shapes.
/// `P = 0` yields infinity.
#[wasm_bindgen]
pub fn circularity(A: f64, P: f64) -> f64 {
    4.0 * PI * A / (P * P)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
        let scale = expected.abs().max(1e-300);
        assert!(
            ((actual - expected) / scale).abs() <= rel_tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ut_shape_001_sphere_has_unit_sphericity() {
        for r in [0.3, 1.0, 42.0] {
            let a = 4.0 * PI * r * r;
            let v = 4.0 / 3.0 * PI * r * r * r;
            assert_close(sphericity(a, v), 1.0, 1e-12);
        }
    }

    #[test]
    fn ut_shape_002_zero_area_sphericity_is_infinite() {
        assert!(sphericity(0.0, 2.0).is_infinite());
    }

    #[test]
    fn ut_shape_003_negative_volume_sphericity_is_nan() {
        assert!(sphericity(10.0, -2.0).is_nan());
    }

    #[test]
    fn ut_shape_004_aspect_ratio_is_scale_invariant() {
        let base = aspect_ratio(0.2, 2.0);
        for k in [1e-6, 0.5, 3.0, 1e9] {
            assert_close(aspect_ratio(k * 0.2, k * 2.0), base, 1e-12);
        }
    }

    #[test]
    fn ut_shape_005_aspect_ratio_zero_max_is_infinite() {
        assert!(aspect_ratio(0.2, 0.0).is_infinite());
    }

    #[test]
    fn ut_shape_006_circle_has_unit_circularity() {
        for r in [0.05, 1.0, 7.5] {
            let a = PI * r * r;
            let p = 2.0 * PI * r;
            assert_close(circularity(a, p), 1.0, 1e-12);
        }
    }

    #[test]
    fn ut_shape_007_zero_perimeter_circularity_is_infinite() {
        assert!(circularity(1.5, 0.0).is_infinite());
    }
}
