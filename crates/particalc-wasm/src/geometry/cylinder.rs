//! Surface area and volume of solid, hollow, and multi-hole cylinders.
//!
//! The multi-hole variants accumulate over a caller-supplied hole list in a
//! single pass. They are naive by contract: nothing checks that holes fit
//! inside the cylinder or avoid one another, so physically impossible inputs
//! silently produce negative or otherwise meaningless results.

use std::f64::consts::PI;

use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// A group of identical circular through-holes drilled parallel to the
/// cylinder axis.
///
/// Hole lists are ordered sequences of these descriptors. Diameters need not
/// be unique across descriptors; accumulation is commutative, so order never
/// affects the result.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HoleSpec {
    /// Diameter of each hole in the group, m.
    pub diameter: f64,
    /// Number of identical holes in the group.
    pub count: u32,
}

/// Surface area of a solid cylinder of diameter `D` and length `L`:
/// two end caps plus the lateral surface, `pi*D^2/2 + pi*D*L`, m².
#[wasm_bindgen]
pub fn A_cylinder(D: f64, L: f64) -> f64 {
    let cap = PI * D * D / 4.0 * 2.0;
    let side = PI * D * L;
    cap + side
}

/// Volume of a solid cylinder of diameter `D` and length `L`:
/// `pi*D^2*L/4`, m³.
#[wasm_bindgen]
pub fn V_cylinder(D: f64, L: f64) -> f64 {
    PI * D * D / 4.0 * L
}

/// Surface area of a hollow cylinder (tube) with hole diameter `Di`,
/// exterior diameter `Do`, and length `L`, m².
///
/// Sum of the outer lateral surface, the inner (hole wall) lateral surface,
/// and the two annular end caps. The caller must ensure `Di < Do`; no check
/// is performed.
#[wasm_bindgen]
pub fn A_hollow_cylinder(Di: f64, Do: f64, L: f64) -> f64 {
    let side_o = PI * Do * L;
    let side_i = PI * Di * L;
    let cap_circle = PI * Do * Do / 4.0 * 2.0;
    let cap_removed = PI * Di * Di / 4.0 * 2.0;
    side_o + side_i + cap_circle - cap_removed
}

/// Volume of material in a hollow cylinder (tube) with hole diameter `Di`,
/// exterior diameter `Do`, and length `L`: `pi*L*(Do^2 - Di^2)/4`, m³.
///
/// Negative when `Di > Do` — silently wrong, per the naive contract.
#[wasm_bindgen]
pub fn V_hollow_cylinder(Di: f64, Do: f64, L: f64) -> f64 {
    PI * Do * Do / 4.0 * L - PI * Di * Di / 4.0 * L
}

/// Surface area of a solid cylinder of exterior diameter `Do` and length `L`
/// perforated by the through-holes in `holes`, m².
///
/// Starts from the solid-cylinder area, then for each `(diameter, count)`
/// group adds the hole-wall lateral area and subtracts the cap area removed
/// by the holes. An empty hole list reproduces [`A_cylinder`]. Oversized or
/// overlapping holes naively yield impossible (e.g. negative) results.
pub fn A_multiple_hole_cylinder(Do: f64, L: f64, holes: &[HoleSpec]) -> f64 {
    let side_o = PI * Do * L;
    let cap_circle = PI * Do * Do / 4.0 * 2.0;
    let mut area = cap_circle + side_o;
    for hole in holes {
        let n = f64::from(hole.count);
        let side_i = PI * hole.diameter * L;
        let cap_removed = PI * hole.diameter * hole.diameter / 4.0 * 2.0;
        area = area + side_i * n - cap_removed * n;
    }
    area
}

/// Net solid volume of a cylinder of exterior diameter `Do` and length `L`
/// after removing the through-holes in `holes`, m³.
///
/// An empty hole list reproduces [`V_cylinder`]. Holes larger than the
/// cylinder naively drive the result negative.
pub fn V_multiple_hole_cylinder(Do: f64, L: f64, holes: &[HoleSpec]) -> f64 {
    let mut volume = PI * Do * Do / 4.0 * L;
    for hole in holes {
        volume -= PI * hole.diameter * hole.diameter / 4.0 * L * f64::from(hole.count);
    }
    volume
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
    fn ut_cyl_001_empty_hole_list_matches_solid_cylinder() {
        assert_close(
            A_multiple_hole_cylinder(0.01, 0.1, &[]),
            A_cylinder(0.01, 0.1),
            1e-12,
        );
        assert_close(
            V_multiple_hole_cylinder(0.01, 0.1, &[]),
            V_cylinder(0.01, 0.1),
            1e-12,
        );
    }

    #[test]
    fn ut_cyl_002_single_hole_matches_hollow_cylinder() {
        let holes = [HoleSpec {
            diameter: 0.005,
            count: 1,
        }];
        assert_close(
            A_multiple_hole_cylinder(0.01, 0.1, &holes),
            A_hollow_cylinder(0.005, 0.01, 0.1),
            1e-12,
        );
        assert_close(
            V_multiple_hole_cylinder(0.01, 0.1, &holes),
            V_hollow_cylinder(0.005, 0.01, 0.1),
            1e-12,
        );
    }

    #[test]
    fn ut_cyl_003_hole_list_order_is_irrelevant() {
        let small = HoleSpec {
            diameter: 0.001,
            count: 3,
        };
        let large = HoleSpec {
            diameter: 0.002,
            count: 1,
        };
        let forward = [small, large];
        let reversed = [large, small];
        assert_close(
            A_multiple_hole_cylinder(0.01, 0.1, &forward),
            A_multiple_hole_cylinder(0.01, 0.1, &reversed),
            1e-12,
        );
        assert_close(
            V_multiple_hole_cylinder(0.01, 0.1, &forward),
            V_multiple_hole_cylinder(0.01, 0.1, &reversed),
            1e-12,
        );
    }

    #[test]
    fn ut_cyl_004_repeated_diameter_groups_accumulate() {
        let split = [
            HoleSpec {
                diameter: 0.001,
                count: 2,
            },
            HoleSpec {
                diameter: 0.001,
                count: 1,
            },
        ];
        let merged = [HoleSpec {
            diameter: 0.001,
            count: 3,
        }];
        assert_close(
            V_multiple_hole_cylinder(0.01, 0.1, &split),
            V_multiple_hole_cylinder(0.01, 0.1, &merged),
            1e-12,
        );
    }

    #[test]
    fn ut_cyl_005_oversized_holes_go_negative_without_error() {
        let holes = [HoleSpec {
            diameter: 0.02,
            count: 4,
        }];
        assert!(V_multiple_hole_cylinder(0.01, 0.1, &holes) < 0.0);
    }

    #[test]
    fn ut_cyl_006_inverted_hollow_cylinder_volume_is_negative() {
        assert!(V_hollow_cylinder(0.01, 0.005, 0.1) < 0.0);
    }

    #[test]
    fn ut_cyl_007_zero_dimensions_yield_partial_areas() {
        assert_close(A_cylinder(0.0, 0.1), 0.0, 1e-12);
        // Zero length leaves only the two end caps.
        assert_close(A_cylinder(0.01, 0.0), PI * 0.01 * 0.01 / 2.0, 1e-12);
        assert_close(V_cylinder(0.01, 0.0), 0.0, 1e-12);
    }

    #[test]
    fn ut_cyl_008_zero_count_holes_are_no_ops() {
        let holes = [HoleSpec {
            diameter: 0.005,
            count: 0,
        }];
        assert_close(
            A_multiple_hole_cylinder(0.01, 0.1, &holes),
            A_cylinder(0.01, 0.1),
            1e-12,
        );
    }
}
