//! Saltation velocity correlations for horizontal pneumatic conveying.
//!
//! Each correlation is published as an implicit relation between the solids
//! loading ratio `mu = mp / (rhog * (pi/4) * D^2 * Vsalt)` and the Froude
//! numbers `Frs = Vsalt / sqrt(g*D)` (pipe) and `Frt = Vterminal /
//! sqrt(g*dp)` (particle). Here every relation is solved in closed form for
//! the saltation velocity, so no iteration is involved.
//!
//! Inputs are in SI units: mass flow `mp` in kg/s, densities in kg/m³,
//! diameters in m, velocities in m/s, viscosity in Pa·s. Nothing is
//! validated; nonsensical inputs propagate NaN or infinity.
//!
//! # Reference
//! Gomes & Amarante Mesquita, "On the Prediction of Pickup and Saltation
//! Velocities in Pneumatic Conveying." *Brazilian Journal of Chemical
//! Engineering* 31, no. 1 (2014): 35-46.

use std::f64::consts::PI;

use wasm_bindgen::prelude::*;

/// Standard acceleration due to gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Solids mass flux through the pipe cross-section, kg/(m²·s).
fn solids_flux(mp: f64, D: f64) -> f64 {
    mp / ((PI / 4.0) * D * D)
}

/// Saltation velocity by Rizk (1973), m/s.
///
/// Solves `mu = 10^-(1440*dp + 1.96) * Frs^(1100*dp + 2.5)` for the gas
/// velocity.
#[wasm_bindgen]
pub fn Rizk(mp: f64, dp: f64, rhog: f64, D: f64) -> f64 {
    let alpha = 1440.0 * dp + 1.96;
    let beta = 1100.0 * dp + 2.5;
    let term1 = 10_f64.powf(-alpha);
    let term2 = (1.0 / (STANDARD_GRAVITY * D).sqrt()).powf(beta);
    (4.0 * mp / (PI * rhog * D * D * term1 * term2)).powf(1.0 / (1.0 + beta))
}

/// Saltation velocity by Matsumoto et al. (1974), m/s.
///
/// Solves `mu = 0.448 * (rhop/rhog)^0.50 * (Frt/10)^-1.75 * (Frs/10)^3`.
#[wasm_bindgen]
pub fn Matsumoto_1974(mp: f64, rhop: f64, dp: f64, rhog: f64, D: f64, Vterminal: f64) -> f64 {
    let fr_t = Vterminal / (STANDARD_GRAVITY * dp).sqrt();
    let a = 0.448 * (rhop / rhog).powf(0.5) * (fr_t / 10.0).powf(-1.75);
    let fr_scale = 10.0 * (STANDARD_GRAVITY * D).sqrt();
    (solids_flux(mp, D) / rhog * fr_scale.powi(3) / a).powf(0.25)
}

/// Saltation velocity by Matsumoto et al. (1975), m/s.
///
/// Solves `mu = 1.11 * (rhop/rhog)^0.55 * (Frt/10)^-2.3 * (Frs/10)^3`.
#[wasm_bindgen]
pub fn Matsumoto_1975(mp: f64, rhop: f64, dp: f64, rhog: f64, D: f64, Vterminal: f64) -> f64 {
    let fr_t = Vterminal / (STANDARD_GRAVITY * dp).sqrt();
    let a = 1.11 * (rhop / rhog).powf(0.55) * (fr_t / 10.0).powf(-2.3);
    let fr_scale = 10.0 * (STANDARD_GRAVITY * D).sqrt();
    (solids_flux(mp, D) / rhog * fr_scale.powi(3) / a).powf(0.25)
}

/// Saltation velocity by Matsumoto et al. (1977), m/s.
///
/// Piecewise on the critical particle diameter
/// `dp_c = 1.39 * D * (rhop/rhog)^-0.74`. Coarse particles (`dp > dp_c`)
/// follow `mu = 0.373 * (rhop/rhog)^1.06 * (Frt/10)^-3.7 * (Frs/10)^3.61`;
/// fine particles follow `mu = 5560 * (dp/D)^1.43 * (Frs/10)^4`.
#[wasm_bindgen]
pub fn Matsumoto_1977(mp: f64, rhop: f64, dp: f64, rhog: f64, D: f64, Vterminal: f64) -> f64 {
    let limit = 1.39 * D * (rhop / rhog).powf(-0.74);
    let fr_scale = 10.0 * (STANDARD_GRAVITY * D).sqrt();
    if dp > limit {
        let fr_t = Vterminal / (STANDARD_GRAVITY * dp).sqrt();
        let a = 0.373 * (rhop / rhog).powf(1.06) * (fr_t / 10.0).powf(-3.7);
        (solids_flux(mp, D) / rhog * fr_scale.powf(3.61) / a).powf(1.0 / 4.61)
    } else {
        let a = 5560.0 * (dp / D).powf(1.43);
        (solids_flux(mp, D) / rhog * fr_scale.powi(4) / a).powf(0.2)
    }
}

/// Saltation velocity by Schade (1987), m/s.
///
/// Solves `Frs = mu^0.11 * (D/dp)^0.025 * (rhop/rhog)^0.34`.
#[wasm_bindgen]
pub fn Schade(mp: f64, rhop: f64, dp: f64, rhog: f64, D: f64) -> f64 {
    let term = (STANDARD_GRAVITY * D).sqrt()
        * (solids_flux(mp, D) / rhog).powf(0.11)
        * (D / dp).powf(0.025)
        * (rhop / rhog).powf(0.34);
    term.powf(1.0 / 1.11)
}

/// Saltation velocity by Weber (1981), m/s.
///
/// Solves `Frs = C * mu^0.25 * (dp/D)^0.1` with `C = 7 + 8/3 * Vterminal`
/// below a terminal velocity of 3 m/s and `C = 15` above (the two branches
/// coincide at 3 m/s).
#[wasm_bindgen]
pub fn Weber(mp: f64, rhop: f64, dp: f64, rhog: f64, D: f64, Vterminal: f64) -> f64 {
    let _ = rhop; // retained for signature parity across the correlation set
    let c = if Vterminal < 3.0 {
        7.0 + 8.0 / 3.0 * Vterminal
    } else {
        15.0
    };
    let term = c
        * (STANDARD_GRAVITY * D).sqrt()
        * (solids_flux(mp, D) / rhog).powf(0.25)
        * (dp / D).powf(0.1);
    term.powf(0.8)
}

/// Saltation velocity by Geldart & Ling (1990), m/s.
///
/// Explicit in the solids flux `Gs = mp / ((pi/4) * D^2)`:
/// `Vsalt = 1.5 * Gs^0.465 * D^-0.01 * mug^0.055 * rhog^-0.42` for
/// `Gs/D <= 47000`, otherwise
/// `Vsalt = 8.7 * Gs^0.302 * D^0.153 * mug^0.055 * rhog^-0.42`.
#[wasm_bindgen]
pub fn Geldart_Ling(mp: f64, rhog: f64, D: f64, mug: f64) -> f64 {
    let gs = solids_flux(mp, D);
    if gs / D <= 47_000.0 {
        1.5 * gs.powf(0.465) * D.powf(-0.01) * mug.powf(0.055) * rhog.powf(-0.42)
    } else {
        8.7 * gs.powf(0.302) * D.powf(0.153) * mug.powf(0.055) * rhog.powf(-0.42)
    }
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
    fn ut_salt_001_matsumoto_1977_switches_regime_on_particle_density() {
        // dp = 1 mm sits above the critical diameter at rhop = 1000 (coarse)
        // and below it at rhop = 600 (fine), giving distinct curves.
        let coarse = Matsumoto_1977(1.0, 1000.0, 1E-3, 1.2, 0.1, 5.24);
        let fine = Matsumoto_1977(1.0, 600.0, 1E-3, 1.2, 0.1, 5.24);
        assert!(coarse > fine);
        // The fine branch does not depend on rhop or Vterminal at all.
        let fine_other_vt = Matsumoto_1977(1.0, 600.0, 1E-3, 1.2, 0.1, 2.0);
        assert_close(fine, fine_other_vt, 1e-12);
    }

    #[test]
    fn ut_salt_002_weber_is_continuous_at_three_m_per_s() {
        let below = Weber(1.0, 1000.0, 1E-3, 1.2, 0.1, 3.0 - 1e-12);
        let above = Weber(1.0, 1000.0, 1E-3, 1.2, 0.1, 3.0);
        assert_close(below, above, 1e-9);
    }

    #[test]
    fn ut_salt_003_geldart_ling_switches_on_flux_to_diameter_ratio() {
        // Gs/D crosses 47000 between these two mass flows.
        let low = Geldart_Ling(1.0, 1.2, 0.1, 2E-5);
        let high = Geldart_Ling(50.0, 1.2, 0.1, 2E-5);
        assert!(high > low);
        let gs_low = 1.0 / ((PI / 4.0) * 0.1 * 0.1);
        let gs_high = 50.0 / ((PI / 4.0) * 0.1 * 0.1);
        assert!(gs_low / 0.1 <= 47_000.0);
        assert!(gs_high / 0.1 > 47_000.0);
    }

    #[test]
    fn ut_salt_004_rizk_scales_with_mass_flow() {
        let v1 = Rizk(0.25, 100E-6, 1.2, 0.078);
        let v2 = Rizk(0.50, 100E-6, 1.2, 0.078);
        assert!(v2 > v1, "more solids require a faster gas stream");
    }

    #[test]
    fn ut_salt_005_negative_mass_flow_propagates_nan() {
        assert!(Rizk(-0.25, 100E-6, 1.2, 0.078).is_nan());
        assert!(Schade(-1.0, 1000.0, 1E-3, 1.2, 0.1).is_nan());
    }
}
