//! Drag coefficient correlations for a smooth sphere.
//!
//! Twenty published closed-form correlations `Cd = f(Re)`, named after their
//! authors. Applicability ranges are documented per function but never
//! enforced; `Re = 0` divides by zero and the result propagates as infinity
//! or NaN.
//!
//! # Reference
//! Barati, Neyshabouri & Ahmadi, "Development of Empirical Models with High
//! Accuracy for Estimation of Drag Coefficient of Flow around a Smooth
//! Sphere: An Evolutionary Approach." *Powder Technology* 257 (2014): 11-19,
//! which tabulates and compares most of the correlations below.

use std::f64::consts::LN_10;

use wasm_bindgen::prelude::*;

/// Stokes' law: `Cd = 24/Re`. Valid for `Re <= 0.3`.
#[wasm_bindgen]
pub fn Stokes(Re: f64) -> f64 {
    24.0 / Re
}

/// Barati et al. (2014), low-range model. Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Barati(Re: f64) -> f64 {
    5.4856E9 * (4.3774E-9 / Re).tanh() + 0.0709 * (700.6574 / Re).tanh()
        + 0.3894 * (74.1539 / Re).tanh()
        - 0.1198 * (7429.0843 / Re).tanh()
        + 1.7174 * (9.9851 / (Re + 2.3384)).tanh()
        + 0.4744
}

/// Barati et al. (2014), wide-range model. Valid for `Re <= 1e6`.
#[wasm_bindgen]
pub fn Barati_high(Re: f64) -> f64 {
    8E-6 * ((Re / 6530.0).powi(2) + Re.tanh() - 8.0 * Re.ln() / LN_10)
        - 0.4119 * (-2.08E43 / (Re + Re * Re).powi(4)).exp()
        - 2.1344 * (-(((Re * Re + 10.7563).ln() / LN_10).powi(2) + 9.9867) / Re).exp()
        + 0.1357 * (-((Re / 1620.0).powi(2) + 10_370.0) / Re).exp()
        - 8.5E-3 * (2.0 * Re.tanh().tanh().ln() / LN_10 - 2825.7162) / Re
        + 2.4795
}

/// Rouse (1938): `Cd = 24/Re + 3/sqrt(Re) + 0.34`. Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Rouse(Re: f64) -> f64 {
    24.0 / Re + 3.0 / Re.sqrt() + 0.34
}

/// Engelund & Hansen (1967): `Cd = 24/Re + 1.5`. Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Engelund_Hansen(Re: f64) -> f64 {
    24.0 / Re + 1.5
}

/// Clift & Gauvin (1970). Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Clift_Gauvin(Re: f64) -> f64 {
    24.0 / Re * (1.0 + 0.152 * Re.powf(0.677)) + 0.417 / (1.0 + 5070.0 * Re.powf(-0.94))
}

/// Morsi & Alexander (1972), eight-regime piecewise fit.
/// Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Morsi_Alexander(Re: f64) -> f64 {
    if Re < 0.1 {
        24.0 / Re
    } else if Re < 1.0 {
        22.73 / Re + 0.0903 / (Re * Re) + 3.69
    } else if Re < 10.0 {
        29.1667 / Re - 3.8889 / (Re * Re) + 1.222
    } else if Re < 100.0 {
        46.5 / Re - 116.67 / (Re * Re) + 0.6167
    } else if Re < 1000.0 {
        98.33 / Re - 2778.0 / (Re * Re) + 0.3644
    } else if Re < 5000.0 {
        148.62 / Re - 4.75E4 / (Re * Re) + 0.357
    } else if Re < 10_000.0 {
        -490.546 / Re + 57.87E4 / (Re * Re) + 0.46
    } else {
        -1662.5 / Re + 5.4167E6 / (Re * Re) + 0.5191
    }
}

/// Graf (1984): `Cd = 24/Re + 7.3/(1 + sqrt(Re)) + 0.25`.
/// Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Graf(Re: f64) -> f64 {
    24.0 / Re + 7.3 / (1.0 + Re.sqrt()) + 0.25
}

/// Flemmer & Banks (1986): `Cd = (24/Re) * 10^E` with a three-term exponent.
/// Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Flemmer_Banks(Re: f64) -> f64 {
    let e = 0.383 * Re.powf(0.356) - 0.207 * Re.powf(0.396) - 0.143 / (1.0 + Re.log10().powi(2));
    24.0 / Re * 10_f64.powf(e)
}

/// Khan & Richardson (1987): `Cd = (2.49 Re^-0.328 + 0.34 Re^0.067)^3.18`.
/// Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Khan_Richardson(Re: f64) -> f64 {
    (2.49 * Re.powf(-0.328) + 0.34 * Re.powf(0.067)).powf(3.18)
}

/// Swamee & Ojha (1991). Valid for `Re <= 1.5e5`.
#[wasm_bindgen]
pub fn Swamee_Ojha(Re: f64) -> f64 {
    0.5 * (16.0 * ((24.0 / Re).powf(1.6) + (130.0 / Re).powf(0.72)).powf(2.5)
        + ((40_000.0 / Re).powi(2) + 1.0).powf(-0.25))
    .powf(0.25)
}

/// Yen (1992). Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Yen(Re: f64) -> f64 {
    24.0 / Re * (1.0 + 0.15 * Re.sqrt() + 0.017 * Re) - 0.208 / (1.0 + 1E4 * Re.powf(-0.5))
}

/// Haider & Levenspiel (1989). Valid for `Re <= 2e5`.
///
/// An improved version of this correlation is in Brown and Lawler.
#[wasm_bindgen]
pub fn Haider_Levenspiel(Re: f64) -> f64 {
    24.0 / Re * (1.0 + 0.1806 * Re.powf(0.6459)) + 0.4251 / (1.0 + 6880.95 / Re)
}

/// Cheng (2009). Valid for `Re <= 2e5`.
#[wasm_bindgen]
pub fn Cheng(Re: f64) -> f64 {
    24.0 / Re * (1.0 + 0.27 * Re).powf(0.43) + 0.47 * (1.0 - (-0.04 * Re.powf(0.38)).exp())
}

/// Terfous et al. (2013). Valid for `0.1 < Re <= 5e4`.
#[wasm_bindgen]
pub fn Terfous(Re: f64) -> f64 {
    2.689 + 21.683 / Re + 0.131 / (Re * Re) - 10.616 / Re.powf(0.1) + 12.216 / Re.powf(0.2)
}

/// Mikhailov & Silva Freire (2013), a Shanks-transform rational
/// approximation. Valid for `Re <= 118300`.
#[wasm_bindgen]
pub fn Mikhailov_Freire(Re: f64) -> f64 {
    3808.0 * ((1_617_933.0 / 2030.0) + (178_861.0 / 1063.0) * Re + (1219.0 / 1084.0) * Re * Re)
        / (681.0
            * Re
            * ((77_531.0 / 422.0) + (13_529.0 / 976.0) * Re - (1.0 / 71_154.0) * Re * Re))
}

/// Clift, Grace & Weber (1978), nine-regime piecewise fit.
/// Valid for `Re <= 1e6`.
#[wasm_bindgen]
pub fn Clift(Re: f64) -> f64 {
    if Re < 0.01 {
        24.0 / Re + 3.0 / 16.0
    } else if Re < 20.0 {
        24.0 / Re * (1.0 + 0.1315 * Re.powf(0.82 - 0.05 * Re.log10()))
    } else if Re < 260.0 {
        24.0 / Re * (1.0 + 0.1935 * Re.powf(0.6305))
    } else if Re < 1500.0 {
        10_f64.powf(1.6435 - 1.1242 * Re.log10() + 0.1558 * Re.log10().powi(2))
    } else if Re < 12_000.0 {
        10_f64.powf(
            -2.4571 + 2.5558 * Re.log10() - 0.9295 * Re.log10().powi(2)
                + 0.1049 * Re.log10().powi(3),
        )
    } else if Re < 44_000.0 {
        10_f64.powf(-1.9181 + 0.6370 * Re.log10() - 0.0636 * Re.log10().powi(2))
    } else if Re < 338_000.0 {
        10_f64.powf(-4.3390 + 1.5809 * Re.log10() - 0.1546 * Re.log10().powi(2))
    } else if Re < 400_000.0 {
        29.78 - 5.3 * Re.log10()
    } else {
        0.19 * Re.log10() - 0.49
    }
}

/// Ceylan, Altunbaş & Kelbaliyev (2001). Valid for `0.1 < Re <= 1e6`.
#[wasm_bindgen]
pub fn Ceylan(Re: f64) -> f64 {
    1.0 - 0.5 * 0.182_f64.exp() + 10.11 * Re.powf(-2.0 / 3.0) * (0.952 * Re.powf(-0.25)).exp()
        - 0.038_59 * Re.powf(-4.0 / 3.0) * (1.30 * Re.powf(-0.5)).exp()
        + 0.037E-4 * Re * (-0.125E-4 * Re).exp()
        - 0.116E-10 * Re * Re * (-0.444E-5 * Re).exp()
}

/// Almedeij (2008), an asymptotic matching of the whole drag curve.
/// Valid for `Re <= 1e6`.
#[wasm_bindgen]
pub fn Almedeij(Re: f64) -> f64 {
    let phi4 = ((6E-17 * Re.powf(2.63)).powi(-10) + 0.2_f64.powi(-10)).powi(-1);
    let phi3 = (1.57E8 * Re.powf(-1.625)).powi(10);
    let phi2 = ((0.148 * Re.powf(0.11)).powi(-10) + 0.5_f64.powi(-10)).powi(-1);
    let phi1 =
        (24.0 * Re.powi(-1)).powi(10) + (21.0 * Re.powf(-0.67)).powi(10)
            + (4.0 * Re.powf(-0.33)).powi(10)
            + 0.4_f64.powi(10);
    (1.0 / ((phi1 + phi2).powi(-1) + phi3.powi(-1)) + phi4).powf(0.1)
}

/// Morrison (2013). Valid for `Re <= 1e6`.
#[wasm_bindgen]
pub fn Morrison(Re: f64) -> f64 {
    24.0 / Re + 2.6 * Re / 5.0 / (1.0 + (Re / 5.0).powf(1.52))
        + 0.411 * (Re / 263_000.0).powf(-7.94) / (1.0 + (Re / 263_000.0).powi(-8))
        + Re.powf(0.8) / 461_000.0
}
