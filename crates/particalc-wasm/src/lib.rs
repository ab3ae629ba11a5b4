#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::indexing_slicing)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(non_snake_case)]

//! `PartiCalc` WASM module — particle shape, sphere drag, and pneumatic
//! conveying saltation formulas.
//!
//! All functions are pure, stateless closed forms over IEEE-754 doubles.
//! Nothing is validated: division by zero propagates as signed infinity and
//! fractional powers of negative arguments propagate as NaN, by contract.
//! Function and parameter names follow the engineering literature
//! (`A_cylinder`, `Re`, `Haider_Levenspiel`), hence the crate-wide
//! `non_snake_case` allowance.
//!
//! Scalar functions are exported to JavaScript directly. The two multi-hole
//! cylinder functions take a hole list and are exported through wrappers
//! below that accept a JS array of `{ diameter, count }` objects.

pub mod drag;
pub mod error;
pub mod geometry;
pub mod saltation;

use wasm_bindgen::prelude::*;

use crate::error::InteropError;
use crate::geometry::HoleSpec;

/// Initialize the WASM module. Sets up the panic hook for debugging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Deserializes a JS hole list (`[{ diameter, count }, ...]`).
fn parse_hole_list(holes: JsValue) -> Result<Vec<HoleSpec>, InteropError> {
    serde_wasm_bindgen::from_value(holes).map_err(|e| InteropError::InvalidHoleList(e.to_string()))
}

/// Surface area of a cylinder perforated by parallel through-holes
/// (wasm export for [`geometry::A_multiple_hole_cylinder`]).
///
/// `holes` is a JS array of `{ diameter, count }` objects, in any order.
///
/// # Errors
///
/// Returns a descriptive error string if the hole list cannot be
/// deserialized. Numeric inputs are never validated.
#[wasm_bindgen(js_name = A_multiple_hole_cylinder)]
pub fn A_multiple_hole_cylinder_js(Do: f64, L: f64, holes: JsValue) -> Result<f64, JsValue> {
    let holes = parse_hole_list(holes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(geometry::A_multiple_hole_cylinder(Do, L, &holes))
}

/// Net solid volume of a cylinder perforated by parallel through-holes
/// (wasm export for [`geometry::V_multiple_hole_cylinder`]).
///
/// `holes` is a JS array of `{ diameter, count }` objects, in any order.
///
/// # Errors
///
/// Returns a descriptive error string if the hole list cannot be
/// deserialized. Numeric inputs are never validated.
#[wasm_bindgen(js_name = V_multiple_hole_cylinder)]
pub fn V_multiple_hole_cylinder_js(Do: f64, L: f64, holes: JsValue) -> Result<f64, JsValue> {
    let holes = parse_hole_list(holes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(geometry::V_multiple_hole_cylinder(Do, L, &holes))
}
