//! Particle and cylinder shape-characterization formulas.
//!
//! Closed-form expressions only: no state, no validation, no unit handling.
//! Inputs are assumed to be in consistent SI units (m, m², m³).

pub mod cylinder;
pub mod shape;

pub use cylinder::*;
pub use shape::*;
