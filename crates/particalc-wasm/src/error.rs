//! Error types for the JS interop boundary.
//!
//! The formula functions themselves never fail: degenerate numeric input
//! propagates as infinity, NaN, or a physically meaningless value per the
//! documented naive contract. The only fallible operation in this crate is
//! deserializing structured arguments passed from JavaScript.

use thiserror::Error;

/// Errors that can occur while converting JavaScript values to formula inputs.
#[derive(Debug, Error)]
pub enum InteropError {
    /// A hole list passed from JavaScript could not be deserialized.
    #[error("invalid hole list: {0}")]
    InvalidHoleList(String),
}
