//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors raised while validating builder inputs.
///
/// Building a table from validated inputs cannot fail; these errors only
/// come out of [`ControlPoints`](crate::ControlPoints) and
/// [`ChannelGains`](crate::ChannelGains) construction.
#[derive(Debug, Error, PartialEq)]
pub enum LutError {
    /// A curve needs at least one control point.
    #[error("control point list is empty")]
    EmptyControlPoints,

    /// More points than the 256-sample domain can hold one segment per pair.
    #[error("{count} control points given, at most {max} supported")]
    TooManyControlPoints {
        /// Points supplied
        count: usize,
        /// Largest accepted count
        max: usize,
    },

    /// A parameter is NaN or infinite.
    #[error("{what} must be finite, got {value}")]
    NonFinite {
        /// Parameter name
        what: String,
        /// Offending value
        value: f64,
    },

    /// A channel multiplier is below zero.
    #[error("{what} gain must be >= 0, got {value}")]
    NegativeGain {
        /// Channel name
        what: String,
        /// Offending value
        value: f64,
    },
}
