//! Error types for plane and frame operations.

use thiserror::Error;

/// Error type for plane and frame operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Plane or frame geometry is invalid.
    #[error(transparent)]
    Geometry(#[from] tweak_core::Error),

    /// Table builder input is invalid.
    #[error(transparent)]
    Lut(#[from] tweak_lut::LutError),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A frame does not match the layout the context was built for.
    #[error("frame mismatch: context expects {expected}, got {got}")]
    FrameMismatch {
        /// Layout bound at construction
        expected: String,
        /// Layout of the offending frame
        got: String,
    },

    /// RGB gain needs planar RGB input; conversion happens upstream.
    #[error("RGB gain requires planar 8-bit RGB input, got {format}; convert the clip first")]
    RequiresRgb {
        /// Format that was supplied
        format: String,
    },
}

/// Result type for plane and frame operations.
pub type OpsResult<T> = Result<T, OpsError>;
