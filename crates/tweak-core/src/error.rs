//! Error types for tweak-core operations.
//!
//! Every failure here is a geometry problem: a plane view that does not
//! fit its buffer, or a frame whose planes do not match its format.
//! Sample arithmetic never fails, so there is no numeric error variant.
//!
//! # Usage
//!
//! ```rust
//! use tweak_core::{Error, Plane};
//!
//! let data = vec![0u8; 10];
//! let err = Plane::new(&data, 8, 2, 4).unwrap_err();
//! assert!(matches!(err, Error::StrideTooSmall { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing planes and frames.
///
/// # Categories
///
/// - **Layout errors**: [`StrideTooSmall`](Error::StrideTooSmall),
///   [`InsufficientData`](Error::InsufficientData)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`DimensionMismatch`](Error::DimensionMismatch)
/// - **Format errors**: [`PlaneCount`](Error::PlaneCount),
///   [`UnknownFormat`](Error::UnknownFormat)
#[derive(Debug, Error)]
pub enum Error {
    /// Row stride is smaller than the logical row width.
    #[error("stride {stride} is smaller than width {width}")]
    StrideTooSmall {
        /// Requested stride
        stride: usize,
        /// Logical row width
        width: usize,
    },

    /// Buffer is too short for the requested geometry.
    ///
    /// A plane of `height` rows needs `stride * (height - 1) + width`
    /// samples; the last row does not have to carry padding.
    #[error("plane needs {required} samples, buffer has {got}")]
    InsufficientData {
        /// Samples required by the geometry
        required: usize,
        /// Samples actually available
        got: usize,
    },

    /// Dimensions are zero or overflow.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Two planes (or a plane and its expected geometry) differ in size.
    #[error("dimension mismatch on {what}: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        /// Which plane or frame was checked
        what: String,
        /// Expected width
        expected_width: usize,
        /// Expected height
        expected_height: usize,
        /// Actual width
        width: usize,
        /// Actual height
        height: usize,
    },

    /// Frame carries the wrong number of planes for its format.
    #[error("format {format} has {expected} planes, got {got}")]
    PlaneCount {
        /// Format name
        format: String,
        /// Planes the format defines
        expected: usize,
        /// Planes supplied
        got: usize,
    },

    /// Format name could not be parsed.
    #[error("unknown frame format: {0}")]
    UnknownFormat(String),
}
