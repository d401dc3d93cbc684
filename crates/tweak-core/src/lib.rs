//! # tweak-core
//!
//! Core types for 8-bit planar frame processing.
//!
//! This crate describes *where* samples live; it never computes on them and
//! never allocates frame memory:
//!
//! - [`Plane`], [`PlaneMut`] - Borrowed strided views over one plane
//! - [`FrameFormat`], [`ColorFamily`] - Plane layout and chroma subsampling
//! - [`FrameInfo`], [`Frame`], [`FrameMut`] - Per-frame plane sets
//! - [`Error`] - Geometry errors
//!
//! ## Crate Structure
//!
//! ```text
//! tweak-core (this crate)    tweak-lut (256-entry tables)
//!         \                    /
//!          +--- tweak-ops ----+      plane applicator, chroma rotator, contexts
//!                   |
//!               tweak-cli            raw file host
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod frame;
pub mod plane;

pub use error::{Error, Result};
pub use format::{ColorFamily, FrameFormat};
pub use frame::{Frame, FrameInfo, FrameMut};
pub use plane::{required_len, Plane, PlaneMut};
