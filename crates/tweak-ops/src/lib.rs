//! # tweak-ops
//!
//! Color adjustments on strided 8-bit planar frames.
//!
//! # Filters
//!
//! - [`TweakContext`] - Luma curve plus hue rotation and saturation
//! - [`RgbContext`] - Independent gain per RGB plane
//!
//! Both implement [`FrameFilter`]: build once from parameters, then call
//! [`FrameFilter::process`] for each frame from as many threads as needed.
//!
//! # Building Blocks
//!
//! - [`apply`] - Copy or table lookup over one plane
//! - [`chroma`] - Rotation of a chroma plane pair
//! - [`params`] - Serializable parameter sets
//!
//! # Example
//!
//! ```rust
//! use tweak_core::{Frame, FrameFormat, FrameInfo, FrameMut, Plane, PlaneMut};
//! use tweak_ops::{FrameFilter, TweakContext, TweakParams};
//!
//! let info = FrameInfo::new(FrameFormat::YUV444P8, 1, 1);
//! let params = TweakParams { hue: 90.0, ..Default::default() };
//! let ctx = TweakContext::new(info, &params).unwrap();
//!
//! let (y, u, v) = ([16u8], [200u8], [128u8]);
//! let src = Frame::new(info, vec![
//!     Plane::packed(&y, 1, 1).unwrap(),
//!     Plane::packed(&u, 1, 1).unwrap(),
//!     Plane::packed(&v, 1, 1).unwrap(),
//! ]).unwrap();
//!
//! let (mut oy, mut ou, mut ov) = ([0u8], [0u8], [0u8]);
//! let mut dst = FrameMut::new(info, vec![
//!     PlaneMut::packed(&mut oy, 1, 1).unwrap(),
//!     PlaneMut::packed(&mut ou, 1, 1).unwrap(),
//!     PlaneMut::packed(&mut ov, 1, 1).unwrap(),
//! ]).unwrap();
//!
//! ctx.process(&src, &mut dst).unwrap();
//! drop(dst);
//! assert_eq!((oy[0], ou[0], ov[0]), (16, 128, 56));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Process rows with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod apply;
pub mod chroma;
pub mod context;
pub mod params;

pub use apply::{apply_lut, apply_plane, copy_plane, PlaneOp};
pub use chroma::{rotate_chroma, rotate_chroma_in_place, ChromaRotation};
pub use context::{FrameFilter, RgbContext, TweakContext};
pub use error::{OpsError, OpsResult};
pub use params::{LumaMode, RgbParams, TweakParams};
