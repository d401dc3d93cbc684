//! # tweak-lut
//!
//! 256-entry lookup tables for 8-bit samples and the builders that fill them.
//!
//! # Builders
//!
//! - [`build_curve`] - Luma curve from percent-gain [`ControlPoints`]
//! - [`build_gain`] - Straight multiplier, one per channel via [`ChannelGains`]
//!
//! Both round with `+ 0.5` and saturate into [0, 255] through
//! [`round_saturate`]. Builders are pure: equal inputs give equal tables.
//!
//! # Usage
//!
//! ```rust
//! use tweak_lut::{build_curve, build_gain, ControlPoints};
//!
//! let luma = build_curve(&ControlPoints::new(vec![0.0, 15.0, -10.0]).unwrap());
//! let red = build_gain(1.2);
//! let out = red.get(luma.get(100));
//! ```
//!
//! # Used By
//!
//! - `tweak-ops` - Plane application and frame contexts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod error;
mod gain;
mod lut;

pub use curve::{build_curve, percent_gain, ControlPoints, Segment, MAX_CONTROL_POINTS};
pub use error::{LutError, LutResult};
pub use gain::{build_gain, check_gain, ChannelGains};
pub use lut::{round_saturate, Lut8, LUT_SIZE};
