//! Frame contexts: parameters bound once, then applied to every frame.
//!
//! A context resolves its parameters into tables and coefficients at
//! construction and is read-only afterwards, so one instance can serve any
//! number of threads processing different frames.
//!
//! ```text
//!             Tweak                          RGB
//!  plane 0    luma curve (or copy)           red gain
//!  plane 1 ┐  chroma rotation (or copy)      green gain
//!  plane 2 ┘                                 blue gain
//! ```
//!
//! Every frame is checked against the bound [`FrameInfo`] before anything
//! is written, so a rejected frame leaves the destination untouched.

use tracing::{debug, trace};
use tweak_core::{ColorFamily, Frame, FrameInfo, FrameMut};
use tweak_lut::{ChannelGains, Lut8};

use crate::apply::{apply_lut_in_place, apply_plane, PlaneOp};
use crate::chroma::{rotate_chroma, rotate_chroma_in_place, ChromaRotation};
use crate::params::{LumaMode, RgbParams, TweakParams};
use crate::{OpsError, OpsResult};

/// A frame filter bound to one frame layout.
pub trait FrameFilter: Send + Sync {
    /// Filter name for logs.
    fn name(&self) -> &'static str;

    /// The layout every processed frame must have.
    fn info(&self) -> FrameInfo;

    /// Filters `src` into `dst`.
    fn process(&self, src: &Frame<'_>, dst: &mut FrameMut<'_>) -> OpsResult<()>;

    /// Filters a frame in place.
    fn process_in_place(&self, frame: &mut FrameMut<'_>) -> OpsResult<()>;

    /// Fails unless `info` matches the bound layout.
    fn check_frame(&self, info: FrameInfo) -> OpsResult<()> {
        let expected = self.info();
        if info != expected {
            return Err(OpsError::FrameMismatch {
                expected: expected.to_string(),
                got: info.to_string(),
            });
        }
        Ok(())
    }
}

fn plane_op(lut: Option<&Lut8>) -> PlaneOp<'_> {
    lut.map_or(PlaneOp::Copy, PlaneOp::Lut)
}

/// Luma curve plus hue/saturation on gray or YUV (or planar RGB treated
/// as if it were YUV).
#[derive(Debug, Clone)]
pub struct TweakContext {
    info: FrameInfo,
    luma: LumaMode,
    rotation: ChromaRotation,
}

impl TweakContext {
    /// Validates `params` and builds the luma table.
    pub fn new(info: FrameInfo, params: &TweakParams) -> OpsResult<Self> {
        info.validate()?;
        params.validate()?;
        let luma = params.luma_mode()?;
        let rotation = params.rotation();
        debug!(
            %info,
            luma = ?params.luma,
            m1 = rotation.m1,
            m2 = rotation.m2,
            chroma_identity = rotation.is_identity(),
            "tweak context"
        );
        if info.format.family == ColorFamily::Gray && !rotation.is_identity() {
            debug!("gray input, hue and sat have no effect");
        }
        Ok(Self {
            info,
            luma,
            rotation,
        })
    }

    /// Resolved luma treatment.
    pub fn luma(&self) -> &LumaMode {
        &self.luma
    }

    /// Chroma coefficients.
    pub fn rotation(&self) -> ChromaRotation {
        self.rotation
    }

    fn has_chroma(&self) -> bool {
        self.info.format.plane_count() == 3
    }
}

impl FrameFilter for TweakContext {
    fn name(&self) -> &'static str {
        "Tweak"
    }

    fn info(&self) -> FrameInfo {
        self.info
    }

    fn process(&self, src: &Frame<'_>, dst: &mut FrameMut<'_>) -> OpsResult<()> {
        self.check_frame(src.info())?;
        self.check_frame(dst.info())?;
        trace!(filter = self.name(), "process frame");

        apply_plane(&src.plane(0), dst.plane_mut(0), plane_op(self.luma.lut()))?;
        if self.has_chroma() {
            if let [_, a, b] = dst.planes_mut() {
                rotate_chroma(&src.plane(1), &src.plane(2), a, b, &self.rotation)?;
            }
        }
        Ok(())
    }

    fn process_in_place(&self, frame: &mut FrameMut<'_>) -> OpsResult<()> {
        self.check_frame(frame.info())?;
        trace!(filter = self.name(), "process frame in place");

        if let Some(lut) = self.luma.lut() {
            apply_lut_in_place(frame.plane_mut(0), lut);
        }
        if self.has_chroma() {
            if let [_, a, b] = frame.planes_mut() {
                rotate_chroma_in_place(a, b, &self.rotation)?;
            }
        }
        Ok(())
    }
}

/// Independent gains on the three planes of planar RGB.
#[derive(Debug, Clone)]
pub struct RgbContext {
    info: FrameInfo,
    gains: ChannelGains,
    luts: [Lut8; 3],
}

impl RgbContext {
    /// Validates the gains and builds one table per channel.
    ///
    /// Only planar RGB is accepted; anything else must be converted first.
    pub fn new(info: FrameInfo, params: &RgbParams) -> OpsResult<Self> {
        if info.format.family != ColorFamily::Rgb {
            return Err(OpsError::RequiresRgb {
                format: info.format.name(),
            });
        }
        info.validate()?;
        let gains = params.gains()?;
        debug!(%info, red = gains.red, green = gains.green, blue = gains.blue, "rgb context");
        Ok(Self {
            info,
            gains,
            luts: gains.build(),
        })
    }

    /// The bound gains.
    pub fn gains(&self) -> ChannelGains {
        self.gains
    }

    /// Per-channel tables, or `None` where the channel is left alone.
    fn channel_luts(&self) -> impl Iterator<Item = Option<&Lut8>> {
        self.luts.iter().map(|lut| (!lut.is_identity()).then_some(lut))
    }
}

impl FrameFilter for RgbContext {
    fn name(&self) -> &'static str {
        "RGB"
    }

    fn info(&self) -> FrameInfo {
        self.info
    }

    fn process(&self, src: &Frame<'_>, dst: &mut FrameMut<'_>) -> OpsResult<()> {
        self.check_frame(src.info())?;
        self.check_frame(dst.info())?;
        trace!(filter = self.name(), "process frame");

        for (index, lut) in self.channel_luts().enumerate() {
            apply_plane(&src.plane(index), dst.plane_mut(index), plane_op(lut))?;
        }
        Ok(())
    }

    fn process_in_place(&self, frame: &mut FrameMut<'_>) -> OpsResult<()> {
        self.check_frame(frame.info())?;
        trace!(filter = self.name(), "process frame in place");

        for (index, lut) in self.channel_luts().enumerate() {
            if let Some(lut) = lut {
                apply_lut_in_place(frame.plane_mut(index), lut);
            }
        }
        Ok(())
    }
}
