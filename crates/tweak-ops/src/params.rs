//! Filter parameters as supplied by callers or config files.
//!
//! Both parameter sets deserialize with every key optional, so a YAML
//! document only needs to name what it changes:
//!
//! ```yaml
//! hue: 25.0
//! luma: [0.0, 15.0, -5.0]
//! ```

use serde::{Deserialize, Serialize};
use tweak_lut::{build_curve, ChannelGains, ControlPoints, Lut8};

use crate::{ChromaRotation, OpsError, OpsResult};

/// How the luma plane is treated.
#[derive(Debug, Clone, PartialEq)]
pub enum LumaMode {
    /// Copied unchanged.
    Identity,
    /// Remapped through a built curve.
    Curve(Lut8),
}

impl LumaMode {
    /// The table to apply, if any.
    pub fn lut(&self) -> Option<&Lut8> {
        match self {
            Self::Identity => None,
            Self::Curve(lut) => Some(lut),
        }
    }
}

/// Hue, saturation and luma curve settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweakParams {
    /// Hue rotation in degrees
    pub hue: f64,
    /// Chroma saturation factor (1.0 keeps it)
    pub sat: f64,
    /// Luma curve control points in percent; absent means untouched luma
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luma: Option<Vec<f64>>,
}

impl Default for TweakParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            sat: 1.0,
            luma: None,
        }
    }
}

impl TweakParams {
    /// Checks hue and saturation.
    ///
    /// Control points are checked when the luma mode is resolved.
    pub fn validate(&self) -> OpsResult<()> {
        if !self.hue.is_finite() {
            return Err(OpsError::InvalidParameter(format!(
                "hue must be finite, got {}",
                self.hue
            )));
        }
        if !self.sat.is_finite() || self.sat < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "sat must be finite and non-negative, got {}",
                self.sat
            )));
        }
        Ok(())
    }

    /// Rotation coefficients for the chroma planes.
    pub fn rotation(&self) -> ChromaRotation {
        ChromaRotation::from_hue_sat(self.hue, self.sat)
    }

    /// Builds the luma table, or [`LumaMode::Identity`] without points.
    pub fn luma_mode(&self) -> OpsResult<LumaMode> {
        match &self.luma {
            None => Ok(LumaMode::Identity),
            Some(points) => {
                let points = ControlPoints::try_from(points.as_slice())?;
                Ok(LumaMode::Curve(build_curve(&points)))
            }
        }
    }
}

/// Per-channel gains for planar RGB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RgbParams {
    /// Red multiplier
    pub red: f64,
    /// Green multiplier
    pub green: f64,
    /// Blue multiplier
    pub blue: f64,
}

impl Default for RgbParams {
    fn default() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

impl RgbParams {
    /// Validated gains; fails on negative or non-finite multipliers.
    pub fn gains(&self) -> OpsResult<ChannelGains> {
        Ok(ChannelGains::new(self.red, self.green, self.blue)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweak_lut::LutError;

    #[test]
    fn test_defaults() {
        let p = TweakParams::default();
        assert_eq!(p.hue, 0.0);
        assert_eq!(p.sat, 1.0);
        assert!(p.rotation().is_identity());
        assert_eq!(p.luma_mode().unwrap(), LumaMode::Identity);

        let g = RgbParams::default().gains().unwrap();
        assert_eq!(g, ChannelGains::default());
    }

    #[test]
    fn test_luma_mode_builds_curve() {
        let p = TweakParams {
            luma: Some(vec![50.0]),
            ..Default::default()
        };
        let mode = p.luma_mode().unwrap();
        let lut = mode.lut().unwrap();
        assert_eq!(lut.get(100), 150);
    }

    #[test]
    fn test_empty_luma_is_an_error() {
        let p = TweakParams {
            luma: Some(Vec::new()),
            ..Default::default()
        };
        assert!(matches!(
            p.luma_mode(),
            Err(OpsError::Lut(LutError::EmptyControlPoints))
        ));
    }

    #[test]
    fn test_validation() {
        let bad_sat = TweakParams {
            sat: -1.0,
            ..Default::default()
        };
        assert!(matches!(bad_sat.validate(), Err(OpsError::InvalidParameter(_))));

        let bad_hue = TweakParams {
            hue: f64::NAN,
            ..Default::default()
        };
        assert!(bad_hue.validate().is_err());

        let bad_gain = RgbParams {
            blue: -2.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_gain.gains(),
            Err(OpsError::Lut(LutError::NegativeGain { .. }))
        ));
    }
}
