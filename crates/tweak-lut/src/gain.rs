//! Per-channel multiplicative gain tables.

use crate::{round_saturate, LutError, LutResult, Lut8};

/// Builds a table that scales every sample by `multiplier`.
///
/// ```text
/// lut[i] = sat(i × multiplier + 0.5)
/// ```
///
/// # Example
///
/// ```rust
/// use tweak_lut::build_gain;
///
/// assert_eq!(build_gain(0.5).get(255), 128);
/// assert!(build_gain(1.0).is_identity());
/// ```
pub fn build_gain(multiplier: f64) -> Lut8 {
    Lut8::from_fn(|i| round_saturate(f64::from(i) * multiplier))
}

/// Checks that a channel multiplier is finite and non-negative.
pub fn check_gain(what: &str, value: f64) -> LutResult<()> {
    if !value.is_finite() {
        return Err(LutError::NonFinite {
            what: what.to_string(),
            value,
        });
    }
    if value < 0.0 {
        return Err(LutError::NegativeGain {
            what: what.to_string(),
            value,
        });
    }
    Ok(())
}

/// Red, green and blue multipliers. Each defaults to 1.0 (identity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGains {
    /// Red multiplier
    pub red: f64,
    /// Green multiplier
    pub green: f64,
    /// Blue multiplier
    pub blue: f64,
}

impl Default for ChannelGains {
    fn default() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

impl ChannelGains {
    /// Validates and creates a gain triple.
    pub fn new(red: f64, green: f64, blue: f64) -> LutResult<Self> {
        let gains = Self { red, green, blue };
        gains.validate()?;
        Ok(gains)
    }

    /// Checks every multiplier with [`check_gain`].
    pub fn validate(&self) -> LutResult<()> {
        check_gain("red", self.red)?;
        check_gain("green", self.green)?;
        check_gain("blue", self.blue)
    }

    /// Multipliers in plane order (R, G, B).
    pub fn as_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// One table per channel, in plane order.
    pub fn build(&self) -> [Lut8; 3] {
        self.as_array().map(build_gain)
    }
}
