//! Hue, saturation and luma curve command.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use tweak_core::FrameFormat;
use tweak_ops::{TweakContext, TweakParams};

use super::{run_filter, ClipArgs};
use crate::config::load_params;

/// Arguments for the `tweak` command.
#[derive(Args, Debug)]
pub struct TweakArgs {
    #[command(flatten)]
    pub clip: ClipArgs,

    /// Frame format (gray8, yuv420p8, yuv422p8, yuv444p8, rgbp8, ...)
    #[arg(short, long, default_value = "yuv420p8")]
    pub format: FrameFormat,

    /// Hue rotation in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub hue: Option<f64>,

    /// Saturation factor (0 = grey, 1 = unchanged)
    #[arg(long)]
    pub sat: Option<f64>,

    /// Luma curve control points in percent, e.g. 0,15,-10
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub luma: Option<Vec<f64>>,
}

impl TweakArgs {
    /// Config file values with explicit flags applied on top.
    pub fn params(&self) -> Result<TweakParams> {
        let mut params: TweakParams = load_params(self.clip.config.as_deref())?;
        if let Some(hue) = self.hue {
            params.hue = hue;
        }
        if let Some(sat) = self.sat {
            params.sat = sat;
        }
        if let Some(luma) = &self.luma {
            params.luma = Some(luma.clone());
        }
        Ok(params)
    }
}

/// Run the tweak command.
pub fn run(args: TweakArgs, verbose: u8) -> Result<()> {
    let params = args.params()?;
    let info = args.clip.info(args.format);
    let ctx = TweakContext::new(info, &params).context("Invalid tweak parameters")?;

    if verbose > 0 {
        info!(
            hue = params.hue,
            sat = params.sat,
            luma = ?params.luma,
            "tweak {}",
            args.clip.input.display()
        );
    }
    run_filter(&ctx, &args.clip)
}
