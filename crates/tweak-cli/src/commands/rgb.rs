//! Per-channel RGB gain command.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use tweak_core::FrameFormat;
use tweak_ops::{RgbContext, RgbParams};

use super::{run_filter, ClipArgs};
use crate::config::load_params;

/// Arguments for the `rgb` command.
#[derive(Args, Debug)]
pub struct RgbArgs {
    #[command(flatten)]
    pub clip: ClipArgs,

    /// Frame format; must be planar RGB
    #[arg(short, long, default_value = "rgbp8")]
    pub format: FrameFormat,

    /// Red multiplier
    #[arg(long)]
    pub red: Option<f64>,

    /// Green multiplier
    #[arg(long)]
    pub green: Option<f64>,

    /// Blue multiplier
    #[arg(long)]
    pub blue: Option<f64>,
}

impl RgbArgs {
    /// Config file values with explicit flags applied on top.
    pub fn params(&self) -> Result<RgbParams> {
        let mut params: RgbParams = load_params(self.clip.config.as_deref())?;
        if let Some(red) = self.red {
            params.red = red;
        }
        if let Some(green) = self.green {
            params.green = green;
        }
        if let Some(blue) = self.blue {
            params.blue = blue;
        }
        Ok(params)
    }
}

/// Run the rgb command.
pub fn run(args: RgbArgs, verbose: u8) -> Result<()> {
    let params = args.params()?;
    let info = args.clip.info(args.format);
    let ctx = RgbContext::new(info, &params).context("Cannot apply RGB gain")?;

    if verbose > 0 {
        info!(
            red = params.red,
            green = params.green,
            blue = params.blue,
            "rgb {}",
            args.clip.input.display()
        );
    }
    run_filter(&ctx, &args.clip)
}
