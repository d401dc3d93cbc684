//! Prints a built table for inspection.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use clap::Args;
use tracing::debug;
use tweak_lut::{build_curve, build_gain, check_gain, ControlPoints, Lut8};

/// Arguments for the `curve` command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Luma curve control points in percent, e.g. 0,15,-10
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, conflicts_with = "gain")]
    pub luma: Option<Vec<f64>>,

    /// Straight channel multiplier
    #[arg(long)]
    pub gain: Option<f64>,
}

/// Builds the table the arguments describe.
pub fn build(args: &CurveArgs) -> Result<Lut8> {
    match (&args.luma, args.gain) {
        (Some(points), _) => Ok(build_curve(&ControlPoints::try_from(points.as_slice())?)),
        (None, Some(gain)) => {
            check_gain("gain", gain)?;
            Ok(build_gain(gain))
        }
        (None, None) => bail!("Give either --luma or --gain"),
    }
}

/// Renders 16 entries per row, each row prefixed with its first index.
pub fn render(lut: &Lut8) -> String {
    let mut out = String::new();
    for (row, chunk) in lut.as_array().chunks(16).enumerate() {
        let _ = write!(out, "{:3}:", row * 16);
        for value in chunk {
            let _ = write!(out, " {value:3}");
        }
        out.push('\n');
    }
    out
}

/// Run the curve command.
pub fn run(args: CurveArgs, verbose: u8) -> Result<()> {
    let lut = build(&args)?;
    debug!(identity = lut.is_identity(), "built table");
    if verbose > 0 && lut.is_identity() {
        println!("(identity)");
    }
    print!("{}", render(&lut));
    Ok(())
}
