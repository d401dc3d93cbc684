//! tweak - Hue, saturation, luma curve and RGB gain for raw planar video
//!
//! Reads concatenated 8-bit planar frames, applies one filter to every
//! frame in parallel and writes the result in the same layout.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod raw;

use commands::curve::CurveArgs;
use commands::rgb::RgbArgs;
use commands::tweak::TweakArgs;

#[derive(Parser)]
#[command(name = "tweak")]
#[command(author, version, about = "Color adjustments for raw planar 8-bit video")]
#[command(long_about = "
Applies hue rotation, saturation, a luma curve or per-channel RGB gain to
raw planar 8-bit clips (concatenated frames, no header).

Examples:
  tweak tweak in.yuv -o out.yuv -W 1920 -H 1080 --hue 15 --sat 1.2
  tweak tweak in.yuv -o out.yuv -W 1920 -H 1080 --luma 0,20,-10
  tweak tweak in.yuv -o out.yuv -W 1280 -H 720 -f yuv444p -c look.yaml
  tweak rgb in.rgb -o out.rgb -W 640 -H 480 --red 1.1 --blue 0.9
  tweak curve --luma 0,15,-10          # Print the luma table
  tweak formats                        # List frame formats
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Luma curve, hue rotation and saturation on gray or YUV clips
    #[command(visible_alias = "t")]
    Tweak(TweakArgs),

    /// Independent gain per channel on planar RGB clips
    Rgb(RgbArgs),

    /// Print a luma curve or gain table
    Curve(CurveArgs),

    /// List supported frame formats
    Formats,
}

/// Installs the log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Tweak(args) => commands::tweak::run(args, cli.verbose),
        Commands::Rgb(args) => commands::rgb::run(args, cli.verbose),
        Commands::Curve(args) => commands::curve::run(args, cli.verbose),
        Commands::Formats => commands::formats::run(cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tweak_flags() {
        let cli = Cli::parse_from([
            "tweak", "-vv", "tweak", "in.yuv", "-o", "out.yuv", "-W", "8", "-H", "4", "--hue",
            "-30", "--luma", "0,-10,25", "-f", "yuv422p",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Tweak(args) = cli.command else {
            panic!("expected tweak");
        };
        assert_eq!(args.hue, Some(-30.0));
        assert_eq!(args.luma, Some(vec![0.0, -10.0, 25.0]));
        assert_eq!(args.format, tweak_core::FrameFormat::YUV422P8);
        assert_eq!(args.clip.align, 32);
    }

    #[test]
    fn test_curve_flags_conflict() {
        let parsed = Cli::try_parse_from(["tweak", "curve", "--luma", "10", "--gain", "2"]);
        assert!(parsed.is_err());
    }
}
