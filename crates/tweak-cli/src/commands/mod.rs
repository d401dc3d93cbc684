//! CLI command implementations

pub mod curve;
pub mod formats;
pub mod rgb;
pub mod tweak;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use tracing::info;
use tweak_core::{FrameFormat, FrameInfo};
use tweak_ops::FrameFilter;

use crate::raw::{FrameBuffer, FrameReader, FrameWriter};

/// Input, output and frame layout shared by the filter commands.
#[derive(Args, Debug, Clone)]
pub struct ClipArgs {
    /// Input raw planar file
    pub input: PathBuf,

    /// Output raw planar file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Frame width in pixels
    #[arg(short = 'W', long)]
    pub width: usize,

    /// Frame height in pixels
    #[arg(short = 'H', long)]
    pub height: usize,

    /// Row alignment of the working buffers in bytes
    #[arg(long, default_value = "32")]
    pub align: usize,

    /// YAML parameter file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ClipArgs {
    /// Frame layout for `format`.
    pub fn info(&self, format: FrameFormat) -> FrameInfo {
        FrameInfo::new(format, self.width, self.height)
    }
}

/// Runs `filter` over every frame of the input clip and writes the result.
///
/// Frames are read one batch per worker thread at a time.
pub fn run_filter(filter: &dyn FrameFilter, args: &ClipArgs) -> Result<()> {
    process_clip(filter, args, rayon::current_num_threads().max(1))
}

fn process_clip(filter: &dyn FrameFilter, args: &ClipArgs, batch_frames: usize) -> Result<()> {
    let info = filter.info();
    let start = Instant::now();
    let mut reader = FrameReader::open(&args.input, info, args.align)?;
    let mut writer = FrameWriter::create(&args.output)?;
    info!(
        filter = filter.name(),
        frames = reader.remaining(),
        batch = batch_frames,
        %info,
        "processing {}",
        args.input.display()
    );

    let mut first = 0;
    loop {
        let sources = reader.read_batch(batch_frames)?;
        if sources.is_empty() {
            break;
        }
        let outputs = sources
            .par_iter()
            .enumerate()
            .map(|(i, src)| {
                let mut dst = FrameBuffer::new(info, args.align)?;
                filter
                    .process(&src.frame()?, &mut dst.frame_mut()?)
                    .with_context(|| format!("Frame {} failed", first + i))?;
                Ok(dst)
            })
            .collect::<Result<Vec<_>>>()?;
        for frame in &outputs {
            writer.write(frame)?;
        }
        first += sources.len();
    }

    let frames = writer.finish()?;
    info!(
        frames,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "wrote {}",
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tweak_ops::{TweakContext, TweakParams};

    #[test]
    fn test_clip_spanning_several_batches() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.y");
        let output = dir.path().join("out.y");
        let info = FrameInfo::new(FrameFormat::GRAY8, 5, 3);
        let bytes: Vec<u8> = (0..info.sample_count() * 7).map(|i| (i * 11) as u8).collect();
        fs::write(&input, &bytes).unwrap();

        let args = ClipArgs {
            input,
            output: output.clone(),
            width: 5,
            height: 3,
            align: 16,
            config: None,
        };
        let params = TweakParams {
            luma: Some(vec![0.0, 40.0, -20.0]),
            ..Default::default()
        };
        let ctx = TweakContext::new(args.info(FrameFormat::GRAY8), &params).unwrap();
        process_clip(&ctx, &args, 3).unwrap();

        let lut = ctx.luma().lut().unwrap();
        let expected: Vec<u8> = bytes.iter().map(|&v| lut.get(v)).collect();
        assert_eq!(fs::read(&output).unwrap(), expected);
    }

    #[test]
    fn test_wrong_frame_size_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.y");
        fs::write(&input, vec![0u8; 17]).unwrap();
        let args = ClipArgs {
            input,
            output: dir.path().join("out.y"),
            width: 4,
            height: 4,
            align: 32,
            config: None,
        };
        let ctx = TweakContext::new(args.info(FrameFormat::GRAY8), &TweakParams::default()).unwrap();
        assert!(run_filter(&ctx, &args).is_err());
        assert!(!args.output.exists());
    }
}
