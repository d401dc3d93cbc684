//! Raw planar files.
//!
//! A raw file is a plain concatenation of packed frames. Each frame stores
//! its planes back to back, rows without padding:
//!
//! ```text
//! | Y (w × h) | U (cw × ch) | V (cw × ch) | Y | U | V | ...
//! ```
//!
//! Frames are loaded into [`FrameBuffer`]s whose rows are padded to an
//! alignment, the way a frame server hands them to filters. Files are
//! streamed: [`FrameReader`] hands out a few frames at a time and
//! [`FrameWriter`] appends them, so a clip never has to fit in memory.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;
use tweak_core::{Frame, FrameInfo, FrameMut, Plane, PlaneMut};

/// Rounds `width` up to a multiple of `align`.
pub fn aligned_stride(width: usize, align: usize) -> usize {
    width.div_ceil(align).max(1) * align
}

/// Size in bytes of one packed frame.
pub fn packed_frame_len(info: FrameInfo) -> usize {
    info.sample_count()
}

#[derive(Debug, Clone)]
struct PlaneBuf {
    data: Vec<u8>,
    width: usize,
    height: usize,
    stride: usize,
}

impl PlaneBuf {
    fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data
            .chunks(self.stride)
            .take(self.height)
            .map(|row| &row[..self.width])
    }

    fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let width = self.width;
        self.data
            .chunks_mut(self.stride)
            .take(self.height)
            .map(move |row| &mut row[..width])
    }
}

/// One frame held in owned, stride-aligned planes.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    info: FrameInfo,
    planes: Vec<PlaneBuf>,
}

impl FrameBuffer {
    /// Allocates a zeroed frame with rows padded to `align` bytes.
    pub fn new(info: FrameInfo, align: usize) -> Result<Self> {
        if align == 0 {
            bail!("Row alignment must be at least 1");
        }
        let planes = (0..info.format.plane_count())
            .map(|index| {
                let (width, height) = info.plane_dimensions(index);
                let stride = aligned_stride(width, align);
                PlaneBuf {
                    data: vec![0; stride * height],
                    width,
                    height,
                    stride,
                }
            })
            .collect();
        Ok(Self { info, planes })
    }

    /// Allocates a frame and fills it from one packed frame.
    pub fn from_packed(info: FrameInfo, align: usize, packed: &[u8]) -> Result<Self> {
        let mut frame = Self::new(info, align)?;
        frame.load_packed(packed)?;
        Ok(frame)
    }

    /// Frame layout.
    pub fn info(&self) -> FrameInfo {
        self.info
    }

    /// Row stride of plane `index`.
    pub fn stride(&self, index: usize) -> usize {
        self.planes[index].stride
    }

    /// Copies one packed frame into the padded planes.
    pub fn load_packed(&mut self, packed: &[u8]) -> Result<()> {
        let expected = packed_frame_len(self.info);
        if packed.len() != expected {
            bail!(
                "Packed frame is {} bytes, {} needs {}",
                packed.len(),
                self.info,
                expected
            );
        }
        let mut offset = 0;
        for plane in &mut self.planes {
            let width = plane.width;
            for row in plane.rows_mut() {
                row.copy_from_slice(&packed[offset..offset + width]);
                offset += width;
            }
        }
        Ok(())
    }

    /// Writes the frame to `out` without row padding.
    pub fn write_packed<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for plane in &self.planes {
            for row in plane.rows() {
                out.write_all(row)?;
            }
        }
        Ok(())
    }

    /// Borrowed read-only frame.
    pub fn frame(&self) -> Result<Frame<'_>> {
        let planes = self
            .planes
            .iter()
            .map(|p| Plane::new(&p.data, p.width, p.height, p.stride))
            .collect::<tweak_core::Result<Vec<_>>>()?;
        Ok(Frame::new(self.info, planes)?)
    }

    /// Borrowed writable frame.
    pub fn frame_mut(&mut self) -> Result<FrameMut<'_>> {
        let planes = self
            .planes
            .iter_mut()
            .map(|p| PlaneMut::new(&mut p.data, p.width, p.height, p.stride))
            .collect::<tweak_core::Result<Vec<_>>>()?;
        Ok(FrameMut::new(self.info, planes)?)
    }
}

/// Sequential reader over the packed frames of a raw file.
pub struct FrameReader {
    reader: BufReader<File>,
    path: PathBuf,
    info: FrameInfo,
    align: usize,
    packed: Vec<u8>,
    remaining: u64,
}

impl FrameReader {
    /// Opens `path` and checks that it holds a whole number of frames.
    pub fn open(path: &Path, info: FrameInfo, align: usize) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();
        let frame_len = packed_frame_len(info);
        if frame_len == 0 {
            bail!("{info} frames are empty");
        }
        if len == 0 || len % frame_len as u64 != 0 {
            bail!(
                "{}: {} bytes is not a whole number of {} frames ({} bytes each)",
                path.display(),
                len,
                info,
                frame_len
            );
        }
        let frames = len / frame_len as u64;
        debug!(path = %path.display(), frames, frame_len, "open raw");
        Ok(Self {
            reader: BufReader::new(file),
            path: path.to_path_buf(),
            info,
            align,
            packed: vec![0; frame_len],
            remaining: frames,
        })
    }

    /// Frames not read yet.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Reads up to `max` frames; an empty batch means the file is done.
    pub fn read_batch(&mut self, max: usize) -> Result<Vec<FrameBuffer>> {
        let count = self.remaining.min(max as u64) as usize;
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            self.reader
                .read_exact(&mut self.packed)
                .with_context(|| format!("Failed to read: {}", self.path.display()))?;
            batch.push(FrameBuffer::from_packed(self.info, self.align, &self.packed)?);
            self.remaining -= 1;
        }
        Ok(batch)
    }
}

/// Appends packed frames to a raw file.
pub struct FrameWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    frames: u64,
}

impl FrameWriter {
    /// Creates or truncates `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            frames: 0,
        })
    }

    /// Appends one frame.
    pub fn write(&mut self, frame: &FrameBuffer) -> Result<()> {
        frame
            .write_packed(&mut self.writer)
            .with_context(|| format!("Failed to write: {}", self.path.display()))?;
        self.frames += 1;
        Ok(())
    }

    /// Flushes buffered data and returns the number of frames written.
    pub fn finish(mut self) -> Result<u64> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to write: {}", self.path.display()))?;
        debug!(path = %self.path.display(), frames = self.frames, "write raw");
        Ok(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tweak_core::FrameFormat;

    #[test]
    fn test_aligned_stride() {
        assert_eq!(aligned_stride(1920, 32), 1920);
        assert_eq!(aligned_stride(1921, 32), 1952);
        assert_eq!(aligned_stride(3, 1), 3);
        assert_eq!(aligned_stride(0, 16), 16);
    }

    #[test]
    fn test_packed_round_trip_through_padded_planes() {
        let info = FrameInfo::new(FrameFormat::YUV420P8, 6, 4);
        let packed: Vec<u8> = (0..packed_frame_len(info)).map(|i| i as u8).collect();
        let frame = FrameBuffer::from_packed(info, 16, &packed).unwrap();
        assert_eq!(frame.stride(0), 16);
        assert_eq!(frame.stride(1), 16);
        assert_eq!(frame.frame().unwrap().plane(1).row(0), &[24, 25, 26]);

        let mut out = Vec::new();
        frame.write_packed(&mut out).unwrap();
        assert_eq!(out, packed);
    }

    #[test]
    fn test_wrong_packed_size() {
        let info = FrameInfo::new(FrameFormat::GRAY8, 4, 4);
        assert!(FrameBuffer::from_packed(info, 8, &[0; 15]).is_err());
        assert!(FrameBuffer::new(info, 0).is_err());
    }

    #[test]
    fn test_file_round_trip_in_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.yuv");
        let info = FrameInfo::new(FrameFormat::YUV444P8, 3, 2);
        let bytes: Vec<u8> = (0..packed_frame_len(info) * 5).map(|i| (i * 3) as u8).collect();
        fs::write(&path, &bytes).unwrap();

        let mut reader = FrameReader::open(&path, info, 8).unwrap();
        assert_eq!(reader.remaining(), 5);
        let out_path = dir.path().join("out.yuv");
        let mut writer = FrameWriter::create(&out_path).unwrap();

        let mut sizes = Vec::new();
        loop {
            let batch = reader.read_batch(2).unwrap();
            if batch.is_empty() {
                break;
            }
            sizes.push(batch.len());
            for frame in &batch {
                writer.write(frame).unwrap();
            }
        }
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(writer.finish().unwrap(), 5);
        assert_eq!(fs::read(&out_path).unwrap(), bytes);
    }

    #[test]
    fn test_truncated_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.yuv");
        let info = FrameInfo::new(FrameFormat::YUV420P8, 4, 4);
        fs::write(&path, vec![0u8; packed_frame_len(info) + 5]).unwrap();
        let err = FrameReader::open(&path, info, 32).err().unwrap();
        assert!(err.to_string().contains("whole number"));

        fs::write(&path, Vec::<u8>::new()).unwrap();
        assert!(FrameReader::open(&path, info, 32).is_err());
    }
}
