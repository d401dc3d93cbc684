//! Frames: a format plus one strided view per plane.
//!
//! [`FrameInfo`] is the static description a filter binds to (format and
//! frame size). [`Frame`] and [`FrameMut`] pair that description with
//! borrowed plane views and check that every plane has the size the format
//! prescribes. Strides are per plane and free to differ.

use std::fmt;

use crate::{ColorFamily, Error, FrameFormat, Plane, PlaneMut, Result};

/// Format and size of every frame in a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Plane layout.
    pub format: FrameFormat,
    /// Luma (plane 0) width.
    pub width: usize,
    /// Luma (plane 0) height.
    pub height: usize,
}

impl FrameInfo {
    /// Creates frame info.
    pub const fn new(format: FrameFormat, width: usize, height: usize) -> Self {
        Self {
            format,
            width,
            height,
        }
    }

    /// Checks that the frame is non-empty, that the subsampling shifts are
    /// at most [`FrameFormat::MAX_SUBSAMPLING`] (and zero outside YUV), and
    /// that the size divides evenly by the chroma subsampling.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions(format!(
                "{}x{} frame is empty",
                self.width, self.height
            )));
        }
        let (ss_w, ss_h) = (self.format.ss_w, self.format.ss_h);
        if ss_w > FrameFormat::MAX_SUBSAMPLING || ss_h > FrameFormat::MAX_SUBSAMPLING {
            return Err(Error::InvalidDimensions(format!(
                "subsampling shift {ss_w}x{ss_h} exceeds {}",
                FrameFormat::MAX_SUBSAMPLING
            )));
        }
        if self.format.family != ColorFamily::Yuv && self.format.is_subsampled() {
            return Err(Error::InvalidDimensions(format!(
                "{} planes cannot be subsampled",
                self.format.family
            )));
        }
        let (mod_w, mod_h) = (1usize << ss_w, 1usize << ss_h);
        if self.width % mod_w != 0 || self.height % mod_h != 0 {
            return Err(Error::InvalidDimensions(format!(
                "{} needs width mod {mod_w} and height mod {mod_h}, got {}x{}",
                self.format.name(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Dimensions of plane `index`.
    pub fn plane_dimensions(&self, index: usize) -> (usize, usize) {
        self.format.plane_dimensions(index, self.width, self.height)
    }

    /// Total logical samples across all planes.
    pub fn sample_count(&self) -> usize {
        (0..self.format.plane_count())
            .map(|i| {
                let (w, h) = self.plane_dimensions(i);
                w * h
            })
            .sum()
    }

    /// Checks a list of plane dimensions against this layout.
    pub fn check_planes<I>(&self, dims: I) -> Result<()>
    where
        I: ExactSizeIterator<Item = (usize, usize)>,
    {
        let expected = self.format.plane_count();
        if dims.len() != expected {
            return Err(Error::PlaneCount {
                format: self.format.name(),
                expected,
                got: dims.len(),
            });
        }
        for (index, (width, height)) in dims.enumerate() {
            let (ew, eh) = self.plane_dimensions(index);
            if (width, height) != (ew, eh) {
                return Err(Error::DimensionMismatch {
                    what: format!("plane {index}"),
                    expected_width: ew,
                    expected_height: eh,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for FrameInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.format, self.width, self.height)
    }
}

/// Read-only frame.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    info: FrameInfo,
    planes: Vec<Plane<'a>>,
}

impl<'a> Frame<'a> {
    /// Creates a frame, checking plane count and sizes against `info`.
    pub fn new(info: FrameInfo, planes: Vec<Plane<'a>>) -> Result<Self> {
        info.check_planes(planes.iter().map(Plane::dimensions))?;
        Ok(Self { info, planes })
    }

    /// Format and size.
    #[inline]
    pub fn info(&self) -> FrameInfo {
        self.info
    }

    /// Plane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the format.
    #[inline]
    pub fn plane(&self, index: usize) -> Plane<'a> {
        self.planes[index]
    }
}

/// Writable frame.
#[derive(Debug)]
pub struct FrameMut<'a> {
    info: FrameInfo,
    planes: Vec<PlaneMut<'a>>,
}

impl<'a> FrameMut<'a> {
    /// Creates a frame, checking plane count and sizes against `info`.
    pub fn new(info: FrameInfo, planes: Vec<PlaneMut<'a>>) -> Result<Self> {
        info.check_planes(planes.iter().map(PlaneMut::dimensions))?;
        Ok(Self { info, planes })
    }

    /// Format and size.
    #[inline]
    pub fn info(&self) -> FrameInfo {
        self.info
    }

    /// Plane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the format.
    #[inline]
    pub fn plane_mut(&mut self, index: usize) -> &mut PlaneMut<'a> {
        &mut self.planes[index]
    }

    /// All planes in order, for disjoint mutable access.
    #[inline]
    pub fn planes_mut(&mut self) -> &mut [PlaneMut<'a>] {
        &mut self.planes
    }

    /// Read-only view of plane `index`.
    pub fn plane(&self, index: usize) -> Plane<'_> {
        self.planes[index].as_plane()
    }
}
