//! Strided plane views.
//!
//! A plane is one component of a frame (luma, one chroma channel, or one
//! RGB channel) stored as rows of 8-bit samples. Rows start `stride`
//! samples apart; the `stride - width` samples at the end of each row are
//! padding and are never read or written by the views' row accessors.
//!
//! ```text
//!   |<------------- stride ------------->|
//!   |<------- width ------->|            |
//!   +-----------------------+------------+
//!   | row 0                 |  padding   |
//!   | row 1                 |  padding   |
//!   | ...                   |            |
//!   | row h-1               |  (optional)|
//!   +-----------------------+
//! ```
//!
//! Views never allocate. [`Plane`] borrows a read-only buffer, [`PlaneMut`]
//! borrows an exclusive one; the buffer's owner (a frame server, a decoder,
//! the CLI) decides how the memory is laid out.

use crate::{Error, Result};

/// Number of samples a plane of this geometry needs in its buffer.
///
/// The last row does not have to be padded out to a full stride.
pub fn required_len(width: usize, height: usize, stride: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Ok(0);
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or_else(|| Error::InvalidDimensions(format!("{width}x{height} stride {stride} overflows")))
}

fn validate(len: usize, width: usize, height: usize, stride: usize) -> Result<()> {
    if stride == 0 {
        return Err(Error::InvalidDimensions("stride must be > 0".into()));
    }
    if stride < width {
        return Err(Error::StrideTooSmall { stride, width });
    }
    let required = required_len(width, height, stride)?;
    if len < required {
        return Err(Error::InsufficientData { required, got: len });
    }
    Ok(())
}

/// Borrowed, read-only view of a strided plane.
///
/// # Example
///
/// ```rust
/// use tweak_core::Plane;
///
/// // 3x2 logical samples, rows 4 apart
/// let data = [1, 2, 3, 0, 4, 5, 6];
/// let plane = Plane::new(&data, 3, 2, 4).unwrap();
/// assert_eq!(plane.row(1), &[4, 5, 6]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Plane<'a> {
    /// Creates a view, validating stride and buffer length.
    pub fn new(data: &'a [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        validate(data.len(), width, height, stride)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a view over a packed buffer (`stride == width`).
    pub fn packed(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, width.max(1))
    }

    /// Logical width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples between row starts.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if the plane has no logical samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Underlying buffer, padding included.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Logical samples of row `y` (exactly `width` long).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        if self.width == 0 {
            return &[];
        }
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Iterates the logical rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Sample at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.row(y)[x]
    }
}

/// Borrowed, exclusive view of a strided plane.
///
/// Writers go through [`row_mut`](PlaneMut::row_mut) or
/// [`rows_mut`](PlaneMut::rows_mut), which only hand out the logical
/// `width` samples of each row, so padding is left as the owner set it.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PlaneMut<'a> {
    /// Creates a view, validating stride and buffer length.
    pub fn new(data: &'a mut [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        validate(data.len(), width, height, stride)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a view over a packed buffer (`stride == width`).
    pub fn packed(data: &'a mut [u8], width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, width.max(1))
    }

    /// Logical width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples between row starts.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if the plane has no logical samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reborrows as a read-only view.
    pub fn as_plane(&self) -> Plane<'_> {
        Plane {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Underlying buffer, padding included.
    ///
    /// Callers chunking this by [`stride`](PlaneMut::stride) must only touch
    /// the first `width` samples of each chunk and the first `height` chunks.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Logical samples of row `y` (exactly `width` long).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        if self.width == 0 {
            return &mut [];
        }
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    /// Iterates the logical rows top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let width = self.width;
        self.data
            .chunks_mut(self.stride)
            .take(self.height)
            .map(move |row| &mut row[..width])
    }
}
