//! Plane applicator: table lookup or straight copy over a strided plane.
//!
//! Only the logical `width x height` region is touched. Source and
//! destination may use different strides; destination padding keeps
//! whatever the buffer owner put there.
//!
//! When the `parallel` feature is enabled, rows of planes at least 64 rows
//! tall are processed with rayon. The output is identical either way.
//!
//! # Example
//!
//! ```rust
//! use tweak_core::{Plane, PlaneMut};
//! use tweak_lut::build_gain;
//! use tweak_ops::apply::{apply_plane, PlaneOp};
//!
//! let src = [10u8, 20, 0, 30, 40];
//! let mut dst = [0u8; 5];
//! let lut = build_gain(2.0);
//!
//! let src_plane = Plane::new(&src, 2, 2, 3).unwrap();
//! let mut dst_plane = PlaneMut::new(&mut dst, 2, 2, 3).unwrap();
//! apply_plane(&src_plane, &mut dst_plane, PlaneOp::Lut(&lut)).unwrap();
//! assert_eq!(dst, [20, 40, 0, 60, 80]);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tweak_core::{Plane, PlaneMut};
use tweak_lut::Lut8;

use crate::{OpsError, OpsResult};

/// What to do with each sample of a plane.
#[derive(Debug, Clone, Copy)]
pub enum PlaneOp<'a> {
    /// Copy samples unchanged.
    Copy,
    /// Replace each sample with its table entry.
    Lut(&'a Lut8),
}

/// Fails unless `src` and `dst` have the same logical size.
pub fn ensure_same_size(what: &str, src: (usize, usize), dst: (usize, usize)) -> OpsResult<()> {
    if src != dst {
        return Err(OpsError::Geometry(tweak_core::Error::DimensionMismatch {
            what: what.to_string(),
            expected_width: src.0,
            expected_height: src.1,
            width: dst.0,
            height: dst.1,
        }));
    }
    Ok(())
}

/// Planes shorter than this are walked on the calling thread.
#[cfg(feature = "parallel")]
pub(crate) const PARALLEL_MIN_ROWS: usize = 64;

/// Runs `f(src_row, dst_row)` over every logical row.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_row<F>(src: &Plane<'_>, dst: &mut PlaneMut<'_>, f: F)
where
    F: Fn(&[u8], &mut [u8]) + Sync + Send,
{
    let (width, height) = dst.dimensions();
    if height < PARALLEL_MIN_ROWS || dst.is_empty() {
        return for_each_row_seq(src, dst, f);
    }
    let stride = dst.stride();
    dst.data_mut()
        .par_chunks_mut(stride)
        .take(height)
        .enumerate()
        .for_each(|(y, row)| f(src.row(y), &mut row[..width]));
}

/// Runs `f(src_row, dst_row)` over every logical row.
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_row<F>(src: &Plane<'_>, dst: &mut PlaneMut<'_>, f: F)
where
    F: Fn(&[u8], &mut [u8]),
{
    for_each_row_seq(src, dst, f)
}

/// Single-threaded row walk.
pub(crate) fn for_each_row_seq<F>(src: &Plane<'_>, dst: &mut PlaneMut<'_>, f: F)
where
    F: Fn(&[u8], &mut [u8]),
{
    for (y, row) in dst.rows_mut().enumerate() {
        f(src.row(y), row);
    }
}

/// Copies the logical region of `src` into `dst`.
pub fn copy_plane(src: &Plane<'_>, dst: &mut PlaneMut<'_>) -> OpsResult<()> {
    ensure_same_size("copy", src.dimensions(), dst.dimensions())?;
    for_each_row(src, dst, |s, d| d.copy_from_slice(s));
    Ok(())
}

/// Writes `lut[src]` into `dst` for every logical sample.
pub fn apply_lut(src: &Plane<'_>, dst: &mut PlaneMut<'_>, lut: &Lut8) -> OpsResult<()> {
    ensure_same_size("lut", src.dimensions(), dst.dimensions())?;
    for_each_row(src, dst, |s, d| lut.map_row(s, d));
    Ok(())
}

/// Remaps a plane through `lut` without a separate source.
pub fn apply_lut_in_place(plane: &mut PlaneMut<'_>, lut: &Lut8) {
    for row in plane.rows_mut() {
        for sample in row.iter_mut() {
            *sample = lut.get(*sample);
        }
    }
}

/// Applies `op` from `src` into `dst`.
pub fn apply_plane(src: &Plane<'_>, dst: &mut PlaneMut<'_>, op: PlaneOp<'_>) -> OpsResult<()> {
    match op {
        PlaneOp::Copy => copy_plane(src, dst),
        PlaneOp::Lut(lut) => apply_lut(src, dst, lut),
    }
}
