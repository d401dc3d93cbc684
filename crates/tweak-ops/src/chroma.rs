//! Hue rotation and saturation scaling on a pair of chroma planes.
//!
//! Both chroma samples are centred on 128 and treated as a 2D vector that
//! is rotated by the hue angle and scaled by the saturation factor:
//!
//! ```text
//! u = a - 128,  v = b - 128
//! a' = u·m1 + v·m2 + 128.5
//! b' = v·m1 - u·m2 + 128.5
//!
//! m1 = cos(hue) · sat
//! m2 = sin(hue) · sat
//! ```
//!
//! Results are clamped so anything below 1.0 becomes 0 and anything at or
//! above 255.0 becomes 255; the rest truncate.
//!
//! The neutral setting (hue 0, sat 1) never runs the formula: it is an
//! exact copy, so untouched clips stay bit-identical.

use std::f64::consts::PI;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tweak_core::{Plane, PlaneMut};

#[cfg(feature = "parallel")]
use crate::apply::PARALLEL_MIN_ROWS;
use crate::apply::{copy_plane, ensure_same_size};
use crate::OpsResult;

/// Chroma rotation/scale coefficients.
///
/// # Example
///
/// ```rust
/// use tweak_ops::ChromaRotation;
///
/// let rot = ChromaRotation::from_hue_sat(90.0, 1.0);
/// assert_eq!(rot.rotate(200, 128), (128, 56));
/// assert!(ChromaRotation::from_hue_sat(0.0, 1.0).is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaRotation {
    /// `cos(hue) · sat`
    pub m1: f64,
    /// `sin(hue) · sat`
    pub m2: f64,
}

impl Default for ChromaRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ChromaRotation {
    /// No rotation, unit saturation.
    pub const IDENTITY: Self = Self { m1: 1.0, m2: 0.0 };

    /// Coefficients for a hue shift in degrees and a saturation factor.
    pub fn from_hue_sat(hue_degrees: f64, sat: f64) -> Self {
        let hue = hue_degrees * PI / 180.0;
        Self {
            m1: hue.cos() * sat,
            m2: hue.sin() * sat,
        }
    }

    /// True if the coefficients leave chroma untouched.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.m1 == 1.0 && self.m2 == 0.0
    }

    /// Rotates one chroma sample pair.
    #[inline]
    pub fn rotate(&self, a: u8, b: u8) -> (u8, u8) {
        let u = f64::from(a) - 128.0;
        let v = f64::from(b) - 128.0;
        (
            clamp_chroma(u * self.m1 + v * self.m2 + 128.5),
            clamp_chroma(v * self.m1 - u * self.m2 + 128.5),
        )
    }

    #[inline]
    fn rotate_row(&self, src_a: &[u8], src_b: &[u8], dst_a: &mut [u8], dst_b: &mut [u8]) {
        let samples = src_a.iter().zip(src_b).zip(dst_a.iter_mut().zip(dst_b.iter_mut()));
        for ((&a, &b), (da, db)) in samples {
            (*da, *db) = self.rotate(a, b);
        }
    }

    #[inline]
    fn rotate_row_in_place(&self, a: &mut [u8], b: &mut [u8]) {
        for (sa, sb) in a.iter_mut().zip(b.iter_mut()) {
            (*sa, *sb) = self.rotate(*sa, *sb);
        }
    }
}

/// Converts an already offset chroma value to a sample.
#[inline]
fn clamp_chroma(value: f64) -> u8 {
    if value < 255.0 {
        if value >= 1.0 { value as u8 } else { 0 }
    } else {
        255
    }
}

fn check_pair(
    src_a: &Plane<'_>,
    src_b: &Plane<'_>,
    dst_a: &PlaneMut<'_>,
    dst_b: &PlaneMut<'_>,
) -> OpsResult<()> {
    let dims = src_a.dimensions();
    ensure_same_size("chroma source b", dims, src_b.dimensions())?;
    ensure_same_size("chroma destination a", dims, dst_a.dimensions())?;
    ensure_same_size("chroma destination b", dims, dst_b.dimensions())
}

/// Rotates `(src_a, src_b)` into `(dst_a, dst_b)`.
///
/// All four planes must share the same logical size; strides are free.
/// The identity rotation degenerates to two plane copies.
pub fn rotate_chroma(
    src_a: &Plane<'_>,
    src_b: &Plane<'_>,
    dst_a: &mut PlaneMut<'_>,
    dst_b: &mut PlaneMut<'_>,
    rotation: &ChromaRotation,
) -> OpsResult<()> {
    check_pair(src_a, src_b, dst_a, dst_b)?;
    if rotation.is_identity() {
        copy_plane(src_a, dst_a)?;
        return copy_plane(src_b, dst_b);
    }
    rotate_rows(src_a, src_b, dst_a, dst_b, rotation);
    Ok(())
}

/// Rotates a chroma pair in place. The identity rotation does nothing.
pub fn rotate_chroma_in_place(
    a: &mut PlaneMut<'_>,
    b: &mut PlaneMut<'_>,
    rotation: &ChromaRotation,
) -> OpsResult<()> {
    ensure_same_size("chroma plane b", a.dimensions(), b.dimensions())?;
    if rotation.is_identity() {
        return Ok(());
    }
    for (ra, rb) in a.rows_mut().zip(b.rows_mut()) {
        rotation.rotate_row_in_place(ra, rb);
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn rotate_rows(
    src_a: &Plane<'_>,
    src_b: &Plane<'_>,
    dst_a: &mut PlaneMut<'_>,
    dst_b: &mut PlaneMut<'_>,
    rotation: &ChromaRotation,
) {
    let (width, height) = dst_a.dimensions();
    if height < PARALLEL_MIN_ROWS || dst_a.is_empty() {
        return rotate_rows_seq(src_a, src_b, dst_a, dst_b, rotation);
    }
    let (stride_a, stride_b) = (dst_a.stride(), dst_b.stride());
    let rows_a = dst_a.data_mut().par_chunks_mut(stride_a).take(height);
    let rows_b = dst_b.data_mut().par_chunks_mut(stride_b).take(height);
    rows_a
        .zip(rows_b)
        .enumerate()
        .for_each(|(y, (ra, rb))| {
            rotation.rotate_row(src_a.row(y), src_b.row(y), &mut ra[..width], &mut rb[..width]);
        });
}

#[cfg(not(feature = "parallel"))]
fn rotate_rows(
    src_a: &Plane<'_>,
    src_b: &Plane<'_>,
    dst_a: &mut PlaneMut<'_>,
    dst_b: &mut PlaneMut<'_>,
    rotation: &ChromaRotation,
) {
    rotate_rows_seq(src_a, src_b, dst_a, dst_b, rotation)
}

fn rotate_rows_seq(
    src_a: &Plane<'_>,
    src_b: &Plane<'_>,
    dst_a: &mut PlaneMut<'_>,
    dst_b: &mut PlaneMut<'_>,
    rotation: &ChromaRotation,
) {
    for (y, (ra, rb)) in dst_a.rows_mut().zip(dst_b.rows_mut()).enumerate() {
        rotation.rotate_row(src_a.row(y), src_b.row(y), ra, rb);
    }
}
