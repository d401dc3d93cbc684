//! 256-entry sample lookup table.
//!
//! An 8-bit sample has 256 possible values, so any per-sample mapping that
//! does not depend on neighbours can be precomputed once into a table and
//! applied with one indexed load per sample.

use std::ops::Index;

/// Number of entries in a [`Lut8`].
pub const LUT_SIZE: usize = 256;

/// Rounds a non-negative real to the nearest sample and saturates to [0, 255].
///
/// Rounding is `+ 0.5` then truncation toward zero. Anything that lands at
/// or above 255 becomes 255, anything below 0 becomes 0. NaN maps to 0.
///
/// # Example
///
/// ```rust
/// use tweak_lut::round_saturate;
///
/// assert_eq!(round_saturate(150.0), 150);
/// assert_eq!(round_saturate(127.5), 128);
/// assert_eq!(round_saturate(300.0), 255);
/// assert_eq!(round_saturate(-12.0), 0);
/// ```
#[inline]
pub fn round_saturate(value: f64) -> u8 {
    let v = value + 0.5;
    if v >= 255.0 {
        255
    } else if v < 0.0 {
        0
    } else {
        v as u8
    }
}

/// A sample-to-sample lookup table with exactly 256 entries.
///
/// Built once from filter parameters, then only read.
///
/// # Example
///
/// ```rust
/// use tweak_lut::Lut8;
///
/// let invert = Lut8::from_fn(|v| 255 - v);
/// assert_eq!(invert.get(0), 255);
/// assert_eq!(invert[200], 55);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lut8 {
    table: [u8; LUT_SIZE],
}

impl Lut8 {
    /// The table that maps every sample to itself.
    pub const fn identity() -> Self {
        let mut table = [0u8; LUT_SIZE];
        let mut i = 0;
        while i < LUT_SIZE {
            table[i] = i as u8;
            i += 1;
        }
        Self { table }
    }

    /// Wraps a ready-made table.
    pub const fn from_table(table: [u8; LUT_SIZE]) -> Self {
        Self { table }
    }

    /// Builds a table by evaluating `f` for every sample value.
    pub fn from_fn(mut f: impl FnMut(u8) -> u8) -> Self {
        let mut table = [0u8; LUT_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i as u8);
        }
        Self { table }
    }

    /// Looks up one sample.
    #[inline(always)]
    pub fn get(&self, sample: u8) -> u8 {
        self.table[sample as usize]
    }

    /// The raw table.
    #[inline]
    pub fn as_array(&self) -> &[u8; LUT_SIZE] {
        &self.table
    }

    /// Returns true if every entry maps to itself.
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Maps a row of samples from `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    #[inline]
    pub fn map_row(&self, src: &[u8], dst: &mut [u8]) {
        assert_eq!(src.len(), dst.len(), "row length mismatch");
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.table[s as usize];
        }
    }
}

impl Default for Lut8 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<u8> for Lut8 {
    type Output = u8;

    #[inline]
    fn index(&self, sample: u8) -> &u8 {
        &self.table[sample as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let lut = Lut8::identity();
        assert!(lut.is_identity());
        for i in 0..=255u8 {
            assert_eq!(lut.get(i), i);
        }
        assert_eq!(Lut8::default(), lut);
    }

    #[test]
    fn test_round_saturate_boundaries() {
        assert_eq!(round_saturate(0.0), 0);
        assert_eq!(round_saturate(0.49), 0);
        assert_eq!(round_saturate(0.5), 1);
        assert_eq!(round_saturate(254.49), 254);
        assert_eq!(round_saturate(254.5), 255);
        assert_eq!(round_saturate(1e12), 255);
        assert_eq!(round_saturate(-0.7), 0);
        assert_eq!(round_saturate(-1e12), 0);
        assert_eq!(round_saturate(f64::NAN), 0);
    }

    #[test]
    fn test_map_row() {
        let lut = Lut8::from_fn(|v| v / 2);
        let src = [0, 10, 255];
        let mut dst = [0u8; 3];
        lut.map_row(&src, &mut dst);
        assert_eq!(dst, [0, 5, 127]);
    }

    #[test]
    fn test_not_identity() {
        let lut = Lut8::from_fn(|v| v.saturating_add(1));
        assert!(!lut.is_identity());
    }
}
