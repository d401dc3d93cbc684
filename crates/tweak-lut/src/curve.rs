//! Luma curve from percent-gain control points.
//!
//! A curve is described by `N` gain adjustments in percent. Each value
//! becomes a multiplicative gain `1 + p / 100`, anchored at evenly spaced
//! sample positions across the 0..=255 domain.
//!
//! # Algorithm
//!
//! With one point the curve is a single global gain:
//!
//! ```text
//! lut[i] = sat(i × (1 + p/100) + 0.5)
//! ```
//!
//! With `N > 1` points the domain is cut into `N - 1` segments of
//! `incr = 256 / (N - 1)` samples (integer division). The last segment
//! absorbs the remainder and always ends at 255. Inside segment `k` the gain
//! ramps linearly from `g0 = 1 + p[k]/100` at `start` to `g1 = 1 + p[k+1]/100`
//! at `end`, so the output is quadratic in the sample value:
//!
//! ```text
//! a = (g1 - g0) / (end - start)
//! b = g1 - a × end
//! lut[j] = sat(j × (a×j + b) + 0.5)      for j in start..=end
//! ```
//!
//! ```text
//!   gain
//!    ^        g1 ___
//!    |      ___/    \___
//!    |  g0_/            \___ g3
//!    +----|-------|-------|----> sample
//!         0      85     170   255      (N = 4, incr = 85)
//! ```

use tracing::trace;

use crate::{round_saturate, LutError, LutResult, Lut8, LUT_SIZE};

/// Most control points a curve accepts.
///
/// From 130 points on the segment width is 1; 257 points give 256
/// one-sample segments and more would make it zero.
pub const MAX_CONTROL_POINTS: usize = LUT_SIZE + 1;

/// Converts a percent adjustment to a multiplicative gain.
#[inline]
pub fn percent_gain(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// A validated, non-empty list of percent-gain control points.
///
/// # Example
///
/// ```rust
/// use tweak_lut::ControlPoints;
///
/// let points = ControlPoints::new(vec![0.0, 20.0, -10.0]).unwrap();
/// assert_eq!(points.len(), 3);
/// assert!(ControlPoints::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    points: Vec<f64>,
}

impl ControlPoints {
    /// Validates and wraps a list of percent values.
    pub fn new(points: impl Into<Vec<f64>>) -> LutResult<Self> {
        let points = points.into();
        if points.is_empty() {
            return Err(LutError::EmptyControlPoints);
        }
        if points.len() > MAX_CONTROL_POINTS {
            return Err(LutError::TooManyControlPoints {
                count: points.len(),
                max: MAX_CONTROL_POINTS,
            });
        }
        if let Some((i, &value)) = points.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LutError::NonFinite {
                what: format!("control point {i}"),
                value,
            });
        }
        Ok(Self { points })
    }

    /// Number of points (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the list holds no points, which validation rules out.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The raw percent values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Width of every segment but the last, or `None` for a single point.
    pub fn segment_width(&self) -> Option<usize> {
        match self.points.len() {
            1 => None,
            n => Some(LUT_SIZE / (n - 1)),
        }
    }

    /// The interpolation segments, left to right.
    ///
    /// Empty for a single point, which has no segments.
    pub fn segments(&self) -> Vec<Segment> {
        let Some(incr) = self.segment_width() else {
            return Vec::new();
        };
        let last = self.points.len() - 2;
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Segment {
                start: i * incr,
                end: if i == last { LUT_SIZE - 1 } else { (i + 1) * incr - 1 },
                gain_start: percent_gain(pair[0]),
                gain_end: percent_gain(pair[1]),
            })
            .collect()
    }
}

impl TryFrom<Vec<f64>> for ControlPoints {
    type Error = LutError;

    fn try_from(points: Vec<f64>) -> LutResult<Self> {
        Self::new(points)
    }
}

impl TryFrom<&[f64]> for ControlPoints {
    type Error = LutError;

    fn try_from(points: &[f64]) -> LutResult<Self> {
        Self::new(points.to_vec())
    }
}

/// One span of the curve between two neighbouring control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First sample value covered.
    pub start: usize,
    /// Last sample value covered (inclusive).
    pub end: usize,
    /// Gain at `start`.
    pub gain_start: f64,
    /// Gain at `end`.
    pub gain_end: f64,
}

impl Segment {
    /// Gain change per sample step.
    ///
    /// A one-sample segment has no run, so its slope is zero and it takes
    /// `gain_end`. Every segment but the last is one sample wide once
    /// `256 / (N - 1)` drops to 1, i.e. for 130 to 257 points.
    #[inline]
    pub fn slope(&self) -> f64 {
        if self.end == self.start {
            0.0
        } else {
            (self.gain_end - self.gain_start) / (self.end - self.start) as f64
        }
    }

    /// Gain the ramp would have at sample 0.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.gain_end - self.slope() * self.end as f64
    }

    /// Effective gain at sample `j`.
    #[inline]
    pub fn gain_at(&self, j: usize) -> f64 {
        self.slope() * j as f64 + self.intercept()
    }
}

/// Builds the luma table for a control point list.
///
/// # Example
///
/// ```rust
/// use tweak_lut::{build_curve, ControlPoints};
///
/// let lut = build_curve(&ControlPoints::new(vec![50.0]).unwrap());
/// assert_eq!(lut.get(100), 150);
/// assert_eq!(lut.get(200), 255);
/// ```
pub fn build_curve(points: &ControlPoints) -> Lut8 {
    if let [percent] = points.as_slice() {
        let gain = percent_gain(*percent);
        trace!(gain, "single-point luma curve");
        return Lut8::from_fn(|i| round_saturate(f64::from(i) * gain));
    }

    let mut table = [0u8; LUT_SIZE];
    for segment in points.segments() {
        let a = segment.slope();
        let b = segment.intercept();
        trace!(start = segment.start, end = segment.end, a, b, "curve segment");
        for (j, entry) in table
            .iter_mut()
            .enumerate()
            .take(segment.end + 1)
            .skip(segment.start)
        {
            let x = j as f64;
            *entry = round_saturate((a * x + b) * x);
        }
    }
    Lut8::from_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(points: &[f64]) -> Lut8 {
        build_curve(&ControlPoints::try_from(points).unwrap())
    }

    #[test]
    fn test_zero_point_is_identity() {
        assert!(curve(&[0.0]).is_identity());
    }

    #[test]
    fn test_flat_multi_point_is_identity() {
        assert!(curve(&[0.0, 0.0]).is_identity());
        assert!(curve(&[0.0, 0.0, 0.0, 0.0]).is_identity());
    }

    #[test]
    fn test_single_point_gain() {
        let lut = curve(&[50.0]);
        assert_eq!(lut.get(100), 150);
        assert_eq!(lut.get(200), 255);
        assert_eq!(lut.get(0), 0);
    }

    #[test]
    fn test_single_point_negative_gain_clamps_low() {
        // gain = -1, every product is negative
        let lut = curve(&[-200.0]);
        assert!(lut.as_array().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_segments_cover_domain() {
        for n in 2..=MAX_CONTROL_POINTS {
            let points = ControlPoints::new(vec![0.0; n]).unwrap();
            let segments = points.segments();
            assert_eq!(segments.len(), n - 1);
            assert_eq!(segments[0].start, 0);
            assert_eq!(segments.last().unwrap().end, 255);
            for pair in segments.windows(2) {
                assert_eq!(pair[0].end + 1, pair[1].start, "gap with {n} points");
            }
        }
    }

    #[test]
    fn test_four_points_last_segment_absorbs_remainder() {
        let points = ControlPoints::new(vec![0.0, 10.0, 20.0, 30.0]).unwrap();
        assert_eq!(points.segment_width(), Some(85));
        let segments = points.segments();
        assert_eq!((segments[0].start, segments[0].end), (0, 84));
        assert_eq!((segments[1].start, segments[1].end), (85, 169));
        assert_eq!((segments[2].start, segments[2].end), (170, 255));
    }

    #[test]
    fn test_two_point_ramp() {
        // gain ramps 1.0 -> 2.0 across the whole domain
        let lut = curve(&[0.0, 100.0]);
        assert_eq!(lut.get(0), 0);
        // j = 100: a = 1/255, gain = 1 + 100/255
        let expected = round_saturate(100.0 * (1.0 + 100.0 / 255.0));
        assert_eq!(lut.get(100), expected);
        assert_eq!(lut.get(255), 255);
    }

    #[test]
    fn test_boundary_continuity() {
        let points = ControlPoints::new(vec![10.0, -25.0, 40.0, 5.0, -60.0]).unwrap();
        let lut = build_curve(&points);
        for segment in points.segments() {
            let anchored = round_saturate(segment.end as f64 * segment.gain_end);
            let got = lut.get(segment.end as u8);
            assert!(
                (i32::from(got) - i32::from(anchored)).abs() <= 1,
                "segment ending at {}: {got} vs {anchored}",
                segment.end
            );
        }
    }

    #[test]
    fn test_one_sample_segments() {
        for n in [130, 200, 256, MAX_CONTROL_POINTS] {
            let points: Vec<f64> = (0..n).map(|i| (i % 7) as f64 * 10.0).collect();
            let points = ControlPoints::new(points).unwrap();
            assert_eq!(points.segment_width(), Some(1), "{n} points");
            let lut = build_curve(&points);
            let segments = points.segments();
            let (last, narrow) = segments.split_last().unwrap();
            // Each one-sample segment uses its end gain
            for segment in narrow {
                assert_eq!(segment.start, segment.end);
                assert_eq!(segment.slope(), 0.0);
                let expected = round_saturate(segment.end as f64 * segment.gain_end);
                assert_eq!(lut.get(segment.end as u8), expected, "{n} points");
            }
            assert_eq!(last.end, 255);
            assert_eq!(last.end - last.start, 256 - n + 1);
        }
    }

    #[test]
    fn test_segment_width_drops_to_one_at_130_points() {
        let width = |n: usize| ControlPoints::new(vec![0.0; n]).unwrap().segment_width();
        assert_eq!(width(129), Some(2));
        assert_eq!(width(130), Some(1));
    }

    #[test]
    fn test_extreme_points_stay_in_range() {
        // Entries are u8, so the check is that nothing panics and the
        // extremes saturate instead of wrapping.
        let lut = curve(&[-1e6, 1e6, -1e6]);
        assert_eq!(lut.get(0), 0);
        assert_eq!(lut.get(128), 255);
        assert_eq!(lut.get(255), 0);
    }

    #[test]
    fn test_validation() {
        assert_eq!(ControlPoints::new(Vec::new()), Err(LutError::EmptyControlPoints));
        assert!(matches!(
            ControlPoints::new(vec![0.0; MAX_CONTROL_POINTS + 1]),
            Err(LutError::TooManyControlPoints { count: 258, max: 257 })
        ));
        assert!(matches!(
            ControlPoints::new(vec![0.0, f64::NAN]),
            Err(LutError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = curve(&[12.5, -3.0, 44.0]);
        let b = curve(&[12.5, -3.0, 44.0]);
        assert_eq!(a, b);
    }
}
