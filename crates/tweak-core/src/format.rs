//! Planar 8-bit frame formats.
//!
//! A [`FrameFormat`] names a color family and the chroma subsampling shifts.
//! Plane 0 always has the full frame size; planes 1 and 2 (chroma, for YUV)
//! are `width >> ss_w` by `height >> ss_h`. RGB and gray formats are never
//! subsampled.
//!
//! # Supported formats
//!
//! | Name       | Family | Planes | ss_w | ss_h |
//! |------------|--------|--------|------|------|
//! | `gray8`    | Gray   | 1      | 0    | 0    |
//! | `yuv420p8` | Yuv    | 3      | 1    | 1    |
//! | `yuv422p8` | Yuv    | 3      | 1    | 0    |
//! | `yuv440p8` | Yuv    | 3      | 0    | 1    |
//! | `yuv444p8` | Yuv    | 3      | 0    | 0    |
//! | `yuv410p8` | Yuv    | 3      | 2    | 2    |
//! | `yuv411p8` | Yuv    | 3      | 2    | 0    |
//! | `rgbp8`    | Rgb    | 3      | 0    | 0    |

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Color family of a planar frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Single luma plane.
    Gray,
    /// Luma plus two chroma planes (Y, U/Cb, V/Cr).
    Yuv,
    /// Three color planes (R, G, B).
    Rgb,
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray => write!(f, "Gray"),
            Self::Yuv => write!(f, "YUV"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// Layout of an 8-bit planar frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameFormat {
    /// Color family.
    pub family: ColorFamily,
    /// Horizontal chroma subsampling as a right shift.
    pub ss_w: u8,
    /// Vertical chroma subsampling as a right shift.
    pub ss_h: u8,
}

impl FrameFormat {
    /// 8-bit grayscale.
    pub const GRAY8: Self = Self::new(ColorFamily::Gray, 0, 0);
    /// 4:2:0 YUV.
    pub const YUV420P8: Self = Self::new(ColorFamily::Yuv, 1, 1);
    /// 4:2:2 YUV.
    pub const YUV422P8: Self = Self::new(ColorFamily::Yuv, 1, 0);
    /// 4:4:0 YUV.
    pub const YUV440P8: Self = Self::new(ColorFamily::Yuv, 0, 1);
    /// 4:4:4 YUV.
    pub const YUV444P8: Self = Self::new(ColorFamily::Yuv, 0, 0);
    /// 4:1:0 YUV.
    pub const YUV410P8: Self = Self::new(ColorFamily::Yuv, 2, 2);
    /// 4:1:1 YUV.
    pub const YUV411P8: Self = Self::new(ColorFamily::Yuv, 2, 0);
    /// Planar 8-bit RGB.
    pub const RGBP8: Self = Self::new(ColorFamily::Rgb, 0, 0);

    /// Every built-in format, in listing order.
    pub const ALL: [Self; 8] = [
        Self::GRAY8,
        Self::YUV420P8,
        Self::YUV422P8,
        Self::YUV440P8,
        Self::YUV444P8,
        Self::YUV410P8,
        Self::YUV411P8,
        Self::RGBP8,
    ];

    /// Largest supported subsampling shift in either direction.
    pub const MAX_SUBSAMPLING: u8 = 4;

    /// Creates a format from a family and subsampling shifts.
    ///
    /// Shifts are not checked here; [`FrameInfo::validate`](crate::FrameInfo::validate)
    /// rejects anything above [`MAX_SUBSAMPLING`](Self::MAX_SUBSAMPLING).
    pub const fn new(family: ColorFamily, ss_w: u8, ss_h: u8) -> Self {
        Self { family, ss_w, ss_h }
    }

    /// Short lowercase name, e.g. `yuv420p8`.
    ///
    /// YUV subsampling without a conventional name comes out as
    /// `yuv_ss{w}x{h}p8`, which parses back to the same format.
    pub fn name(&self) -> String {
        match self.family {
            ColorFamily::Gray => "gray8".into(),
            ColorFamily::Rgb => "rgbp8".into(),
            ColorFamily::Yuv => {
                let tag = match (self.ss_w, self.ss_h) {
                    (1, 1) => "420",
                    (1, 0) => "422",
                    (0, 1) => "440",
                    (0, 0) => "444",
                    (2, 2) => "410",
                    (2, 0) => "411",
                    _ => return format!("yuv_ss{}x{}p8", self.ss_w, self.ss_h),
                };
                format!("yuv{tag}p8")
            }
        }
    }

    /// Number of planes in a frame of this format.
    pub const fn plane_count(&self) -> usize {
        match self.family {
            ColorFamily::Gray => 1,
            ColorFamily::Yuv | ColorFamily::Rgb => 3,
        }
    }

    /// Returns true if chroma planes are smaller than luma.
    pub const fn is_subsampled(&self) -> bool {
        self.ss_w != 0 || self.ss_h != 0
    }

    /// Dimensions of the chroma planes for a `width` x `height` frame.
    pub const fn chroma_dimensions(&self, width: usize, height: usize) -> (usize, usize) {
        (shift_down(width, self.ss_w), shift_down(height, self.ss_h))
    }

    /// Dimensions of plane `index` for a `width` x `height` frame.
    ///
    /// # Panics
    ///
    /// Panics if `index >= plane_count()`.
    pub fn plane_dimensions(&self, index: usize, width: usize, height: usize) -> (usize, usize) {
        assert!(
            index < self.plane_count(),
            "plane {index} out of range for {}",
            self.name()
        );
        if index == 0 {
            (width, height)
        } else {
            self.chroma_dimensions(width, height)
        }
    }
}

/// `value >> shift`, or 0 when the shift is wider than `usize`.
const fn shift_down(value: usize, shift: u8) -> usize {
    match value.checked_shr(shift as u32) {
        Some(v) => v,
        None => 0,
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for FrameFormat {
    type Err = Error;

    /// Parses a format name. The trailing `8` is optional, so `yuv420p`
    /// and `yuv420p8` are the same format; `gray` and `rgbp` work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower.strip_suffix('8').unwrap_or(lower.as_str());
        let format = match key {
            "gray" | "y" => Self::GRAY8,
            "yuv420p" | "i420" => Self::YUV420P8,
            "yuv422p" => Self::YUV422P8,
            "yuv440p" => Self::YUV440P8,
            "yuv444p" => Self::YUV444P8,
            "yuv410p" => Self::YUV410P8,
            "yuv411p" => Self::YUV411P8,
            "rgbp" | "rgb24" | "gbrp" => Self::RGBP8,
            _ => {
                return parse_custom_yuv(key).ok_or_else(|| Error::UnknownFormat(s.to_string()));
            }
        };
        Ok(format)
    }
}

/// Parses the `yuv_ss{w}x{h}p` names [`FrameFormat::name`] gives to
/// non-standard subsampling.
fn parse_custom_yuv(key: &str) -> Option<FrameFormat> {
    let shifts = key.strip_prefix("yuv_ss")?.strip_suffix('p')?;
    let (ss_w, ss_h) = shifts.split_once('x')?;
    Some(FrameFormat::new(
        ColorFamily::Yuv,
        ss_w.parse().ok()?,
        ss_h.parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for format in FrameFormat::ALL {
            let parsed: FrameFormat = format.name().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_custom_subsampling_names_round_trip() {
        for (ss_w, ss_h) in [(3, 1), (0, 3), (64, 0)] {
            let format = FrameFormat::new(ColorFamily::Yuv, ss_w, ss_h);
            let name = format.name();
            assert!(name.starts_with("yuv_ss"), "{name}");
            assert_eq!(name.parse::<FrameFormat>().unwrap(), format);
        }
        assert!("yuv_ss1xp8".parse::<FrameFormat>().is_err());
        assert!("yuv_ss300x0p8".parse::<FrameFormat>().is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("YUV420P".parse::<FrameFormat>().unwrap(), FrameFormat::YUV420P8);
        assert_eq!("rgb24".parse::<FrameFormat>().unwrap(), FrameFormat::RGBP8);
        assert!("nv12".parse::<FrameFormat>().is_err());
    }

    #[test]
    fn test_chroma_dimensions_truncate() {
        let f = FrameFormat::YUV420P8;
        assert_eq!(f.chroma_dimensions(1920, 1080), (960, 540));
        // Odd sizes truncate, matching the shift
        assert_eq!(f.chroma_dimensions(641, 481), (320, 240));
        assert_eq!(FrameFormat::YUV411P8.chroma_dimensions(720, 480), (180, 480));
    }

    #[test]
    fn test_plane_dimensions() {
        let f = FrameFormat::YUV422P8;
        assert_eq!(f.plane_dimensions(0, 720, 576), (720, 576));
        assert_eq!(f.plane_dimensions(2, 720, 576), (360, 576));
        assert_eq!(FrameFormat::RGBP8.plane_dimensions(1, 64, 32), (64, 32));
    }

    #[test]
    fn test_plane_counts() {
        assert_eq!(FrameFormat::GRAY8.plane_count(), 1);
        assert_eq!(FrameFormat::YUV444P8.plane_count(), 3);
        assert!(!FrameFormat::YUV444P8.is_subsampled());
        assert!(FrameFormat::YUV410P8.is_subsampled());
    }
}
