//! Colour depth reduction: RGB to grayscale to bitonal.

use crate::types::{Bitmap, Graymap, Pixmap, Rgb};

/// Average the three channels, truncating.
pub fn to_grayscale(pixel: Rgb) -> u8 {
    let sum = u16::from(pixel.r) + u16::from(pixel.g) + u16::from(pixel.b);
    (sum / 3) as u8
}

/// Threshold a grayscale sample: `true` iff it is above half of `max_sample`.
///
/// Half is computed with integer division, so the midpoint itself (and
/// `max_sample / 2` for odd maxima) maps to `false`.
pub fn to_bitonal(sample: u8, max_sample: u8) -> bool {
    sample > max_sample / 2
}

impl Pixmap {
    /// Reduce to grayscale, keeping the max value.
    pub fn to_graymap(&self) -> Graymap {
        self.map(self.max_sample(), to_grayscale)
    }

    /// Reduce to a bitmap through grayscale.
    pub fn to_bitmap(&self) -> Bitmap {
        self.to_graymap().to_bitmap()
    }
}

impl Graymap {
    /// Threshold every sample against half the max value.
    pub fn to_bitmap(&self) -> Bitmap {
        let max_sample = self.max_sample();
        self.map(1, |sample| to_bitonal(sample, max_sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_truncates() {
        assert_eq!(to_grayscale(Rgb::new(1, 1, 1)), 1);
        assert_eq!(to_grayscale(Rgb::new(1, 1, 0)), 0);
        assert_eq!(to_grayscale(Rgb::new(2, 2, 1)), 1);
        assert_eq!(to_grayscale(Rgb::new(10, 20, 30)), 20);
    }

    #[test]
    fn test_grayscale_does_not_overflow() {
        assert_eq!(to_grayscale(Rgb::WHITE), 255);
        assert_eq!(to_grayscale(Rgb::new(255, 255, 254)), 254);
    }

    #[test]
    fn test_bitonal_midpoint_is_false() {
        for max in [1u8, 2, 3, 15, 100, 254, 255] {
            assert!(!to_bitonal(max / 2, max), "max {}", max);
            assert!(to_bitonal(max / 2 + 1, max), "max {}", max);
        }
    }

    #[test]
    fn test_bitonal_extremes() {
        assert!(!to_bitonal(0, 255));
        assert!(to_bitonal(255, 255));
        assert!(to_bitonal(1, 1));
        assert!(!to_bitonal(0, 1));
    }

    #[test]
    fn test_pixmap_to_graymap_keeps_max() {
        let pixmap = Pixmap::from_rows(vec![vec![Rgb::new(3, 6, 9), Rgb::new(1, 1, 0)]], 9).unwrap();
        let gray = pixmap.to_graymap();
        assert_eq!(gray.max_sample(), 9);
        assert_eq!(gray.rows(), &[vec![6, 0]]);
    }

    #[test]
    fn test_graymap_to_bitmap() {
        let gray = Graymap::from_rows(vec![vec![0, 127, 128, 255]], 255).unwrap();
        let bits = gray.to_bitmap();
        assert_eq!(bits.max_sample(), 1);
        assert_eq!(bits.rows(), &[vec![false, false, true, true]]);
    }

    #[test]
    fn test_pixmap_to_bitmap_goes_through_grayscale() {
        // Channel average 127 stays below the threshold even though red alone
        // is above it.
        let pixmap = Pixmap::from_rows(vec![vec![Rgb::new(255, 126, 0), Rgb::WHITE]], 255).unwrap();
        assert_eq!(pixmap.to_bitmap().rows(), &[vec![false, true]]);
    }
}
