//! Whole-image transforms: invert, mirror, rotate and max-value rescaling.

use crate::error::{PnmError, Result};
use crate::types::{PixelGrid, Pixel};

impl<C: Pixel> PixelGrid<C> {
    /// Replace every sample with its negative.
    pub fn invert(&mut self) {
        let max_sample = self.max_sample();
        for row in self.rows_mut() {
            for sample in row.iter_mut() {
                *sample = sample.inverted(max_sample);
            }
        }
    }

    /// Mirror each row left to right.
    pub fn flip(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Reverse the order of the rows, top to bottom.
    pub fn flop(&mut self) {
        self.rows_mut().reverse();
    }

    /// A copy rotated 90 degrees clockwise. Width and height swap.
    pub fn rotated_cw(&self) -> PixelGrid<C> {
        let (width, height) = self.size();
        let rows: Vec<Vec<C>> = (0..width)
            .map(|x| (0..height).rev().map(|y| self.rows()[y][x]).collect())
            .collect();

        PixelGrid::from_parts(rows, self.max_sample())
    }

    /// Rotate 90 degrees clockwise in place.
    pub fn rotate_cw(&mut self) {
        *self = self.rotated_cw();
    }

    /// Re-express every sample against a new max value, rounding to nearest.
    ///
    /// Bitmaps are unaffected. A `new_max` of zero is rejected.
    pub fn rescale_max(&mut self, new_max: u8) -> Result<()> {
        if new_max == 0 {
            return Err(PnmError::Validation {
                message: "Max value must be positive".to_string(),
                help: Some("Use a max value between 1 and 255".to_string()),
            });
        }
        if !C::FORMAT.has_max_value() {
            return Ok(());
        }

        let old_max = self.max_sample();
        for row in self.rows_mut() {
            for sample in row.iter_mut() {
                *sample = sample.rescaled(old_max, new_max);
            }
        }
        self.set_max_sample(new_max);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Bitmap, Graymap, Pixmap, Rgb};

    fn counting_grid() -> Graymap {
        Graymap::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], 255).unwrap()
    }

    #[test]
    fn test_invert_graymap() {
        let mut grid = Graymap::from_rows(vec![vec![0, 5, 15]], 15).unwrap();
        grid.invert();
        assert_eq!(grid.rows(), &[vec![15, 10, 0]]);
    }

    #[test]
    fn test_invert_bitmap_and_pixmap() {
        let mut bits = Bitmap::from_rows(vec![vec![true, false]], 1).unwrap();
        bits.invert();
        assert_eq!(bits.rows(), &[vec![false, true]]);

        let mut pixels = Pixmap::from_rows(vec![vec![Rgb::new(0, 100, 255)]], 255).unwrap();
        pixels.invert();
        assert_eq!(pixels.rows(), &[vec![Rgb::new(255, 155, 0)]]);
    }

    #[test]
    fn test_flip_mirrors_rows() {
        let mut grid = counting_grid();
        grid.flip();
        assert_eq!(grid.rows(), &[vec![3, 2, 1], vec![6, 5, 4]]);
    }

    #[test]
    fn test_flop_reverses_row_order() {
        let mut grid = counting_grid();
        grid.flop();
        assert_eq!(grid.rows(), &[vec![4, 5, 6], vec![1, 2, 3]]);
    }

    #[test]
    fn test_rotate_cw() {
        let mut grid = counting_grid();
        grid.rotate_cw();
        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid.rows(), &[vec![4, 1], vec![5, 2], vec![6, 3]]);
        assert_eq!(grid.at(1, 0).unwrap(), 1);
        assert!(grid.at(2, 0).is_err());
    }

    #[test]
    fn test_four_rotations_restore_the_image() {
        let original = counting_grid();
        let mut grid = original.clone();
        for _ in 0..4 {
            grid.rotate_cw();
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn test_rescale_max() {
        let mut grid = Graymap::from_rows(vec![vec![0, 1, 2]], 2).unwrap();
        grid.rescale_max(255).unwrap();
        assert_eq!(grid.max_sample(), 255);
        assert_eq!(grid.rows(), &[vec![0, 128, 255]]);

        let mut pixels = Pixmap::from_rows(vec![vec![Rgb::new(255, 128, 0)]], 255).unwrap();
        pixels.rescale_max(15).unwrap();
        assert_eq!(pixels.max_sample(), 15);
        assert_eq!(pixels.rows(), &[vec![Rgb::new(15, 8, 0)]]);
    }

    #[test]
    fn test_rescale_bitmap_is_noop() {
        let mut bits = Bitmap::from_rows(vec![vec![true, false]], 1).unwrap();
        bits.rescale_max(255).unwrap();
        assert_eq!(bits.max_sample(), 1);
        assert_eq!(bits.rows(), &[vec![true, false]]);
    }

    #[test]
    fn test_rescale_to_zero_fails() {
        let mut grid = counting_grid();
        assert!(grid.rescale_max(0).is_err());
        assert_eq!(grid, counting_grid());
    }
}
