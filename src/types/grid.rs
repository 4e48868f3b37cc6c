//! The owned 2-D sample buffer every image is stored in.

use crate::error::{PnmError, Result};

use super::{Point, Rgb};

/// A bitonal image (`true` = ink).
pub type Bitmap = PixelGrid<bool>;

/// An 8-bit grayscale image.
pub type Graymap = PixelGrid<u8>;

/// A 24-bit RGB image.
pub type Pixmap = PixelGrid<Rgb>;

/// A dense grid of samples (row-major: `rows[y][x]`).
///
/// Dimensions are fixed at construction and always positive. Every row has
/// exactly `width` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<C> {
    width: usize,
    height: usize,
    max_sample: u8,
    rows: Vec<Vec<C>>,
}

impl<C: Copy + PartialEq> PixelGrid<C> {
    /// Create a `width` x `height` grid filled with `fill`.
    pub fn new(width: usize, height: usize, max_sample: u8, fill: C) -> Result<Self> {
        check_dimensions(width, height)?;
        check_max_sample(max_sample)?;

        Ok(Self {
            width,
            height,
            max_sample,
            rows: vec![vec![fill; width]; height],
        })
    }

    /// Build a grid from already-decoded rows.
    ///
    /// Fails if there are no rows, the rows are empty, or their lengths differ.
    pub fn from_rows(rows: Vec<Vec<C>>, max_sample: u8) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        check_dimensions(width, height)?;
        check_max_sample(max_sample)?;

        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(PnmError::Validation {
                message: format!(
                    "Row {} has {} samples, expected {}",
                    y,
                    rows[y].len(),
                    width
                ),
                help: None,
            });
        }

        Ok(Self {
            width,
            height,
            max_sample,
            rows,
        })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The channel ceiling samples are measured against.
    pub fn max_sample(&self) -> u8 {
        self.max_sample
    }

    /// Whether `(x, y)` addresses a pixel of this grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Read the sample at `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Result<C> {
        let (col, row) = self.checked_index(x, y)?;
        Ok(self.rows[row][col])
    }

    /// Read the sample at a point.
    pub fn at_point(&self, point: Point) -> Result<C> {
        self.at(point.x, point.y)
    }

    /// Overwrite the sample at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, value: C) -> Result<()> {
        let (col, row) = self.checked_index(x, y)?;
        self.rows[row][col] = value;
        Ok(())
    }

    /// Get a reference to the rows.
    pub fn rows(&self) -> &[Vec<C>] {
        &self.rows
    }

    /// Iterate over all samples with their positions.
    pub fn iter_pixels(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &c)| (x, y, c))
        })
    }

    /// Build a same-sized grid by mapping every sample.
    pub fn map<D, F>(&self, max_sample: u8, mut f: F) -> PixelGrid<D>
    where
        F: FnMut(C) -> D,
    {
        PixelGrid {
            width: self.width,
            height: self.height,
            max_sample,
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|&c| f(c)).collect())
                .collect(),
        }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<C>] {
        &mut self.rows
    }

    pub(crate) fn set_max_sample(&mut self, max_sample: u8) {
        self.max_sample = max_sample;
    }

    /// Assemble a grid without validation. Callers guarantee the rows are
    /// rectangular and non-empty.
    pub(crate) fn from_parts(rows: Vec<Vec<C>>, max_sample: u8) -> Self {
        Self {
            width: rows.first().map_or(0, |row| row.len()),
            height: rows.len(),
            max_sample,
            rows,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.height)?;
        Some((col, row))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<(usize, usize)> {
        self.index(x, y).ok_or(PnmError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}

impl Bitmap {
    /// A blank bitmap with no ink.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, 1, false)
    }
}

impl Graymap {
    /// A black graymap.
    pub fn blank(width: usize, height: usize, max_sample: u8) -> Result<Self> {
        Self::new(width, height, max_sample, 0)
    }
}

impl Pixmap {
    /// A black pixmap.
    pub fn blank(width: usize, height: usize, max_sample: u8) -> Result<Self> {
        Self::new(width, height, max_sample, Rgb::BLACK)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PnmError::Validation {
            message: format!("Invalid image size {}x{}", width, height),
            help: Some("Width and height must both be at least 1".to_string()),
        });
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(PnmError::validation(format!(
            "Image size {}x{} exceeds the addressable range",
            width, height
        )));
    }
    Ok(())
}

fn check_max_sample(max_sample: u8) -> Result<()> {
    if max_sample == 0 {
        return Err(PnmError::Validation {
            message: "Max sample value must be positive".to_string(),
            help: Some("Use a max value between 1 and 255".to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = Graymap::new(3, 2, 255, 7).unwrap();
        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.max_sample(), 255);
        assert!(grid.iter_pixels().all(|(_, _, v)| v == 7));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Bitmap::blank(0, 4).is_err());
        assert!(Bitmap::blank(4, 0).is_err());
        assert!(Graymap::blank(1, 1, 0).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![1u8, 2], vec![3]];
        let err = Graymap::from_rows(rows, 255).unwrap_err();
        assert!(err.to_string().contains("Row 1"));
    }

    #[test]
    fn test_set_and_at() {
        let mut grid = Pixmap::blank(4, 4, 255).unwrap();
        grid.set(3, 1, Rgb::WHITE).unwrap();
        assert_eq!(grid.at(3, 1).unwrap(), Rgb::WHITE);
        assert_eq!(grid.at_point(Point::new(0, 0)).unwrap(), Rgb::BLACK);
        assert_eq!(grid.rows()[1][3], Rgb::WHITE);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut grid = Bitmap::blank(2, 3).unwrap();

        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert!(matches!(
                grid.at(x, y),
                Err(PnmError::OutOfBounds { width: 2, height: 3, .. })
            ));
            assert!(grid.set(x, y, true).is_err());
        }

        // Failed writes leave the grid untouched.
        assert!(grid.iter_pixels().all(|(_, _, v)| !v));
    }

    #[test]
    fn test_map_changes_sample_type() {
        let grid = Graymap::from_rows(vec![vec![0, 200]], 255).unwrap();
        let bits = grid.map(1, |v| v > 100);
        assert_eq!(bits.rows(), &[vec![false, true]]);
        assert_eq!(bits.max_sample(), 1);
    }
}
