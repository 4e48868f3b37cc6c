//! The read/write capability every drawing operation is written against.

use crate::error::Result;
use crate::types::{PixelGrid, Point};

/// Something that can be read and written pixel by pixel.
///
/// `at` and `set` fail with `OutOfBounds` for coordinates outside
/// `[0, width) x [0, height)`.
pub trait Surface {
    /// The sample type; shapes only compare and copy it.
    type Color: Copy + PartialEq;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn at(&self, x: i32, y: i32) -> Result<Self::Color>;

    fn set(&mut self, x: i32, y: i32, color: Self::Color) -> Result<()>;

    /// Whether `(x, y)` lies on the surface.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }
}

impl<C: Copy + PartialEq> Surface for PixelGrid<C> {
    type Color = C;

    fn width(&self) -> usize {
        PixelGrid::width(self)
    }

    fn height(&self) -> usize {
        PixelGrid::height(self)
    }

    fn at(&self, x: i32, y: i32) -> Result<C> {
        PixelGrid::at(self, x, y)
    }

    fn set(&mut self, x: i32, y: i32, color: C) -> Result<()> {
        PixelGrid::set(self, x, y, color)
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        PixelGrid::contains(self, x, y)
    }
}

/// Write a pixel, failing if it lies off the surface.
pub fn strict_write<S>(surface: &mut S, point: Point, color: S::Color) -> Result<()>
where
    S: Surface + ?Sized,
{
    surface.set(point.x, point.y, color)
}

/// Write a pixel if it lies on the surface and skip it otherwise.
///
/// Returns whether the pixel was written.
pub fn clamping_write<S>(surface: &mut S, point: Point, color: S::Color) -> bool
where
    S: Surface + ?Sized,
{
    surface.set(point.x, point.y, color).is_ok()
}

/// Whether the pixel at `(x, y)` exists and equals `color`.
pub(crate) fn matches_at<S>(surface: &S, x: i32, y: i32, color: S::Color) -> bool
where
    S: Surface + ?Sized,
{
    matches!(surface.at(x, y), Ok(c) if c == color)
}

/// Clamp a point into the surface, each axis independently.
pub(crate) fn clamp_point<S>(surface: &S, point: Point) -> Point
where
    S: Surface + ?Sized,
{
    Point::new(
        clamp_axis(point.x, surface.width()),
        clamp_axis(point.y, surface.height()),
    )
}

fn clamp_axis(value: i32, extent: usize) -> i32 {
    let last = i32::try_from(extent.saturating_sub(1)).unwrap_or(i32::MAX);
    value.clamp(0, last)
}

/// Extent of a surface axis as a coordinate.
pub(crate) fn extent(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PnmError;
    use crate::types::Graymap;

    #[test]
    fn test_strict_write_fails_off_grid() {
        let mut grid = Graymap::blank(2, 2, 255).unwrap();
        assert!(strict_write(&mut grid, Point::new(1, 1), 9).is_ok());
        assert!(matches!(
            strict_write(&mut grid, Point::new(2, 0), 9),
            Err(PnmError::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert_eq!(grid.at(1, 1).unwrap(), 9);
    }

    #[test]
    fn test_clamping_write_skips_off_grid() {
        let mut grid = Graymap::blank(2, 2, 255).unwrap();
        assert!(clamping_write(&mut grid, Point::new(0, 1), 9));
        assert!(!clamping_write(&mut grid, Point::new(-1, 1), 9));
        assert!(!clamping_write(&mut grid, Point::new(0, 2), 9));
        assert_eq!(grid.iter_pixels().filter(|&(_, _, v)| v == 9).count(), 1);
    }

    #[test]
    fn test_clamp_point() {
        let grid = Graymap::blank(4, 3, 255).unwrap();
        assert_eq!(clamp_point(&grid, Point::new(-5, 10)), Point::new(0, 2));
        assert_eq!(clamp_point(&grid, Point::new(2, 1)), Point::new(2, 1));
        assert_eq!(clamp_point(&grid, Point::new(9, -1)), Point::new(3, 0));
    }
}
