//! Shape rasterization onto pixel grids.
//!
//! Every operation is written against [`Surface`], so the same code draws
//! on bitmaps, graymaps and pixmaps. The [`Draw`] trait is the public entry
//! point and is implemented for every surface.
//!
//! None of the shape operations report errors. Off-grid pixels are skipped,
//! and degenerate shapes (fewer than three polygon vertices, a rectangle
//! with no area left on the grid, a non-positive radius) draw nothing.

mod fill;
mod line;
mod outline;
mod surface;

pub use fill::fill_spans;
pub use line::{draw_line, BresenhamLine};
pub use outline::{
    outline_circle, outline_polygon, outline_rectangle, outline_triangle, ClippedRect,
};
pub use surface::{clamping_write, strict_write, Surface};

use crate::types::Point;

use surface::extent;

/// Outlined and filled shapes, available on any [`Surface`].
///
/// Filled variants draw the outline first and then fill each row between
/// its outermost outline pixels; see [`fill_spans`] for the limits of that
/// approach on concave shapes.
pub trait Draw: Surface {
    /// Draw a line segment, both ends included.
    fn draw_line(&mut self, from: Point, to: Point, color: Self::Color) {
        line::draw_line(self, from, to, color);
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Self::Color) {
        outline_circle(self, center, radius, color);
    }

    fn draw_filled_circle(&mut self, center: Point, radius: i32, color: Self::Color) {
        outline_circle(self, center, radius, color);
        self.fill_all_rows(color);
    }

    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, color: Self::Color) {
        outline_triangle(self, a, b, c, color);
    }

    fn draw_filled_triangle(&mut self, a: Point, b: Point, c: Point, color: Self::Color) {
        outline_triangle(self, a, b, c, color);
        self.fill_all_rows(color);
    }

    /// Draw the rectangle whose top-left pixel is `origin`.
    fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: Self::Color) {
        outline_rectangle(self, origin, width, height, color);
    }

    /// Draw and fill the rectangle whose top-left pixel is `origin`.
    ///
    /// When both requested dimensions exceed the grid's, every row the
    /// clipped rectangle covers is painted across the full grid width,
    /// whatever the origin. Otherwise the scanline fill runs over every row.
    fn draw_filled_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Self::Color,
    ) {
        let Some(rect) = outline_rectangle(self, origin, width, height, color) else {
            return;
        };

        let oversize = i64::from(width) > self.width() as i64
            && i64::from(height) > self.height() as i64;
        if oversize {
            fill::fill_rows(self, color, rect.top..=rect.bottom);
        } else {
            self.fill_all_rows(color);
        }
    }

    /// Outline a closed polygon. Fewer than three vertices draws nothing.
    fn draw_polygon(&mut self, vertices: &[Point], color: Self::Color) {
        outline_polygon(self, vertices, color);
    }

    fn draw_filled_polygon(&mut self, vertices: &[Point], color: Self::Color) {
        if vertices.len() < 3 {
            return;
        }
        outline_polygon(self, vertices, color);
        self.fill_all_rows(color);
    }

    /// Run the scanline fill over every row.
    fn fill_all_rows(&mut self, color: Self::Color) {
        let height = extent(self.height());
        fill_spans(self, color, 0..height);
    }
}

impl<S: Surface + ?Sized> Draw for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bitmap, Graymap, Pixmap, Rgb};

    fn render(grid: &Bitmap) -> Vec<String> {
        grid.rows()
            .iter()
            .map(|row| row.iter().map(|&b| if b { '#' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn test_filled_rectangle_touches_only_its_block() {
        let mut grid = Graymap::new(6, 6, 255, 7).unwrap();
        grid.draw_filled_rectangle(Point::new(1, 1), 3, 3, 200);

        for (x, y, v) in grid.iter_pixels() {
            let inside = (1..=3).contains(&x) && (1..=3).contains(&y);
            assert_eq!(v, if inside { 200 } else { 7 }, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_filled_rectangle_oversize_paints_every_row() {
        let mut grid = Bitmap::blank(4, 3).unwrap();
        grid.draw_filled_rectangle(Point::new(-1, 1), 10, 10, true);
        assert_eq!(render(&grid), vec!["....", "####", "####"]);
    }

    #[test]
    fn test_filled_rectangle_oversize_fills_entire_rows() {
        // The clipped span starts at x = 2, but the whole row is painted.
        let mut grid = Bitmap::blank(4, 4).unwrap();
        grid.draw_filled_rectangle(Point::new(2, 1), 10, 10, true);
        assert_eq!(render(&grid), vec!["....", "####", "####", "####"]);
    }

    #[test]
    fn test_filled_rectangle_left_overhang_without_oversize() {
        // The left edge is dropped, so middle rows only carry the right edge
        // and the scanline fill has nothing to span.
        let mut grid = Bitmap::blank(5, 5).unwrap();
        grid.draw_filled_rectangle(Point::new(-1, 0), 4, 4, true);
        assert_eq!(
            render(&grid),
            vec!["###..", "..#..", "..#..", "###..", "....."]
        );
    }

    #[test]
    fn test_filled_circle_is_solid() {
        let mut grid = Bitmap::blank(11, 11).unwrap();
        grid.draw_filled_circle(Point::new(5, 5), 4, true);

        for (x, y, inked) in grid.iter_pixels() {
            let dx = x as f64 - 5.0;
            let dy = y as f64 - 5.0;
            if (dx * dx + dy * dy).sqrt() <= 3.0 {
                assert!(inked, "({}, {}) should be filled", x, y);
            }
        }
        assert!(!grid.at(0, 0).unwrap());
        assert!(!grid.at(5, 0).unwrap());
    }

    #[test]
    fn test_filled_triangle() {
        let mut grid = Bitmap::blank(5, 5).unwrap();
        grid.draw_filled_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), true);
        assert_eq!(
            render(&grid),
            vec!["#####", "####.", "###..", "##...", "#...."]
        );
    }

    #[test]
    fn test_filled_polygon_on_pixmap() {
        let red = Rgb::new(255, 0, 0);
        let mut grid = Pixmap::new(6, 6, 255, Rgb::WHITE).unwrap();
        let diamond = [
            Point::new(3, 0),
            Point::new(5, 2),
            Point::new(3, 4),
            Point::new(1, 2),
        ];
        grid.draw_filled_polygon(&diamond, red);

        let row = |y: usize| -> Vec<bool> { grid.rows()[y].iter().map(|&c| c == red).collect() };
        assert_eq!(row(0), vec![false, false, false, true, false, false]);
        assert_eq!(row(1), vec![false, false, true, true, true, false]);
        assert_eq!(row(2), vec![false, true, true, true, true, true]);
        assert_eq!(row(3), vec![false, false, true, true, true, false]);
        assert_eq!(row(4), vec![false, false, false, true, false, false]);
        assert_eq!(row(5), vec![false; 6]);
    }

    #[test]
    fn test_two_vertex_polygon_writes_nothing() {
        let mut grid = Bitmap::blank(5, 5).unwrap();
        let before = grid.clone();
        let segment = [Point::new(0, 0), Point::new(4, 4)];
        grid.draw_polygon(&segment, true);
        grid.draw_filled_polygon(&segment, true);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_draw_through_trait_object() {
        let mut grid = Graymap::blank(3, 3, 255).unwrap();
        let surface: &mut dyn Surface<Color = u8> = &mut grid;
        surface.draw_line(Point::new(0, 2), Point::new(2, 2), 4);
        assert_eq!(grid.rows()[2], vec![4, 4, 4]);
    }
}
