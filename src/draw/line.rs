//! Integer Bresenham line stepping.

use crate::types::Point;

use super::surface::{clamp_point, clamping_write, Surface};

/// Trace the segment `from`..=`to` in `color`.
///
/// Both endpoints are first clamped into the surface, each axis on its own.
/// A segment that leaves the grid is therefore drawn towards the clamped
/// endpoint rather than clipped, which bends its direction.
pub fn draw_line<S>(surface: &mut S, from: Point, to: Point, color: S::Color)
where
    S: Surface + ?Sized,
{
    let start = clamp_point(surface, from);
    let end = clamp_point(surface, to);

    for point in BresenhamLine::new(start, end) {
        clamping_write(surface, point, color);
    }
}

/// Iterator over the points of a Bresenham segment, both ends included.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    current: Point,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();

        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }

        Some(point)
    }
}
