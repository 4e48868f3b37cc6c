//! Shape outlines built from line segments and a distance test.

use crate::types::Point;

use super::line::draw_line;
use super::surface::{clamping_write, extent, Surface};

/// Mark the ring of pixels just inside `radius` around `center`.
///
/// A pixel belongs to the ring when its distance `d` from the centre
/// satisfies `|d - radius| < 1` and `d < radius`. The test alone leaves gaps
/// near the axes, so the four points `radius - 1` away along each axis are
/// always written as well. A non-positive radius draws nothing.
pub fn outline_circle<S>(surface: &mut S, center: Point, radius: i32, color: S::Color)
where
    S: Surface + ?Sized,
{
    if radius <= 0 {
        return;
    }

    let r = f64::from(radius);
    for y in 0..extent(surface.height()) {
        for x in 0..extent(surface.width()) {
            let dx = f64::from(x) - f64::from(center.x);
            let dy = f64::from(y) - f64::from(center.y);
            let distance = (dx * dx + dy * dy).sqrt();

            if (distance - r).abs() < 1.0 && distance < r {
                clamping_write(surface, Point::new(x, y), color);
            }
        }
    }

    let reach = radius - 1;
    // Cardinals that overflow the coordinate range are off-grid anyway.
    let cardinals = [
        center.checked_offset(reach, 0),
        center.checked_offset(-reach, 0),
        center.checked_offset(0, reach),
        center.checked_offset(0, -reach),
    ];
    for point in cardinals.into_iter().flatten() {
        clamping_write(surface, point, color);
    }
}

/// Connect `vertices` in order and close the last one back to the first.
///
/// Fewer than three vertices draws nothing.
pub fn outline_polygon<S>(surface: &mut S, vertices: &[Point], color: S::Color)
where
    S: Surface + ?Sized,
{
    if vertices.len() < 3 {
        return;
    }

    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        draw_line(surface, from, to, color);
    }
}

/// Outline the triangle `a`, `b`, `c`.
pub fn outline_triangle<S>(surface: &mut S, a: Point, b: Point, c: Point, color: S::Color)
where
    S: Surface + ?Sized,
{
    outline_polygon(surface, &[a, b, c], color);
}

/// A rectangle after it has been shrunk to fit a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClippedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    /// The left edge is only drawn when the rectangle did not start left of the grid.
    pub left_edge: bool,
    /// The top edge is only drawn when the rectangle did not start above the grid.
    pub top_edge: bool,
}

impl ClippedRect {
    /// Shrink the rectangle at `origin` (its top-left pixel) spanning
    /// `width` x `height` pixels to fit `surface`.
    ///
    /// Overhang past the left or top of the grid removes that many pixels
    /// and drops the edge on that side. Overhang past the right or bottom
    /// pulls that edge back onto the grid border. Returns `None` when
    /// nothing of the rectangle is left.
    pub fn fit<S>(surface: &S, origin: Point, width: i32, height: i32) -> Option<Self>
    where
        S: Surface + ?Sized,
    {
        if width <= 0 || height <= 0 {
            return None;
        }

        let (mut left, mut top) = (i64::from(origin.x), i64::from(origin.y));
        let (mut width, mut height) = (i64::from(width), i64::from(height));
        let left_edge = left >= 0;
        let top_edge = top >= 0;

        if left < 0 {
            width += left;
            left = 0;
        }
        if top < 0 {
            height += top;
            top = 0;
        }

        let grid_width = surface.width() as i64;
        let grid_height = surface.height() as i64;
        if left + width > grid_width {
            width = grid_width - left;
        }
        if top + height > grid_height {
            height = grid_height - top;
        }

        if width <= 0 || height <= 0 {
            return None;
        }

        // Every coordinate is now inside the grid, so it fits in an i32.
        Some(Self {
            left: left as i32,
            top: top as i32,
            right: (left + width - 1) as i32,
            bottom: (top + height - 1) as i32,
            left_edge,
            top_edge,
        })
    }
}

/// Outline the rectangle with top-left pixel `origin`, clipped as described
/// on [`ClippedRect::fit`].
pub fn outline_rectangle<S>(
    surface: &mut S,
    origin: Point,
    width: i32,
    height: i32,
    color: S::Color,
) -> Option<ClippedRect>
where
    S: Surface + ?Sized,
{
    let rect = ClippedRect::fit(surface, origin, width, height)?;

    let top_left = Point::new(rect.left, rect.top);
    let top_right = Point::new(rect.right, rect.top);
    let bottom_left = Point::new(rect.left, rect.bottom);
    let bottom_right = Point::new(rect.right, rect.bottom);

    if rect.top_edge {
        draw_line(surface, top_left, top_right, color);
    }
    draw_line(surface, bottom_left, bottom_right, color);
    if rect.left_edge {
        draw_line(surface, top_left, bottom_left, color);
    }
    draw_line(surface, top_right, bottom_right, color);

    Some(rect)
}
