//! Scanline interior fill shared by every filled shape.
//!
//! The fill assumes the shape's outline has already been drawn in the fill
//! colour. For each row it finds the first and last pixel of that colour and
//! paints everything between them. This is only exact for shapes whose
//! outline crosses each row at its two interior boundaries (convex shapes).
//! Concave outlines, or unrelated pixels that already carry the fill colour,
//! widen the span to whatever lies between the outermost matches.

use std::ops::{Range, RangeInclusive};

use crate::types::Point;

use super::surface::{clamping_write, extent, matches_at, Surface};

/// Fill the span between the outermost `color` pixels of each row in `rows`.
///
/// Rows outside the surface are ignored. A row with fewer than two matching
/// pixels is left alone.
pub fn fill_spans<S>(surface: &mut S, color: S::Color, rows: Range<i32>)
where
    S: Surface + ?Sized,
{
    let rows = rows.start.max(0)..rows.end.min(extent(surface.height()));
    let width = extent(surface.width());

    for y in rows {
        let mut matches = (0..width).filter(|&x| matches_at(surface, x, y, color));
        let Some(first) = matches.next() else {
            continue;
        };
        let Some(last) = matches.last() else {
            continue;
        };

        for x in first + 1..last {
            clamping_write(surface, Point::new(x, y), color);
        }
    }
}

/// Paint every column of each row in `rows`, whatever it held before.
pub(crate) fn fill_rows<S>(surface: &mut S, color: S::Color, rows: RangeInclusive<i32>)
where
    S: Surface + ?Sized,
{
    let width = extent(surface.width());
    for y in rows {
        for x in 0..width {
            clamping_write(surface, Point::new(x, y), color);
        }
    }
}
