use serde::{Deserialize, Serialize};

/// An integer pixel coordinate. May lie outside any grid; the drawing
/// operations decide how off-grid points are treated.
///
/// Scenes may write a point as `[x, y]` or `{ x: .., y: .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "PointRepr")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Pair([i32; 2]),
    Fields { x: i32, y: i32 },
}

impl From<PointRepr> for Point {
    fn from(repr: PointRepr) -> Self {
        match repr {
            PointRepr::Pair([x, y]) | PointRepr::Fields { x, y } => Self::new(x, y),
        }
    }
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`, or `None` if either axis overflows.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
