//! Core domain types for pnm.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `PixelGrid` - the owned sample buffer, with `Bitmap`/`Graymap`/`Pixmap` aliases
//! - `Pixel` and `Format` - per-depth behaviour and the matching Netpbm format
//! - `Image` - a grid of runtime-selected depth
//! - `Rgb` and `Point` - sample and coordinate values

mod grid;
mod image;
mod pixel;
mod point;
mod rgb;

pub use grid::{Bitmap, Graymap, PixelGrid, Pixmap};
pub(crate) use image::with_grid;
pub use image::Image;
pub use pixel::{Format, Pixel};
pub use point::Point;
pub use rgb::Rgb;
