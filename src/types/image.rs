//! An image whose colour depth is only known at runtime.

use super::{Bitmap, Format, Graymap, Pixmap};

/// A decoded Netpbm image of any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

/// Run the same expression against whichever grid the image holds.
macro_rules! with_grid {
    ($image:expr, $grid:ident => $body:expr) => {
        match $image {
            $crate::types::Image::Bitmap($grid) => $body,
            $crate::types::Image::Graymap($grid) => $body,
            $crate::types::Image::Pixmap($grid) => $body,
        }
    };
}

pub(crate) use with_grid;

impl Image {
    /// The format this image is stored in.
    pub fn format(&self) -> Format {
        match self {
            Image::Bitmap(_) => Format::Pbm,
            Image::Graymap(_) => Format::Pgm,
            Image::Pixmap(_) => Format::Ppm,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        with_grid!(self, g => g.width())
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        with_grid!(self, g => g.height())
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// The channel ceiling (always 1 for bitmaps).
    pub fn max_sample(&self) -> u8 {
        with_grid!(self, g => g.max_sample())
    }
}

impl From<Bitmap> for Image {
    fn from(grid: Bitmap) -> Self {
        Image::Bitmap(grid)
    }
}

impl From<Graymap> for Image {
    fn from(grid: Graymap) -> Self {
        Image::Graymap(grid)
    }
}

impl From<Pixmap> for Image {
    fn from(grid: Pixmap) -> Self {
        Image::Pixmap(grid)
    }
}
