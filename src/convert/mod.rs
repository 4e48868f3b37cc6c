//! Conversions between colour depths and whole-image transforms.
//!
//! Depth conversion only goes downwards (ppm → pgm → pbm): the grayscale
//! average and the bitonal threshold are the policies every reference image
//! is produced with, so they are reproduced exactly.

mod reduce;
mod transform;

pub use reduce::{to_bitonal, to_grayscale};

use crate::error::{PnmError, Result};
use crate::types::{with_grid, Format, Image};

/// A whole-image operation that can be chained on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Transform {
    /// Swap ink and paper, or `max - v` per channel
    Invert,
    /// Mirror left to right
    Flip,
    /// Mirror top to bottom
    Flop,
    /// Rotate 90° clockwise
    Rotate,
}

impl Image {
    /// Reduce the image to `target`, which must not be deeper than the
    /// current format.
    pub fn reduce_to(self, target: Format) -> Result<Image> {
        let source = self.format();
        if target.depth() > source.depth() {
            return Err(PnmError::Validation {
                message: format!("Cannot convert {} to {}", source, target),
                help: Some("Only conversions towards fewer colours (ppm → pgm → pbm) are supported".to_string()),
            });
        }

        Ok(match (self, target) {
            (Image::Pixmap(grid), Format::Pgm) => Image::Graymap(grid.to_graymap()),
            (Image::Pixmap(grid), Format::Pbm) => Image::Bitmap(grid.to_bitmap()),
            (Image::Graymap(grid), Format::Pbm) => Image::Bitmap(grid.to_bitmap()),
            (image, _) => image,
        })
    }

    /// Apply a transform in place.
    pub fn apply(&mut self, transform: Transform) {
        match transform {
            Transform::Invert => with_grid!(self, g => g.invert()),
            Transform::Flip => with_grid!(self, g => g.flip()),
            Transform::Flop => with_grid!(self, g => g.flop()),
            Transform::Rotate => with_grid!(self, g => g.rotate_cw()),
        }
    }

    /// Rescale every sample to a new max value. Bitmaps are unaffected.
    pub fn rescale_max(&mut self, new_max: u8) -> Result<()> {
        with_grid!(self, g => g.rescale_max(new_max))
    }
}
