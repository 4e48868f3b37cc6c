//! PNG interop through the `image` crate.
//!
//! Export expands samples to 8 bits per channel with optional integer
//! scaling; import flattens any readable image to an RGB pixmap.

use std::path::Path;

use image::{ImageBuffer, Rgb as ImageRgb, RgbImage};

use crate::error::{PnmError, Result};
use crate::types::{with_grid, Image, Pixel, PixelGrid, Pixmap, Rgb};

/// Write an image to a PNG file.
///
/// # Arguments
///
/// * `image` - The image to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(image: &Image, path: &Path, scale: u32) -> Result<()> {
    let img = with_grid!(image, g => to_rgb_image(g, scale))?;

    img.save(path).map_err(|e| PnmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Expand a grid into an 8-bit RGB buffer, nearest-neighbour scaled.
///
/// Fails when the scaled size does not fit in a PNG buffer.
pub fn to_rgb_image<C: Pixel>(grid: &PixelGrid<C>, scale: u32) -> Result<RgbImage> {
    let scale = scale.max(1); // Minimum scale of 1

    let scaled = |len: usize| u32::try_from(len).ok().and_then(|len| len.checked_mul(scale));
    let size = scaled(grid.width()).zip(scaled(grid.height())).filter(|&(w, h)| {
        u64::from(w)
            .checked_mul(u64::from(h))
            .and_then(|n| n.checked_mul(3))
            .is_some_and(|n| usize::try_from(n).is_ok())
    });
    let Some((width, height)) = size else {
        return Err(PnmError::Validation {
            message: format!(
                "Scaling {}x{} by {} is too large for a PNG",
                grid.width(),
                grid.height(),
                scale
            ),
            help: Some("Use a smaller --scale".to_string()),
        });
    };
    let max_sample = grid.max_sample();

    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (x, y, sample) in grid.iter_pixels() {
        let rgb = ImageRgb(sample.to_rgb8(max_sample));
        let (left, top) = (x as u32 * scale, y as u32 * scale);

        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(left + sx, top + sy, rgb);
            }
        }
    }

    Ok(img)
}

/// Read any image the `image` crate understands as a max-255 pixmap.
///
/// Alpha is discarded.
pub fn read_png(path: &Path) -> Result<Pixmap> {
    let img = image::open(path)
        .map_err(|e| PnmError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let rows = img
        .rows()
        .map(|row| row.map(|p| Rgb::from(p.0)).collect())
        .collect();

    PixelGrid::from_rows(rows, u8::MAX)
}
