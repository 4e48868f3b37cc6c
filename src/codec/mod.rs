//! Reading and writing images.
//!
//! Netpbm files are handled in their plain ASCII form only. PNG goes through
//! the `image` crate and is used for previews and imports.

mod ascii;
mod png;

pub use ascii::{decode, decode_bitmap, decode_graymap, decode_pixmap, encode};
pub use png::{read_png, to_rgb_image, write_png};

use std::fs;
use std::path::Path;

use crate::error::{PnmError, Result};
use crate::types::{Format, Image};

/// Read an image from disk.
///
/// Files with a Netpbm extension (or none) are decoded as ASCII Netpbm;
/// anything else is handed to the PNG reader.
pub fn read(path: &Path) -> Result<Image> {
    if is_netpbm_path(path) {
        let source = fs::read_to_string(path).map_err(|e| PnmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;
        decode(&source)
    } else {
        read_png(path).map(Image::Pixmap)
    }
}

/// Write an image to disk as ASCII Netpbm.
pub fn write(image: &Image, path: &Path) -> Result<()> {
    fs::write(path, encode(image)).map_err(|e| PnmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

fn is_netpbm_path(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        None => true,
        Some(ext) => Format::from_path(path).is_some() || ext.eq_ignore_ascii_case("pnm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Graymap;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.pgm");
        let image = Image::Graymap(Graymap::from_rows(vec![vec![1, 2], vec![3, 4]], 4).unwrap());

        write(&image, &path).unwrap();
        assert_eq!(read(&path).unwrap(), image);
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.ppm");
        let err = read(&path).unwrap_err();
        assert!(matches!(err, PnmError::Io { .. }));
    }

    #[test]
    fn test_netpbm_path_detection() {
        assert!(is_netpbm_path(Path::new("a.pbm")));
        assert!(is_netpbm_path(Path::new("a.PNM")));
        assert!(is_netpbm_path(Path::new("noext")));
        assert!(!is_netpbm_path(Path::new("a.png")));
    }
}
