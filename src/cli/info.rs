//! Info command implementation.
//!
//! Prints an image's header to stdout, optionally as JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{PnmError, Result};
use crate::output::Printer;
use crate::types::{Format, Image};

/// Print an image's format and dimensions
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image to inspect
    pub input: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Header fields reported by `pnm info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub format: Format,
    pub magic: &'static str,
    pub width: usize,
    pub height: usize,
    pub max: u8,
}

impl From<&Image> for ImageInfo {
    fn from(image: &Image) -> Self {
        let format = image.format();
        Self {
            format,
            magic: format.magic(),
            width: image.width(),
            height: image.height(),
            max: image.max_sample(),
        }
    }
}

impl ImageInfo {
    /// Render as the plain text report.
    pub fn to_text(&self) -> String {
        format!(
            "format: {} ({})\nwidth:  {}\nheight: {}\nmax:    {}\n",
            self.format, self.magic, self.width, self.height, self.max
        )
    }
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let image = super::load(&args.input, printer)?;
    let info = ImageInfo::from(&image);

    if args.json {
        let json = serde_json::to_string_pretty(&info).map_err(|e| PnmError::Validation {
            message: format!("Failed to serialize info: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        print!("{}", info.to_text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Graymap;

    fn sample() -> ImageInfo {
        let grid = Graymap::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]], 9).unwrap();
        ImageInfo::from(&Image::Graymap(grid))
    }

    #[test]
    fn test_info_text() {
        assert_eq!(
            sample().to_text(),
            "format: pgm (P2)\nwidth:  3\nheight: 2\nmax:    9\n"
        );
    }

    #[test]
    fn test_info_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "format": "pgm",
                "magic": "P2",
                "width": 3,
                "height": 2,
                "max": 9
            })
        );
    }
}
