//! Netpbm formats and the sample types that back them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PnmError, Result};

use super::Rgb;

/// One of the three ASCII Netpbm formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Portable bitmap (P1), one bit per pixel.
    Pbm,
    /// Portable graymap (P2), one channel per pixel.
    Pgm,
    /// Portable pixmap (P3), three channels per pixel.
    Ppm,
}

impl Format {
    /// The ASCII magic number written at the start of the file.
    pub fn magic(self) -> &'static str {
        match self {
            Format::Pbm => "P1",
            Format::Pgm => "P2",
            Format::Ppm => "P3",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Pbm => "pbm",
            Format::Pgm => "pgm",
            Format::Ppm => "ppm",
        }
    }

    /// Look up an ASCII magic number.
    pub fn from_magic(magic: &str) -> Option<Self> {
        match magic {
            "P1" => Some(Format::Pbm),
            "P2" => Some(Format::Pgm),
            "P3" => Some(Format::Ppm),
            _ => None,
        }
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }

    /// Whether this format carries a max-value header line.
    pub fn has_max_value(self) -> bool {
        !matches!(self, Format::Pbm)
    }

    /// Rank by colour depth, used to refuse lossy-in-reverse conversions.
    pub(crate) fn depth(self) -> u8 {
        match self {
            Format::Pbm => 0,
            Format::Pgm => 1,
            Format::Ppm => 2,
        }
    }
}

impl FromStr for Format {
    type Err = PnmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pbm" | "p1" => Ok(Format::Pbm),
            "pgm" | "p2" => Ok(Format::Pgm),
            "ppm" | "p3" => Ok(Format::Ppm),
            _ => Err(PnmError::Parse {
                message: format!("Unknown format: {}", s),
                help: Some("Expected one of pbm, pgm or ppm".to_string()),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A sample type that can live in a Netpbm image.
///
/// The drawing engine needs nothing beyond `Copy + PartialEq`; this trait
/// carries the format-specific behaviour used by transforms and codecs.
pub trait Pixel: Copy + PartialEq + fmt::Debug {
    /// The format this sample type is stored in.
    const FORMAT: Format;

    /// The photographic negative of this sample.
    fn inverted(self, max_sample: u8) -> Self;

    /// Re-express this sample on a `to` scale instead of `from`, rounding
    /// to nearest. `from` is never zero.
    fn rescaled(self, from: u8, to: u8) -> Self;

    /// Expand to 8-bit RGB for display.
    fn to_rgb8(self, max_sample: u8) -> [u8; 3];
}

fn rescale_channel(value: u8, from: u8, to: u8) -> u8 {
    let from = u32::from(from);
    let scaled = (u32::from(value) * u32::from(to) + from / 2) / from;
    scaled.min(u32::from(u8::MAX)) as u8
}

fn expand_channel(value: u8, max_sample: u8) -> u8 {
    if max_sample == 0 {
        return 0;
    }
    rescale_channel(value.min(max_sample), max_sample, u8::MAX)
}

impl Pixel for bool {
    const FORMAT: Format = Format::Pbm;

    fn inverted(self, _max_sample: u8) -> Self {
        !self
    }

    fn rescaled(self, _from: u8, _to: u8) -> Self {
        self
    }

    /// `true` is ink (a `1` in the file), rendered black.
    fn to_rgb8(self, _max_sample: u8) -> [u8; 3] {
        if self {
            [0, 0, 0]
        } else {
            [255, 255, 255]
        }
    }
}

impl Pixel for u8 {
    const FORMAT: Format = Format::Pgm;

    fn inverted(self, max_sample: u8) -> Self {
        max_sample.saturating_sub(self)
    }

    fn rescaled(self, from: u8, to: u8) -> Self {
        rescale_channel(self, from, to)
    }

    fn to_rgb8(self, max_sample: u8) -> [u8; 3] {
        let v = expand_channel(self, max_sample);
        [v, v, v]
    }
}

impl Pixel for Rgb {
    const FORMAT: Format = Format::Ppm;

    fn inverted(self, max_sample: u8) -> Self {
        self.map(|c| max_sample.saturating_sub(c))
    }

    fn rescaled(self, from: u8, to: u8) -> Self {
        self.map(|c| rescale_channel(c, from, to))
    }

    fn to_rgb8(self, max_sample: u8) -> [u8; 3] {
        self.map(|c| expand_channel(c, max_sample)).to_array()
    }
}
