//! Colour values as written in scene files, resolved per image depth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PnmError, Result};
use crate::types::Rgb;

/// A colour as written in a scene: `true`, `1`, `[r, g, b]`, `"#FF8800"`,
/// `"black"` and so on. Its meaning depends on the image it is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Bool(bool),
    Number(u32),
    Channels([u8; 3]),
    Text(String),
}

impl ColorSpec {
    /// The default canvas background.
    pub fn white() -> Self {
        ColorSpec::Text("white".to_string())
    }

    /// `"black"` or `"white"`, case-insensitively.
    fn named(&self) -> Option<Named> {
        match self {
            ColorSpec::Text(s) if s.trim().eq_ignore_ascii_case("black") => Some(Named::Black),
            ColorSpec::Text(s) if s.trim().eq_ignore_ascii_case("white") => Some(Named::White),
            _ => None,
        }
    }

    /// A plain number, also accepted as a numeric string.
    fn number(&self) -> Option<u32> {
        match self {
            ColorSpec::Number(n) => Some(*n),
            ColorSpec::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Bool(b) => write!(f, "{}", b),
            ColorSpec::Number(n) => write!(f, "{}", n),
            ColorSpec::Channels([r, g, b]) => write!(f, "[{}, {}, {}]", r, g, b),
            ColorSpec::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// Command-line spelling: `true`, `0`, `255,128,0`, `#FF8000`, `black`.
impl FromStr for ColorSpec {
    type Err = PnmError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PnmError::parse("Empty colour"));
        }
        if let Ok(b) = s.parse::<bool>() {
            return Ok(ColorSpec::Bool(b));
        }
        if let Ok(n) = s.parse::<u32>() {
            return Ok(ColorSpec::Number(n));
        }
        if s.contains(',') {
            let channels: Vec<u8> = s
                .split(',')
                .map(|c| c.trim().parse::<u8>())
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| PnmError::parse(format!("Invalid channel in '{}': {}", s, e)))?;
            let channels: [u8; 3] = channels
                .try_into()
                .map_err(|_| PnmError::parse(format!("Expected three channels in '{}'", s)))?;
            return Ok(ColorSpec::Channels(channels));
        }
        Ok(ColorSpec::Text(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Named {
    Black,
    White,
}

/// A sample type a [`ColorSpec`] can be resolved to.
pub trait SceneColor: Copy + PartialEq {
    /// Resolve `color` for an image whose samples top out at `max_sample`.
    fn resolve(color: &ColorSpec, max_sample: u8) -> Result<Self>;

    /// Which colour spellings this depth accepts.
    fn help() -> &'static str;
}

impl SceneColor for bool {
    fn resolve(color: &ColorSpec, _max_sample: u8) -> Result<Self> {
        if let ColorSpec::Bool(b) = color {
            return Ok(*b);
        }
        match (color.named(), color.number()) {
            (Some(Named::Black), _) | (_, Some(1)) => Ok(true),
            (Some(Named::White), _) | (_, Some(0)) => Ok(false),
            _ => Err(PnmError::validation(format!("{} is not a bitmap colour", color))),
        }
    }

    fn help() -> &'static str {
        "Bitmap colours are 1, 0, true, false, \"black\" or \"white\""
    }
}

impl SceneColor for u8 {
    fn resolve(color: &ColorSpec, max_sample: u8) -> Result<Self> {
        match color.named() {
            Some(Named::Black) => return Ok(0),
            Some(Named::White) => return Ok(max_sample),
            None => {}
        }

        let value = color
            .number()
            .ok_or_else(|| PnmError::validation(format!("{} is not a graymap colour", color)))?;
        check_sample(value, max_sample)
    }

    fn help() -> &'static str {
        "Graymap colours are numbers from 0 to the image's max value, \"black\" or \"white\""
    }
}

impl SceneColor for Rgb {
    fn resolve(color: &ColorSpec, max_sample: u8) -> Result<Self> {
        match color.named() {
            Some(Named::Black) => return Ok(Rgb::BLACK),
            Some(Named::White) => return Ok(Rgb::splat(max_sample)),
            None => {}
        }

        let rgb = match color {
            ColorSpec::Channels(channels) => Rgb::from(*channels),
            ColorSpec::Text(s) if s.trim_start().starts_with('#') => Rgb::from_hex(s)?,
            _ => match color.number() {
                Some(value) => Rgb::splat(check_sample(value, max_sample)?),
                None => {
                    return Err(PnmError::validation(format!("{} is not a pixmap colour", color)));
                }
            },
        };

        if rgb.max_channel() > max_sample {
            return Err(PnmError::validation(format!(
                "{} exceeds the max value {}",
                rgb, max_sample
            )));
        }
        Ok(rgb)
    }

    fn help() -> &'static str {
        "Pixmap colours are \"#RRGGBB\", \"#RGB\", [r, g, b], a gray level, \"black\" or \"white\""
    }
}

fn check_sample(value: u32, max_sample: u8) -> Result<u8> {
    match u8::try_from(value) {
        Ok(v) if v <= max_sample => Ok(v),
        _ => Err(PnmError::validation(format!(
            "{} exceeds the max value {}",
            value, max_sample
        ))),
    }
}
