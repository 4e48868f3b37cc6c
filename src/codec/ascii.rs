//! Plain (ASCII) Netpbm decoding and encoding: P1, P2 and P3.

use crate::error::{PnmError, Result};
use crate::types::{Bitmap, Format, Graymap, Image, PixelGrid, Pixmap, Rgb};

/// A whitespace-separated token and the 1-based line it came from.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

/// Cursor over the tokens of a file, with `#` comments removed.
struct Tokens<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        let tokens: Vec<Token<'a>> = source
            .lines()
            .enumerate()
            .flat_map(|(i, line)| {
                let content = line.split('#').next().unwrap_or("");
                content
                    .split_whitespace()
                    .map(move |text| Token { text, line: i + 1 })
            })
            .collect();

        Self {
            tokens,
            pos: 0,
            last_line: source.lines().count().max(1),
        }
    }

    fn next(&mut self, what: &str) -> Result<Token<'a>> {
        let token = self.tokens.get(self.pos).copied().ok_or_else(|| PnmError::Parse {
            message: format!("Unexpected end of file at line {}: expected {}", self.last_line, what),
            help: None,
        })?;
        self.pos += 1;
        Ok(token)
    }

    fn number(&mut self, what: &str) -> Result<(u32, usize)> {
        let token = self.next(what)?;
        let value = token.text.parse::<u32>().map_err(|_| {
            PnmError::parse(format!(
                "Line {}: expected {}, found '{}'",
                token.line, what, token.text
            ))
        })?;
        Ok((value, token.line))
    }

    fn dimension(&mut self, what: &str) -> Result<usize> {
        let (value, line) = self.number(what)?;
        if value == 0 {
            return Err(PnmError::parse(format!("Line {}: {} must be at least 1", line, what)));
        }
        Ok(value as usize)
    }

    fn sample(&mut self, max_sample: u8) -> Result<u8> {
        let (value, line) = self.number("a sample value")?;
        if value > u32::from(max_sample) {
            return Err(PnmError::parse(format!(
                "Line {}: sample {} exceeds the max value {}",
                line, value, max_sample
            )));
        }
        Ok(value as u8)
    }

    fn finish(&self) -> Result<()> {
        match self.tokens.get(self.pos) {
            Some(token) => Err(PnmError::Parse {
                message: format!("Line {}: unexpected trailing data '{}'", token.line, token.text),
                help: Some("The header dimensions may not match the pixel data".to_string()),
            }),
            None => Ok(()),
        }
    }
}

/// Decode an ASCII Netpbm file.
pub fn decode(source: &str) -> Result<Image> {
    let mut tokens = Tokens::new(source);

    let magic = tokens.next("a magic number")?;
    let format = match Format::from_magic(magic.text) {
        Some(format) => format,
        None if matches!(magic.text, "P4" | "P5" | "P6") => {
            return Err(PnmError::Parse {
                message: format!("Binary Netpbm ({}) is not supported", magic.text),
                help: Some("Re-save the image as plain P1, P2 or P3".to_string()),
            });
        }
        None => {
            return Err(PnmError::Parse {
                message: format!("Not a Netpbm file: bad magic number '{}'", magic.text),
                help: Some("Expected P1, P2 or P3".to_string()),
            });
        }
    };

    let width = tokens.dimension("width")?;
    let height = tokens.dimension("height")?;
    let max_sample = if format.has_max_value() {
        let (value, line) = tokens.number("max value")?;
        match u8::try_from(value) {
            Ok(max) if max > 0 => max,
            _ => {
                return Err(PnmError::Parse {
                    message: format!("Line {}: max value {} is out of range", line, value),
                    help: Some("Max values must be between 1 and 255".to_string()),
                });
            }
        }
    } else {
        1
    };

    let image = match format {
        Format::Pbm => Image::Bitmap(decode_bits(&mut tokens, width, height)?),
        Format::Pgm => Image::Graymap(decode_samples(&mut tokens, width, height, max_sample, |t| {
            t.sample(max_sample)
        })?),
        Format::Ppm => Image::Pixmap(decode_samples(&mut tokens, width, height, max_sample, |t| {
            Ok(Rgb::new(t.sample(max_sample)?, t.sample(max_sample)?, t.sample(max_sample)?))
        })?),
    };

    tokens.finish()?;
    Ok(image)
}

fn decode_samples<C, F>(
    tokens: &mut Tokens<'_>,
    width: usize,
    height: usize,
    max_sample: u8,
    mut next: F,
) -> Result<PixelGrid<C>>
where
    C: Copy + PartialEq,
    F: FnMut(&mut Tokens<'_>) -> Result<C>,
{
    let mut rows = Vec::new();
    for _ in 0..height {
        let mut row = Vec::new();
        for _ in 0..width {
            row.push(next(tokens)?);
        }
        rows.push(row);
    }
    PixelGrid::from_rows(rows, max_sample)
}

/// P1 bodies may separate bits with whitespace or pack them (`0110`).
fn decode_bits(tokens: &mut Tokens<'_>, width: usize, height: usize) -> Result<Bitmap> {
    let expected = width.saturating_mul(height);
    let mut bits = Vec::new();
    while bits.len() < expected {
        let token = tokens.next("a bit")?;
        for c in token.text.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => {
                    return Err(PnmError::parse(format!(
                        "Line {}: expected 0 or 1, found '{}'",
                        token.line, token.text
                    )));
                }
            }
        }
    }

    if bits.len() > expected {
        return Err(PnmError::parse(format!(
            "Bitmap has {} bits, expected {}",
            bits.len(),
            expected
        )));
    }

    let rows = bits.chunks(width).map(<[bool]>::to_vec).collect();
    PixelGrid::from_rows(rows, 1)
}

/// Encode an image as ASCII Netpbm.
///
/// The header is the magic number, `width height`, and for P2/P3 the max
/// value, each on its own line, followed by one line per row.
pub fn encode(image: &Image) -> String {
    match image {
        Image::Bitmap(grid) => encode_grid(grid, Format::Pbm, |&bit| {
            String::from(if bit { "1" } else { "0" })
        }),
        Image::Graymap(grid) => encode_grid(grid, Format::Pgm, u8::to_string),
        Image::Pixmap(grid) => encode_grid(grid, Format::Ppm, |p: &Rgb| {
            format!("{} {} {}", p.r, p.g, p.b)
        }),
    }
}

fn encode_grid<C, F>(grid: &PixelGrid<C>, format: Format, sample: F) -> String
where
    C: Copy + PartialEq,
    F: Fn(&C) -> String,
{
    let mut out = format!("{}\n{} {}\n", format.magic(), grid.width(), grid.height());
    if format.has_max_value() {
        out.push_str(&format!("{}\n", grid.max_sample()));
    }

    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(&sample).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Decode and check that the file holds a bitmap.
pub fn decode_bitmap(source: &str) -> Result<Bitmap> {
    match decode(source)? {
        Image::Bitmap(grid) => Ok(grid),
        other => Err(wrong_format(Format::Pbm, other.format())),
    }
}

/// Decode and check that the file holds a graymap.
pub fn decode_graymap(source: &str) -> Result<Graymap> {
    match decode(source)? {
        Image::Graymap(grid) => Ok(grid),
        other => Err(wrong_format(Format::Pgm, other.format())),
    }
}

/// Decode and check that the file holds a pixmap.
pub fn decode_pixmap(source: &str) -> Result<Pixmap> {
    match decode(source)? {
        Image::Pixmap(grid) => Ok(grid),
        other => Err(wrong_format(Format::Ppm, other.format())),
    }
}

fn wrong_format(expected: Format, found: Format) -> PnmError {
    PnmError::parse(format!("Expected a {} image, found {}", expected, found))
}
