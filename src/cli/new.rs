//! New command implementation.
//!
//! Creates a blank image filled with one colour.

use std::path::PathBuf;

use clap::Args;

use crate::error::{PnmError, Result};
use crate::output::Printer;
use crate::scene::{Canvas, ColorSpec};
use crate::types::Format;

/// Create a blank image
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Output file (.pbm, .pgm, .ppm or .png)
    pub output: PathBuf,

    /// Width in pixels
    #[arg(long, short = 'W')]
    pub width: usize,

    /// Height in pixels
    #[arg(long, short = 'H')]
    pub height: usize,

    /// Format (defaults to the output extension)
    #[arg(long)]
    pub format: Option<Format>,

    /// Max sample value (ignored for pbm)
    #[arg(long)]
    pub max: Option<u8>,

    /// Fill colour: black, white, 0..max, r,g,b or #RRGGBB
    #[arg(long)]
    pub background: Option<ColorSpec>,

    /// Scale factor for PNG output
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: NewArgs, printer: &Printer) -> Result<()> {
    let format = args
        .format
        .or_else(|| Format::from_path(&args.output))
        .ok_or_else(|| PnmError::Validation {
            message: format!("Cannot tell the format of {}", args.output.display()),
            help: Some("Pass --format pbm, pgm or ppm".to_string()),
        })?;

    let canvas = Canvas {
        format,
        width: args.width,
        height: args.height,
        max: args.max,
        background: args.background,
    };
    let image = canvas.create()?;

    super::save(&image, &args.output, args.scale, printer)
}
