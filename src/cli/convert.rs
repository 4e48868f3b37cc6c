//! Convert command implementation.
//!
//! Reduces colour depth (ppm → pgm → pbm) and moves images in and out of PNG.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::Format;

/// Convert between Netpbm formats and PNG
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image (.pbm, .pgm, .ppm, or anything the PNG reader accepts)
    pub input: PathBuf,

    /// Output image (.pbm, .pgm, .ppm or .png)
    pub output: PathBuf,

    /// Target format (defaults to the output extension)
    #[arg(long)]
    pub to: Option<Format>,

    /// Scale factor for PNG output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let image = super::load(&args.input, printer)?;

    let target = args.to.or_else(|| Format::from_path(&args.output));
    let image = match target {
        Some(format) if format != image.format() => {
            printer.status("Converting", &format!("{} to {}", image.format(), format));
            image.reduce_to(format)?
        }
        _ => image,
    };

    super::save(&image, &args.output, args.scale, printer)
}
