//! Transform command implementation.
//!
//! Applies whole-image operations in the order given, then optionally
//! rescales the max value.

use std::path::PathBuf;

use clap::Args;

use crate::convert::Transform;
use crate::error::Result;
use crate::output::Printer;

/// Invert, mirror, rotate or rescale an image
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Operation to apply; repeat to chain, applied in order
    #[arg(long = "op", value_enum)]
    pub ops: Vec<Transform>,

    /// Rescale samples to a new max value
    #[arg(long)]
    pub max: Option<u8>,

    /// Scale factor for PNG output
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: TransformArgs, printer: &Printer) -> Result<()> {
    let mut image = super::load(&args.input, printer)?;

    for op in &args.ops {
        printer.status("Applying", &format!("{:?}", op).to_lowercase());
        image.apply(*op);
    }

    if let Some(max) = args.max {
        printer.status(
            "Rescaling",
            &format!("max {} to {}", image.max_sample(), max),
        );
        image.rescale_max(max)?;
    }

    if args.ops.is_empty() && args.max.is_none() {
        printer.warning("Unchanged", "no --op or --max given");
    }

    super::save(&image, &args.output, args.scale, printer)
}
