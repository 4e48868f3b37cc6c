pub mod completions;
pub mod convert;
pub mod draw;
pub mod info;
pub mod new;
pub mod transform;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::codec;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{Format, Image};

/// pnm - Plain Netpbm drawing and conversion toolkit
#[derive(Parser, Debug)]
#[command(name = "pnm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a blank image
    New(new::NewArgs),

    /// Print an image's format and dimensions
    Info(info::InfoArgs),

    /// Convert between Netpbm formats and PNG
    Convert(convert::ConvertArgs),

    /// Invert, mirror, rotate or rescale an image
    Transform(transform::TransformArgs),

    /// Draw the shapes of a scene file
    Draw(draw::DrawArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Whether `path` should be written as PNG rather than Netpbm.
pub(crate) fn is_png_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Read an input image, reporting it on the printer.
pub(crate) fn load(path: &Path, printer: &Printer) -> Result<Image> {
    printer.status("Reading", &printer.path(path));
    codec::read(path)
}

/// Write an image as PNG or Netpbm depending on the output extension.
pub(crate) fn save(image: &Image, path: &Path, scale: u32, printer: &Printer) -> Result<()> {
    if is_png_path(path) {
        codec::write_png(image, path, scale)?;
    } else {
        if let Some(named) = Format::from_path(path) {
            if named != image.format() {
                printer.warning(
                    "Mismatch",
                    &format!(
                        "{} holds {} data",
                        printer.path(path),
                        image.format()
                    ),
                );
            }
        }
        codec::write(image, path)?;
    }

    let (width, height) = image.size();
    printer.status(
        "Wrote",
        &format!(
            "{} {}",
            printer.path(path),
            printer.dim(&format!("({} {}x{})", image.format(), width, height))
        ),
    );
    Ok(())
}
