//! Draw command implementation.
//!
//! Renders a scene file onto its own canvas or onto an existing image.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::scene::Scene;

/// Draw the shapes of a scene file
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Scene file (.yaml, .yml or .json)
    pub scene: PathBuf,

    /// Output image (.pbm, .pgm, .ppm or .png)
    pub output: PathBuf,

    /// Draw onto this image instead of the scene's canvas
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Scale factor for PNG output
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    printer.status("Loading", &printer.path(&args.scene));
    let scene = Scene::load(&args.scene)?;

    let mut image = match &args.input {
        Some(input) => {
            if scene.canvas.is_some() {
                printer.warning("Ignoring", "scene canvas, drawing onto --input");
            }
            super::load(input, printer)?
        }
        None => scene.create_canvas()?,
    };

    let count = scene.apply(&mut image)?;
    printer.status("Drew", &plural(count, "shape", "shapes"));

    super::save(&image, &args.output, args.scale, printer)
}
