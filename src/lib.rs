//! pnm - Plain Netpbm drawing and conversion toolkit
//!
//! A library for rasterizing lines, outlines and filled shapes onto bitmaps,
//! graymaps and pixmaps, and for reading and writing them as ASCII Netpbm.

pub mod cli;
pub mod codec;
pub mod convert;
pub mod draw;
pub mod error;
pub mod output;
pub mod scene;
pub mod types;

pub use codec::{decode, encode, read, read_png, write, write_png};
pub use convert::{to_bitonal, to_grayscale, Transform};
pub use draw::{clamping_write, strict_write, Draw, Surface};
pub use error::{PnmError, Result};
pub use scene::{Canvas, ColorSpec, Scene, SceneColor, ShapeSpec};
pub use types::{Bitmap, Format, Graymap, Image, Pixel, PixelGrid, Pixmap, Point, Rgb};
