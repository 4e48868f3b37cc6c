//! Drawing scenes: a YAML (or JSON) list of shapes to draw onto an image.
//!
//! A scene optionally describes its own blank canvas; otherwise it is drawn
//! onto an existing image.
//!
//! ```yaml
//! canvas:
//!   format: ppm
//!   width: 32
//!   height: 32
//!   background: "#FFFFFF"
//! shapes:
//!   - shape: circle
//!     center: [16, 16]
//!     radius: 10
//!     color: "#FF0000"
//!     filled: true
//! ```

mod color;

pub use color::{ColorSpec, SceneColor};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draw::Draw;
use crate::error::{PnmError, Result};
use crate::types::{with_grid, Bitmap, Format, Graymap, Image, PixelGrid, Pixmap, Point, Rgb};

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Blank canvas to create when no input image is given.
    #[serde(default)]
    pub canvas: Option<Canvas>,

    /// Shapes, drawn in order.
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

/// Description of a blank canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Canvas {
    pub format: Format,
    pub width: usize,
    pub height: usize,

    /// Max sample value. Defaults to 255 (ignored for pbm).
    #[serde(default)]
    pub max: Option<u8>,

    /// Fill colour. Defaults to white.
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

/// One shape to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase", deny_unknown_fields)]
pub enum ShapeSpec {
    Line {
        from: Point,
        to: Point,
        color: ColorSpec,
    },
    Circle {
        center: Point,
        radius: i32,
        color: ColorSpec,
        #[serde(default)]
        filled: bool,
    },
    Rectangle {
        origin: Point,
        width: i32,
        height: i32,
        color: ColorSpec,
        #[serde(default)]
        filled: bool,
    },
    Triangle {
        points: [Point; 3],
        color: ColorSpec,
        #[serde(default)]
        filled: bool,
    },
    Polygon {
        points: Vec<Point>,
        color: ColorSpec,
        #[serde(default)]
        filled: bool,
    },
}

impl ShapeSpec {
    /// Short name used in status output.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeSpec::Line { .. } => "line",
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::Rectangle { .. } => "rectangle",
            ShapeSpec::Triangle { .. } => "triangle",
            ShapeSpec::Polygon { .. } => "polygon",
        }
    }

    fn color(&self) -> &ColorSpec {
        match self {
            ShapeSpec::Line { color, .. }
            | ShapeSpec::Circle { color, .. }
            | ShapeSpec::Rectangle { color, .. }
            | ShapeSpec::Triangle { color, .. }
            | ShapeSpec::Polygon { color, .. } => color,
        }
    }

    /// Draw this shape onto a grid, resolving its colour for the grid's depth.
    pub fn draw_on<C: SceneColor>(&self, grid: &mut PixelGrid<C>) -> Result<()> {
        let color = C::resolve(self.color(), grid.max_sample())?;

        match self {
            ShapeSpec::Line { from, to, .. } => grid.draw_line(*from, *to, color),
            ShapeSpec::Circle {
                center,
                radius,
                filled,
                ..
            } => {
                if *filled {
                    grid.draw_filled_circle(*center, *radius, color)
                } else {
                    grid.draw_circle(*center, *radius, color)
                }
            }
            ShapeSpec::Rectangle {
                origin,
                width,
                height,
                filled,
                ..
            } => {
                if *filled {
                    grid.draw_filled_rectangle(*origin, *width, *height, color)
                } else {
                    grid.draw_rectangle(*origin, *width, *height, color)
                }
            }
            ShapeSpec::Triangle {
                points: [a, b, c],
                filled,
                ..
            } => {
                if *filled {
                    grid.draw_filled_triangle(*a, *b, *c, color)
                } else {
                    grid.draw_triangle(*a, *b, *c, color)
                }
            }
            ShapeSpec::Polygon { points, filled, .. } => {
                if *filled {
                    grid.draw_filled_polygon(points, color)
                } else {
                    grid.draw_polygon(points, color)
                }
            }
        }

        Ok(())
    }
}

impl Scene {
    /// Load a scene file. `.json` files are parsed as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PnmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a scene from YAML.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PnmError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Check the scene's YAML syntax".to_string()),
        })
    }

    /// Parse a scene from JSON.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| PnmError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Check the scene's JSON syntax".to_string()),
        })
    }

    /// Create the blank canvas the scene describes.
    pub fn create_canvas(&self) -> Result<Image> {
        let canvas = self.canvas.as_ref().ok_or_else(|| PnmError::Validation {
            message: "Scene has no canvas and no input image was given".to_string(),
            help: Some("Add a `canvas:` section or pass --input".to_string()),
        })?;
        canvas.create()
    }

    /// Draw every shape onto `image`, in order. Returns the number of shapes.
    ///
    /// Colours are resolved before anything is drawn, so an invalid colour
    /// leaves the image untouched.
    pub fn apply(&self, image: &mut Image) -> Result<usize> {
        with_grid!(image, g => self.draw_all(g))
    }

    fn draw_all<C: SceneColor>(&self, grid: &mut PixelGrid<C>) -> Result<usize> {
        for (i, shape) in self.shapes.iter().enumerate() {
            C::resolve(shape.color(), grid.max_sample()).map_err(|e| PnmError::Validation {
                message: format!("Shape {} ({}): {}", i + 1, shape.kind(), e),
                help: Some(C::help().to_string()),
            })?;
        }

        for shape in &self.shapes {
            shape.draw_on(grid)?;
        }
        Ok(self.shapes.len())
    }
}

impl Canvas {
    /// Allocate the canvas filled with its background.
    pub fn create(&self) -> Result<Image> {
        let max = match self.format {
            Format::Pbm => 1,
            _ => self.max.unwrap_or(u8::MAX),
        };
        let background = self.background.clone().unwrap_or_else(ColorSpec::white);

        Ok(match self.format {
            Format::Pbm => {
                let fill = bool::resolve(&background, max)?;
                Image::Bitmap(Bitmap::new(self.width, self.height, max, fill)?)
            }
            Format::Pgm => {
                let fill = u8::resolve(&background, max)?;
                Image::Graymap(Graymap::new(self.width, self.height, max, fill)?)
            }
            Format::Ppm => {
                let fill = Rgb::resolve(&background, max)?;
                Image::Pixmap(Pixmap::new(self.width, self.height, max, fill)?)
            }
        })
    }
}
