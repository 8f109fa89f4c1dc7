use crate::foundation::core::{Affine, BezPath, Point, Rgba};

/// Abstract raster target that entities paint onto.
///
/// Coordinates passed in are reference pixels; `transform` maps them to device pixels.
pub trait Surface {
    /// Device size in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill `path` with a solid color.
    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba);

    /// Stroke `path` with a solid color and a width in reference pixels.
    fn stroke_path(&mut self, path: &BezPath, transform: Affine, width: f64, color: Rgba);

    /// Draw a single line of text whose visual center is `center`.
    fn fill_text(&mut self, text: &str, center: Point, font_size: f64, transform: Affine, color: Rgba);
}

/// One call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A [`Surface::fill_path`] call.
    Fill {
        /// Path as passed in.
        path: BezPath,
        /// Transform as passed in.
        transform: Affine,
        /// Fill color.
        color: Rgba,
    },
    /// A [`Surface::stroke_path`] call.
    Stroke {
        /// Path as passed in.
        path: BezPath,
        /// Transform as passed in.
        transform: Affine,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba,
    },
    /// A [`Surface::fill_text`] call.
    Text {
        /// Text content.
        text: String,
        /// Visual center.
        center: Point,
        /// Font size in reference pixels.
        font_size: f64,
        /// Text color.
        color: Rgba,
    },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Useful for inspecting what a scene would paint without pulling in a rasterizer.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Calls in submission order.
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording of the given device size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Recorded text calls, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            transform,
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, transform: Affine, width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            transform,
            width,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, center: Point, font_size: f64, _transform: Affine, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            center,
            font_size,
            color,
        });
    }
}
