use crate::foundation::core::{GridCoord, Point, Rgba, Vec2};
use crate::foundation::error::{BanimError, BanimResult};

/// Grid layout shared by every grid-authored entity in a scene.
///
/// Cell size derives from the fixed reference canvas, not from the live surface. The renderer
/// rescales by [`Viewport::scale`] so layouts stay proportional when the output size changes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
    /// Reference canvas width in pixels.
    pub reference_width: f64,
    /// Reference canvas height in pixels.
    pub reference_height: f64,
    /// Stroke the grid lines underneath all entities.
    #[serde(default)]
    pub display_grid: bool,
    /// Grid line width in reference pixels.
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Grid line color.
    #[serde(default = "default_line_color")]
    pub color: Rgba,
}

fn default_line_width() -> f64 {
    1.0
}

fn default_line_color() -> Rgba {
    Rgba::new(0.3, 0.3, 0.3, 0.5)
}

impl GridConfig {
    /// Build a validated grid with the overlay disabled.
    pub fn new(cols: u32, rows: u32, reference_width: f64, reference_height: f64) -> BanimResult<Self> {
        let cfg = Self {
            cols,
            rows,
            reference_width,
            reference_height,
            display_grid: false,
            line_width: default_line_width(),
            color: default_line_color(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a grid from JSON and validate it.
    pub fn from_json(json: &str) -> BanimResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| BanimError::validation(format!("grid config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Enable or disable the grid overlay.
    pub fn with_display_grid(mut self, on: bool) -> Self {
        self.display_grid = on;
        self
    }

    /// Check dimension invariants.
    pub fn validate(&self) -> BanimResult<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(BanimError::validation("grid cols and rows must be > 0"));
        }
        if !(self.reference_width.is_finite() && self.reference_width > 0.0)
            || !(self.reference_height.is_finite() && self.reference_height > 0.0)
        {
            return Err(BanimError::validation(
                "grid reference size must be finite and > 0",
            ));
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return Err(BanimError::validation("grid line_width must be finite and >= 0"));
        }
        Ok(())
    }

    /// Width of one cell in reference pixels.
    pub fn cell_width(&self) -> f64 {
        self.reference_width / f64::from(self.cols)
    }

    /// Height of one cell in reference pixels.
    pub fn cell_height(&self) -> f64 {
        self.reference_height / f64::from(self.rows)
    }

    /// Center of the cell at `g`, in reference pixels.
    pub fn grid_to_pixel(&self, g: GridCoord) -> Point {
        Point::new(
            (g.x + 0.5) * self.cell_width(),
            (g.y + 0.5) * self.cell_height(),
        )
    }

    /// Inverse of [`GridConfig::grid_to_pixel`].
    pub fn pixel_to_grid(&self, p: Point) -> GridCoord {
        GridCoord::new(
            p.x / self.cell_width() - 0.5,
            p.y / self.cell_height() - 0.5,
        )
    }

    /// Grid-line intersection at `g`, in reference pixels.
    pub fn lattice_to_pixel(&self, g: GridCoord) -> Point {
        Point::new(g.x * self.cell_width(), g.y * self.cell_height())
    }

    /// Scale a grid-unit extent to reference pixels.
    pub fn extent_to_pixel(&self, w: f64, h: f64) -> Vec2 {
        Vec2::new(w * self.cell_width(), h * self.cell_height())
    }

    /// Whether `g` lies inside `[0, cols) x [0, rows)`.
    pub fn contains(&self, g: GridCoord) -> bool {
        g.x >= 0.0 && g.y >= 0.0 && g.x < f64::from(self.cols) && g.y < f64::from(self.rows)
    }
}

/// A grid rendered onto a surface of a particular size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Layout being rendered.
    pub config: GridConfig,
    /// Actual surface width in pixels.
    pub width: f64,
    /// Actual surface height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Pair a grid with a live surface size.
    pub fn new(config: GridConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width,
            height,
        }
    }

    /// Per-axis `actual / reference` scale applied to grid-authored content.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            self.width / self.config.reference_width,
            self.height / self.config.reference_height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/grid.rs"]
mod tests;
