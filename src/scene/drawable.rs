use crate::foundation::core::{Affine, BezPath, CoordSpace, GridCoord, Point, Rgba, Vec2};
use crate::render::surface::Surface;
use crate::scene::grid::{GridConfig, Viewport};

/// Style shared by every drawable kind.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Appearance {
    /// Fill or stroke color; alpha `0` hides the entity.
    pub color: Rgba,
    /// Rotation in radians around the entity's visual center.
    pub rotation: f64,
    /// Fill the body instead of stroking its outline.
    pub filled: bool,
    /// Outline width in reference pixels.
    pub stroke_width: f64,
    /// How position and size are interpreted.
    pub space: CoordSpace,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            rotation: 0.0,
            filled: true,
            stroke_width: 2.0,
            space: CoordSpace::Grid,
        }
    }
}

/// Capability set every on-screen entity implements.
///
/// The size pair means different things per kind (width/height, radii, font size, length). The
/// animation-facing trio [`animatable_size`](Drawable::animatable_size),
/// [`set_animatable_size`](Drawable::set_animatable_size) and
/// [`reset_for_animation`](Drawable::reset_for_animation) lets size tweens stay kind-agnostic.
pub trait Drawable {
    /// Anchor position.
    fn position(&self) -> GridCoord;
    /// Move the entity so its anchor sits at `pos`.
    fn set_position(&mut self, pos: GridCoord);
    /// Raw size pair.
    fn size(&self) -> (f64, f64);
    /// Replace the raw size pair.
    fn set_size(&mut self, w: f64, h: f64);
    /// Shared style.
    fn appearance(&self) -> &Appearance;
    /// Shared style, mutably.
    fn appearance_mut(&mut self) -> &mut Appearance;
    /// Paint onto the context's surface.
    fn draw(&self, ctx: &mut DrawCtx<'_>);

    /// Current color.
    fn color(&self) -> Rgba {
        self.appearance().color
    }

    /// Replace the color.
    fn set_color(&mut self, color: Rgba) {
        self.appearance_mut().color = color;
    }

    /// Current alpha.
    fn alpha(&self) -> f32 {
        self.appearance().color.a
    }

    /// Replace the alpha, leaving the other channels alone.
    fn set_alpha(&mut self, a: f32) {
        self.appearance_mut().color.a = a;
    }

    /// Make fully opaque.
    fn show(&mut self) {
        self.set_alpha(1.0);
    }

    /// Make fully transparent.
    fn hide(&mut self) {
        self.set_alpha(0.0);
    }

    /// Whether anything would be painted.
    fn is_visible(&self) -> bool {
        self.alpha() > 0.0
    }

    /// Rotation in radians.
    fn rotation(&self) -> f64 {
        self.appearance().rotation
    }

    /// Replace the rotation.
    fn set_rotation(&mut self, radians: f64) {
        self.appearance_mut().rotation = radians;
    }

    /// Whether the body is filled.
    fn filled(&self) -> bool {
        self.appearance().filled
    }

    /// Toggle fill versus outline.
    fn set_filled(&mut self, filled: bool) {
        self.appearance_mut().filled = filled;
    }

    /// Outline width.
    fn stroke_width(&self) -> f64 {
        self.appearance().stroke_width
    }

    /// Replace the outline width.
    fn set_stroke_width(&mut self, w: f64) {
        self.appearance_mut().stroke_width = w;
    }

    /// Coordinate space of position and size.
    fn coord_space(&self) -> CoordSpace {
        self.appearance().space
    }

    /// Size pair tweened by size animations.
    fn animatable_size(&self) -> (f64, f64) {
        self.size()
    }

    /// Apply a tweened size, keeping whatever [`reset_for_animation`](Drawable::reset_for_animation)
    /// snapshotted fixed.
    fn set_animatable_size(&mut self, w: f64, h: f64) {
        self.set_size(w, h);
    }

    /// Snapshot state a size tween must preserve. Called once when such a tween starts.
    fn reset_for_animation(&mut self) {}
}

/// Explicit render context handed to [`Drawable::draw`].
pub struct DrawCtx<'a> {
    surface: &'a mut dyn Surface,
    viewport: Viewport,
}

impl<'a> DrawCtx<'a> {
    /// Bind a surface to a grid. The viewport is derived from the surface size.
    pub fn new(surface: &'a mut dyn Surface, grid: GridConfig) -> Self {
        let (w, h) = surface.size();
        Self {
            surface,
            viewport: Viewport::new(grid, f64::from(w), f64::from(h)),
        }
    }

    /// Active grid layout.
    pub fn grid(&self) -> &GridConfig {
        &self.viewport.config
    }

    /// Active viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Reference-to-device transform for content authored in `space`.
    pub fn transform(&self, space: CoordSpace) -> Affine {
        match space {
            CoordSpace::Grid => {
                let s = self.viewport.scale();
                Affine::scale_non_uniform(s.x, s.y)
            }
            CoordSpace::Pixel => Affine::IDENTITY,
        }
    }

    /// Cell-center mapping of `p` (identity for pixel-space content).
    pub fn center_point(&self, space: CoordSpace, p: GridCoord) -> Point {
        match space {
            CoordSpace::Grid => self.viewport.config.grid_to_pixel(p),
            CoordSpace::Pixel => Point::new(p.x, p.y),
        }
    }

    /// Grid-line mapping of `p` (identity for pixel-space content).
    pub fn lattice_point(&self, space: CoordSpace, p: GridCoord) -> Point {
        match space {
            CoordSpace::Grid => self.viewport.config.lattice_to_pixel(p),
            CoordSpace::Pixel => Point::new(p.x, p.y),
        }
    }

    /// Map an extent `(w, h)` to reference pixels.
    pub fn extent(&self, space: CoordSpace, w: f64, h: f64) -> Vec2 {
        match space {
            CoordSpace::Grid => self.viewport.config.extent_to_pixel(w, h),
            CoordSpace::Pixel => Vec2::new(w, h),
        }
    }

    /// Fill or stroke `path` according to `look`, rotated about `pivot` (reference pixels).
    pub fn paint(&mut self, look: &Appearance, path: &BezPath, pivot: Point) {
        if look.color.a <= 0.0 {
            return;
        }
        let mut t = self.transform(look.space);
        if look.rotation != 0.0 {
            t *= Affine::rotate_about(look.rotation, pivot);
        }
        if look.filled {
            self.surface.fill_path(path, t, look.color);
        } else {
            self.surface.stroke_path(path, t, look.stroke_width, look.color);
        }
    }

    /// Fill `path` regardless of the appearance's fill flag.
    pub fn fill(&mut self, space: CoordSpace, path: &BezPath, color: Rgba) {
        if color.a <= 0.0 {
            return;
        }
        let t = self.transform(space);
        self.surface.fill_path(path, t, color);
    }

    /// Stroke `path` regardless of the appearance's fill flag.
    pub fn stroke(&mut self, space: CoordSpace, path: &BezPath, width: f64, color: Rgba) {
        if color.a <= 0.0 || width <= 0.0 {
            return;
        }
        let t = self.transform(space);
        self.surface.stroke_path(path, t, width, color);
    }

    /// Draw a text line centered at `center` (reference pixels).
    pub fn text(&mut self, space: CoordSpace, text: &str, center: Point, font_size: f64, color: Rgba) {
        if color.a <= 0.0 || text.is_empty() || font_size <= 0.0 {
            return;
        }
        let t = self.transform(space);
        self.surface.fill_text(text, center, font_size, t, color);
    }

    /// Stroke the grid overlay when the layout asks for it.
    pub fn draw_grid_overlay(&mut self) {
        let cfg = self.viewport.config;
        if !cfg.display_grid {
            return;
        }
        let mut path = BezPath::new();
        for c in 0..=cfg.cols {
            let x = f64::from(c) * cfg.cell_width();
            path.move_to((x, 0.0));
            path.line_to((x, cfg.reference_height));
        }
        for r in 0..=cfg.rows {
            let y = f64::from(r) * cfg.cell_height();
            path.move_to((0.0, y));
            path.line_to((cfg.reference_width, y));
        }
        self.stroke(CoordSpace::Grid, &path, cfg.line_width, cfg.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/drawable.rs"]
mod tests;
