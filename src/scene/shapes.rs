use kurbo::{Ellipse, RoundedRect, Shape};

use crate::foundation::core::{CoordSpace, GridCoord, Rgba};
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};

const PATH_TOLERANCE: f64 = 0.1;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pos: GridCoord,
    width: f64,
    height: f64,
    border_radius: f64,
    look: Appearance,
    // Center pinned while a size tween runs.
    anchor: Option<GridCoord>,
}

impl Rectangle {
    /// Grid-space rectangle with top-left corner at `pos`.
    pub fn new(pos: GridCoord, width: f64, height: f64) -> Self {
        Self {
            pos,
            width,
            height,
            border_radius: 0.0,
            look: Appearance::default(),
            anchor: None,
        }
    }

    /// Pixel-space rectangle; not rescaled with the viewport.
    pub fn pixel(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut r = Self::new(GridCoord::new(x, y), width, height);
        r.look.space = CoordSpace::Pixel;
        r
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.look.color = color;
        self
    }

    /// Builder-style corner radius.
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    /// Builder-style outline-only mode.
    pub fn outlined(mut self, stroke_width: f64) -> Self {
        self.look.filled = false;
        self.look.stroke_width = stroke_width;
        self
    }

    /// Corner radius in reference pixels.
    pub fn border_radius(&self) -> f64 {
        self.border_radius
    }

    /// Replace the corner radius.
    pub fn set_border_radius(&mut self, radius: f64) {
        self.border_radius = radius;
    }

    /// Geometric center.
    pub fn center(&self) -> GridCoord {
        self.pos.offset(self.width * 0.5, self.height * 0.5)
    }

    pub(crate) fn paint_body(&self, ctx: &mut DrawCtx<'_>) {
        let space = self.look.space;
        let p0 = ctx.lattice_point(space, self.pos);
        let ext = ctx.extent(space, self.width, self.height);
        let radius = self
            .border_radius
            .clamp(0.0, 0.5 * ext.x.abs().min(ext.y.abs()));
        let rect = RoundedRect::new(p0.x, p0.y, p0.x + ext.x, p0.y + ext.y, radius);
        let pivot = p0 + ext * 0.5;
        ctx.paint(&self.look, &rect.to_path(PATH_TOLERANCE), pivot);
    }
}

impl Drawable for Rectangle {
    fn position(&self) -> GridCoord {
        self.pos
    }

    fn set_position(&mut self, pos: GridCoord) {
        if let Some(anchor) = self.anchor.as_mut() {
            *anchor = anchor.offset(pos.x - self.pos.x, pos.y - self.pos.y);
        }
        self.pos = pos;
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_size(&mut self, w: f64, h: f64) {
        self.width = w;
        self.height = h;
    }

    fn appearance(&self) -> &Appearance {
        &self.look
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.look
    }

    fn set_animatable_size(&mut self, w: f64, h: f64) {
        let center = self.anchor.unwrap_or_else(|| self.center());
        self.width = w;
        self.height = h;
        self.pos = center.offset(-w * 0.5, -h * 0.5);
    }

    fn reset_for_animation(&mut self) {
        self.anchor = Some(self.center());
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        self.paint_body(ctx);
    }
}

/// Ellipse defined by its center and radii.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: GridCoord,
    rx: f64,
    ry: f64,
    look: Appearance,
}

impl Circle {
    /// Grid-space circle of `radius` centered on the cell at `center`.
    pub fn new(center: GridCoord, radius: f64) -> Self {
        Self::ellipse(center, radius, radius)
    }

    /// Grid-space ellipse.
    pub fn ellipse(center: GridCoord, rx: f64, ry: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            look: Appearance::default(),
        }
    }

    /// Pixel-space circle.
    pub fn pixel(x: f64, y: f64, radius: f64) -> Self {
        let mut c = Self::new(GridCoord::new(x, y), radius);
        c.look.space = CoordSpace::Pixel;
        c
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.look.color = color;
        self
    }

    /// Builder-style outline-only mode.
    pub fn outlined(mut self, stroke_width: f64) -> Self {
        self.look.filled = false;
        self.look.stroke_width = stroke_width;
        self
    }
}

impl Drawable for Circle {
    fn position(&self) -> GridCoord {
        self.center
    }

    fn set_position(&mut self, pos: GridCoord) {
        self.center = pos;
    }

    fn size(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }

    fn set_size(&mut self, w: f64, h: f64) {
        self.rx = w;
        self.ry = h;
    }

    fn appearance(&self) -> &Appearance {
        &self.look
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.look
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        let space = self.look.space;
        let c = ctx.center_point(space, self.center);
        let r = ctx.extent(space, self.rx.abs(), self.ry.abs());
        let ellipse = Ellipse::new(c, (r.x, r.y), 0.0);
        ctx.paint(&self.look, &ellipse.to_path(PATH_TOLERANCE), c);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
