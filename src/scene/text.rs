use crate::foundation::core::{CoordSpace, GridCoord, Rgba};
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};

/// Single line of text positioned by its visual center.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    content: String,
    center: GridCoord,
    font_size: f64,
    look: Appearance,
}

impl Text {
    /// Grid-space text centered on the cell at `center`.
    pub fn new(center: GridCoord, content: impl Into<String>, font_size: f64) -> Self {
        Self {
            content: content.into(),
            center,
            font_size,
            look: Appearance::default(),
        }
    }

    /// Pixel-space text.
    pub fn pixel(x: f64, y: f64, content: impl Into<String>, font_size: f64) -> Self {
        let mut t = Self::new(GridCoord::new(x, y), content, font_size);
        t.look.space = CoordSpace::Pixel;
        t
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.look.color = color;
        self
    }

    /// Text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text content; the center stays put.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Font size in reference pixels.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Replace the font size.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }
}

impl Drawable for Text {
    fn position(&self) -> GridCoord {
        self.center
    }

    fn set_position(&mut self, pos: GridCoord) {
        self.center = pos;
    }

    fn size(&self) -> (f64, f64) {
        (self.font_size, self.font_size)
    }

    fn set_size(&mut self, w: f64, _h: f64) {
        self.font_size = w;
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
        ctx.text(space, &self.content, c, self.font_size, self.look.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/text.rs"]
mod tests;
