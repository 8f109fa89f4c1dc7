use crate::foundation::core::{Affine, BezPath, Point, Rgba};
use crate::foundation::error::{BanimError, BanimResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::Surface;

/// Brush carried through parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl From<Rgba> for TextBrush {
    fn from(c: Rgba) -> Self {
        let [r, g, b, a] = c.to_rgba8();
        Self { r, g, b, a }
    }
}

struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl TextEngine {
    fn new(font_bytes: &[u8]) -> BanimResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BanimError::validation("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BanimError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font,
        })
    }

    fn layout(&mut self, text: &str, size_px: f32, brush: TextBrush) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// CPU rasterizer backed by `vello_cpu`.
///
/// Draw calls accumulate until [`CpuSurface::finish`], which rasterizes them over the clear
/// color and starts a fresh frame.
pub struct CpuSurface {
    width: u16,
    height: u16,
    clear_rgba: [u8; 4],
    ctx: vello_cpu::RenderContext,
    text: Option<TextEngine>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clear_rgba", &self.clear_rgba)
            .field("font", &self.text.as_ref().map(|t| t.family.as_str()))
            .finish()
    }
}

impl CpuSurface {
    /// Surface of `width`×`height` device pixels, cleared to opaque black.
    pub fn new(width: u32, height: u32) -> BanimResult<Self> {
        if width == 0 || height == 0 {
            return Err(BanimError::validation("surface width/height must be > 0"));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| BanimError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| BanimError::validation("surface height exceeds u16"))?;

        Ok(Self {
            width: w,
            height: h,
            clear_rgba: [0, 0, 0, 255],
            ctx: fresh_context(w, h, [0, 0, 0, 255]),
            text: None,
        })
    }

    /// Background color painted under every frame.
    pub fn with_clear_rgba(mut self, rgba: [u8; 4]) -> Self {
        self.clear_rgba = rgba;
        self.ctx = fresh_context(self.width, self.height, rgba);
        self
    }

    /// Enable text rendering with the given TTF/OTF bytes.
    pub fn with_font(mut self, font_bytes: &[u8]) -> BanimResult<Self> {
        let engine = TextEngine::new(font_bytes)?;
        tracing::debug!(family = %engine.family, "registered font");
        self.text = Some(engine);
        Ok(self)
    }

    /// Whether text draw calls produce glyphs.
    pub fn has_font(&self) -> bool {
        self.text.is_some()
    }

    /// Rasterize everything drawn since the last call and return the frame.
    pub fn finish(&mut self) -> BanimResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        clear_pixmap(&mut pixmap, premultiply(self.clear_rgba));

        let mut ctx = std::mem::replace(
            &mut self.ctx,
            fresh_context(self.width, self.height, self.clear_rgba),
        );
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let data = pixmap.data_as_u8_slice().to_vec();
        let expected = usize::from(self.width) * usize::from(self.height) * 4;
        if data.len() != expected {
            return Err(BanimError::render(format!(
                "pixmap has {} bytes, expected {expected}",
                data.len()
            )));
        }

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba) {
        let [r, g, b, a] = color.to_rgba8();
        if a == 0 {
            return;
        }
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, transform: Affine, width: f64, color: Rgba) {
        let [r, g, b, a] = color.to_rgba8();
        if a == 0 || !width.is_finite() || width <= 0.0 {
            return;
        }
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn fill_text(&mut self, text: &str, center: Point, font_size: f64, transform: Affine, color: Rgba) {
        let Some(engine) = self.text.as_mut() else {
            tracing::trace!(text, "no font registered, skipping text");
            return;
        };
        if text.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return;
        }

        let layout = engine.layout(text, font_size as f32, TextBrush::from(color));
        let origin = Affine::translate((
            center.x - f64::from(layout.width()) / 2.0,
            center.y - f64::from(layout.height()) / 2.0,
        ));
        self.ctx.set_transform(affine_to_cpu(transform * origin));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&engine.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

fn fresh_context(width: u16, height: u16, clear: [u8; 4]) -> vello_cpu::RenderContext {
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    if clear[3] > 0 {
        let [r, g, b, a] = clear;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
    }
    ctx
}

fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
    [scale(r), scale(g), scale(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
