use kurbo::{Circle as KCircle, Shape};

use crate::foundation::core::{GridCoord, Rgba};
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};
use crate::scene::port::{Port, PortDirection, PortProvider, PortSet};
use crate::scene::shapes::Rectangle;

/// Edge padding used to distribute block ports.
pub const BLOCK_PORT_PADDING: f64 = 0.15;

const PORT_MARKER_RADIUS: f64 = 3.0;
const PORT_MARKER_COLOR: Rgba = Rgba::rgb(0.8, 0.8, 0.8);

/// Labelled rectangle with ports on its edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    body: Rectangle,
    ports: PortSet,
    label: String,
    label_size: f64,
    label_color: Rgba,
}

impl Block {
    /// Grid-space block with top-left corner at `pos`.
    pub fn new(pos: GridCoord, width: f64, height: f64, label: impl Into<String>) -> Self {
        let body = Rectangle::new(pos, width, height)
            .with_color(Rgba::new(0.3, 0.3, 0.7, 1.0))
            .with_border_radius(8.0);
        Self {
            body,
            ports: PortSet::new(BLOCK_PORT_PADDING, pos, width, height),
            label: label.into(),
            label_size: 16.0,
            label_color: Rgba::WHITE,
        }
    }

    /// Builder-style body color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.body.set_color(color);
        self
    }

    /// Builder-style port.
    pub fn with_port(mut self, direction: PortDirection, name: impl Into<String>) -> Self {
        self.add_port(direction, name);
        self
    }

    /// Append a port; every edge is re-laid out.
    pub fn add_port(&mut self, direction: PortDirection, name: impl Into<String>) {
        self.ports.add_port(direction, name);
    }

    /// Remove the first port named `name` on `direction`.
    pub fn remove_port(&mut self, direction: PortDirection, name: &str) -> bool {
        self.ports.remove_port(direction, name)
    }

    /// Remove every port on one edge.
    pub fn clear_ports(&mut self, direction: PortDirection) {
        self.ports.clear_ports(direction);
    }

    /// Remove every port.
    pub fn clear_all_ports(&mut self) {
        self.ports.clear_all_ports();
    }

    /// Ports on one edge.
    pub fn ports(&self, direction: PortDirection) -> &[Port] {
        self.ports.ports(direction)
    }

    /// Label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace the label color.
    pub fn set_label_color(&mut self, color: Rgba) {
        self.label_color = color;
    }

    /// Replace the label font size.
    pub fn set_label_size(&mut self, size: f64) {
        self.label_size = size;
    }

    /// Corner radius of the body.
    pub fn border_radius(&self) -> f64 {
        self.body.border_radius()
    }

    /// Replace the body's corner radius.
    pub fn set_border_radius(&mut self, radius: f64) {
        self.body.set_border_radius(radius);
    }

    fn sync_ports(&mut self) {
        let (w, h) = self.body.size();
        self.ports.set_bounds(self.body.position(), w, h);
    }
}

pub(crate) fn paint_port_markers(ports: &PortSet, look: &Appearance, ctx: &mut DrawCtx<'_>) {
    let color = PORT_MARKER_COLOR.with_alpha(look.color.a.min(1.0));
    for p in ports.positions() {
        let c = ctx.lattice_point(look.space, p);
        ctx.fill(look.space, &KCircle::new(c, PORT_MARKER_RADIUS).to_path(0.1), color);
    }
}

impl PortProvider for Block {
    fn port_set(&self) -> &PortSet {
        &self.ports
    }

    fn body_origin(&self) -> GridCoord {
        self.body.position()
    }

    fn body_size(&self) -> (f64, f64) {
        self.body.size()
    }
}

impl Drawable for Block {
    fn position(&self) -> GridCoord {
        self.body.position()
    }

    fn set_position(&mut self, pos: GridCoord) {
        self.body.set_position(pos);
        self.sync_ports();
    }

    fn size(&self) -> (f64, f64) {
        self.body.size()
    }

    fn set_size(&mut self, w: f64, h: f64) {
        self.body.set_size(w, h);
        self.sync_ports();
    }

    fn appearance(&self) -> &Appearance {
        self.body.appearance()
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        self.body.appearance_mut()
    }

    fn set_animatable_size(&mut self, w: f64, h: f64) {
        self.body.set_animatable_size(w, h);
        self.sync_ports();
    }

    fn reset_for_animation(&mut self) {
        self.body.reset_for_animation();
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        self.body.paint_body(ctx);
        let look = self.body.appearance();
        if !self.label.is_empty() && look.color.a > 0.0 {
            let center = ctx.lattice_point(look.space, self.body.center());
            let color = self.label_color.with_alpha(self.label_color.a * look.color.a);
            ctx.text(look.space, &self.label, center, self.label_size, color);
        }
        if look.color.a > 0.0 {
            paint_port_markers(&self.ports, look, ctx);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/block.rs"]
mod tests;
