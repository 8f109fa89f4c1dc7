use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Circle as KCircle, Shape};

use crate::foundation::core::{Affine, BezPath, GridCoord, Point, Rgba};
use crate::scene::block::paint_port_markers;
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};
use crate::scene::port::{Port, PortDirection, PortProvider, PortSet};

/// Edge padding used to distribute gate ports.
pub const GATE_PORT_PADDING: f64 = 0.25;

const OUTLINE_WIDTH: f64 = 2.0;

/// Boolean function drawn by a [`LogicGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GateType {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
    /// Exclusive or.
    Xor,
    /// Inverter; the only single-input kind.
    Not,
    /// Negated conjunction.
    Nand,
    /// Negated disjunction.
    Nor,
    /// Negated exclusive or.
    Xnor,
}

impl GateType {
    /// Whether the symbol carries an output inversion bubble.
    pub fn is_negated(self) -> bool {
        matches!(self, Self::Not | Self::Nand | Self::Nor | Self::Xnor)
    }

    /// Names of the input ports this kind exposes.
    pub fn input_names(self) -> &'static [&'static str] {
        match self {
            Self::Not => &["input"],
            _ => &["input1", "input2"],
        }
    }
}

/// Logic gate symbol with ports derived from its type and facing.
#[derive(Clone, Debug, PartialEq)]
pub struct LogicGate {
    gate_type: GateType,
    facing: PortDirection,
    pos: GridCoord,
    width: f64,
    height: f64,
    look: Appearance,
    ports: PortSet,
    anchor: Option<GridCoord>,
}

impl LogicGate {
    /// Gate occupying `width x height` cells from `pos`, output on the `facing` edge.
    pub fn new(gate_type: GateType, facing: PortDirection, pos: GridCoord, width: f64, height: f64) -> Self {
        let mut g = Self {
            gate_type,
            facing,
            pos,
            width,
            height,
            look: Appearance {
                color: Rgba::rgb(0.9, 0.9, 0.9),
                ..Appearance::default()
            },
            ports: PortSet::new(GATE_PORT_PADDING, pos, width, height),
            anchor: None,
        };
        g.setup_ports();
        g
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.look.color = color;
        self
    }

    /// Boolean function.
    pub fn gate_type(&self) -> GateType {
        self.gate_type
    }

    /// Edge the output sits on.
    pub fn facing(&self) -> PortDirection {
        self.facing
    }

    /// Turn the gate; ports are rebuilt from scratch.
    pub fn set_facing(&mut self, facing: PortDirection) {
        self.facing = facing;
        self.setup_ports();
    }

    /// Append an extra port.
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

    fn setup_ports(&mut self) {
        self.ports.clear_all_ports();
        let input_side = self.facing.opposite();
        for name in self.gate_type.input_names() {
            self.ports.add_port(input_side, *name);
        }
        self.ports.add_port(self.facing, "output");
    }

    fn center(&self) -> GridCoord {
        self.pos.offset(self.width * 0.5, self.height * 0.5)
    }

    fn sync_ports(&mut self) {
        self.ports.set_bounds(self.pos, self.width, self.height);
    }

    // Maps the right-facing symbol (`w x h` local pixels) onto the body at `origin`.
    fn orientation(&self, origin: Point, pw: f64, ph: f64) -> (Affine, f64, f64) {
        let to_center = Affine::translate((origin.x + pw * 0.5, origin.y + ph * 0.5));
        match self.facing {
            PortDirection::Right => (Affine::translate(origin.to_vec2()), pw, ph),
            PortDirection::Left => (
                to_center * Affine::rotate(PI) * Affine::translate((-pw * 0.5, -ph * 0.5)),
                pw,
                ph,
            ),
            PortDirection::Top => (
                to_center * Affine::rotate(-FRAC_PI_2) * Affine::translate((-ph * 0.5, -pw * 0.5)),
                ph,
                pw,
            ),
            PortDirection::Bottom => (
                to_center * Affine::rotate(FRAC_PI_2) * Affine::translate((-ph * 0.5, -pw * 0.5)),
                ph,
                pw,
            ),
        }
    }
}

fn or_silhouette(x0: f64, w: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, 0.0));
    p.curve_to((x0 + w * 0.3, 0.0), (x0 + w * 0.7, 0.0), (x0 + w, h * 0.5));
    p.curve_to((x0 + w * 0.7, h), (x0 + w * 0.3, h), (x0, h));
    p.curve_to((x0 + w * 0.2, h * 0.7), (x0 + w * 0.2, h * 0.3), (x0, 0.0));
    p.close_path();
    p
}

/// Body outline plus optional open accent stroke and bubble, in right-facing local pixels.
fn silhouette(kind: GateType, w: f64, h: f64) -> (BezPath, Option<BezPath>, Option<KCircle>) {
    match kind {
        GateType::And | GateType::Nand => {
            let r = h * 0.5;
            let mut p = BezPath::new();
            p.move_to((0.0, 0.0));
            p.line_to((w - r, 0.0));
            let arc = kurbo::Arc::new((w - r, h * 0.5), (r, r), -FRAC_PI_2, PI, 0.0);
            arc.to_cubic_beziers(0.1, |a, b, c| p.curve_to(a, b, c));
            p.line_to((0.0, h));
            p.close_path();
            let bubble = (kind == GateType::Nand).then(|| KCircle::new((w, h * 0.5), h * 0.08));
            (p, None, bubble)
        }
        GateType::Or | GateType::Nor => {
            let gw = w * 1.1;
            let body = or_silhouette(-w * 0.1, gw, h);
            let bubble = (kind == GateType::Nor).then(|| KCircle::new((w, h * 0.5), h * 0.08));
            (body, None, bubble)
        }
        GateType::Xor | GateType::Xnor => {
            let gw = w * 1.05;
            let x0 = -w * 0.05;
            let body = or_silhouette(x0 + gw * 0.1, gw * 0.9, h);
            let mut accent = BezPath::new();
            accent.move_to((x0, h * 0.2));
            accent.curve_to((x0 + gw * 0.15, h * 0.35), (x0 + gw * 0.15, h * 0.65), (x0, h * 0.8));
            let bubble = (kind == GateType::Xnor).then(|| KCircle::new((w, h * 0.5), h * 0.08));
            (body, Some(accent), bubble)
        }
        GateType::Not => {
            let mut p = BezPath::new();
            p.move_to((0.0, 0.0));
            p.line_to((w * 0.8, h * 0.5));
            p.line_to((0.0, h));
            p.close_path();
            (p, None, Some(KCircle::new((w * 0.9, h * 0.5), h * 0.1)))
        }
    }
}

impl PortProvider for LogicGate {
    fn port_set(&self) -> &PortSet {
        &self.ports
    }

    fn body_origin(&self) -> GridCoord {
        self.pos
    }

    fn body_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl Drawable for LogicGate {
    fn position(&self) -> GridCoord {
        self.pos
    }

    fn set_position(&mut self, pos: GridCoord) {
        if let Some(anchor) = self.anchor.as_mut() {
            *anchor = anchor.offset(pos.x - self.pos.x, pos.y - self.pos.y);
        }
        self.pos = pos;
        self.sync_ports();
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_size(&mut self, w: f64, h: f64) {
        self.width = w;
        self.height = h;
        self.sync_ports();
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
        self.sync_ports();
    }

    fn reset_for_animation(&mut self) {
        self.anchor = Some(self.center());
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        if self.look.color.a <= 0.0 {
            return;
        }
        let space = self.look.space;
        let origin = ctx.lattice_point(space, self.pos);
        let ext = ctx.extent(space, self.width, self.height);
        let (local, w, h) = self.orientation(origin, ext.x, ext.y);
        let pivot = origin + ext * 0.5;
        let (body, accent, bubble) = silhouette(self.gate_type, w, h);

        let look = Appearance {
            stroke_width: OUTLINE_WIDTH,
            ..self.look
        };
        ctx.paint(&look, &(local * body), pivot);
        if let Some(accent) = accent {
            ctx.stroke(space, &(local * accent), OUTLINE_WIDTH, look.color);
        }
        if let Some(bubble) = bubble {
            let path = local * bubble.to_path(0.1);
            if look.filled {
                ctx.fill(space, &path, Rgba::WHITE.with_alpha(look.color.a));
            }
            ctx.stroke(space, &path, OUTLINE_WIDTH, look.color);
        }
        paint_port_markers(&self.ports, &look, ctx);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/gate.rs"]
mod tests;
