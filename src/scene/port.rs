use smallvec::SmallVec;

use crate::foundation::core::GridCoord;

/// Edge of the owning entity a port is attached to; also the way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PortDirection {
    /// West edge, facing `-x`.
    Left,
    /// East edge, facing `+x`.
    Right,
    /// North edge, facing `-y`.
    Top,
    /// South edge, facing `+y`.
    Bottom,
}

impl PortDirection {
    /// Lookup order used by name searches.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Whether the port faces along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The facing on the other side of the owner.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Unit step away from the owner.
    pub fn outward(self) -> (f64, f64) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::Top => (0.0, -1.0),
            Self::Bottom => (0.0, 1.0),
        }
    }
}

/// Named attachment point on a block or gate edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Port {
    direction: PortDirection,
    name: String,
    position: GridCoord,
}

impl Port {
    /// Edge the port sits on.
    pub fn direction(&self) -> PortDirection {
        self.direction
    }

    /// Port name; not necessarily unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in grid units, maintained by the owning [`PortSet`].
    pub fn position(&self) -> GridCoord {
        self.position
    }
}

/// Position of port `index` out of `count` along an edge, as a fraction of the edge.
pub fn distribution_ratio(index: usize, count: usize, padding: f64) -> f64 {
    if count <= 1 {
        return 0.5;
    }
    padding + (index as f64 / (count - 1) as f64) * (1.0 - 2.0 * padding)
}

/// The four port lists of one owner plus the geometry they are laid out against.
#[derive(Clone, Debug, PartialEq)]
pub struct PortSet {
    left: Vec<Port>,
    right: Vec<Port>,
    top: Vec<Port>,
    bottom: Vec<Port>,
    padding: f64,
    origin: GridCoord,
    width: f64,
    height: f64,
}

impl PortSet {
    /// Empty set with the given edge padding, laid out against a box at `origin`.
    pub fn new(padding: f64, origin: GridCoord, width: f64, height: f64) -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            top: Vec::new(),
            bottom: Vec::new(),
            padding,
            origin,
            width,
            height,
        }
    }

    /// Edge padding as a fraction of the edge length.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Ports on one edge, in insertion order.
    pub fn ports(&self, direction: PortDirection) -> &[Port] {
        match direction {
            PortDirection::Left => &self.left,
            PortDirection::Right => &self.right,
            PortDirection::Top => &self.top,
            PortDirection::Bottom => &self.bottom,
        }
    }

    fn list_mut(&mut self, direction: PortDirection) -> &mut Vec<Port> {
        match direction {
            PortDirection::Left => &mut self.left,
            PortDirection::Right => &mut self.right,
            PortDirection::Top => &mut self.top,
            PortDirection::Bottom => &mut self.bottom,
        }
    }

    /// Append a port and re-lay out every edge.
    pub fn add_port(&mut self, direction: PortDirection, name: impl Into<String>) {
        self.list_mut(direction).push(Port {
            direction,
            name: name.into(),
            position: GridCoord::default(),
        });
        self.relayout();
    }

    /// Remove the first port named `name` on `direction`. Returns whether one was removed.
    pub fn remove_port(&mut self, direction: PortDirection, name: &str) -> bool {
        let list = self.list_mut(direction);
        let Some(i) = list.iter().position(|p| p.name == name) else {
            return false;
        };
        list.remove(i);
        self.relayout();
        true
    }

    /// Remove every port on one edge.
    pub fn clear_ports(&mut self, direction: PortDirection) {
        self.list_mut(direction).clear();
        self.relayout();
    }

    /// Remove every port.
    pub fn clear_all_ports(&mut self) {
        for d in PortDirection::ALL {
            self.list_mut(d).clear();
        }
    }

    /// First port named `name` on `direction`.
    pub fn port(&self, direction: PortDirection, name: &str) -> Option<&Port> {
        self.ports(direction).iter().find(|p| p.name == name)
    }

    /// Port `index` on `direction`.
    pub fn port_at(&self, direction: PortDirection, index: usize) -> Option<&Port> {
        self.ports(direction).get(index)
    }

    /// First port named `name`, scanning left, right, top, then bottom.
    pub fn find_port(&self, name: &str) -> Option<&Port> {
        PortDirection::ALL
            .into_iter()
            .find_map(|d| self.port(d, name))
    }

    /// Total port count.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.top.len() + self.bottom.len()
    }

    /// Whether there are no ports at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every port position, edge by edge.
    pub fn positions(&self) -> SmallVec<[GridCoord; 8]> {
        PortDirection::ALL
            .into_iter()
            .flat_map(|d| self.ports(d).iter().map(Port::position))
            .collect()
    }

    /// Lay the ports out against a moved or resized owner.
    pub fn set_bounds(&mut self, origin: GridCoord, width: f64, height: f64) {
        self.origin = origin;
        self.width = width;
        self.height = height;
        self.relayout();
    }

    fn relayout(&mut self) {
        let (o, w, h, pad) = (self.origin, self.width, self.height, self.padding);
        for d in PortDirection::ALL {
            let list = self.list_mut(d);
            let n = list.len();
            for (i, port) in list.iter_mut().enumerate() {
                let r = distribution_ratio(i, n, pad);
                port.position = match d {
                    PortDirection::Left => GridCoord::new(o.x, o.y + r * h),
                    PortDirection::Right => GridCoord::new(o.x + w, o.y + r * h),
                    PortDirection::Top => GridCoord::new(o.x + r * w, o.y),
                    PortDirection::Bottom => GridCoord::new(o.x + r * w, o.y + h),
                };
            }
        }
    }
}

/// An entity that owns ports wires can attach to.
pub trait PortProvider {
    /// The owner's ports.
    fn port_set(&self) -> &PortSet;
    /// Top-left corner of the owner's body.
    fn body_origin(&self) -> GridCoord;
    /// Width and height of the owner's body.
    fn body_size(&self) -> (f64, f64);

    /// Geometric center of the body.
    fn body_center(&self) -> GridCoord {
        let (w, h) = self.body_size();
        self.body_origin().offset(w * 0.5, h * 0.5)
    }

    /// See [`PortSet::port`].
    fn port(&self, direction: PortDirection, name: &str) -> Option<&Port> {
        self.port_set().port(direction, name)
    }

    /// See [`PortSet::port_at`].
    fn port_at(&self, direction: PortDirection, index: usize) -> Option<&Port> {
        self.port_set().port_at(direction, index)
    }

    /// See [`PortSet::find_port`].
    fn find_port(&self, name: &str) -> Option<&Port> {
        self.port_set().find_port(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/port.rs"]
mod tests;
