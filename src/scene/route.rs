//! Orthogonal port-to-port routing for block-diagram wires.

use smallvec::SmallVec;

use crate::foundation::core::GridCoord;
use crate::scene::port::{Port, PortDirection};

/// Distance, in grid units, a route steps out of a port before turning.
pub const PORT_CLEARANCE: f64 = 0.5;

/// Full polyline of a route, endpoints included.
pub type RoutePath = SmallVec<[GridCoord; 6]>;

/// Point just outside a port in the direction it faces.
pub fn offset_point(at: GridCoord, facing: PortDirection) -> GridCoord {
    let (dx, dy) = facing.outward();
    at.offset(dx * PORT_CLEARANCE, dy * PORT_CLEARANCE)
}

/// Bend points between two offset points.
///
/// Opposite horizontal facings get a Z channel through the mid x; opposite vertical facings get
/// the same through the mid y. Anything else turns exactly once.
pub fn channel(
    from: PortDirection,
    start: GridCoord,
    to: PortDirection,
    end: GridCoord,
) -> SmallVec<[GridCoord; 2]> {
    use PortDirection::*;
    let mut mids = SmallVec::new();
    match (from, to) {
        (Right, Left) | (Left, Right) => {
            let mid_x = (start.x + end.x) * 0.5;
            mids.push(GridCoord::new(mid_x, start.y));
            mids.push(GridCoord::new(mid_x, end.y));
        }
        (Top, Bottom) | (Bottom, Top) => {
            let mid_y = (start.y + end.y) * 0.5;
            mids.push(GridCoord::new(start.x, mid_y));
            mids.push(GridCoord::new(end.x, mid_y));
        }
        _ if from.is_horizontal() => mids.push(GridCoord::new(end.x, start.y)),
        _ => mids.push(GridCoord::new(start.x, end.y)),
    }
    mids
}

/// Route from `from` to `to`: port, offset, bends, offset, port.
///
/// Offset points equal to their port are skipped.
pub fn route_ports(from: &Port, to: &Port) -> RoutePath {
    route_between(from.position(), from.direction(), to.position(), to.direction())
}

/// [`route_ports`] on raw positions and facings.
pub fn route_between(
    start: GridCoord,
    from: PortDirection,
    end: GridCoord,
    to: PortDirection,
) -> RoutePath {
    let start_off = offset_point(start, from);
    let end_off = offset_point(end, to);

    let mut path = RoutePath::new();
    path.push(start);
    if start_off != start {
        path.push(start_off);
    }
    path.extend(channel(from, start_off, to, end_off));
    if end_off != end {
        path.push(end_off);
    }
    path.push(end);
    path
}

#[cfg(test)]
#[path = "../../tests/unit/scene/route.rs"]
mod tests;
