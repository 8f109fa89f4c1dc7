use crate::foundation::core::{GridCoord, Rgba};
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};
use crate::scene::entity::{Entities, EntityId};
use crate::scene::line::Line;
use crate::scene::port::{Port, PortDirection, PortProvider};
use crate::scene::route::{RoutePath, route_ports};

/// Default wire color.
pub const WIRE_COLOR: Rgba = Rgba::new(0.2, 0.6, 1.0, 1.0);

/// How a wire endpoint names its port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortRef {
    /// First port with this name, scanning every edge.
    Named(String),
    /// Port `index` on one edge.
    Indexed(PortDirection, usize),
}

/// One end of a port-attached wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEnd {
    /// Entity providing the port.
    pub provider: EntityId,
    /// Which of its ports.
    pub port: PortRef,
}

impl WireEnd {
    /// Endpoint addressed by port name.
    pub fn named(provider: EntityId, name: impl Into<String>) -> Self {
        Self {
            provider,
            port: PortRef::Named(name.into()),
        }
    }

    /// Endpoint addressed by edge and index.
    pub fn indexed(provider: EntityId, direction: PortDirection, index: usize) -> Self {
        Self {
            provider,
            port: PortRef::Indexed(direction, index),
        }
    }

    fn resolve<'a>(&self, provider: &'a dyn PortProvider) -> Option<&'a Port> {
        match &self.port {
            PortRef::Named(name) => provider.find_port(name),
            PortRef::Indexed(direction, index) => provider.port_at(*direction, *index),
        }
    }
}

/// Provider geometry last seen by a wire; compared exactly to detect movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProviderGeometry {
    /// Body origin.
    pub origin: GridCoord,
    /// Body size.
    pub size: (f64, f64),
}

impl ProviderGeometry {
    fn of(p: &dyn PortProvider) -> Self {
        Self {
            origin: p.body_origin(),
            size: p.body_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum WireGeometry {
    Routed(RoutePath),
    Snapped { start: GridCoord, end: GridCoord },
    Centers { start: GridCoord, end: GridCoord },
}

// Provider body plus the resolved port, if any. Sibling ports and facing changes move a port
// without touching the body.
#[derive(Clone, Copy, Debug, PartialEq)]
struct EndSeen {
    body: ProviderGeometry,
    port: Option<(GridCoord, PortDirection)>,
}

impl EndSeen {
    fn of(provider: &dyn PortProvider, port: Option<&Port>) -> Self {
        Self {
            body: ProviderGeometry::of(provider),
            port: port.map(|p| (p.position(), p.direction())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WireRefresh {
    seen: (EndSeen, EndSeen),
    geometry: WireGeometry,
}

/// A line that can follow ports on blocks and gates.
///
/// While `auto_route` is on, every refresh rebuilds the waypoints from the port route. Manual
/// waypoint edits turn it off; after that only the endpoints keep tracking their ports.
#[derive(Clone, Debug, PartialEq)]
pub struct Wire {
    line: Line,
    ends: Option<(WireEnd, WireEnd)>,
    auto_route: bool,
    seen: Option<(EndSeen, EndSeen)>,
}

impl Wire {
    fn with_line(line: Line, ends: Option<(WireEnd, WireEnd)>, auto_route: bool) -> Self {
        Self {
            line: line.with_color(WIRE_COLOR).with_stroke_width(2.0),
            ends,
            auto_route,
            seen: None,
        }
    }

    /// Auto-routed wire between two ports.
    pub fn connect(from: WireEnd, to: WireEnd) -> Self {
        let origin = GridCoord::default();
        Self::with_line(Line::new(origin, origin), Some((from, to)), true)
    }

    /// Auto-routed wire between two named ports.
    pub fn between(from: EntityId, from_port: &str, to: EntityId, to_port: &str) -> Self {
        Self::connect(WireEnd::named(from, from_port), WireEnd::named(to, to_port))
    }

    /// Auto-routed wire between two indexed ports.
    pub fn between_indexed(
        from: EntityId,
        from_dir: PortDirection,
        from_index: usize,
        to: EntityId,
        to_dir: PortDirection,
        to_index: usize,
    ) -> Self {
        Self::connect(
            WireEnd::indexed(from, from_dir, from_index),
            WireEnd::indexed(to, to_dir, to_index),
        )
    }

    /// Unattached straight wire.
    pub fn straight(from: GridCoord, to: GridCoord) -> Self {
        Self::with_line(Line::new(from, to), None, false)
    }

    /// Unattached wire through `points`; the first and last become its endpoints.
    ///
    /// Fewer than two points yield a degenerate wire at the single point (or the origin).
    pub fn through(points: impl IntoIterator<Item = GridCoord>) -> Self {
        let pts: Vec<GridCoord> = points.into_iter().collect();
        let start = pts.first().copied().unwrap_or_default();
        let end = pts.last().copied().unwrap_or(start);
        let inner = if pts.len() > 2 {
            pts[1..pts.len() - 1].to_vec()
        } else {
            Vec::new()
        };
        Self::with_line(Line::new(start, end).with_waypoints(inner), None, false)
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.line.set_color(color);
        self
    }

    /// Builder-style stroke width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.line.set_stroke_width(width);
        self
    }

    /// Underlying polyline.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Underlying polyline for manual editing. Turns auto-routing off.
    pub fn line_mut(&mut self) -> &mut Line {
        self.auto_route = false;
        &mut self.line
    }

    pub(crate) fn line_for_animation(&mut self) -> &mut Line {
        &mut self.line
    }

    pub(crate) fn mark_edited(&mut self) {
        self.auto_route = false;
    }

    /// Port endpoints, if attached.
    pub fn ends(&self) -> Option<&(WireEnd, WireEnd)> {
        self.ends.as_ref()
    }

    /// Whether waypoints are rebuilt from the port route.
    pub fn auto_route(&self) -> bool {
        self.auto_route
    }

    /// Toggle auto-routing. The next refresh reroutes regardless of movement.
    pub fn set_auto_route(&mut self, on: bool) {
        self.auto_route = on;
        self.seen = None;
    }

    /// Append a manual waypoint. Turns auto-routing off.
    pub fn add_waypoint(&mut self, p: GridCoord) {
        self.line_mut().add_waypoint(p);
    }

    /// Replace the waypoints manually. Turns auto-routing off.
    pub fn set_waypoints(&mut self, waypoints: impl IntoIterator<Item = GridCoord>) {
        self.line_mut().set_waypoints(waypoints);
    }

    /// Stroke width.
    pub fn width(&self) -> f64 {
        self.line.stroke_width()
    }

    /// Compute what a refresh would change, given the current providers.
    ///
    /// Returns `None` when the wire is unattached, a provider is missing, or neither provider
    /// nor resolved port moved since the last refresh (unless `force`).
    pub(crate) fn plan_refresh(&self, entities: &Entities, force: bool) -> Option<WireRefresh> {
        let (from, to) = self.ends.as_ref()?;
        let (Some(fp), Some(tp)) = (
            entities.get(from.provider).and_then(|e| e.as_port_provider()),
            entities.get(to.provider).and_then(|e| e.as_port_provider()),
        ) else {
            tracing::debug!(from = ?from.provider, to = ?to.provider, "wire provider is not a port provider");
            return None;
        };
        let (a, b) = (from.resolve(fp), to.resolve(tp));
        let seen = (EndSeen::of(fp, a), EndSeen::of(tp, b));
        if !force && self.seen == Some(seen) {
            return None;
        }
        let geometry = match (a, b) {
            (Some(a), Some(b)) if self.auto_route => WireGeometry::Routed(route_ports(a, b)),
            (Some(a), Some(b)) => WireGeometry::Snapped {
                start: a.position(),
                end: b.position(),
            },
            _ => {
                tracing::debug!(from = ?from.port, to = ?to.port, "wire port unresolved, connecting centers");
                WireGeometry::Centers {
                    start: fp.body_center(),
                    end: tp.body_center(),
                }
            }
        };
        Some(WireRefresh { seen, geometry })
    }

    pub(crate) fn apply_refresh(&mut self, refresh: WireRefresh) {
        self.seen = Some(refresh.seen);
        match refresh.geometry {
            WireGeometry::Routed(path) => {
                let n = path.len();
                self.line.set_start(path[0]);
                self.line.set_end(path[n - 1]);
                self.line.set_waypoints(path[1..n - 1].iter().copied());
            }
            WireGeometry::Snapped { start, end } => {
                self.line.set_start(start);
                self.line.set_end(end);
            }
            WireGeometry::Centers { start, end } => {
                self.line.set_start(start);
                self.line.set_end(end);
                if self.auto_route {
                    self.line.clear_waypoints();
                }
            }
        }
    }
}

impl Drawable for Wire {
    fn position(&self) -> GridCoord {
        self.line.start()
    }

    fn set_position(&mut self, pos: GridCoord) {
        self.line.set_position(pos);
    }

    fn size(&self) -> (f64, f64) {
        let w = self.line.stroke_width();
        (w, w)
    }

    fn set_size(&mut self, w: f64, _h: f64) {
        self.line.set_stroke_width(w);
    }

    fn appearance(&self) -> &Appearance {
        self.line.appearance()
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        self.line.appearance_mut()
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        self.line.stroke_points(ctx, true);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/wire.rs"]
mod tests;
