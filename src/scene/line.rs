use smallvec::SmallVec;

use crate::foundation::core::{BezPath, CoordSpace, GridCoord, Rgba};
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};

#[derive(Clone, Debug, PartialEq)]
struct LineSnapshot {
    length: f64,
    end: GridCoord,
    waypoints: Vec<GridCoord>,
}

/// Polyline from `start` through ordered waypoints to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    start: GridCoord,
    end: GridCoord,
    waypoints: Vec<GridCoord>,
    look: Appearance,
    snapshot: Option<LineSnapshot>,
}

impl Line {
    /// Grid-space straight line.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        Self {
            start,
            end,
            waypoints: Vec::new(),
            look: Appearance {
                filled: false,
                ..Appearance::default()
            },
            snapshot: None,
        }
    }

    /// Pixel-space straight line.
    pub fn pixel(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let mut l = Self::new(GridCoord::new(x0, y0), GridCoord::new(x1, y1));
        l.look.space = CoordSpace::Pixel;
        l
    }

    /// Builder-style waypoints.
    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = GridCoord>) -> Self {
        self.waypoints = waypoints.into_iter().collect();
        self
    }

    /// Builder-style color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.look.color = color;
        self
    }

    /// Builder-style stroke width.
    pub fn with_stroke_width(mut self, w: f64) -> Self {
        self.look.stroke_width = w;
        self
    }

    /// First point.
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// Last point.
    pub fn end(&self) -> GridCoord {
        self.end
    }

    /// Move only the first point.
    pub fn set_start(&mut self, p: GridCoord) {
        self.start = p;
    }

    /// Move only the last point.
    pub fn set_end(&mut self, p: GridCoord) {
        self.end = p;
    }

    /// Intermediate points in order.
    pub fn waypoints(&self) -> &[GridCoord] {
        &self.waypoints
    }

    /// Waypoint at `index`, if any.
    pub fn waypoint(&self, index: usize) -> Option<GridCoord> {
        self.waypoints.get(index).copied()
    }

    /// Number of waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Replace the waypoint at `index`. Returns `false` when out of range.
    pub fn set_waypoint(&mut self, index: usize, p: GridCoord) -> bool {
        match self.waypoints.get_mut(index) {
            Some(w) => {
                *w = p;
                true
            }
            None => false,
        }
    }

    /// Append a waypoint just before `end`.
    pub fn add_waypoint(&mut self, p: GridCoord) {
        self.waypoints.push(p);
    }

    /// Remove and return the waypoint at `index`.
    pub fn remove_waypoint(&mut self, index: usize) -> Option<GridCoord> {
        (index < self.waypoints.len()).then(|| self.waypoints.remove(index))
    }

    /// Drop every waypoint.
    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    /// Replace every waypoint.
    pub fn set_waypoints(&mut self, waypoints: impl IntoIterator<Item = GridCoord>) {
        self.waypoints = waypoints.into_iter().collect();
    }

    /// Translate every point.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
        for w in &mut self.waypoints {
            *w = w.offset(dx, dy);
        }
        if let Some(snap) = self.snapshot.as_mut() {
            snap.end = snap.end.offset(dx, dy);
            for w in &mut snap.waypoints {
                *w = w.offset(dx, dy);
            }
        }
    }

    /// Straight-line distance from start to end.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Start, waypoints, end.
    pub fn points(&self) -> impl Iterator<Item = GridCoord> + '_ {
        std::iter::once(self.start)
            .chain(self.waypoints.iter().copied())
            .chain(std::iter::once(self.end))
    }

    fn scale_from(&mut self, length: f64, end: GridCoord, waypoints: &[GridCoord], target: f64) {
        if length <= 0.0 {
            return;
        }
        let k = target / length;
        let s = self.start;
        let scale = |p: GridCoord| GridCoord::new(s.x + (p.x - s.x) * k, s.y + (p.y - s.y) * k);
        self.end = scale(end);
        self.waypoints = waypoints.iter().copied().map(scale).collect();
    }

    pub(crate) fn stroke_points(&self, ctx: &mut DrawCtx<'_>, lattice: bool) {
        let space = self.look.space;
        let pts: SmallVec<[kurbo::Point; 8]> = self
            .points()
            .map(|p| {
                if lattice {
                    ctx.lattice_point(space, p)
                } else {
                    ctx.center_point(space, p)
                }
            })
            .collect();
        let mut path = BezPath::new();
        for (i, p) in pts.iter().enumerate() {
            if i == 0 {
                path.move_to(*p);
            } else {
                path.line_to(*p);
            }
        }
        ctx.stroke(space, &path, self.look.stroke_width, self.look.color);
    }
}

impl Drawable for Line {
    fn position(&self) -> GridCoord {
        self.start
    }

    fn set_position(&mut self, pos: GridCoord) {
        self.move_by(pos.x - self.start.x, pos.y - self.start.y);
    }

    fn size(&self) -> (f64, f64) {
        (self.length(), self.look.stroke_width)
    }

    fn set_size(&mut self, w: f64, h: f64) {
        let length = self.length();
        if length > 0.0 {
            let end = self.end;
            let waypoints = std::mem::take(&mut self.waypoints);
            self.scale_from(length, end, &waypoints, w);
        }
        self.look.stroke_width = h;
    }

    fn appearance(&self) -> &Appearance {
        &self.look
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.look
    }

    fn set_animatable_size(&mut self, w: f64, h: f64) {
        match self.snapshot.take() {
            Some(snap) => {
                self.scale_from(snap.length, snap.end, &snap.waypoints, w);
                self.snapshot = Some(snap);
                self.look.stroke_width = h;
            }
            None => self.set_size(w, h),
        }
    }

    fn reset_for_animation(&mut self) {
        self.snapshot = Some(LineSnapshot {
            length: self.length(),
            end: self.end,
            waypoints: self.waypoints.clone(),
        });
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        self.stroke_points(ctx, false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/line.rs"]
mod tests;
