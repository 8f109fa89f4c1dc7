//! Tweens that edit a line's points. On a wire, the first successful edit counts as a manual
//! edit and stops auto-routing; a tween aborted on validation leaves the wire untouched.

use crate::animation::anim::{Animation, Phase, Progress, impl_with_ease};
use crate::foundation::core::GridCoord;
use crate::foundation::error::BanimResult;
use crate::foundation::math::Lerp;
use crate::scene::entity::{Entities, EntityId};
use crate::scene::line::Line;

fn line_of(entities: &mut Entities, id: EntityId) -> Option<&mut Line> {
    entities.get_mut(id).and_then(|e| e.line_for_animation())
}

fn mark_edited(entities: &mut Entities, id: EntityId) {
    if let Some(e) = entities.get_mut(id) {
        e.mark_line_edited();
    }
}

/// Append a waypoint at the line's end and slide it out to `point`.
#[derive(Debug)]
pub struct AddWaypoint {
    target: EntityId,
    point: GridCoord,
    from: GridCoord,
    index: usize,
    progress: Progress,
}

impl AddWaypoint {
    /// Grow a new waypoint towards `point` over `duration` seconds.
    pub fn new(target: EntityId, point: GridCoord, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            point,
            from: point,
            index: 0,
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for AddWaypoint {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(line) = line_of(entities, self.target) else {
            return self.progress.abort("add_waypoint", "target is not a line");
        };
        if self.progress.begin() {
            self.from = line.end();
            line.add_waypoint(self.from);
            self.index = line.waypoint_count() - 1;
        }
        let t = self.progress.advance(dt);
        if !line.set_waypoint(self.index, GridCoord::lerp(&self.from, &self.point, t)) {
            return self.progress.abort("add_waypoint", "waypoint vanished");
        }
        mark_edited(entities, self.target);
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Collapse a waypoint onto the chord between its neighbours, then delete it.
#[derive(Debug)]
pub struct RemoveWaypoint {
    target: EntityId,
    index: usize,
    from: GridCoord,
    to: GridCoord,
    progress: Progress,
}

impl RemoveWaypoint {
    /// Remove waypoint `index` over `duration` seconds.
    pub fn new(target: EntityId, index: usize, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            index,
            from: GridCoord::default(),
            to: GridCoord::default(),
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for RemoveWaypoint {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(line) = line_of(entities, self.target) else {
            return self.progress.abort("remove_waypoint", "target is not a line");
        };
        if self.progress.begin() {
            let Some(from) = line.waypoint(self.index) else {
                return self.progress.abort("remove_waypoint", "waypoint index out of range");
            };
            let prev = match self.index {
                0 => line.start(),
                i => line.waypoint(i - 1).unwrap_or(line.start()),
            };
            let next = line.waypoint(self.index + 1).unwrap_or(line.end());
            self.from = from;
            self.to = prev.midpoint(next);
        }
        let t = self.progress.advance(dt);
        if !line.set_waypoint(self.index, GridCoord::lerp(&self.from, &self.to, t)) {
            return self.progress.abort("remove_waypoint", "waypoint vanished");
        }
        if self.progress.is_done() {
            line.remove_waypoint(self.index);
        }
        mark_edited(entities, self.target);
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Straighten a line by sliding every waypoint onto the start-end chord, then drop them all.
#[derive(Debug)]
pub struct ClearWaypoints {
    target: EntityId,
    paths: Vec<(GridCoord, GridCoord)>,
    progress: Progress,
}

impl ClearWaypoints {
    /// Clear `target`'s waypoints over `duration` seconds.
    pub fn new(target: EntityId, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            paths: Vec::new(),
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for ClearWaypoints {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(line) = line_of(entities, self.target) else {
            return self.progress.abort("clear_waypoints", "target is not a line");
        };
        if self.progress.begin() {
            let (s, e) = (line.start(), line.end());
            let n = line.waypoint_count();
            self.paths = line
                .waypoints()
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let k = (i + 1) as f64 / (n + 1) as f64;
                    (w, GridCoord::lerp(&s, &e, k))
                })
                .collect();
        }
        let t = self.progress.advance(dt);
        if line.waypoint_count() != self.paths.len() {
            return self.progress.abort("clear_waypoints", "waypoints changed underneath");
        }
        for (i, (from, to)) in self.paths.iter().enumerate() {
            line.set_waypoint(i, GridCoord::lerp(from, to, t));
        }
        if self.progress.is_done() {
            line.clear_waypoints();
        }
        mark_edited(entities, self.target);
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointRef {
    Start,
    End,
    Waypoint(usize),
}

impl PointRef {
    fn get(self, line: &Line) -> Option<GridCoord> {
        match self {
            Self::Start => Some(line.start()),
            Self::End => Some(line.end()),
            Self::Waypoint(i) => line.waypoint(i),
        }
    }

    fn set(self, line: &mut Line, p: GridCoord) -> bool {
        match self {
            Self::Start => line.set_start(p),
            Self::End => line.set_end(p),
            Self::Waypoint(i) => return line.set_waypoint(i, p),
        }
        true
    }
}

#[derive(Debug)]
struct PointTween {
    target: EntityId,
    point: PointRef,
    to: GridCoord,
    from: GridCoord,
    progress: Progress,
}

impl PointTween {
    fn new(target: EntityId, point: PointRef, to: GridCoord, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            point,
            to,
            from: to,
            progress: Progress::new(duration)?,
        })
    }

    fn update(&mut self, what: &'static str, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(line) = line_of(entities, self.target) else {
            return self.progress.abort(what, "target is not a line");
        };
        if self.progress.begin() {
            let Some(from) = self.point.get(line) else {
                return self.progress.abort(what, "waypoint index out of range");
            };
            self.from = from;
        }
        let t = self.progress.advance(dt);
        if !self.point.set(line, GridCoord::lerp(&self.from, &self.to, t)) {
            return self.progress.abort(what, "waypoint vanished");
        }
        mark_edited(entities, self.target);
        self.progress.is_running()
    }
}

macro_rules! point_tween {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name {
            inner: PointTween,
        }

        impl Animation for $name {
            fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
                self.inner.update($label, dt, entities)
            }

            fn phase(&self) -> Phase {
                self.inner.progress.phase()
            }
        }

        impl $name {
            /// Replace the default linear easing.
            pub fn with_ease(mut self, ease: crate::animation::ease::Ease) -> Self {
                self.inner.progress.set_ease(ease);
                self
            }
        }
    };
}

point_tween!(
    /// Slide waypoint `index` to a new position.
    MoveWaypoint,
    "move_waypoint"
);
point_tween!(
    /// Slide a line's end point.
    MoveLineEnd,
    "move_line_end"
);
point_tween!(
    /// Slide a line's start point.
    MoveLineStart,
    "move_line_start"
);

impl MoveWaypoint {
    /// Move waypoint `index` of `target` to `to` over `duration` seconds.
    pub fn new(target: EntityId, index: usize, to: GridCoord, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            inner: PointTween::new(target, PointRef::Waypoint(index), to, duration)?,
        })
    }
}

impl MoveLineEnd {
    /// Move `target`'s end point to `to` over `duration` seconds.
    pub fn new(target: EntityId, to: GridCoord, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            inner: PointTween::new(target, PointRef::End, to, duration)?,
        })
    }
}

impl MoveLineStart {
    /// Move `target`'s start point to `to` over `duration` seconds.
    pub fn new(target: EntityId, to: GridCoord, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            inner: PointTween::new(target, PointRef::Start, to, duration)?,
        })
    }
}

impl_with_ease!(AddWaypoint, RemoveWaypoint, ClearWaypoints);

#[cfg(test)]
#[path = "../../tests/unit/animation/path.rs"]
mod tests;
