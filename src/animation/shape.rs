use crate::animation::anim::{Animation, Clock, Phase, Progress, impl_with_ease};
use crate::foundation::core::GridCoord;
use crate::foundation::error::BanimResult;
use crate::foundation::math::{Lerp, smoothstep};
use crate::scene::drawable::Drawable;
use crate::scene::entity::{Entities, EntityId};

/// Grow a drawable from nothing to its current animatable size.
///
/// Size, not alpha, is what animates; the target is made visible on the first tick.
#[derive(Debug)]
pub struct PopIn {
    target: EntityId,
    progress: Progress,
    end_size: (f64, f64),
}

impl PopIn {
    /// Pop `target` in over `duration` seconds.
    pub fn new(target: EntityId, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            progress: Progress::new(duration)?,
            end_size: (0.0, 0.0),
        })
    }
}

/// Length of the pop-in synthesized by [`Scene::add`](crate::Scene::add).
pub const DEFAULT_SPAWN_SECS: f64 = 0.5;

impl PopIn {
    /// Pop-in with the default spawn duration.
    pub fn spawn(target: EntityId) -> Self {
        Self {
            target,
            progress: Progress::from_clock(Clock::trusted(DEFAULT_SPAWN_SECS)),
            end_size: (0.0, 0.0),
        }
    }
}

impl Animation for PopIn {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(e) = entities.get_mut(self.target) else {
            return self.progress.abort("pop_in", "missing target");
        };
        if self.progress.begin() {
            self.end_size = e.animatable_size();
            e.reset_for_animation();
            e.show();
        }
        let t = self.progress.advance(dt);
        e.set_animatable_size(self.end_size.0 * t, self.end_size.1 * t);
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Move a drawable's anchor position.
#[derive(Debug)]
pub struct MoveTo {
    target: EntityId,
    to: GridCoord,
    from: GridCoord,
    progress: Progress,
}

impl MoveTo {
    /// Move `target` to `to` over `duration` seconds.
    pub fn new(target: EntityId, to: GridCoord, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            to,
            from: to,
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for MoveTo {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(e) = entities.get_mut(self.target) else {
            return self.progress.abort("move_to", "missing target");
        };
        if self.progress.begin() {
            self.from = e.position();
        }
        let t = self.progress.advance(dt);
        e.set_position(GridCoord::lerp(&self.from, &self.to, t));
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Tween a drawable's animatable size.
#[derive(Debug)]
pub struct ResizeTo {
    target: EntityId,
    to: (f64, f64),
    from: (f64, f64),
    progress: Progress,
}

impl ResizeTo {
    /// Resize `target` to `(w, h)` over `duration` seconds.
    pub fn new(target: EntityId, w: f64, h: f64, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            to: (w, h),
            from: (w, h),
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for ResizeTo {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(e) = entities.get_mut(self.target) else {
            return self.progress.abort("resize_to", "missing target");
        };
        if self.progress.begin() {
            self.from = e.animatable_size();
            e.reset_for_animation();
        }
        let t = self.progress.advance(dt);
        let (w, h) = <(f64, f64) as Lerp>::lerp(&self.from, &self.to, t);
        e.set_animatable_size(w, h);
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Smoothstep tween of a rectangle's or block's corner radius.
#[derive(Debug)]
pub struct BorderTo {
    target: EntityId,
    to: f64,
    from: f64,
    progress: Progress,
}

impl BorderTo {
    /// Tween `target`'s corner radius to `radius` over `duration` seconds.
    pub fn new(target: EntityId, radius: f64, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            to: radius,
            from: radius,
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for BorderTo {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let Some(e) = entities.get_mut(self.target) else {
            return self.progress.abort("border_to", "missing target");
        };
        if self.progress.begin() {
            match e.border_radius() {
                Some(r) => self.from = r,
                None => return self.progress.abort("border_to", "target has no corner radius"),
            }
        }
        let t = smoothstep(self.progress.advance(dt));
        e.set_border_radius(<f64 as Lerp>::lerp(&self.from, &self.to, t));
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Tween stroke width.
///
/// Unlike the other tweens, the start width is read when the animation is built, not when it
/// first runs.
#[derive(Debug)]
pub struct StrokeTo {
    target: EntityId,
    to: f64,
    from: Option<f64>,
    progress: Progress,
}

impl StrokeTo {
    /// Tween `target`'s stroke width to `width` over `duration` seconds, starting from the width
    /// it has in `entities` right now.
    pub fn new(entities: &Entities, target: EntityId, width: f64, duration: f64) -> BanimResult<Self> {
        Ok(Self {
            target,
            to: width,
            from: entities.get(target).map(|e| e.stroke_width()),
            progress: Progress::new(duration)?,
        })
    }
}

impl Animation for StrokeTo {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        let (Some(from), Some(e)) = (self.from, entities.get_mut(self.target)) else {
            return self.progress.abort("stroke_to", "missing target");
        };
        self.progress.begin();
        let t = self.progress.advance(dt);
        e.set_stroke_width(<f64 as Lerp>::lerp(&from, &self.to, t));
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

/// Hold for a fixed time without touching anything.
#[derive(Debug)]
pub struct Wait {
    progress: Progress,
}

impl Wait {
    /// Wait `duration` seconds; zero is allowed.
    pub fn new(duration: f64) -> BanimResult<Self> {
        Ok(Self {
            progress: Progress::from_clock(Clock::for_wait(duration)?),
        })
    }
}

impl Animation for Wait {
    fn update(&mut self, dt: f64, _entities: &mut Entities) -> bool {
        if self.progress.is_done() {
            return false;
        }
        self.progress.begin();
        self.progress.advance(dt);
        self.progress.is_running()
    }

    fn phase(&self) -> Phase {
        self.progress.phase()
    }
}

impl_with_ease!(PopIn, MoveTo, ResizeTo, BorderTo, StrokeTo);

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;
