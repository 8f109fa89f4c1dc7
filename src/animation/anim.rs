use crate::animation::ease::Ease;
use crate::foundation::error::{BanimError, BanimResult};
use crate::scene::entity::Entities;

/// A time-driven effect advanced once per tick.
///
/// `update` returns whether the animation is still running. Targets are looked up in
/// `entities` on every call, so an animation never outlives or aliases what it edits.
pub trait Animation: std::fmt::Debug {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool;

    /// Lifecycle state.
    fn phase(&self) -> Phase;
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        (**self).update(dt, entities)
    }

    fn phase(&self) -> Phase {
        (**self).phase()
    }
}

/// Lifecycle of one animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Never updated; start state not captured yet.
    #[default]
    NotStarted,
    /// Start state captured; advancing.
    Running,
    /// Finished or abandoned; further updates are no-ops.
    Done,
}

/// Duration plus elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
    duration: f64,
    elapsed: f64,
}

impl Clock {
    /// Clock for a tween; `duration` must be finite and > 0.
    pub fn new(duration: f64) -> BanimResult<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(BanimError::animation(format!(
                "duration must be finite and > 0, got {duration}"
            )));
        }
        Ok(Self {
            duration,
            elapsed: 0.0,
        })
    }

    /// Clock for a wait; `duration` must be finite and >= 0.
    pub fn for_wait(duration: f64) -> BanimResult<Self> {
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(BanimError::animation(format!(
                "wait duration must be finite and >= 0, got {duration}"
            )));
        }
        Ok(Self {
            duration,
            elapsed: 0.0,
        })
    }

    // Only for durations known to be valid at compile time.
    pub(crate) const fn trusted(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Total duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time advanced so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Add `dt` and return normalized progress in `[0, 1]`.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        self.progress()
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Whether elapsed has reached duration.
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Clock, phase and ease shared by every tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Progress {
    clock: Clock,
    phase: Phase,
    ease: Ease,
}

impl Progress {
    pub(crate) fn new(duration: f64) -> BanimResult<Self> {
        Ok(Self::from_clock(Clock::new(duration)?))
    }

    pub(crate) fn from_clock(clock: Clock) -> Self {
        Self {
            clock,
            phase: Phase::NotStarted,
            ease: Ease::Linear,
        }
    }

    pub(crate) fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Moves `NotStarted` to `Running`; returns `true` exactly once, when start state should be
    /// captured.
    pub(crate) fn begin(&mut self) -> bool {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Running;
            return true;
        }
        false
    }

    /// Advance the clock and return eased progress.
    pub(crate) fn advance(&mut self, dt: f64) -> f64 {
        let t = self.clock.advance(dt);
        if self.clock.is_done() {
            self.phase = Phase::Done;
        }
        self.ease.apply(t)
    }

    pub(crate) fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub(crate) fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Give up without effect.
    pub(crate) fn abort(&mut self, what: &'static str, why: &'static str) -> bool {
        tracing::debug!(animation = what, reason = why, "animation is a no-op");
        self.phase = Phase::Done;
        false
    }
}

macro_rules! impl_with_ease {
    ($($ty:ty),* $(,)?) => {
        $(impl $ty {
            /// Replace the default linear easing.
            pub fn with_ease(mut self, ease: $crate::animation::ease::Ease) -> Self {
                self.progress.set_ease(ease);
                self
            }

            /// Time advanced so far, in seconds.
            pub fn elapsed(&self) -> f64 {
                self.progress.clock().elapsed()
            }
        })*
    };
}
pub(crate) use impl_with_ease;

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
