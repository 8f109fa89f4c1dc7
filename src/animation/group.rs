use crate::animation::anim::{Animation, Phase};
use crate::scene::entity::Entities;

/// Runs its children side by side with the same `dt`.
///
/// Finished children are dropped; the group runs while any child remains. An empty group is
/// finished on its first update.
#[derive(Debug, Default)]
pub struct AnimationGroup {
    children: Vec<Box<dyn Animation>>,
    phase: Phase,
}

impl AnimationGroup {
    /// Group over `children`.
    pub fn new(children: Vec<Box<dyn Animation>>) -> Self {
        Self {
            children,
            phase: Phase::NotStarted,
        }
    }

    /// Builder-style child.
    pub fn with(mut self, child: impl Animation + 'static) -> Self {
        self.push(child);
        self
    }

    /// Add a child.
    pub fn push(&mut self, child: impl Animation + 'static) {
        self.children.push(Box::new(child));
    }

    /// Children still running.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no child remains.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Animation for AnimationGroup {
    fn update(&mut self, dt: f64, entities: &mut Entities) -> bool {
        if self.phase == Phase::Done {
            return false;
        }
        self.phase = Phase::Running;
        self.children.retain_mut(|c| c.update(dt, entities));
        if self.children.is_empty() {
            self.phase = Phase::Done;
        }
        self.phase == Phase::Running
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;
