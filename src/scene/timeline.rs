use std::collections::VecDeque;

use crate::animation::anim::Animation;
use crate::animation::shape::Wait;
use crate::scene::drawable::Drawable;
use crate::scene::entity::{Entities, EntityId};

/// One queued step of a scene's script.
pub enum Action {
    /// Hold for a duration.
    Wait(Wait),
    /// Run an animation (possibly a group) to completion.
    Play(Box<dyn Animation>),
    /// Make an entity renderable, optionally running a spawn animation.
    Add {
        /// Entity already owned by the arena.
        id: EntityId,
        /// Played with the entity hidden at first.
        spawn: Option<Box<dyn Animation>>,
    },
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wait(w) => f.debug_tuple("Wait").field(w).finish(),
            Self::Play(a) => f.debug_tuple("Play").field(a).finish(),
            Self::Add { id, spawn } => f
                .debug_struct("Add")
                .field("id", id)
                .field("spawn", &spawn.is_some())
                .finish(),
        }
    }
}

/// Strictly sequential action queue with at most one action in flight.
#[derive(Debug, Default)]
pub struct Timeline {
    queue: VecDeque<Action>,
    current: Option<Box<dyn Animation>>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn push(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    /// Actions not yet dequeued.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether an action is in flight.
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Nothing in flight and nothing queued.
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// Advance one tick.
    ///
    /// With nothing in flight, one action is dequeued first. An `Add` registers its entity in
    /// `renderables`; without a spawn animation that is all this tick does.
    pub fn tick(&mut self, dt: f64, entities: &mut Entities, renderables: &mut Vec<EntityId>) {
        if self.current.is_none() {
            match self.queue.pop_front() {
                Some(Action::Wait(w)) => {
                    tracing::debug!("timeline: wait");
                    self.current = Some(Box::new(w));
                }
                Some(Action::Play(anim)) => {
                    tracing::debug!(animation = ?anim, "timeline: play");
                    self.current = Some(anim);
                }
                Some(Action::Add { id, spawn }) => {
                    tracing::debug!(entity = id.index(), spawn = spawn.is_some(), "timeline: add");
                    if !renderables.contains(&id) {
                        renderables.push(id);
                    }
                    if let Some(spawn) = spawn {
                        if let Some(e) = entities.get_mut(id) {
                            e.hide();
                        }
                        self.current = Some(spawn);
                    }
                }
                None => {}
            }
        }
        if let Some(anim) = self.current.as_mut()
            && !anim.update(dt, entities)
        {
            self.current = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timeline.rs"]
mod tests;
