use crate::animation::anim::Animation;
use crate::animation::group::AnimationGroup;
use crate::animation::shape::{PopIn, Wait};
use crate::foundation::error::BanimResult;
use crate::render::surface::Surface;
use crate::scene::block::Block;
use crate::scene::drawable::{DrawCtx, Drawable};
use crate::scene::entity::{Entities, Entity, EntityId};
use crate::scene::gate::LogicGate;
use crate::scene::grid::GridConfig;
use crate::scene::line::Line;
use crate::scene::timeline::{Action, Timeline};
use crate::scene::wire::Wire;

/// A grid, the entities on it, and the script that animates them.
///
/// Everything is driven by [`Scene::update`], called once per frame with the frame's time step,
/// followed by [`Scene::render`].
#[derive(Debug)]
pub struct Scene {
    grid: GridConfig,
    entities: Entities,
    renderables: Vec<EntityId>,
    timeline: Timeline,
}

impl Scene {
    /// Empty scene on a validated grid.
    pub fn new(grid: GridConfig) -> BanimResult<Self> {
        grid.validate()?;
        Ok(Self {
            grid,
            entities: Entities::new(),
            renderables: Vec::new(),
            timeline: Timeline::new(),
        })
    }

    /// The scene's grid.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Take ownership of `entity` without scheduling it. It is not drawn until an
    /// [`add_entity`](Scene::add_entity) for it is dequeued.
    pub fn insert(&mut self, entity: impl Into<Entity>) -> EntityId {
        let id = self.entities.insert(entity);
        self.refresh_wire(id, true);
        id
    }

    /// Queue the addition of an inserted entity, with an optional spawn animation.
    pub fn add_entity(&mut self, id: EntityId, spawn: Option<Box<dyn Animation>>) {
        self.timeline.push(Action::Add { id, spawn });
    }

    /// Queue `entity` with the default pop-in.
    pub fn add(&mut self, entity: impl Into<Entity>) -> EntityId {
        let id = self.insert(entity);
        self.add_entity(id, Some(Box::new(PopIn::spawn(id))));
        id
    }

    /// Queue `entity` with a spawn animation built from its id.
    pub fn add_with<A, F>(&mut self, entity: impl Into<Entity>, spawn: F) -> BanimResult<EntityId>
    where
        A: Animation + 'static,
        F: FnOnce(EntityId) -> BanimResult<A>,
    {
        let id = self.insert(entity);
        let anim = spawn(id)?;
        self.add_entity(id, Some(Box::new(anim)));
        Ok(id)
    }

    /// Queue `entity` to appear as is, with no spawn animation.
    pub fn add_without_animation(&mut self, entity: impl Into<Entity>) -> EntityId {
        let id = self.insert(entity);
        self.add_entity(id, None);
        id
    }

    /// Queue an animation.
    pub fn play(&mut self, anim: impl Animation + 'static) {
        self.play_boxed(Box::new(anim));
    }

    /// Queue an already boxed animation.
    pub fn play_boxed(&mut self, anim: Box<dyn Animation>) {
        self.timeline.push(Action::Play(anim));
    }

    /// Queue animations that run side by side.
    pub fn play_group(&mut self, anims: Vec<Box<dyn Animation>>) {
        self.play(AnimationGroup::new(anims));
    }

    /// Queue a pause.
    pub fn wait(&mut self, duration: f64) -> BanimResult<()> {
        self.timeline.push(Action::Wait(Wait::new(duration)?));
        Ok(())
    }

    /// Advance one frame: the timeline first, then every drawn wire whose providers moved.
    pub fn update(&mut self, dt: f64) {
        self.timeline
            .tick(dt, &mut self.entities, &mut self.renderables);
        for i in 0..self.renderables.len() {
            let id = self.renderables[i];
            self.refresh_wire(id, false);
        }
    }

    /// Recompute a wire's geometry now, whether or not its providers moved.
    pub fn reroute(&mut self, wire: EntityId) -> bool {
        self.refresh_wire(wire, true)
    }

    fn refresh_wire(&mut self, id: EntityId, force: bool) -> bool {
        let plan = match self.entities.get(id) {
            Some(Entity::Wire(w)) => w.plan_refresh(&self.entities, force),
            _ => None,
        };
        let Some(plan) = plan else {
            return false;
        };
        if let Some(Entity::Wire(w)) = self.entities.get_mut(id) {
            tracing::trace!(wire = id.index(), "rerouting wire");
            w.apply_refresh(plan);
        }
        true
    }

    /// Paint the grid overlay and every added entity, in order of addition.
    pub fn render(&self, surface: &mut dyn Surface) {
        let mut ctx = DrawCtx::new(surface, self.grid);
        ctx.draw_grid_overlay();
        for id in &self.renderables {
            if let Some(e) = self.entities.get(*id) {
                e.draw(&mut ctx);
            }
        }
    }

    /// No action in flight or queued.
    pub fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    /// Actions still queued.
    pub fn pending_actions(&self) -> usize {
        self.timeline.pending()
    }

    /// Every entity the scene owns.
    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Entities that are drawn, in order of addition.
    pub fn renderables(&self) -> &[EntityId] {
        &self.renderables
    }

    /// Whether `id` has been added to the drawn set.
    pub fn is_rendered(&self, id: EntityId) -> bool {
        self.renderables.contains(&id)
    }

    /// Entity behind `id`.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Entity behind `id`, mutably.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Block behind `id`.
    pub fn block_mut(&mut self, id: EntityId) -> Option<&mut Block> {
        match self.entities.get_mut(id) {
            Some(Entity::Block(b)) => Some(b),
            _ => None,
        }
    }

    /// Gate behind `id`.
    pub fn gate_mut(&mut self, id: EntityId) -> Option<&mut LogicGate> {
        match self.entities.get_mut(id) {
            Some(Entity::Gate(g)) => Some(g),
            _ => None,
        }
    }

    /// Wire behind `id`.
    pub fn wire(&self, id: EntityId) -> Option<&Wire> {
        match self.entities.get(id) {
            Some(Entity::Wire(w)) => Some(w),
            _ => None,
        }
    }

    /// Wire behind `id`, mutably.
    pub fn wire_mut(&mut self, id: EntityId) -> Option<&mut Wire> {
        match self.entities.get_mut(id) {
            Some(Entity::Wire(w)) => Some(w),
            _ => None,
        }
    }

    /// Polyline of the line or wire behind `id`.
    pub fn line(&self, id: EntityId) -> Option<&Line> {
        self.entities.get(id).and_then(Entity::as_line)
    }

    /// Polyline behind `id`, for editing. Editing a wire this way turns its auto-routing off.
    pub fn line_mut(&mut self, id: EntityId) -> Option<&mut Line> {
        self.entities.get_mut(id).and_then(Entity::line_mut)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
