use crate::foundation::core::GridCoord;
use crate::scene::block::Block;
use crate::scene::drawable::{Appearance, DrawCtx, Drawable};
use crate::scene::gate::LogicGate;
use crate::scene::line::Line;
use crate::scene::port::PortProvider;
use crate::scene::shapes::{Circle, Rectangle};
use crate::scene::text::Text;
use crate::scene::wire::Wire;

/// Stable handle to an entity owned by a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Raw index, for diagnostics.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Every drawable kind a scene can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    /// See [`Rectangle`].
    Rect(Rectangle),
    /// See [`Circle`].
    Circle(Circle),
    /// See [`Line`].
    Line(Line),
    /// See [`Text`].
    Text(Text),
    /// See [`Block`].
    Block(Block),
    /// See [`LogicGate`].
    Gate(LogicGate),
    /// See [`Wire`].
    Wire(Wire),
}

macro_rules! delegate {
    ($self:expr, $e:ident => $body:expr) => {
        match $self {
            Entity::Rect($e) => $body,
            Entity::Circle($e) => $body,
            Entity::Line($e) => $body,
            Entity::Text($e) => $body,
            Entity::Block($e) => $body,
            Entity::Gate($e) => $body,
            Entity::Wire($e) => $body,
        }
    };
}

impl Entity {
    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Line(_) => "line",
            Self::Text(_) => "text",
            Self::Block(_) => "block",
            Self::Gate(_) => "gate",
            Self::Wire(_) => "wire",
        }
    }

    /// Ports, for blocks and gates.
    pub fn as_port_provider(&self) -> Option<&dyn PortProvider> {
        match self {
            Self::Block(b) => Some(b as &dyn PortProvider),
            Self::Gate(g) => Some(g as &dyn PortProvider),
            _ => None,
        }
    }

    /// The polyline of a line or wire.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(l) => Some(l),
            Self::Wire(w) => Some(w.line()),
            _ => None,
        }
    }

    /// The polyline of a line or wire, for editing. Editing a wire this way turns its
    /// auto-routing off.
    pub fn line_mut(&mut self) -> Option<&mut Line> {
        match self {
            Self::Line(l) => Some(l),
            Self::Wire(w) => Some(w.line_mut()),
            _ => None,
        }
    }

    // Waypoint tweens validate their target first and report the edit separately.
    pub(crate) fn line_for_animation(&mut self) -> Option<&mut Line> {
        match self {
            Self::Line(l) => Some(l),
            Self::Wire(w) => Some(w.line_for_animation()),
            _ => None,
        }
    }

    pub(crate) fn mark_line_edited(&mut self) {
        if let Self::Wire(w) = self {
            w.mark_edited();
        }
    }

    /// Corner radius, for kinds that have one.
    pub fn border_radius(&self) -> Option<f64> {
        match self {
            Self::Rect(r) => Some(r.border_radius()),
            Self::Block(b) => Some(b.border_radius()),
            _ => None,
        }
    }

    /// Set the corner radius. Returns `false` for kinds without one.
    pub fn set_border_radius(&mut self, radius: f64) -> bool {
        match self {
            Self::Rect(r) => r.set_border_radius(radius),
            Self::Block(b) => b.set_border_radius(radius),
            _ => return false,
        }
        true
    }
}

impl Drawable for Entity {
    fn position(&self) -> GridCoord {
        delegate!(self, e => e.position())
    }

    fn set_position(&mut self, pos: GridCoord) {
        delegate!(self, e => e.set_position(pos))
    }

    fn size(&self) -> (f64, f64) {
        delegate!(self, e => e.size())
    }

    fn set_size(&mut self, w: f64, h: f64) {
        delegate!(self, e => e.set_size(w, h))
    }

    fn appearance(&self) -> &Appearance {
        delegate!(self, e => e.appearance())
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        delegate!(self, e => e.appearance_mut())
    }

    fn animatable_size(&self) -> (f64, f64) {
        delegate!(self, e => e.animatable_size())
    }

    fn set_animatable_size(&mut self, w: f64, h: f64) {
        delegate!(self, e => e.set_animatable_size(w, h))
    }

    fn reset_for_animation(&mut self) {
        delegate!(self, e => e.reset_for_animation())
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        delegate!(self, e => e.draw(ctx))
    }
}

macro_rules! entity_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for Entity {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        })*
    };
}

entity_from!(
    Rect(Rectangle),
    Circle(Circle),
    Line(Line),
    Text(Text),
    Block(Block),
    Gate(LogicGate),
    Wire(Wire),
);

/// Arena owning every entity of a scene, addressed by [`EntityId`].
#[derive(Clone, Debug, Default)]
pub struct Entities {
    items: Vec<Entity>,
}

impl Entities {
    /// Empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `entity` and return its handle.
    pub fn insert(&mut self, entity: impl Into<Entity>) -> EntityId {
        let id = EntityId(self.items.len() as u32);
        self.items.push(entity.into());
        id
    }

    /// Entity behind `id`.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.get(id.0 as usize)
    }

    /// Entity behind `id`, mutably.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.items.get_mut(id.0 as usize)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All entities with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/entity.rs"]
mod tests;
