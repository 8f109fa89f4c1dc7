//! banim is a small toolkit for animating 2D diagrams on a grid.
//!
//! A [`Scene`] owns a [`GridConfig`], an arena of entities (rectangles, circles, text, lines,
//! port-bearing blocks and logic gates, and wires between them) and a strictly sequential
//! timeline of actions. Each frame the host calls [`Scene::update`] with a fixed time step and
//! then [`Scene::render`] onto a [`Surface`].
//!
//! # Frame loop
//!
//! 1. **Script**: queue actions with [`Scene::add`], [`Scene::play`], [`Scene::play_group`] and
//!    [`Scene::wait`]. Exactly one action runs at a time; a group runs its children in parallel.
//! 2. **Update**: the timeline advances the in-flight animation, then every drawn wire whose
//!    endpoints moved is re-routed with an orthogonal channel path.
//! 3. **Render**: the grid overlay and every added entity paint onto a [`Surface`].
//!    [`CpuSurface`] rasterizes with `vello_cpu`; [`RecordingSurface`] just records calls.
//! 4. **Present** (optional): [`play_to_sink`] drives the loop and hands [`FrameRGBA`]s to a
//!    [`FrameSink`] such as [`PngSequenceSink`].
//!
//! Positions are grid coordinates unless an entity was built in [`CoordSpace::Pixel`]. Frames
//! are premultiplied RGBA8.
//!
//! ```
//! use banim::{
//!     Block, GridConfig, GridCoord, MoveTo, PortDirection, RecordingSurface, Scene, Wire,
//! };
//!
//! let mut scene = Scene::new(GridConfig::new(16, 9, 1600.0, 900.0)?)?;
//! let a = scene.add(
//!     Block::new(GridCoord::new(2.0, 3.0), 3.0, 2.0, "src").with_port(PortDirection::Right, "out"),
//! );
//! let b = scene.add(
//!     Block::new(GridCoord::new(10.0, 3.0), 3.0, 2.0, "dst").with_port(PortDirection::Left, "in"),
//! );
//! scene.add(Wire::between(a, "out", b, "in"));
//! scene.play(MoveTo::new(b, GridCoord::new(10.0, 5.0), 1.0)?);
//!
//! let mut surface = RecordingSurface::new(320, 180);
//! while !scene.is_idle() {
//!     scene.update(1.0 / 30.0);
//! }
//! scene.render(&mut surface);
//! assert!(!surface.commands.is_empty());
//! # Ok::<(), banim::BanimError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod render;
mod scene;

pub use animation::anim::{Animation, Clock, Phase};
pub use animation::ease::Ease;
pub use animation::group::AnimationGroup;
pub use animation::path::{
    AddWaypoint, ClearWaypoints, MoveLineEnd, MoveLineStart, MoveWaypoint, RemoveWaypoint,
};
pub use animation::shape::{
    BorderTo, DEFAULT_SPAWN_SECS, MoveTo, PopIn, ResizeTo, StrokeTo, Wait,
};
pub use encode::png::{PngSequenceSink, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{
    Affine, BezPath, CoordSpace, Fps, FrameIndex, GridCoord, Point, Rect, Rgba, Vec2,
};
pub use foundation::error::{BanimError, BanimResult};
pub use foundation::math::Lerp;
pub use render::cpu::{CpuSurface, TextBrush};
pub use render::frame::FrameRGBA;
pub use render::player::{PlayStats, PlayerOpts, play_to_sink, render_frame_at};
pub use render::surface::{DrawCommand, RecordingSurface, Surface};
pub use scene::block::{BLOCK_PORT_PADDING, Block};
pub use scene::composition::Scene;
pub use scene::drawable::{Appearance, DrawCtx, Drawable};
pub use scene::entity::{Entities, Entity, EntityId};
pub use scene::gate::{GATE_PORT_PADDING, GateType, LogicGate};
pub use scene::grid::{GridConfig, Viewport};
pub use scene::line::Line;
pub use scene::port::{Port, PortDirection, PortProvider, PortSet, distribution_ratio};
pub use scene::route::{PORT_CLEARANCE, RoutePath, channel, offset_point, route_between, route_ports};
pub use scene::shapes::{Circle, Rectangle};
pub use scene::text::Text;
pub use scene::timeline::{Action, Timeline};
pub use scene::wire::{PortRef, ProviderGeometry, WIRE_COLOR, Wire, WireEnd};
