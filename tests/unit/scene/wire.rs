use super::*;
use crate::scene::block::Block;
use crate::scene::entity::Entity;

fn g(x: f64, y: f64) -> GridCoord {
    GridCoord::new(x, y)
}

fn two_blocks() -> (Entities, EntityId, EntityId) {
    let mut es = Entities::new();
    let a = es.insert(Block::new(g(0.0, 0.0), 2.0, 2.0, "a").with_port(PortDirection::Right, "out"));
    let b = es.insert(Block::new(g(6.0, 4.0), 2.0, 2.0, "b").with_port(PortDirection::Left, "in"));
    (es, a, b)
}

fn refresh(es: &mut Entities, id: EntityId, force: bool) -> bool {
    let plan = match es.get(id) {
        Some(Entity::Wire(w)) => w.plan_refresh(es, force),
        _ => None,
    };
    let Some(plan) = plan else { return false };
    if let Some(Entity::Wire(w)) = es.get_mut(id) {
        w.apply_refresh(plan);
    }
    true
}

fn wire(es: &Entities, id: EntityId) -> &Wire {
    match es.get(id) {
        Some(Entity::Wire(w)) => w,
        other => panic!("not a wire: {other:?}"),
    }
}

#[test]
fn auto_routed_wire_snaps_to_ports_and_builds_a_z_channel() {
    let (mut es, a, b) = two_blocks();
    let w = es.insert(Wire::between(a, "out", b, "in"));
    assert!(refresh(&mut es, w, false));
    let line = wire(&es, w).line();
    assert_eq!(line.start(), g(2.0, 1.0));
    assert_eq!(line.end(), g(6.0, 5.0));
    assert_eq!(
        line.waypoints(),
        &[g(2.5, 1.0), g(4.0, 1.0), g(4.0, 5.0), g(5.5, 5.0)]
    );
    assert!(!refresh(&mut es, w, false), "unchanged providers do not reroute");
}

#[test]
fn unresolved_port_falls_back_to_centers() {
    let (mut es, a, b) = two_blocks();
    let w = es.insert(Wire::between(a, "missing", b, "in"));
    refresh(&mut es, w, false);
    let line = wire(&es, w).line();
    assert_eq!(line.start(), g(1.0, 1.0));
    assert_eq!(line.end(), g(7.0, 5.0));
    assert!(line.waypoints().is_empty());
}

#[test]
fn indexed_endpoints_resolve_by_edge_and_index() {
    let (mut es, a, b) = two_blocks();
    let w = es.insert(Wire::between_indexed(
        a,
        PortDirection::Right,
        0,
        b,
        PortDirection::Left,
        0,
    ));
    refresh(&mut es, w, false);
    assert_eq!(wire(&es, w).line().end(), g(6.0, 5.0));
}

#[test]
fn manual_waypoints_survive_provider_moves() {
    let (mut es, a, b) = two_blocks();
    let w = es.insert(Wire::between(a, "out", b, "in"));
    refresh(&mut es, w, false);
    if let Some(Entity::Wire(wire)) = es.get_mut(w) {
        wire.set_waypoints([g(3.0, 3.0)]);
        assert!(!wire.auto_route());
    }
    if let Some(e) = es.get_mut(b) {
        e.set_position(g(10.0, 8.0));
    }
    assert!(refresh(&mut es, w, false));
    let line = wire(&es, w).line();
    assert_eq!(line.waypoints(), &[g(3.0, 3.0)]);
    assert_eq!(line.end(), g(10.0, 9.0));
    assert!(!wire(&es, w).auto_route());
}

#[test]
fn legacy_wires_are_never_refreshed() {
    let mut es = Entities::new();
    let w = es.insert(Wire::through([g(0.0, 0.0), g(1.0, 2.0), g(3.0, 2.0)]));
    assert!(!refresh(&mut es, w, true));
    let line = wire(&es, w).line();
    assert_eq!(line.waypoints(), &[g(1.0, 2.0)]);
    assert_eq!(wire(&es, w).color(), WIRE_COLOR);
}

#[test]
fn sibling_port_changes_pull_the_endpoint_along() {
    let mut es = Entities::new();
    let a = es.insert(Block::new(g(1.0, 1.0), 2.0, 4.0, "a").with_port(PortDirection::Right, "out"));
    let b = es.insert(Block::new(g(8.0, 1.0), 2.0, 4.0, "b").with_port(PortDirection::Left, "in"));
    let w = es.insert(Wire::between(a, "out", b, "in"));
    refresh(&mut es, w, false);
    assert_eq!(wire(&es, w).line().start(), g(3.0, 3.0));

    if let Some(Entity::Block(block)) = es.get_mut(a) {
        block.add_port(PortDirection::Right, "extra");
    }
    assert!(refresh(&mut es, w, false), "moved port triggers a reroute");
    let out = match es.get(a).and_then(Entity::as_port_provider) {
        Some(p) => p.find_port("out").unwrap().position(),
        None => panic!("block should provide ports"),
    };
    assert_ne!(out, g(3.0, 3.0));
    assert_eq!(wire(&es, w).line().start(), out);
}

#[test]
fn gate_facing_change_reroutes_without_body_motion() {
    use crate::scene::gate::{GateType, LogicGate};

    let mut es = Entities::new();
    let gate = es.insert(LogicGate::new(GateType::And, PortDirection::Right, g(0.0, 0.0), 2.0, 2.0));
    let b = es.insert(Block::new(g(6.0, 4.0), 2.0, 2.0, "b").with_port(PortDirection::Left, "in"));
    let w = es.insert(Wire::between(gate, "output", b, "in"));
    refresh(&mut es, w, false);
    assert_eq!(wire(&es, w).line().start(), g(2.0, 1.0));

    if let Some(Entity::Gate(lg)) = es.get_mut(gate) {
        lg.set_facing(PortDirection::Bottom);
    }
    assert!(refresh(&mut es, w, false));
    assert_eq!(wire(&es, w).line().start(), g(1.0, 2.0));
}
