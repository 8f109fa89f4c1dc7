use super::*;
use crate::scene::gate::GateType;
use crate::scene::port::PortDirection;

fn g(x: f64, y: f64) -> GridCoord {
    GridCoord::new(x, y)
}

#[test]
fn ids_follow_insertion_order() {
    let mut arena = Entities::new();
    assert!(arena.is_empty());
    let a = arena.insert(Rectangle::new(g(0.0, 0.0), 1.0, 1.0));
    let b = arena.insert(Circle::new(g(2.0, 2.0), 1.0));
    assert_eq!((a.index(), b.index()), (0, 1));
    assert_eq!(arena.len(), 2);

    let kinds: Vec<&str> = arena.iter().map(|(_, e)| e.kind()).collect();
    assert_eq!(kinds, vec!["rect", "circle"]);
    assert!(arena.get(EntityId(7)).is_none());
}

#[test]
fn drawable_calls_reach_the_variant() {
    let mut e = Entity::from(Circle::new(g(1.0, 1.0), 2.0));
    e.set_position(g(4.0, 5.0));
    e.set_size(3.0, 1.5);
    e.set_alpha(0.5);

    let Entity::Circle(c) = &e else {
        panic!("expected a circle");
    };
    assert_eq!(c.position(), g(4.0, 5.0));
    assert_eq!(c.size(), (3.0, 1.5));
    assert_eq!(c.alpha(), 0.5);
}

#[test]
fn only_blocks_and_gates_provide_ports() {
    let block = Entity::from(Block::new(g(0.0, 0.0), 2.0, 2.0, "b").with_port(PortDirection::Left, "in"));
    let gate = Entity::from(LogicGate::new(GateType::Not, PortDirection::Right, g(0.0, 0.0), 2.0, 2.0));
    let text = Entity::from(Text::new(g(0.0, 0.0), "t", 12.0));

    assert!(block.as_port_provider().and_then(|p| p.find_port("in")).is_some());
    assert!(gate.as_port_provider().and_then(|p| p.find_port("output")).is_some());
    assert!(text.as_port_provider().is_none());
}

#[test]
fn lines_and_wires_expose_their_polyline() {
    let mut line = Entity::from(Line::new(g(0.0, 0.0), g(3.0, 0.0)));
    let mut wire = Entity::from(Wire::straight(g(0.0, 1.0), g(3.0, 1.0)));
    let mut rect = Entity::from(Rectangle::new(g(0.0, 0.0), 1.0, 1.0));

    assert_eq!(line.as_line().map(Line::length), Some(3.0));
    assert_eq!(wire.as_line().map(Line::end), Some(g(3.0, 1.0)));
    assert!(rect.as_line().is_none());

    line.line_mut().unwrap().add_waypoint(g(1.0, 1.0));
    wire.line_mut().unwrap().add_waypoint(g(1.0, 2.0));
    assert!(rect.line_mut().is_none());
    assert_eq!(line.as_line().unwrap().waypoint_count(), 1);
    assert_eq!(wire.as_line().unwrap().waypoint_count(), 1);
}

#[test]
fn border_radius_only_on_rounded_kinds() {
    let mut rect = Entity::from(Rectangle::new(g(0.0, 0.0), 1.0, 1.0));
    let mut circle = Entity::from(Circle::new(g(0.0, 0.0), 1.0));

    assert!(rect.set_border_radius(6.0));
    assert_eq!(rect.border_radius(), Some(6.0));
    assert!(!circle.set_border_radius(6.0));
    assert_eq!(circle.border_radius(), None);
}
