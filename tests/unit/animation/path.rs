use super::*;
use crate::scene::entity::Entity;
use crate::scene::wire::Wire;

fn g(x: f64, y: f64) -> GridCoord {
    GridCoord::new(x, y)
}

fn line(es: &Entities, id: EntityId) -> &Line {
    es.get(id).and_then(Entity::as_line).unwrap()
}

#[test]
fn add_waypoint_starts_at_line_end_and_slides_out() {
    let mut es = Entities::new();
    let id = es.insert(Line::new(g(0.0, 0.0), g(4.0, 0.0)));
    let mut add = AddWaypoint::new(id, g(2.0, 4.0), 1.0).unwrap();
    add.update(0.0, &mut es);
    assert_eq!(line(&es, id).waypoints(), &[g(4.0, 0.0)]);
    add.update(0.5, &mut es);
    assert_eq!(line(&es, id).waypoints(), &[g(3.0, 2.0)]);
    assert!(!add.update(0.5, &mut es));
    assert_eq!(line(&es, id).waypoints(), &[g(2.0, 4.0)]);
}

#[test]
fn remove_waypoint_converges_on_neighbour_midpoint_then_deletes() {
    let mut es = Entities::new();
    let id = es.insert(
        Line::new(g(0.0, 0.0), g(10.0, 0.0)).with_waypoints([g(2.0, 2.0), g(5.0, 8.0), g(8.0, 2.0)]),
    );
    let mut rm = RemoveWaypoint::new(id, 1, 1.0).unwrap();
    rm.update(0.5, &mut es);
    assert_eq!(line(&es, id).waypoint(1), Some(g(5.0, 5.0)));
    assert!(!rm.update(0.5, &mut es));
    assert_eq!(line(&es, id).waypoints(), &[g(2.0, 2.0), g(8.0, 2.0)]);
    let mid = g(2.0, 2.0).midpoint(g(8.0, 2.0));
    assert_eq!(mid, g(5.0, 2.0));
}

#[test]
fn remove_first_waypoint_uses_line_start_as_neighbour() {
    let mut es = Entities::new();
    let id = es.insert(Line::new(g(0.0, 0.0), g(4.0, 0.0)).with_waypoints([g(2.0, 6.0)]));
    let mut rm = RemoveWaypoint::new(id, 0, 1.0).unwrap();
    rm.update(0.5, &mut es);
    assert_eq!(line(&es, id).waypoint(0), Some(g(2.0, 3.0)));
}

#[test]
fn out_of_range_index_reports_done_immediately() {
    let mut es = Entities::new();
    let id = es.insert(Line::new(g(0.0, 0.0), g(4.0, 0.0)));
    assert!(!RemoveWaypoint::new(id, 0, 1.0).unwrap().update(0.1, &mut es));
    assert!(!MoveWaypoint::new(id, 3, g(1.0, 1.0), 1.0).unwrap().update(0.1, &mut es));
    assert_eq!(line(&es, id).end(), g(4.0, 0.0));
}

#[test]
fn clear_waypoints_spreads_points_on_the_chord_then_clears() {
    let mut es = Entities::new();
    let id = es.insert(
        Line::new(g(0.0, 0.0), g(9.0, 0.0)).with_waypoints([g(0.0, 6.0), g(9.0, 6.0)]),
    );
    let mut clr = ClearWaypoints::new(id, 1.0).unwrap();
    clr.update(0.5, &mut es);
    assert_eq!(line(&es, id).waypoints(), &[g(1.5, 3.0), g(7.5, 3.0)]);
    assert!(!clr.update(0.5, &mut es));
    assert!(line(&es, id).waypoints().is_empty());
}

#[test]
fn endpoint_tweens_move_one_point_only() {
    let mut es = Entities::new();
    let id = es.insert(Line::new(g(0.0, 0.0), g(4.0, 0.0)).with_waypoints([g(2.0, 2.0)]));
    let mut end = MoveLineEnd::new(id, g(4.0, 4.0), 1.0).unwrap();
    end.update(1.0, &mut es);
    let mut start = MoveLineStart::new(id, g(0.0, 4.0), 1.0).unwrap();
    start.update(0.5, &mut es);
    let l = line(&es, id);
    assert_eq!(l.end(), g(4.0, 4.0));
    assert_eq!(l.start(), g(0.0, 2.0));
    assert_eq!(l.waypoints(), &[g(2.0, 2.0)]);
}

#[test]
fn editing_a_wire_turns_auto_route_off() {
    let mut es = Entities::new();
    let a = es.insert(crate::scene::block::Block::new(g(0.0, 0.0), 2.0, 2.0, "a"));
    let b = es.insert(crate::scene::block::Block::new(g(6.0, 0.0), 2.0, 2.0, "b"));
    let w = es.insert(Wire::between(a, "out", b, "in"));
    let mut add = AddWaypoint::new(w, g(3.0, 3.0), 1.0).unwrap();
    add.update(1.0, &mut es);
    match es.get(w) {
        Some(Entity::Wire(wire)) => assert!(!wire.auto_route()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn rejected_waypoint_tweens_leave_auto_routing_on() {
    let mut es = Entities::new();
    let a = es.insert(crate::scene::block::Block::new(g(0.0, 0.0), 2.0, 2.0, "a"));
    let b = es.insert(crate::scene::block::Block::new(g(6.0, 0.0), 2.0, 2.0, "b"));
    let w = es.insert(Wire::between(a, "out", b, "in"));

    assert!(!RemoveWaypoint::new(w, 99, 1.0).unwrap().update(0.5, &mut es));
    assert!(!MoveWaypoint::new(w, 42, g(1.0, 1.0), 1.0).unwrap().update(0.5, &mut es));
    match es.get(w) {
        Some(Entity::Wire(wire)) => assert!(wire.auto_route()),
        other => panic!("unexpected {other:?}"),
    }
}
