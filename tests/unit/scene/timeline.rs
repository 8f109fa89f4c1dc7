use super::*;
use crate::animation::shape::{MoveTo, PopIn};
use crate::foundation::core::GridCoord;
use crate::scene::shapes::Circle;

#[test]
fn add_without_spawn_only_registers_on_its_tick() {
    let mut es = Entities::new();
    let id = es.insert(Circle::new(GridCoord::new(0.0, 0.0), 1.0));
    let mut r = Vec::new();
    let mut tl = Timeline::new();
    tl.push(Action::Add { id, spawn: None });
    tl.push(Action::Wait(Wait::new(1.0).unwrap()));
    tl.tick(0.1, &mut es, &mut r);
    assert_eq!(r, [id]);
    assert!(!tl.is_busy());
    assert_eq!(tl.pending(), 1);
    assert!(es.get(id).unwrap().is_visible());
}

#[test]
fn add_with_spawn_hides_then_runs_spawn_in_the_same_tick() {
    let mut es = Entities::new();
    let id = es.insert(Circle::new(GridCoord::new(0.0, 0.0), 2.0));
    let mut r = Vec::new();
    let mut tl = Timeline::new();
    tl.push(Action::Add {
        id,
        spawn: Some(Box::new(PopIn::new(id, 1.0).unwrap())),
    });
    tl.tick(0.5, &mut es, &mut r);
    assert!(tl.is_busy());
    assert_eq!(es.get(id).unwrap().size(), (1.0, 1.0));
    tl.tick(0.5, &mut es, &mut r);
    assert!(tl.is_idle());
}

#[test]
fn queued_actions_wait_for_the_one_in_flight() {
    let mut es = Entities::new();
    let id = es.insert(Circle::new(GridCoord::new(0.0, 0.0), 1.0));
    let mut r = Vec::new();
    let mut tl = Timeline::new();
    tl.push(Action::Wait(Wait::new(1.0).unwrap()));
    tl.push(Action::Play(Box::new(
        MoveTo::new(id, GridCoord::new(4.0, 0.0), 1.0).unwrap(),
    )));
    for _ in 0..4 {
        tl.tick(0.25, &mut es, &mut r);
        assert_eq!(es.get(id).unwrap().position(), GridCoord::new(0.0, 0.0));
    }
    tl.tick(0.25, &mut es, &mut r);
    assert_eq!(es.get(id).unwrap().position(), GridCoord::new(1.0, 0.0));
}

#[test]
fn empty_timeline_ticks_are_harmless() {
    let mut es = Entities::new();
    let mut r = Vec::new();
    let mut tl = Timeline::new();
    tl.tick(1.0, &mut es, &mut r);
    assert!(tl.is_idle());
}
