use super::*;

#[test]
fn ports_follow_moves_and_resizes() {
    let mut b = Block::new(GridCoord::new(2.0, 2.0), 4.0, 2.0, "cpu")
        .with_port(PortDirection::Right, "out")
        .with_port(PortDirection::Left, "in");
    assert_eq!(b.find_port("out").unwrap().position(), GridCoord::new(6.0, 3.0));

    b.set_position(GridCoord::new(0.0, 0.0));
    assert_eq!(b.find_port("out").unwrap().position(), GridCoord::new(4.0, 1.0));
    assert_eq!(b.find_port("in").unwrap().position(), GridCoord::new(0.0, 1.0));

    b.reset_for_animation();
    b.set_animatable_size(2.0, 2.0);
    assert_eq!(b.position(), GridCoord::new(1.0, 0.0));
    assert_eq!(b.find_port("out").unwrap().position(), GridCoord::new(3.0, 1.0));
}

#[test]
fn block_defaults() {
    let b = Block::new(GridCoord::new(0.0, 0.0), 2.0, 2.0, "x");
    assert_eq!(b.color(), Rgba::new(0.3, 0.3, 0.7, 1.0));
    assert_eq!(b.border_radius(), 8.0);
    assert_eq!(b.stroke_width(), 2.0);
    assert!(b.filled());
    assert_eq!(b.port_set().padding(), BLOCK_PORT_PADDING);
}

#[test]
fn clear_all_ports_empties_every_edge() {
    let mut b = Block::new(GridCoord::new(0.0, 0.0), 2.0, 2.0, "")
        .with_port(PortDirection::Top, "a")
        .with_port(PortDirection::Bottom, "b");
    b.clear_all_ports();
    assert!(b.port_set().is_empty());
}
