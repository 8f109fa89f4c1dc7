use super::*;

fn g(x: f64, y: f64) -> GridCoord {
    GridCoord::new(x, y)
}

#[test]
fn right_to_left_on_same_row_stays_flat() {
    let path = route_between(g(2.0, 3.0), PortDirection::Right, g(8.0, 3.0), PortDirection::Left);
    assert_eq!(
        path.as_slice(),
        &[g(2.0, 3.0), g(2.5, 3.0), g(5.0, 3.0), g(5.0, 3.0), g(7.5, 3.0), g(8.0, 3.0)]
    );
    assert!(path.iter().all(|p| p.y == 3.0));
}

#[test]
fn right_to_left_across_rows_forms_a_z_channel() {
    let path = route_between(g(2.0, 1.0), PortDirection::Right, g(8.0, 5.0), PortDirection::Left);
    assert_eq!(path[2], g(5.0, 1.0));
    assert_eq!(path[3], g(5.0, 5.0));
}

#[test]
fn bottom_to_top_uses_mid_y() {
    let path = route_between(g(1.0, 2.0), PortDirection::Bottom, g(4.0, 8.0), PortDirection::Top);
    assert_eq!(path[1], g(1.0, 2.5));
    assert_eq!(path[2], g(1.0, 5.0));
    assert_eq!(path[3], g(4.0, 5.0));
    assert_eq!(path[4], g(4.0, 7.5));
}

#[test]
fn mixed_facings_bend_exactly_once_between_offsets() {
    let path = route_between(g(2.0, 2.0), PortDirection::Right, g(6.0, 6.0), PortDirection::Top);
    assert_eq!(path.len(), 5);
    assert_eq!(path[1], g(2.5, 2.0));
    assert_eq!(path[2], g(6.0, 2.0));
    assert_eq!(path[3], g(6.0, 5.5));

    let path = route_between(g(2.0, 2.0), PortDirection::Bottom, g(6.0, 6.0), PortDirection::Left);
    assert_eq!(path[2], g(2.0, 6.0));
}

#[test]
fn same_facings_also_use_a_single_elbow() {
    let path = route_between(g(0.0, 0.0), PortDirection::Right, g(4.0, 3.0), PortDirection::Right);
    assert_eq!(path.len(), 5);
    assert_eq!(path[2], g(4.5, 0.0));
}
