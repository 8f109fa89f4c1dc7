use super::*;

#[test]
fn fps_rejects_zero_components() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn rgba8_conversion_clamps_out_of_range_channels() {
    let c = Rgba::new(1.5, -0.25, 0.5, 1.0);
    assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
}

#[test]
fn grid_coord_midpoint_and_distance() {
    let a = GridCoord::new(0.0, 0.0);
    let b = GridCoord::new(3.0, 4.0);
    assert_eq!(a.midpoint(b), GridCoord::new(1.5, 2.0));
    assert_eq!(a.distance(b), 5.0);
}
