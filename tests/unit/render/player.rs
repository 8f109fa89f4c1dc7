use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::GridCoord;
use crate::scene::grid::GridConfig;
use crate::scene::shapes::Rectangle;

fn scene() -> Scene {
    Scene::new(GridConfig::new(20, 10, 2000.0, 1000.0).unwrap()).unwrap()
}

fn opts(max_frames: u64, tail_frames: u64) -> PlayerOpts {
    PlayerOpts {
        fps: Fps::new(10, 1).unwrap(),
        max_frames,
        tail_frames,
    }
}

#[test]
fn stops_after_idle_plus_tail() {
    let mut s = scene();
    s.add_without_animation(Rectangle::new(GridCoord::new(0.0, 0.0), 10.0, 10.0));
    s.wait(0.1).unwrap();

    let mut surface = CpuSurface::new(40, 20).unwrap();
    let mut sink = InMemorySink::new();
    let stats = play_to_sink(&mut s, &mut surface, &mut sink, opts(100, 2)).unwrap();

    // Frame 0 dequeues the add, frame 1 runs the whole wait.
    assert_eq!(stats.idle_at, Some(FrameIndex(1)));
    assert_eq!(stats.frames, 4);
    assert!(stats.completed());
    assert_eq!(sink.frames().len(), 4);
    assert!(sink.is_ended());
    assert_eq!(sink.config().map(|c| (c.width, c.height)), Some((40, 20)));
}

#[test]
fn frame_cap_wins_over_a_long_script() {
    let mut s = scene();
    s.wait(10.0).unwrap();

    let mut surface = CpuSurface::new(8, 4).unwrap();
    let mut sink = InMemorySink::new();
    let stats = play_to_sink(&mut s, &mut surface, &mut sink, opts(5, 0)).unwrap();

    assert_eq!(stats.frames, 5);
    assert!(!stats.completed());
    assert!(!s.is_idle());
}

#[test]
fn zero_frame_cap_is_rejected() {
    let mut s = scene();
    let mut surface = CpuSurface::new(8, 4).unwrap();
    let mut sink = InMemorySink::new();
    assert!(play_to_sink(&mut s, &mut surface, &mut sink, opts(0, 0)).is_err());
    assert!(sink.frames().is_empty());
}

#[test]
fn frames_show_added_entities() {
    let mut s = scene();
    s.add_without_animation(Rectangle::new(GridCoord::new(0.0, 0.0), 10.0, 10.0));

    let mut surface = CpuSurface::new(40, 20).unwrap();
    let mut sink = InMemorySink::new();
    play_to_sink(&mut s, &mut surface, &mut sink, opts(10, 0)).unwrap();

    let first = &sink.frames()[0];
    assert_eq!(first.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(first.pixel(30, 10), Some([0, 0, 0, 255]));
}

#[test]
fn render_frame_at_matches_playback() {
    let build = || {
        let mut s = scene();
        let id = s.add_without_animation(Rectangle::new(GridCoord::new(0.0, 0.0), 2.0, 2.0));
        s.play(crate::animation::shape::MoveTo::new(id, GridCoord::new(18.0, 8.0), 1.0).unwrap());
        s
    };

    let mut played = build();
    let mut surface = CpuSurface::new(40, 20).unwrap();
    let mut sink = InMemorySink::new();
    play_to_sink(&mut played, &mut surface, &mut sink, opts(20, 0)).unwrap();

    let mut single = build();
    let frame = render_frame_at(&mut single, &mut surface, Fps::new(10, 1).unwrap(), 0.55).unwrap();
    assert_eq!(frame.data, sink.frames()[5].data);
}

#[test]
fn render_frame_at_rejects_negative_time() {
    let mut s = scene();
    let mut surface = CpuSurface::new(8, 4).unwrap();
    assert!(render_frame_at(&mut s, &mut surface, Fps::new(10, 1).unwrap(), -1.0).is_err());
}
