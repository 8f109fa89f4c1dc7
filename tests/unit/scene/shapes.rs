use super::*;
use crate::render::surface::{DrawCommand, RecordingSurface};
use crate::scene::grid::GridConfig;

#[test]
fn rectangle_scales_around_its_center() {
    let mut r = Rectangle::new(GridCoord::new(2.0, 2.0), 4.0, 2.0);
    r.reset_for_animation();
    r.set_animatable_size(0.0, 0.0);
    assert_eq!(r.position(), GridCoord::new(4.0, 3.0));
    r.set_animatable_size(2.0, 1.0);
    assert_eq!(r.position(), GridCoord::new(3.0, 2.5));
    assert_eq!(r.center(), GridCoord::new(4.0, 3.0));
}

#[test]
fn moving_a_rectangle_mid_tween_moves_its_anchor() {
    let mut r = Rectangle::new(GridCoord::new(0.0, 0.0), 2.0, 2.0);
    r.reset_for_animation();
    r.set_position(GridCoord::new(5.0, 1.0));
    r.set_animatable_size(4.0, 4.0);
    assert_eq!(r.center(), GridCoord::new(6.0, 2.0));
}

#[test]
fn hidden_shapes_paint_nothing() {
    let grid = GridConfig::new(10, 10, 100.0, 100.0).unwrap();
    let mut surface = RecordingSurface::new(100, 100);
    let mut c = Circle::new(GridCoord::new(1.0, 1.0), 1.0);
    c.hide();
    {
        let mut ctx = DrawCtx::new(&mut surface, grid);
        c.draw(&mut ctx);
    }
    assert!(surface.commands.is_empty());
    c.show();
    {
        let mut ctx = DrawCtx::new(&mut surface, grid);
        c.draw(&mut ctx);
    }
    assert!(matches!(surface.commands[0], DrawCommand::Fill { .. }));
}

#[test]
fn outlined_rectangle_strokes_with_its_width() {
    let grid = GridConfig::new(10, 10, 100.0, 100.0).unwrap();
    let mut surface = RecordingSurface::new(200, 200);
    let r = Rectangle::new(GridCoord::new(1.0, 1.0), 2.0, 2.0).outlined(3.0);
    {
        let mut ctx = DrawCtx::new(&mut surface, grid);
        r.draw(&mut ctx);
    }
    match &surface.commands[0] {
        DrawCommand::Stroke {
            width, transform, ..
        } => {
            assert_eq!(*width, 3.0);
            assert_eq!(*transform, kurbo::Affine::scale(2.0));
        }
        other => panic!("unexpected {other:?}"),
    }
}
