use super::*;
use crate::render::surface::{DrawCommand, RecordingSurface};
use kurbo::Shape;

fn grid() -> GridConfig {
    GridConfig::new(10, 5, 200.0, 100.0).unwrap()
}

#[test]
fn default_appearance_is_filled_white_grid() {
    let look = Appearance::default();
    assert_eq!(look.color, Rgba::WHITE);
    assert!(look.filled);
    assert_eq!(look.stroke_width, 2.0);
    assert_eq!(look.space, CoordSpace::Grid);
}

#[test]
fn grid_transform_follows_viewport_scale() {
    let mut rec = RecordingSurface::new(400, 50);
    let ctx = DrawCtx::new(&mut rec, grid());
    assert_eq!(ctx.transform(CoordSpace::Grid), Affine::scale_non_uniform(2.0, 0.5));
    assert_eq!(ctx.transform(CoordSpace::Pixel), Affine::IDENTITY);
}

#[test]
fn center_and_lattice_mappings_differ_by_half_a_cell() {
    let mut rec = RecordingSurface::new(200, 100);
    let ctx = DrawCtx::new(&mut rec, grid());
    let p = GridCoord::new(1.0, 2.0);
    assert_eq!(ctx.lattice_point(CoordSpace::Grid, p), Point::new(20.0, 40.0));
    assert_eq!(ctx.center_point(CoordSpace::Grid, p), Point::new(30.0, 50.0));
    assert_eq!(ctx.center_point(CoordSpace::Pixel, p), Point::new(1.0, 2.0));
    assert_eq!(ctx.extent(CoordSpace::Grid, 2.0, 1.0), Vec2::new(40.0, 20.0));
}

#[test]
fn paint_picks_fill_or_stroke_and_applies_rotation() {
    let mut rec = RecordingSurface::new(200, 100);
    let path = kurbo::Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
    {
        let mut ctx = DrawCtx::new(&mut rec, grid());
        let mut look = Appearance::default();
        ctx.paint(&look, &path, Point::new(5.0, 5.0));

        look.filled = false;
        look.rotation = std::f64::consts::FRAC_PI_2;
        ctx.paint(&look, &path, Point::new(5.0, 5.0));

        look.color = Rgba::TRANSPARENT;
        ctx.paint(&look, &path, Point::new(5.0, 5.0));
    }

    assert_eq!(rec.commands.len(), 2);
    assert!(matches!(rec.commands[0], DrawCommand::Fill { transform, .. } if transform == Affine::IDENTITY));
    match &rec.commands[1] {
        DrawCommand::Stroke { transform, width, .. } => {
            assert_eq!(*width, 2.0);
            assert_eq!(
                *transform,
                Affine::rotate_about(std::f64::consts::FRAC_PI_2, Point::new(5.0, 5.0))
            );
        }
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn grid_overlay_only_when_enabled() {
    let mut rec = RecordingSurface::new(200, 100);
    DrawCtx::new(&mut rec, grid()).draw_grid_overlay();
    assert!(rec.commands.is_empty());

    DrawCtx::new(&mut rec, grid().with_display_grid(true)).draw_grid_overlay();
    assert_eq!(rec.commands.len(), 1);
    assert!(matches!(rec.commands[0], DrawCommand::Stroke { .. }));
}
