use super::*;
use crate::foundation::core::Rect;
use kurbo::Shape;

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    Rect::new(x0, y0, x1, y1).to_path(0.1)
}

#[test]
fn new_rejects_bad_dimensions() {
    assert!(CpuSurface::new(0, 10).is_err());
    assert!(CpuSurface::new(10, 0).is_err());
    assert!(CpuSurface::new(70_000, 10).is_err());
    assert!(CpuSurface::new(16, 9).is_ok());
}

#[test]
fn invalid_font_bytes_are_rejected() {
    let s = CpuSurface::new(8, 8).unwrap();
    assert!(s.with_font(b"definitely not a font").is_err());
}

#[test]
fn empty_frame_is_the_clear_color() {
    let mut s = CpuSurface::new(8, 4).unwrap().with_clear_rgba([0, 0, 255, 255]);
    let f = s.finish().unwrap();
    assert_eq!((f.width, f.height), (8, 4));
    assert_eq!(f.data.len(), 8 * 4 * 4);
    assert!(f.premultiplied);
    assert!(!f.differs_from([0, 0, 255, 255]));
}

#[test]
fn fill_covers_its_area_only() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    s.fill_path(&square(4.0, 4.0, 12.0, 12.0), Affine::IDENTITY, Rgba::rgb(1.0, 0.0, 0.0));
    let f = s.finish().unwrap();

    assert_eq!(f.pixel(8, 8), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(15, 15), Some([0, 0, 0, 255]));
}

#[test]
fn transform_is_applied() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    s.fill_path(
        &square(0.0, 0.0, 4.0, 4.0),
        Affine::scale(2.0).then_translate((8.0, 8.0).into()),
        Rgba::WHITE,
    );
    let f = s.finish().unwrap();
    assert_eq!(f.pixel(12, 12), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 255]));
}

#[test]
fn stroke_leaves_interior_untouched() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.stroke_path(&square(4.0, 4.0, 28.0, 28.0), Affine::IDENTITY, 2.0, Rgba::WHITE);
    let f = s.finish().unwrap();
    assert_eq!(f.pixel(16, 16), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(4, 16), Some([255, 255, 255, 255]));
}

#[test]
fn finish_starts_a_fresh_frame() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    s.fill_path(&square(0.0, 0.0, 8.0, 8.0), Affine::IDENTITY, Rgba::WHITE);
    let first = s.finish().unwrap();
    let second = s.finish().unwrap();
    assert!(first.differs_from([0, 0, 0, 255]));
    assert!(!second.differs_from([0, 0, 0, 255]));
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    assert!(!s.has_font());
    s.fill_text("hi", Point::new(4.0, 4.0), 12.0, Affine::IDENTITY, Rgba::WHITE);
    let f = s.finish().unwrap();
    assert!(!f.differs_from([0, 0, 0, 255]));
}

#[test]
fn rendering_is_deterministic() {
    let draw = || {
        let mut s = CpuSurface::new(24, 24).unwrap();
        s.fill_path(
            &kurbo::Circle::new((12.0, 12.0), 7.5).to_path(0.1),
            Affine::IDENTITY,
            Rgba::new(0.2, 0.6, 1.0, 0.7),
        );
        s.finish().unwrap().data
    };
    assert_eq!(draw(), draw());
}
