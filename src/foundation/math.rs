use crate::foundation::core::{GridCoord, Rgba};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at parameter `t` between `a` (`t = 0`) and `b` (`t = 1`). `t` is not clamped.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for GridCoord {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        GridCoord::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for (f64, f64) {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: <f32 as Lerp>::lerp(&a.r, &b.r, t),
            g: <f32 as Lerp>::lerp(&a.g, &b.g, t),
            b: <f32 as Lerp>::lerp(&a.b, &b.b, t),
            a: <f32 as Lerp>::lerp(&a.a, &b.a, t),
        }
    }
}

/// Hermite smoothstep `3t² - 2t³` on an already-normalized `t`.
pub(crate) fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
