//! aqua-core: shared primitives for the Aqua desktop shell.
//!
//! Provides the geometry types used by the window manager and renderer,
//! the linear premultiplied color type, and the pausable timer primitive
//! that drives the island/sticky-note animations.

mod color;
mod geometry;
mod timer;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use timer::PausableTimer;

/// Replace non-finite values with a fallback. Geometry math never
/// propagates NaN; a bad measurement degrades to the fallback instead.
pub fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_or() {
        assert_eq!(finite_or(3.0, 0.0), 3.0);
        assert_eq!(finite_or(f32::NAN, 0.0), 0.0);
        assert_eq!(finite_or(f32::INFINITY, 1.5), 1.5);
    }
}
