//! Geometry primitives in container coordinates.
//!
//! All window geometry is expressed as pixels relative to the container's
//! content box. `Rect::clamped_into` is the single containment primitive:
//! every interactive operation funnels through it so that no window can
//! push the container into scrolling.

use serde::{Deserialize, Serialize};

use crate::finite_or;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair. Negative or NaN dimensions are treated as zero by
/// the operations that consume sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// Clamp both dimensions to finite, non-negative values.
    pub fn sanitized(self) -> Self {
        Self {
            w: finite_or(self.w, 0.0).max(0.0),
            h: finite_or(self.h, 0.0).max(0.0),
        }
    }

    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// An axis-aligned rectangle: origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size.w,
            h: size.h,
        }
    }

    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(self) -> f32 {
        self.y + self.h
    }

    pub fn center(self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Shift the rectangle by an offset.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Clamp the origin so the rectangle stays inside a container of the
    /// given size. When the rectangle is larger than the container the
    /// origin pins to zero (the rect overflows to the right/bottom; size is
    /// never touched here). NaN origins degrade to zero.
    pub fn clamped_into(self, container: Size) -> Self {
        let container = container.sanitized();
        let max_x = (container.w - self.w).max(0.0);
        let max_y = (container.h - self.h).max(0.0);
        Self {
            x: finite_or(self.x, 0.0).clamp(0.0, max_x),
            y: finite_or(self.y, 0.0).clamp(0.0, max_y),
            ..self
        }
    }

    /// Clamp a candidate origin for this rect's size, returning the origin
    /// only. Used by drag math, which tracks origins separately.
    pub fn clamp_origin(origin: Point, size: Size, container: Size) -> Point {
        let r = Rect::from_origin_size(origin, size).clamped_into(container);
        r.origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(109.0, 59.0)));
        assert!(!r.contains(Point::new(110.0, 30.0)));
        assert!(!r.contains(Point::new(50.0, 60.0)));
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let r = Rect::new(100.0, 50.0, 200.0, 100.0);
        let c = Size::new(800.0, 600.0);
        assert_eq!(r.clamped_into(c), r);
    }

    #[test]
    fn test_clamp_pushes_back_inside() {
        let c = Size::new(800.0, 600.0);
        let r = Rect::new(700.0, 550.0, 200.0, 100.0).clamped_into(c);
        assert_eq!(r.x, 600.0);
        assert_eq!(r.y, 500.0);

        let r = Rect::new(-40.0, -5.0, 200.0, 100.0).clamped_into(c);
        assert_eq!(r.origin(), Point::ZERO);
    }

    #[test]
    fn test_clamp_oversized_rect_pins_to_origin() {
        // Rect larger than the container: origin pins to 0, size untouched.
        let r = Rect::new(30.0, 30.0, 500.0, 500.0).clamped_into(Size::new(200.0, 200.0));
        assert_eq!(r.origin(), Point::ZERO);
        assert_eq!(r.size(), Size::new(500.0, 500.0));
    }

    #[test]
    fn test_clamp_defends_against_nan() {
        let r = Rect::new(f32::NAN, f32::NAN, 100.0, 100.0).clamped_into(Size::new(400.0, 300.0));
        assert_eq!(r.origin(), Point::ZERO);

        // Zero-size container behaves as an empty box, not a panic.
        let r = Rect::new(50.0, 50.0, 100.0, 100.0).clamped_into(Size::ZERO);
        assert_eq!(r.origin(), Point::ZERO);
    }

    #[test]
    fn test_sanitized_size() {
        assert_eq!(Size::new(-3.0, f32::NAN).sanitized(), Size::ZERO);
        assert_eq!(Size::new(40.0, 30.0).sanitized(), Size::new(40.0, 30.0));
    }
}
