//! Drag sessions.
//!
//! A session is an explicit object holding the pointer origin, the window's
//! origin geometry and the live clamped delta — no state hides in event
//! closures. The delta is a visual offset only; nothing is committed to the
//! window's rect until the session ends, mirroring the transform-then-commit
//! split the direct-manipulation path uses for performance.

use aqua_core::{Point, Rect, Size, finite_or};

use crate::window::WindowId;

#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    window: WindowId,
    pointer_origin: Point,
    /// Window left/top when the drag started.
    origin: Point,
    /// Clamped offset from `origin`; starts at zero.
    delta: Point,
}

impl DragSession {
    pub fn new(window: WindowId, pointer: Point, origin: Point) -> Self {
        Self {
            window,
            pointer_origin: pointer,
            origin,
            delta: Point::ZERO,
        }
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    /// Current visual offset to apply on top of the committed geometry.
    pub fn offset(&self) -> Point {
        self.delta
    }

    /// Process a pointer position: clamp the candidate origin into the
    /// container and update the live delta. Returns the clamped position.
    /// Pointer coordinates outside the container free-clamp rather than
    /// cancel; only the latest position matters, so coalescing (dropping
    /// intermediate moves) cannot change the outcome.
    pub fn update(&mut self, pointer: Point, window_size: Size, container: Size) -> Point {
        let dx = finite_or(pointer.x - self.pointer_origin.x, 0.0);
        let dy = finite_or(pointer.y - self.pointer_origin.y, 0.0);
        let candidate = Point::new(self.origin.x + dx, self.origin.y + dy);
        let clamped = Rect::clamp_origin(candidate, window_size, container);
        self.delta = Point::new(clamped.x - self.origin.x, clamped.y - self.origin.y);
        clamped
    }

    /// Final position to commit when the session ends.
    pub fn committed(&self) -> Point {
        Point::new(self.origin.x + self.delta.x, self.origin.y + self.delta.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size {
        w: 1200.0,
        h: 800.0,
    };
    const WIN: Size = Size { w: 400.0, h: 300.0 };

    #[test]
    fn test_commit_equals_clamped_final_delta() {
        let mut s = DragSession::new(1, Point::new(500.0, 400.0), Point::new(200.0, 100.0));
        // Many intermediate moves; only the last one matters.
        s.update(Point::new(520.0, 380.0), WIN, CONTAINER);
        s.update(Point::new(900.0, 30.0), WIN, CONTAINER);
        s.update(Point::new(550.0, 430.0), WIN, CONTAINER);
        assert_eq!(s.committed(), Point::new(250.0, 130.0));

        // Coalesced version: jumping straight to the final pointer position
        // commits the same place.
        let mut direct = DragSession::new(1, Point::new(500.0, 400.0), Point::new(200.0, 100.0));
        direct.update(Point::new(550.0, 430.0), WIN, CONTAINER);
        assert_eq!(direct.committed(), s.committed());
    }

    #[test]
    fn test_drag_free_clamps_at_edges() {
        let mut s = DragSession::new(1, Point::new(500.0, 400.0), Point::new(200.0, 100.0));
        // Pointer flies far off to the bottom-right.
        let pos = s.update(Point::new(5000.0, 5000.0), WIN, CONTAINER);
        assert_eq!(pos, Point::new(800.0, 500.0));
        // And back past the top-left.
        let pos = s.update(Point::new(-5000.0, -5000.0), WIN, CONTAINER);
        assert_eq!(pos, Point::ZERO);
        assert_eq!(s.committed(), Point::ZERO);
    }

    #[test]
    fn test_offset_tracks_delta_not_pointer() {
        let mut s = DragSession::new(1, Point::new(100.0, 100.0), Point::new(0.0, 0.0));
        s.update(Point::new(-50.0, 130.0), WIN, CONTAINER);
        // x clamped at the left edge, y free.
        assert_eq!(s.offset(), Point::new(0.0, 30.0));
    }
}
