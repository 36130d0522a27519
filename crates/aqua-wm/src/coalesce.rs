//! Per-frame event coalescing.
//!
//! Pointer moves and container resizes can arrive faster than frames are
//! rendered. Each has a latest-wins slot drained once per frame, so a burst
//! of events costs one recomputation and intermediate positions are dropped.

use aqua_core::{Point, Size};

#[derive(Debug, Default)]
pub struct FrameCoalescer {
    cursor: Option<Point>,
    resize: Option<Size>,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cursor(&mut self, p: Point) {
        self.cursor = Some(p);
    }

    pub fn push_resize(&mut self, s: Size) {
        self.resize = Some(s);
    }

    /// Latest cursor position since the last drain, if any.
    pub fn take_cursor(&mut self) -> Option<Point> {
        self.cursor.take()
    }

    /// Latest container size since the last drain, if any.
    pub fn take_resize(&mut self) -> Option<Size> {
        self.resize.take()
    }

    /// True when nothing is pending (no redraw needed for input).
    pub fn is_idle(&self) -> bool {
        self.cursor.is_none() && self.resize.is_none()
    }
}
