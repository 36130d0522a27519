//! Retained draw-command list for one frame.
//!
//! The scene pushes rounded rects with explicit z; the list is sorted
//! by z before upload so layering matches the window manager's order.

use aqua_core::{Color, Rect};

#[derive(Debug, Clone, Copy)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub radius: f32,
    pub z: i32,
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<RectCmd>,
    clear_color: Color,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: Color) {
        self.cmds.clear();
        self.clear_color = color;
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn rounded_rect(&mut self, rect: Rect, color: Color, radius: f32, z: i32) {
        if rect.w <= 0.0 || rect.h <= 0.0 || color.a <= 0.0 {
            return;
        }
        self.cmds.push(RectCmd {
            rect,
            color,
            radius,
            z,
        });
    }

    pub fn rect(&mut self, rect: Rect, color: Color, z: i32) {
        self.rounded_rect(rect, color, 0.0, z);
    }

    /// Commands sorted back-to-front. Stable so same-z commands keep
    /// submission order.
    pub fn finish(&mut self) -> &[RectCmd] {
        self.cmds.sort_by_key(|c| c.z);
        &self.cmds
    }
}
