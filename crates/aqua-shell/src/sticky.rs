//! Draggable sticky-note decoration.
//!
//! Lives below every window. Drags use the same clamped math as windows but
//! commit immediately (no transform staging — it's a decoration, not a
//! window). Its gradient is regenerated every five seconds while visible;
//! hiding pauses the cycle so a hidden note doesn't burn timers.

use std::time::{Duration, Instant};

use aqua_core::{Color, PausableTimer, Point, Rect, Size};
use rand::Rng;

const GRADIENT_PERIOD: Duration = Duration::from_secs(5);
pub const NOTE_SIZE: Size = Size { w: 180.0, h: 180.0 };

pub struct StickyNote {
    rect: Rect,
    visible: bool,
    gradient: (Color, Color),
    timer: PausableTimer,
    drag: Option<(Point, Point)>, // (pointer origin, note origin)
}

fn random_gradient(rng: &mut impl Rng) -> (Color, Color) {
    let hue1 = rng.random_range(0.0..360.0);
    let hue2 = (hue1 + rng.random_range(0.0..60.0) + 30.0) % 360.0;
    (
        Color::from_hsl(hue1, 0.7, 0.6),
        Color::from_hsl(hue2, 0.7, 0.6),
    )
}

impl StickyNote {
    pub fn new(origin: Point, now: Instant) -> Self {
        let mut rng = rand::rng();
        Self {
            rect: Rect::from_origin_size(origin, NOTE_SIZE),
            visible: true,
            gradient: random_gradient(&mut rng),
            timer: PausableTimer::new(GRADIENT_PERIOD, now),
            drag: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn gradient(&self) -> (Color, Color) {
        self.gradient
    }

    pub fn hide(&mut self, now: Instant) {
        if self.visible {
            self.visible = false;
            self.timer.pause(now);
            self.drag = None;
        }
    }

    pub fn show(&mut self, now: Instant) {
        if !self.visible {
            self.visible = true;
            self.timer.restart(GRADIENT_PERIOD, now);
        }
    }

    /// Advance the gradient cycle.
    pub fn tick(&mut self, now: Instant) {
        if self.visible && self.timer.is_expired(now) {
            let mut rng = rand::rng();
            self.gradient = random_gradient(&mut rng);
            self.timer.restart(GRADIENT_PERIOD, now);
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.visible && self.rect.contains(p)
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        if self.visible {
            self.drag = Some((pointer, self.rect.origin()));
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Immediate-commit drag: position moves with the pointer, clamped.
    pub fn drag_to(&mut self, pointer: Point, container: Size) {
        let Some((pointer_origin, origin)) = self.drag else {
            return;
        };
        let candidate = Point::new(
            origin.x + (pointer.x - pointer_origin.x),
            origin.y + (pointer.y - pointer_origin.y),
        );
        let clamped = Rect::clamp_origin(candidate, self.rect.size(), container);
        self.rect.x = clamped.x;
        self.rect.y = clamped.y;
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn clamp_into(&mut self, container: Size) {
        self.rect = self.rect.clamped_into(container);
    }
}
