//! Dynamic island overlay.
//!
//! A top-center pill, always above every window (the manager caps window z
//! strictly below this layer). Clicking expands it; it collapses on its own
//! after two seconds. Hovering pauses the countdown and leaving resumes it
//! with the remaining time, never a fresh two seconds.

use std::time::{Duration, Instant};

use aqua_core::{PausableTimer, Point, Rect, Size};

const COLLAPSE_AFTER: Duration = Duration::from_secs(2);

const PILL_W: f32 = 120.0;
const PILL_H: f32 = 28.0;
const EXPANDED_W: f32 = 360.0;
const EXPANDED_H: f32 = 84.0;
const TOP_MARGIN: f32 = 8.0;

pub struct DynamicIsland {
    expanded: bool,
    hovered: bool,
    timer: Option<PausableTimer>,
}

impl Default for DynamicIsland {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicIsland {
    pub fn new() -> Self {
        Self {
            expanded: false,
            hovered: false,
            timer: None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn expand(&mut self, now: Instant) {
        self.expanded = true;
        let mut timer = PausableTimer::new(COLLAPSE_AFTER, now);
        if self.hovered {
            timer.pause(now);
        }
        self.timer = Some(timer);
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
        self.timer = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.expanded {
            self.collapse();
        } else {
            self.expand(now);
        }
    }

    /// Update hover state; pauses/resumes the collapse countdown.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        if let Some(timer) = &mut self.timer {
            if hovered {
                timer.pause(now);
            } else {
                timer.resume(now);
            }
        }
    }

    /// Advance the countdown; collapses when it runs out.
    pub fn tick(&mut self, now: Instant) {
        if let Some(timer) = &self.timer {
            if timer.is_expired(now) {
                self.collapse();
            }
        }
    }

    /// Current pill bounds, centered at the top of the container.
    pub fn rect(&self, container: Size) -> Rect {
        let (w, h) = if self.expanded {
            (EXPANDED_W, EXPANDED_H)
        } else {
            (PILL_W, PILL_H)
        };
        Rect::new((container.w - w) * 0.5, TOP_MARGIN, w, h)
    }

    pub fn contains(&self, p: Point, container: Size) -> bool {
        self.rect(container).contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_collapse_after_two_seconds() {
        let t0 = Instant::now();
        let mut island = DynamicIsland::new();
        island.expand(t0);
        island.tick(t0 + Duration::from_millis(1900));
        assert!(island.is_expanded());
        island.tick(t0 + Duration::from_millis(2100));
        assert!(!island.is_expanded());
    }

    #[test]
    fn test_hover_pauses_and_resumes_with_remaining_time() {
        let t0 = Instant::now();
        let mut island = DynamicIsland::new();
        island.expand(t0);

        // Hover at 1.5s in; 0.5s remains banked.
        island.set_hovered(true, t0 + Duration::from_millis(1500));
        island.tick(t0 + Duration::from_secs(60));
        assert!(island.is_expanded(), "paused countdown must not expire");

        // Leave: countdown resumes with 0.5s, not a fresh 2s.
        island.set_hovered(false, t0 + Duration::from_secs(60));
        island.tick(t0 + Duration::from_secs(60) + Duration::from_millis(400));
        assert!(island.is_expanded());
        island.tick(t0 + Duration::from_secs(60) + Duration::from_millis(600));
        assert!(!island.is_expanded());
    }

    #[test]
    fn test_expand_while_hovered_starts_paused() {
        let t0 = Instant::now();
        let mut island = DynamicIsland::new();
        island.set_hovered(true, t0);
        island.expand(t0);
        island.tick(t0 + Duration::from_secs(10));
        assert!(island.is_expanded());
    }

    #[test]
    fn test_rect_grows_when_expanded() {
        let mut island = DynamicIsland::new();
        let container = Size::new(1200.0, 800.0);
        let collapsed = island.rect(container);
        island.expand(Instant::now());
        let expanded = island.rect(container);
        assert!(expanded.w > collapsed.w);
        assert!(expanded.h > collapsed.h);
        // Both stay horizontally centered.
        assert_eq!(collapsed.center().x, expanded.center().x);
    }
}
