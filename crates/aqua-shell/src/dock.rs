//! Bottom dock.
//!
//! A centered strip of launcher icons. Clicking an icon opens (or focuses)
//! the matching provider; the dock itself never participates in window
//! z-ordering — it paints in the overlay band.

use aqua_core::{Point, Rect, Size};

use crate::apps::AppKind;

const ICON_SIZE: f32 = 48.0;
const ICON_GAP: f32 = 12.0;
const PADDING: f32 = 10.0;
const BOTTOM_MARGIN: f32 = 12.0;

pub struct Dock {
    items: Vec<AppKind>,
}

impl Default for Dock {
    fn default() -> Self {
        Self::new()
    }
}

impl Dock {
    pub fn new() -> Self {
        Self {
            items: AppKind::ALL.to_vec(),
        }
    }

    pub fn items(&self) -> &[AppKind] {
        &self.items
    }

    /// Panel bounds, bottom-centered in the container.
    pub fn panel_rect(&self, container: Size) -> Rect {
        let n = self.items.len() as f32;
        let w = PADDING * 2.0 + n * ICON_SIZE + (n - 1.0).max(0.0) * ICON_GAP;
        let h = PADDING * 2.0 + ICON_SIZE;
        Rect::new(
            (container.w - w) * 0.5,
            container.h - h - BOTTOM_MARGIN,
            w,
            h,
        )
    }

    pub fn item_rect(&self, index: usize, container: Size) -> Rect {
        let panel = self.panel_rect(container);
        Rect::new(
            panel.x + PADDING + index as f32 * (ICON_SIZE + ICON_GAP),
            panel.y + PADDING,
            ICON_SIZE,
            ICON_SIZE,
        )
    }

    /// The app whose icon contains `p`, if any.
    pub fn hit_test(&self, p: Point, container: Size) -> Option<AppKind> {
        if !self.panel_rect(container).contains(p) {
            return None;
        }
        self.items
            .iter()
            .enumerate()
            .find(|(i, _)| self.item_rect(*i, container).contains(p))
            .map(|(_, app)| *app)
    }

    /// True when the point is on the panel (even between icons), so clicks
    /// there don't fall through to the desktop.
    pub fn contains(&self, p: Point, container: Size) -> bool {
        self.panel_rect(container).contains(p)
    }
}
