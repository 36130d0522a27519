//! Window records and hit regions.
//!
//! A window's minimize state is a tagged variant carrying its restore
//! point, so "minimized without a snapshot" and "two snapshots" are
//! unrepresentable.

use aqua_core::{Point, Rect, Size};

/// Unique window identifier
pub type WindowId = u64;

/// Traffic-light control buttons in the header, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Close,
    Minimize,
    /// Restores from minimized; there is no fullscreen maximize.
    Zoom,
}

/// Sizing policy applied by the responsive layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizePolicy {
    /// Keeps whatever size it was given.
    Free,
    /// Always square, side in `[square_min, square_target]` capped by the
    /// container's short edge. The minimum may exceed a very small
    /// container; position is still clamped afterwards.
    FixedSquare,
    /// Keeps `base`'s aspect ratio while fitting within a fraction of the
    /// viewport on both axes.
    AspectRatio { base: Size },
}

/// Snapshot taken when a window minimizes; consumed exactly once on restore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestorePoint {
    pub rect: Rect,
    pub content_visible: bool,
    pub min_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowState {
    Normal,
    Minimized(RestorePoint),
}

/// Creation parameters for [`crate::WindowManager::create_window`].
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub title: String,
    /// `None` falls back to the configured default (400×300).
    pub size: Option<Size>,
    pub policy: SizePolicy,
    pub min_height: f32,
    /// Marks the window as a narrow-layout drawer; carried onto the window
    /// for external layout policies, never interpreted by the manager.
    pub mobile_drawer: bool,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: None,
            policy: SizePolicy::Free,
            min_height: 0.0,
            mobile_drawer: false,
        }
    }

    pub fn with_size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size::new(w, h));
        self
    }

    pub fn fixed_square(mut self) -> Self {
        self.policy = SizePolicy::FixedSquare;
        self
    }

    pub fn with_aspect(mut self, base_w: f32, base_h: f32) -> Self {
        self.policy = SizePolicy::AspectRatio {
            base: Size::new(base_w, base_h),
        };
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn as_mobile_drawer(mut self) -> Self {
        self.mobile_drawer = true;
        self
    }
}

/// A live window. `C` is the opaque content payload; the manager stores and
/// returns it but never interprets it.
#[derive(Debug)]
pub struct Window<C> {
    pub id: WindowId,
    pub title: String,
    pub content: C,
    /// Committed geometry in container coordinates. A drag in progress is
    /// an uncommitted visual offset on top of this.
    pub rect: Rect,
    pub z: i32,
    pub state: WindowState,
    pub policy: SizePolicy,
    pub min_height: f32,
    pub content_visible: bool,
    /// Narrow-layout drawer flag; exposed for external layout policies,
    /// never interpreted by the manager.
    pub mobile_drawer: bool,
}

impl<C> Window<C> {
    pub fn is_minimized(&self) -> bool {
        matches!(self.state, WindowState::Minimized(_))
    }

    /// Header (title bar) rect for the given header height.
    pub fn header_rect(&self, header_h: f32) -> Rect {
        Rect::new(self.rect.x, self.rect.y, self.rect.w, header_h.min(self.rect.h))
    }

    /// Bounding box of one traffic-light control.
    pub fn control_rect(&self, control: ControlKind, header_h: f32) -> Rect {
        const DIAMETER: f32 = 12.0;
        const GAP: f32 = 8.0;
        const LEFT_PAD: f32 = 8.0;
        let index = match control {
            ControlKind::Close => 0.0,
            ControlKind::Minimize => 1.0,
            ControlKind::Zoom => 2.0,
        };
        Rect::new(
            self.rect.x + LEFT_PAD + index * (DIAMETER + GAP),
            self.rect.y + (header_h - DIAMETER) * 0.5,
            DIAMETER,
            DIAMETER,
        )
    }

    /// Which region of this window a point falls in, if any.
    pub fn hit_region(&self, p: Point, header_h: f32) -> Option<HitRegion> {
        if !self.rect.contains(p) {
            return None;
        }
        if self.header_rect(header_h).contains(p) {
            for control in [ControlKind::Close, ControlKind::Minimize, ControlKind::Zoom] {
                if self.control_rect(control, header_h).contains(p) {
                    return Some(HitRegion::Control(control));
                }
            }
            return Some(HitRegion::Header);
        }
        Some(HitRegion::Content)
    }
}

/// Region distinctions that drive pointer routing: controls activate,
/// the header body drags, content only focuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Control(ControlKind),
    Header,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTarget {
    pub id: WindowId,
    pub region: HitRegion,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window<()> {
        Window {
            id: 1,
            title: "Test".into(),
            content: (),
            rect: Rect::new(100.0, 100.0, 400.0, 300.0),
            z: 1001,
            state: WindowState::Normal,
            policy: SizePolicy::Free,
            min_height: 0.0,
            content_visible: true,
            mobile_drawer: false,
        }
    }

    #[test]
    fn test_hit_regions() {
        let w = window();
        // Center of the close button: 100 + 8 + 6 = 114, 100 + 16 = 116
        assert_eq!(
            w.hit_region(Point::new(114.0, 116.0), 32.0),
            Some(HitRegion::Control(ControlKind::Close))
        );
        assert_eq!(
            w.hit_region(Point::new(134.0, 116.0), 32.0),
            Some(HitRegion::Control(ControlKind::Minimize))
        );
        assert_eq!(
            w.hit_region(Point::new(154.0, 116.0), 32.0),
            Some(HitRegion::Control(ControlKind::Zoom))
        );
        // Header body, right of the control cluster
        assert_eq!(
            w.hit_region(Point::new(300.0, 116.0), 32.0),
            Some(HitRegion::Header)
        );
        // Below the header
        assert_eq!(
            w.hit_region(Point::new(300.0, 200.0), 32.0),
            Some(HitRegion::Content)
        );
        // Outside entirely
        assert_eq!(w.hit_region(Point::new(50.0, 50.0), 32.0), None);
    }

    #[test]
    fn test_collapsed_window_is_all_header() {
        let mut w = window();
        w.rect.h = 32.0;
        assert_eq!(
            w.hit_region(Point::new(300.0, 116.0), 32.0),
            Some(HitRegion::Header)
        );
    }
}
