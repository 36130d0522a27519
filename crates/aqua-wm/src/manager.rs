//! The window manager.
//!
//! Owns the live window collection and enforces the two core invariants:
//! every committed window origin stays inside the container, and the
//! focused window holds the strict maximum z among windows while staying
//! below the reserved overlay.
//!
//! Interactive operations are no-op-safe: stale ids, repeated minimize,
//! restore of a non-minimized window and close of a closed window all
//! degrade to doing nothing (with a warning where that indicates a caller
//! bug), never to a panic.

use aqua_core::{Point, Rect, Size};
use tracing::warn;

use crate::drag::DragSession;
use crate::error::WmError;
use crate::events::WmEvent;
use crate::layout::{fit_aspect_ratio, square_size};
use crate::window::{
    ControlKind, HitRegion, HitTarget, RestorePoint, SizePolicy, Window, WindowId, WindowSpec,
    WindowState,
};

/// Manager tunables. Shells typically fill this from `aqua-config`.
#[derive(Debug, Clone, Copy)]
pub struct WmConfig {
    /// Baseline z below every live window.
    pub z_floor: i32,
    /// Minimum z of the reserved overlay; windows stay strictly below.
    /// The band above `z_floor` must exceed the number of concurrently
    /// live windows by at least two or renormalization cannot keep every
    /// window below the overlay (the defaults leave room for thousands).
    pub overlay_z: i32,
    /// Header height; also the collapsed height of a minimized window.
    pub header_height: f32,
    /// Size for windows created without an explicit one.
    pub default_size: Size,
    /// Fixed-square bounds.
    pub square_min: f32,
    pub square_target: f32,
    /// Per-axis viewport fraction for aspect-ratio windows.
    pub viewport_fraction: f32,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            z_floor: 1000,
            overlay_z: 9998,
            header_height: 32.0,
            default_size: Size::new(400.0, 300.0),
            square_min: 230.0,
            square_target: 300.0,
            viewport_fraction: 0.9,
        }
    }
}

pub struct WindowManager<C> {
    config: WmConfig,
    container: Size,
    windows: Vec<Window<C>>,
    next_id: WindowId,
    /// z of the topmost window; tracked incrementally instead of rescanning
    /// the collection on every focus.
    top_z: i32,
    drag: Option<DragSession>,
    events: Vec<WmEvent>,
}

impl<C> WindowManager<C> {
    pub fn new(container: Size) -> Self {
        Self::with_config(container, WmConfig::default())
    }

    pub fn with_config(container: Size, config: WmConfig) -> Self {
        Self {
            config,
            container: container.sanitized(),
            windows: Vec::new(),
            next_id: 1,
            top_z: config.z_floor,
            drag: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn windows(&self) -> &[Window<C>] {
        &self.windows
    }

    pub fn get(&self, id: WindowId) -> Option<&Window<C>> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Windows in back-to-front paint order.
    pub fn paint_order(&self) -> Vec<&Window<C>> {
        let mut order: Vec<&Window<C>> = self.windows.iter().collect();
        order.sort_by_key(|w| w.z);
        order
    }

    /// Singleton lookup: the window currently titled `title`, if any.
    pub fn find_by_title(&self, title: &str) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.title == title)
            .map(|w| w.id)
    }

    /// Events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<WmEvent> {
        std::mem::take(&mut self.events)
    }

    /// Create a window centered in the container, clamped, and focused.
    pub fn create_window(&mut self, spec: WindowSpec, content: C) -> WindowId {
        let title = if spec.title.trim().is_empty() {
            "Window".to_string()
        } else {
            spec.title
        };
        let mut size = spec.size.unwrap_or(self.config.default_size).sanitized();
        if size.is_empty() {
            size = self.config.default_size;
        }
        if spec.policy == SizePolicy::FixedSquare {
            let side = square_size(self.container, self.config.square_min, self.config.square_target);
            size = Size::new(side, side);
        }

        let origin = Point::new(
            ((self.container.w - size.w) * 0.5).max(0.0),
            ((self.container.h - size.h) * 0.5).max(0.0),
        );
        let rect = Rect::from_origin_size(origin, size).clamped_into(self.container);

        let id = self.next_id;
        self.next_id += 1;
        let z = self.next_z();
        self.windows.push(Window {
            id,
            title,
            content,
            rect,
            z,
            state: WindowState::Normal,
            policy: spec.policy,
            min_height: spec.min_height,
            content_visible: true,
            mobile_drawer: spec.mobile_drawer,
        });
        self.events.push(WmEvent::Created(id));
        self.events.push(WmEvent::Focused(id));
        id
    }

    /// Raise a window to the top of the stack. Geometry is untouched.
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        let Some(idx) = self.index_of(id) else {
            warn!(id, "bring_to_front: unknown window");
            return false;
        };
        if self.windows[idx].z == self.top_z {
            return true; // already topmost
        }
        let z = self.next_z();
        self.windows[idx].z = z;
        self.events.push(WmEvent::Focused(id));
        true
    }

    /// Collapse to header-only height, snapshotting the restore point.
    /// Already-minimized and currently-dragged windows are no-ops.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        if self.is_dragging(id) {
            warn!(id, "minimize ignored during drag");
            return false;
        }
        let header_h = self.config.header_height;
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let w = &mut self.windows[idx];
        if w.is_minimized() {
            return false;
        }
        w.state = WindowState::Minimized(RestorePoint {
            rect: w.rect,
            content_visible: w.content_visible,
            min_height: w.min_height,
        });
        w.rect.h = header_h;
        w.min_height = header_h;
        w.content_visible = false;
        self.events.push(WmEvent::Minimized(id));
        true
    }

    /// Consume the restore point: reapply saved geometry/content mode,
    /// re-clamped against the *current* container, and focus. A window
    /// that is not minimized is a no-op — the zoom control only ever
    /// restores, there is no fullscreen transition.
    pub fn restore(&mut self, id: WindowId) -> bool {
        if self.is_dragging(id) {
            warn!(id, "restore ignored during drag");
            return false;
        }
        let container = self.container;
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let w = &mut self.windows[idx];
        let WindowState::Minimized(rp) = w.state else {
            return false;
        };
        w.state = WindowState::Normal;
        w.content_visible = rp.content_visible;
        w.min_height = rp.min_height;
        w.rect = rp.rect.clamped_into(container);
        self.events.push(WmEvent::Restored(id));
        self.bring_to_front(id);
        true
    }

    /// Remove a window unconditionally. Unknown ids are a safe no-op and
    /// leave every other window's z and geometry untouched.
    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if self.is_dragging(id) {
            self.drag = None;
        }
        let removed = self.windows.swap_remove(idx);
        if removed.z == self.top_z {
            self.top_z = self
                .windows
                .iter()
                .map(|w| w.z)
                .max()
                .unwrap_or(self.config.z_floor);
        }
        self.events.push(WmEvent::Closed(id));
        if self.windows.is_empty() {
            self.events.push(WmEvent::AllWindowsClosed);
        }
        true
    }

    /// Close every live window (narrow-layout open policy).
    pub fn close_all(&mut self) {
        let ids: Vec<WindowId> = self.windows.iter().map(|w| w.id).collect();
        for id in ids {
            self.close(id);
        }
    }

    /// Move a window's origin, clamped into the container.
    pub fn move_to(&mut self, id: WindowId, origin: Point) -> bool {
        let container = self.container;
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let w = &mut self.windows[idx];
        w.rect.x = origin.x;
        w.rect.y = origin.y;
        w.rect = w.rect.clamped_into(container);
        true
    }

    /// Resize a window, re-clamping its position for the new size.
    pub fn resize_window(&mut self, id: WindowId, size: Size) -> bool {
        let container = self.container;
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let size = size.sanitized();
        if size.is_empty() {
            return false;
        }
        let w = &mut self.windows[idx];
        w.rect.w = size.w;
        w.rect.h = size.h;
        w.rect = w.rect.clamped_into(container);
        true
    }

    /// Recompute layout for a new container size. Sizes are finalized
    /// first (fixed-square, then aspect-ratio), positions re-clamped after,
    /// since the clamp bounds depend on the new sizes.
    pub fn container_resized(&mut self, container: Size) {
        self.container = container.sanitized();
        let cfg = self.config;
        let container = self.container;

        for w in &mut self.windows {
            match w.policy {
                SizePolicy::FixedSquare => {
                    let side = square_size(container, cfg.square_min, cfg.square_target);
                    if let WindowState::Minimized(rp) = &mut w.state {
                        // Collapsed height is kept; the square applies to the
                        // width now and to the snapshot consumed on restore.
                        rp.rect.w = side;
                        rp.rect.h = side;
                        w.rect.w = side;
                    } else {
                        w.rect.w = side;
                        w.rect.h = side;
                    }
                }
                SizePolicy::AspectRatio { base } => {
                    if !w.is_minimized() {
                        let size = fit_aspect_ratio(base, container, cfg.viewport_fraction);
                        w.rect.w = size.w;
                        w.rect.h = size.h;
                    }
                }
                SizePolicy::Free => {}
            }
        }

        for w in &mut self.windows {
            w.rect = w.rect.clamped_into(container);
        }
    }

    // --- pointer routing ---------------------------------------------------

    /// Topmost-first hit test. A window being dragged is tested at its
    /// visually offset position.
    pub fn hit_test(&self, p: Point) -> Option<HitTarget> {
        let header_h = self.config.header_height;
        let mut best: Option<(i32, HitTarget)> = None;
        for w in &self.windows {
            let local = match self.drag_offset(w.id) {
                Some(offset) => Point::new(p.x - offset.x, p.y - offset.y),
                None => p,
            };
            if let Some(region) = w.hit_region(local, header_h) {
                if best.is_none_or(|(z, _)| w.z > z) {
                    best = Some((w.z, HitTarget { id: w.id, region }));
                }
            }
        }
        best.map(|(_, target)| target)
    }

    /// Route a pointer-down: controls activate, the header body focuses
    /// and starts a drag, content only focuses. Returns false when the
    /// point hit no window (the shell then tries dock/desktop targets).
    pub fn pointer_down(&mut self, p: Point) -> bool {
        let Some(target) = self.hit_test(p) else {
            return false;
        };
        match target.region {
            HitRegion::Control(ControlKind::Close) => {
                self.close(target.id);
            }
            HitRegion::Control(ControlKind::Minimize) => {
                self.minimize(target.id);
            }
            HitRegion::Control(ControlKind::Zoom) => {
                self.restore(target.id);
            }
            HitRegion::Header => {
                self.bring_to_front(target.id);
                if let Err(err) = self.begin_drag(target.id, p) {
                    warn!(%err, "drag not started");
                }
            }
            HitRegion::Content => {
                self.bring_to_front(target.id);
            }
        }
        true
    }

    /// Start a drag session from a pointer position on a window's header.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> Result<(), WmError> {
        if self.drag.is_some() {
            return Err(WmError::DragInProgress);
        }
        let w = self.get(id).ok_or(WmError::WindowNotFound(id))?;
        self.drag = Some(DragSession::new(id, pointer, w.rect.origin()));
        Ok(())
    }

    /// Feed the latest (coalesced) pointer position into the live drag.
    /// While a minimized window is dragged its restore point follows, so a
    /// later restore lands at the dragged position.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(mut session) = self.drag else {
            return;
        };
        let Some(idx) = self.index_of(session.window()) else {
            self.drag = None;
            return;
        };
        let size = self.windows[idx].rect.size();
        let clamped = session.update(pointer, size, self.container);
        if let WindowState::Minimized(rp) = &mut self.windows[idx].state {
            rp.rect.x = clamped.x;
            rp.rect.y = clamped.y;
        }
        self.drag = Some(session);
    }

    /// Commit the clamped final position and end the session.
    pub fn end_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let container = self.container;
        if let Some(idx) = self.index_of(session.window()) {
            let committed = session.committed();
            let w = &mut self.windows[idx];
            w.rect.x = committed.x;
            w.rect.y = committed.y;
            w.rect = w.rect.clamped_into(container);
        }
    }

    pub fn dragging(&self) -> Option<WindowId> {
        self.drag.map(|s| s.window())
    }

    /// Visual offset of a window currently being dragged.
    pub fn drag_offset(&self, id: WindowId) -> Option<Point> {
        self.drag.filter(|s| s.window() == id).map(|s| s.offset())
    }

    // --- internals ---------------------------------------------------------

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn is_dragging(&self, id: WindowId) -> bool {
        self.dragging() == Some(id)
    }

    /// Next z for a freshly focused window, strictly above all others and
    /// strictly below the overlay. When the cap is reached, all windows are
    /// renormalized from the floor preserving their relative order, so the
    /// strict-maximum property holds unconditionally.
    fn next_z(&mut self) -> i32 {
        if self.top_z + 1 >= self.config.overlay_z {
            self.renormalize_z();
        }
        self.top_z += 1;
        self.top_z
    }

    fn renormalize_z(&mut self) {
        let mut order: Vec<usize> = (0..self.windows.len()).collect();
        order.sort_by_key(|&i| self.windows[i].z);
        let mut z = self.config.z_floor;
        for i in order {
            z += 1;
            self.windows[i].z = z;
        }
        self.top_z = z;
        if self.top_z + 1 >= self.config.overlay_z {
            warn!(
                windows = self.windows.len(),
                "z band too small to renormalize below the overlay"
            );
        }
    }
}
