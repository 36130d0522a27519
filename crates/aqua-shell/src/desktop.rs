//! The desktop scene: ties the window manager, dock, dynamic island,
//! sticky note and error banner to the event loop and the renderer.
//!
//! Input is coalesced: cursor moves and resizes land in latest-wins slots
//! and are drained once per frame, so drag and layout math run at most once
//! per frame regardless of event rate.

use std::time::Instant;

use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton};

use aqua_config::DeskConfig;
use aqua_core::{Point, Rect, Size};
use aqua_wm::{
    ControlKind, FrameCoalescer, Window, WindowManager, WmConfig, WmEvent,
};

use crate::apps::{
    ABOUT_TRIO, AppContent, AppKind, about_panel_spec, articles_spec, photos_spec, sample_articles,
    secret_spec, trash_spec, ARTICLES_TITLE, PHOTOS_TITLE, SECRET_TITLE, TRASH_TITLE,
};
use crate::banner::ErrorBanner;
use crate::dock::Dock;
use crate::island::DynamicIsland;
use crate::painter::Painter;
use crate::platform::{EventHandler, WindowCtx};
use crate::renderer::RectRenderer;
use crate::sticky::StickyNote;
use crate::theme::Theme;

/// Paint layers per window z step; windows get [z*STEP, z*STEP+7].
const Z_STEP: i32 = 8;
const STICKY_Z: i32 = 900 * Z_STEP;

pub struct DesktopShell {
    config: DeskConfig,
    theme: Theme,
    wm: WindowManager<AppContent>,
    coalescer: FrameCoalescer,
    dock: Dock,
    island: DynamicIsland,
    sticky: StickyNote,
    banner: ErrorBanner,
    painter: Painter,
    renderer: Option<RectRenderer>,
    cursor: Point,
}

fn wm_config(config: &DeskConfig) -> WmConfig {
    WmConfig {
        z_floor: config.zorder.floor,
        overlay_z: config.zorder.overlay,
        header_height: config.window.header_height,
        default_size: Size::new(config.window.default_width, config.window.default_height),
        square_min: config.layout.square_min,
        square_target: config.layout.square_target,
        viewport_fraction: config.layout.viewport_fraction,
    }
}

impl DesktopShell {
    pub fn new(config: DeskConfig) -> Self {
        let now = Instant::now();
        let wm = WindowManager::with_config(Size::ZERO, wm_config(&config));
        Self {
            config,
            theme: Theme::default(),
            wm,
            coalescer: FrameCoalescer::new(),
            dock: Dock::new(),
            island: DynamicIsland::new(),
            sticky: StickyNote::new(Point::new(24.0, 24.0), now),
            banner: ErrorBanner::new(),
            painter: Painter::new(),
            renderer: None,
            cursor: Point::ZERO,
        }
    }

    fn container(&self) -> Size {
        self.wm.container()
    }

    fn is_narrow(&self) -> bool {
        self.container().w <= self.config.layout.mobile_breakpoint
    }

    /// Open or focus a provider. Narrow layout closes everything else
    /// first so a single window owns the screen.
    pub fn open_app(&mut self, app: AppKind, now: Instant) {
        let narrow = self.is_narrow();
        match app {
            AppKind::About => {
                if narrow {
                    self.wm.close_all();
                } else {
                    // Reopening replaces the previous trio.
                    for panel in &ABOUT_TRIO {
                        if let Some(id) = self.wm.find_by_title(panel.title) {
                            self.wm.close(id);
                        }
                    }
                }
                let container = self.container();
                for panel in &ABOUT_TRIO {
                    let spec = about_panel_spec(panel.title);
                    let spec = if narrow { spec.as_mobile_drawer() } else { spec };
                    let id = self.wm.create_window(spec, AppContent::AboutPanel);
                    self.wm.move_to(
                        id,
                        Point::new(container.w * panel.left_frac, container.h * panel.top_frac),
                    );
                }
            }
            AppKind::Articles => self.open_singleton(
                ARTICLES_TITLE,
                articles_spec(),
                AppContent::Articles(sample_articles()),
                narrow,
            ),
            AppKind::Photos => {
                self.open_singleton(PHOTOS_TITLE, photos_spec(), AppContent::Photos, narrow)
            }
            AppKind::Secret => {
                self.open_singleton(SECRET_TITLE, secret_spec(), AppContent::Secret, narrow)
            }
            AppKind::Trash => {
                self.open_singleton(TRASH_TITLE, trash_spec(), AppContent::Trash, narrow)
            }
        }
        if narrow && !self.wm.is_empty() {
            self.sticky.hide(now);
        }
    }

    fn open_singleton(
        &mut self,
        title: &str,
        spec: aqua_wm::WindowSpec,
        content: AppContent,
        narrow: bool,
    ) {
        if narrow {
            self.wm.close_all();
        } else if let Some(existing) = self.wm.find_by_title(title) {
            self.wm.bring_to_front(existing);
            return;
        }
        let spec = if narrow { spec.as_mobile_drawer() } else { spec };
        let id = self.wm.create_window(spec, content);
        if narrow {
            // Narrow layout: 90% width at a 5% left inset.
            let container = self.container();
            if let Some(w) = self.wm.get(id) {
                let h = w.rect.h;
                let y = w.rect.y;
                self.wm.resize_window(id, Size::new(container.w * 0.9, h));
                self.wm.move_to(id, Point::new(container.w * 0.05, y));
            }
        }
    }

    fn handle_pointer_down(&mut self, p: Point, now: Instant) {
        let container = self.container();
        if self.banner.handle_click(p, container) {
            return;
        }
        if self.island.contains(p, container) {
            self.island.toggle(now);
            return;
        }
        if self.wm.pointer_down(p) {
            return;
        }
        if let Some(app) = self.dock.hit_test(p, container) {
            self.open_app(app, now);
            return;
        }
        if self.dock.contains(p, container) {
            return;
        }
        if self.sticky.contains(p) {
            self.sticky.begin_drag(p);
        }
    }

    fn handle_pointer_up(&mut self, now: Instant) {
        // A move and the release can land in the same frame. Apply the
        // pending cursor position before committing, or the final delta
        // would be dropped with the coalescer slot.
        if let Some(cursor) = self.coalescer.take_cursor() {
            self.apply_cursor(cursor, now);
        }
        self.wm.end_drag();
        self.sticky.end_drag();
    }

    fn apply_cursor(&mut self, cursor: Point, now: Instant) {
        self.wm.drag_to(cursor);
        self.sticky.drag_to(cursor, self.container());
        self.island
            .set_hovered(self.island.contains(cursor, self.container()), now);
    }

    /// Drain coalesced input, advance timers, react to manager events.
    fn step(&mut self, now: Instant) {
        if let Some(size) = self.coalescer.take_resize() {
            self.wm.container_resized(size);
            self.sticky.clamp_into(size);
        }
        if let Some(cursor) = self.coalescer.take_cursor() {
            self.apply_cursor(cursor, now);
        }
        self.island.tick(now);
        self.sticky.tick(now);

        for event in self.wm.drain_events() {
            // The event may be stale by drain time (a narrow-layout open
            // closes everything before creating), so re-check emptiness.
            if event == WmEvent::AllWindowsClosed && self.is_narrow() && self.wm.is_empty() {
                self.sticky.show(now);
            }
        }
    }

    // --- painting ------------------------------------------------------

    fn paint_window(
        painter: &mut Painter,
        theme: &Theme,
        header_h: f32,
        w: &Window<AppContent>,
        offset: Point,
    ) {
        let rect = w.rect.translated(offset.x, offset.y);
        let base = w.z * Z_STEP;

        painter.rounded_rect(rect.translated(4.0, 4.0), theme.window_shadow, 10.0, base);
        painter.rounded_rect(rect, theme.window_body, 10.0, base + 1);
        painter.rounded_rect(
            Rect::new(rect.x, rect.y, rect.w, header_h.min(rect.h)),
            theme.window_header,
            10.0,
            base + 2,
        );
        for control in [ControlKind::Close, ControlKind::Minimize, ControlKind::Zoom] {
            let color = match control {
                ControlKind::Close => theme.control_close,
                ControlKind::Minimize => theme.control_minimize,
                ControlKind::Zoom => theme.control_zoom,
            };
            let r = w.control_rect(control, header_h).translated(offset.x, offset.y);
            painter.rounded_rect(r, color, r.w * 0.5, base + 3);
        }

        if !w.content_visible || rect.h <= header_h {
            return;
        }
        let content = Rect::new(
            rect.x + 4.0,
            rect.y + header_h,
            rect.w - 8.0,
            rect.h - header_h - 4.0,
        );
        painter.rounded_rect(content, theme.window_content, 6.0, base + 4);

        // Article rows as placeholder strips; everything else is a plain pane.
        if let AppContent::Articles(articles) = &w.content {
            let row_h = 28.0;
            let gap = 6.0;
            let max_rows = ((content.h - gap) / (row_h + gap)).max(0.0) as usize;
            for i in 0..articles.len().min(max_rows) {
                let row = Rect::new(
                    content.x + 8.0,
                    content.y + gap + i as f32 * (row_h + gap),
                    content.w - 16.0,
                    row_h,
                );
                painter.rounded_rect(row, theme.window_header, 4.0, base + 5);
            }
        }
    }

    fn paint(&mut self) {
        let container = self.container();
        let overlay_base = self.config.zorder.overlay * Z_STEP;
        self.painter.clear(self.theme.desktop);

        if self.sticky.is_visible() {
            let rect = self.sticky.rect();
            let (top, bottom) = self.sticky.gradient();
            let half = Rect::new(rect.x, rect.y, rect.w, rect.h * 0.5);
            self.painter.rounded_rect(rect, bottom, 8.0, STICKY_Z);
            self.painter.rounded_rect(half, top, 8.0, STICKY_Z + 1);
        }

        // Windows carry the manager's z; a live drag is a visual offset only.
        let header_h = self.config.window.header_height;
        for w in self.wm.paint_order() {
            let offset = self.wm.drag_offset(w.id).unwrap_or(Point::ZERO);
            Self::paint_window(&mut self.painter, &self.theme, header_h, w, offset);
        }

        let dock_panel = self.dock.panel_rect(container);
        self.painter
            .rounded_rect(dock_panel, self.theme.dock_panel, 16.0, overlay_base - 16);
        for i in 0..self.dock.items().len() {
            self.painter.rounded_rect(
                self.dock.item_rect(i, container),
                self.theme.dock_icon,
                8.0,
                overlay_base - 15,
            );
        }

        self.painter.rounded_rect(
            self.island.rect(container),
            self.theme.island,
            14.0,
            overlay_base,
        );

        if self.banner.is_visible() {
            self.painter.rounded_rect(
                self.banner.rect(container),
                self.theme.banner,
                6.0,
                overlay_base + 100,
            );
        }
    }
}

impl EventHandler for DesktopShell {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        self.renderer = Some(RectRenderer::new(ctx.device(), ctx.surface_format()));
        let size = ctx.size();
        let container = Size::new(size.width as f32, size.height as f32);
        self.wm.container_resized(container);

        // Boot state: sticky note bottom-left, island pulse.
        let now = Instant::now();
        self.sticky = StickyNote::new(
            Point::new(24.0, (container.h - 204.0).max(0.0)),
            now,
        );
        self.island.expand(now);
        Ok(())
    }

    fn on_resize(&mut self, _ctx: &mut WindowCtx, size: PhysicalSize<u32>) -> Result<()> {
        self.coalescer
            .push_resize(Size::new(size.width as f32, size.height as f32));
        Ok(())
    }

    fn on_cursor_moved(&mut self, _ctx: &mut WindowCtx, pos: [f32; 2]) -> Result<()> {
        self.cursor = Point::new(pos[0], pos[1]);
        self.coalescer.push_cursor(self.cursor);
        Ok(())
    }

    fn on_mouse_input(
        &mut self,
        _ctx: &mut WindowCtx,
        state: ElementState,
        button: MouseButton,
    ) -> Result<()> {
        if button != MouseButton::Left {
            return Ok(());
        }
        match state {
            ElementState::Pressed => self.handle_pointer_down(self.cursor, Instant::now()),
            ElementState::Released => self.handle_pointer_up(Instant::now()),
        }
        Ok(())
    }

    fn on_frame(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        self.step(Instant::now());
        Ok(())
    }

    fn on_redraw(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        self.paint();
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        let frame = ctx.acquire_current_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("aqua-desktop-encoder"),
            });
        let size = ctx.size();
        let clear = self.painter.clear_color();
        renderer.render(
            ctx.device(),
            ctx.queue(),
            &mut encoder,
            &view,
            (size.width as f32, size.height as f32),
            self.painter.finish(),
            clear,
        );
        ctx.queue().submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn on_error(&mut self, message: &str) {
        self.banner.show(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_with(width: f32, height: f32) -> DesktopShell {
        let mut shell = DesktopShell::new(DeskConfig::default());
        shell.wm.container_resized(Size::new(width, height));
        shell
    }

    #[test]
    fn test_about_opens_trio_with_about_me_on_top() {
        let mut shell = shell_with(1200.0, 800.0);
        shell.open_app(AppKind::About, Instant::now());
        assert_eq!(shell.wm.len(), 3);

        let about = shell.wm.find_by_title("About Me").unwrap();
        for w in shell.wm.windows() {
            if w.id != about {
                assert!(w.rect.w == w.rect.h, "trio windows are squares");
                assert!(shell.wm.get(about).unwrap().z > w.z);
            }
        }
        // Percent placement of the first panel.
        let portfolio = shell.wm.find_by_title("Portfolio Showcase").unwrap();
        let r = shell.wm.get(portfolio).unwrap().rect;
        assert_eq!(r.origin(), Point::new(60.0, 200.0));

        // Reopen replaces rather than stacks.
        shell.open_app(AppKind::About, Instant::now());
        assert_eq!(shell.wm.len(), 3);
    }

    #[test]
    fn test_articles_is_a_singleton() {
        let mut shell = shell_with(1200.0, 800.0);
        shell.open_app(AppKind::Articles, Instant::now());
        let first = shell.wm.find_by_title(ARTICLES_TITLE).unwrap();
        shell.open_app(AppKind::Photos, Instant::now());
        shell.open_app(AppKind::Articles, Instant::now());
        assert_eq!(shell.wm.find_by_title(ARTICLES_TITLE), Some(first));
        assert_eq!(shell.wm.len(), 2);
        // Second open focused it.
        let photos = shell.wm.find_by_title(PHOTOS_TITLE).unwrap();
        assert!(shell.wm.get(first).unwrap().z > shell.wm.get(photos).unwrap().z);
    }

    #[test]
    fn test_narrow_layout_is_exclusive_and_hides_sticky() {
        let mut shell = shell_with(600.0, 900.0);
        let now = Instant::now();
        assert!(shell.sticky.is_visible());

        shell.open_app(AppKind::Articles, now);
        assert_eq!(shell.wm.len(), 1);
        assert!(!shell.sticky.is_visible());

        // 90% width at 5% left inset.
        let id = shell.wm.find_by_title(ARTICLES_TITLE).unwrap();
        let w = shell.wm.get(id).unwrap();
        assert!(w.mobile_drawer);
        assert!((w.rect.w - 540.0).abs() < 0.5);
        assert!((w.rect.x - 30.0).abs() < 0.5);

        // Opening another provider closes the first.
        shell.open_app(AppKind::Trash, now);
        assert_eq!(shell.wm.len(), 1);
        assert!(shell.wm.find_by_title(ARTICLES_TITLE).is_none());

        // Closing the last window brings the sticky note back.
        let trash = shell.wm.find_by_title(TRASH_TITLE).unwrap();
        shell.wm.close(trash);
        shell.step(now);
        assert!(shell.sticky.is_visible());
    }

    #[test]
    fn test_release_commits_same_frame_cursor_move() {
        let mut shell = shell_with(1200.0, 800.0);
        let now = Instant::now();
        shell.open_app(AppKind::Photos, now);
        let id = shell.wm.find_by_title(PHOTOS_TITLE).unwrap();
        assert_eq!(shell.wm.get(id).unwrap().rect.origin(), Point::new(200.0, 100.0));

        // Grab the header, then move and release within one frame: the
        // cursor slot is still pending when the button comes up.
        shell.handle_pointer_down(Point::new(400.0, 116.0), now);
        assert_eq!(shell.wm.dragging(), Some(id));
        shell.coalescer.push_cursor(Point::new(450.0, 146.0));
        shell.handle_pointer_up(now);

        assert_eq!(shell.wm.dragging(), None);
        assert_eq!(shell.wm.get(id).unwrap().rect.origin(), Point::new(250.0, 130.0));
    }

    #[test]
    fn test_narrow_about_trio_marked_as_drawers() {
        let mut shell = shell_with(600.0, 900.0);
        shell.open_app(AppKind::About, Instant::now());
        assert_eq!(shell.wm.len(), 3);
        for w in shell.wm.windows() {
            assert!(w.mobile_drawer, "narrow trio window {} missing the flag", w.title);
        }

        // Wide layout never marks windows.
        let mut shell = shell_with(1200.0, 800.0);
        shell.open_app(AppKind::About, Instant::now());
        assert!(shell.wm.windows().iter().all(|w| !w.mobile_drawer));
    }

    #[test]
    fn test_desktop_layout_keeps_sticky_through_closes() {
        let mut shell = shell_with(1200.0, 800.0);
        let now = Instant::now();
        shell.open_app(AppKind::Photos, now);
        assert!(shell.sticky.is_visible(), "wide layout never hides the note");
        let id = shell.wm.find_by_title(PHOTOS_TITLE).unwrap();
        shell.wm.close(id);
        shell.step(now);
        assert!(shell.sticky.is_visible());
    }

    #[test]
    fn test_handler_error_reaches_banner() {
        let mut shell = shell_with(1200.0, 800.0);
        shell.on_error("surface lost");
        assert_eq!(shell.banner.message(), Some("surface lost"));
    }
}
