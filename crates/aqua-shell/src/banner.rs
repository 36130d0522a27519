//! Dismissible error banner.
//!
//! The single loud error surface: handler failures and panics get logged
//! and shown top-right; clicking the banner hides it. Everything else in
//! the shell degrades quietly with a log line.

use aqua_core::{Point, Rect, Size};

const BANNER_W: f32 = 420.0;
const BANNER_H: f32 = 48.0;
const MARGIN: f32 = 8.0;

#[derive(Debug, Default)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any currently displayed one.
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("shell error: {message}");
        self.message = Some(message);
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Top-right placement, independent of window layout.
    pub fn rect(&self, container: Size) -> Rect {
        Rect::new(
            (container.w - BANNER_W - MARGIN).max(0.0),
            MARGIN,
            BANNER_W.min(container.w),
            BANNER_H,
        )
    }

    /// True when the click dismissed the banner.
    pub fn handle_click(&mut self, p: Point, container: Size) -> bool {
        if self.is_visible() && self.rect(container).contains(p) {
            self.dismiss();
            return true;
        }
        false
    }
}

/// Route panic messages through the logger so they reach the same sink as
/// handler errors even when stderr is swallowed by the platform.
pub fn install_panic_logger() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("panic: {info}");
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_dismisses_only_inside() {
        let container = Size::new(1200.0, 800.0);
        let mut banner = ErrorBanner::new();
        banner.show("boom");
        assert!(banner.is_visible());

        assert!(!banner.handle_click(Point::new(10.0, 10.0), container));
        assert!(banner.is_visible());

        let center = banner.rect(container).center();
        assert!(banner.handle_click(center, container));
        assert!(!banner.is_visible());

        // A second click is inert.
        assert!(!banner.handle_click(center, container));
    }

    #[test]
    fn test_latest_message_wins() {
        let mut banner = ErrorBanner::new();
        banner.show("first");
        banner.show("second");
        assert_eq!(banner.message(), Some("second"));
    }
}
