//! Responsive layout math.
//!
//! Size is always finalized before position is re-clamped: the clamp
//! bounds depend on the possibly-just-changed width/height, so the resize
//! pass in the manager runs these in order.

use aqua_core::Size;

/// Side length for a fixed-square window: the container's short edge,
/// capped at `target` and floored at `min`. The floor wins over strict
/// containment on very small containers; the position clamp afterwards
/// pins such a window to the origin rather than shrinking it.
pub fn square_size(container: Size, min: f32, target: f32) -> f32 {
    let container = container.sanitized();
    let short_edge = container.w.min(container.h);
    short_edge.min(target).max(min)
}

/// Largest size with `base`'s aspect ratio fitting within `fraction` of
/// the viewport on both axes (and never exceeding `base` itself).
///
/// Whichever axis is the binding constraint wins: if the width-first
/// solution also satisfies the height bound it is used, otherwise the
/// height-first solution is.
pub fn fit_aspect_ratio(base: Size, viewport: Size, fraction: f32) -> Size {
    let base = base.sanitized();
    let viewport = viewport.sanitized();
    if base.is_empty() {
        return base;
    }
    let ratio = base.w / base.h;
    let max_w = base.w.min(viewport.w * fraction);
    let max_h = base.h.min(viewport.h * fraction);
    if max_w / ratio <= max_h {
        Size::new(max_w, max_w / ratio)
    } else {
        Size::new(max_h * ratio, max_h)
    }
}
