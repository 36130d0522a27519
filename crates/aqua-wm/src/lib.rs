//! aqua-wm: window manager for the Aqua desktop shell.
//!
//! Owns the collection of on-screen windows and mediates every lifecycle
//! and interactive geometry change:
//! - creation (centered, clamped), close, singleton focus-by-title
//! - z-order arbitration below a reserved overlay
//! - drag-to-move with per-frame coalescing and commit-on-release
//! - minimize to header height / restore with container re-clamping
//! - responsive layout: fixed-square and aspect-ratio policies
//!
//! Two invariants hold after every operation: window positions stay inside
//! the container (no scrolling), and the focused window carries the strict
//! maximum z among windows while staying below the overlay.

mod coalesce;
mod drag;
mod error;
mod events;
mod layout;
mod manager;
mod window;

pub use coalesce::FrameCoalescer;
pub use drag::DragSession;
pub use error::WmError;
pub use events::WmEvent;
pub use layout::{fit_aspect_ratio, square_size};
pub use manager::{WindowManager, WmConfig};
pub use window::{
    ControlKind, HitRegion, HitTarget, RestorePoint, SizePolicy, Window, WindowId, WindowSpec,
    WindowState,
};
