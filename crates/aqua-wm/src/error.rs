//! Window manager errors.
//!
//! Interactive paths swallow failures and degrade to no-ops; these errors
//! only surface at API seams where the caller passed something stale.

use thiserror::Error;

use crate::window::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WmError {
    #[error("window {0} not found")]
    WindowNotFound(WindowId),

    #[error("a drag session is already in progress")]
    DragInProgress,
}
