//! Events emitted by the window manager for the shell to react to.

use crate::window::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmEvent {
    Created(WindowId),
    Focused(WindowId),
    Minimized(WindowId),
    Restored(WindowId),
    Closed(WindowId),
    /// The last live window was closed. In narrow layout the shell uses
    /// this to re-show the sticky note.
    AllWindowsClosed,
}
