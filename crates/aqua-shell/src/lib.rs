//! aqua-shell: winit/wgpu desktop shell for the Aqua window manager.
//!
//! Wires the event loop, the instanced rounded-rect renderer and the
//! desktop scene (windows, dock, dynamic island, sticky note, error
//! banner) together and exposes a single [`run`] entry point.

pub mod apps;
pub mod banner;
pub mod desktop;
pub mod dock;
pub mod island;
pub mod painter;
pub mod platform;
pub mod renderer;
pub mod sticky;
pub mod theme;

use anyhow::Result;

use crate::desktop::DesktopShell;
use crate::platform::ShellWindow;

/// Start the desktop: load config (aqua.toml + AQUA_* overrides), open the
/// native window and run the event loop until close.
pub fn run() -> Result<()> {
    let _ = env_logger::try_init();
    banner::install_panic_logger();

    let config = aqua_config::DeskConfig::load();
    log::info!("starting {}", config.shell.title);

    let window = ShellWindow::new(&config.shell.title)?;
    window.run(DesktopShell::new(config))
}
