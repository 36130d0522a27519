//! Minimal winit + wgpu window/event wrapper for the desktop shell.
//!
//! Responsibilities:
//! - Create window + surface + device/queue.
//! - Manage surface configuration and resizing.
//! - Dispatch basic events (redraw, resize, cursor move, mouse input).
//! - Drive the per-frame hook where coalesced input is drained.

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

pub struct ShellWindow {
    event_loop: EventLoop<()>,
    // We must leak the window to satisfy wgpu surface lifetime requirements.
    window: &'static Window,
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'static>,
    _adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    scale_factor: f64,
}

pub struct WindowCtx<'a> {
    window: &'a Window,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    surface: &'a wgpu::Surface<'static>,
    config: &'a wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    scale_factor: f64,
    elwt: &'a EventLoopWindowTarget<()>,
}

impl<'a> WindowCtx<'a> {
    pub fn window(&self) -> &Window {
        self.window
    }
    pub fn device(&self) -> &wgpu::Device {
        self.device
    }
    pub fn queue(&self) -> &wgpu::Queue {
        self.queue
    }
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
    pub fn acquire_current_frame(&self) -> Result<wgpu::SurfaceTexture> {
        Ok(self.surface.get_current_texture()?)
    }
    pub fn exit(&self) {
        self.elwt.exit();
    }
}

/// Shell-side event callbacks. Errors returned here are logged and surfaced
/// through `on_error`; they never tear the loop down.
pub trait EventHandler {
    fn init(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
    fn on_resize(&mut self, _ctx: &mut WindowCtx, _size: PhysicalSize<u32>) -> Result<()> {
        Ok(())
    }
    fn on_cursor_moved(&mut self, _ctx: &mut WindowCtx, _pos: [f32; 2]) -> Result<()> {
        Ok(())
    }
    fn on_mouse_input(
        &mut self,
        _ctx: &mut WindowCtx,
        _state: ElementState,
        _button: MouseButton,
    ) -> Result<()> {
        Ok(())
    }
    /// Called once per loop iteration before the redraw request; the place
    /// to drain coalesced input and advance timers.
    fn on_frame(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
    fn on_redraw(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
    /// Receives the message of any failed callback above.
    fn on_error(&mut self, _message: &str) {}
}

fn make_surface_config(
    adapter: &wgpu::Adapter,
    surface: &wgpu::Surface<'_>,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    let caps = surface.get_capabilities(adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(caps.formats[0]);
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        desired_maximum_frame_latency: 2,
        alpha_mode: caps.alpha_modes[0],
        view_formats: vec![],
    }
}

impl ShellWindow {
    pub fn new(title: &str) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new().with_title(title).build(&event_loop)?;
        let window: &'static Window = Box::leak(Box::new(window));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .context("no suitable GPU adapter found")?;
        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default(), None))?;

        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let config = make_surface_config(&adapter, &surface, size.width, size.height);
        surface.configure(&device, &config);

        Ok(Self {
            event_loop,
            window,
            _instance: instance,
            surface,
            _adapter: adapter,
            device,
            queue,
            config,
            size,
            scale_factor,
        })
    }

    pub fn run(mut self, mut handler: impl EventHandler + 'static) -> Result<()> {
        let mut needs_init = true;

        fn report<H: EventHandler>(handler: &mut H, result: Result<()>) {
            if let Err(err) = result {
                log::error!("shell handler failed: {err:#}");
                handler.on_error(&format!("{err:#}"));
            }
        }

        Ok(self.event_loop.run(move |event, elwt| {
            let mut ctx = WindowCtx {
                window: self.window,
                device: &self.device,
                queue: &self.queue,
                surface: &self.surface,
                config: &self.config,
                size: self.size,
                scale_factor: self.scale_factor,
                elwt,
            };
            match event {
                Event::Resumed => {
                    if needs_init {
                        let result = handler.init(&mut ctx);
                        report(&mut handler, result);
                        needs_init = false;
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(new_size) => {
                            drop(ctx);
                            self.size = new_size;
                            if new_size.width > 0 && new_size.height > 0 {
                                self.config.width = new_size.width;
                                self.config.height = new_size.height;
                                self.surface.configure(&self.device, &self.config);
                            }
                            let mut ctx = WindowCtx {
                                window: self.window,
                                device: &self.device,
                                queue: &self.queue,
                                surface: &self.surface,
                                config: &self.config,
                                size: self.size,
                                scale_factor: self.scale_factor,
                                elwt,
                            };
                            let result = handler.on_resize(&mut ctx, new_size);
                            report(&mut handler, result);
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            drop(ctx);
                            self.scale_factor = scale_factor;
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            let pos = [position.x as f32, position.y as f32];
                            let result = handler.on_cursor_moved(&mut ctx, pos);
                            report(&mut handler, result);
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            let result = handler.on_mouse_input(&mut ctx, state, button);
                            report(&mut handler, result);
                        }
                        WindowEvent::RedrawRequested => {
                            let result = handler.on_redraw(&mut ctx);
                            report(&mut handler, result);
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let result = handler.on_frame(&mut ctx);
                    report(&mut handler, result);
                    // Timers (island auto-collapse, sticky gradient) need a
                    // steady frame cadence even without input.
                    self.window.request_redraw();
                }
                _ => {}
            }
        })?)
    }
}
