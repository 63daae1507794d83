use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use analog_clock::cli::Cli;
use analog_clock::config::ClockConfig;
use analog_clock::core::{
    Canvas, HostCapabilities, HostPlatform, LocalClock, SurfaceRenderer, VisibilityApi,
    VisibilitySource, WinitVisibility,
};
use analog_clock::face::DialRenderer;
use analog_clock::ClockFace;

// === Application ===

struct App {
    face: ClockFace<DialRenderer, LocalClock>,
    visibility: WinitVisibility,
    size: u32,
    window: Option<Arc<Window>>,
    surface: Option<SurfaceRenderer>,
    canvas: Canvas,
    last_frame_time: Instant,
}

impl App {
    fn new(face: ClockFace<DialRenderer, LocalClock>, visibility: WinitVisibility, size: u32) -> Self {
        Self {
            face,
            visibility,
            size,
            window: None,
            surface: None,
            canvas: Canvas::new(1, 1),
            last_frame_time: Instant::now(),
        }
    }

    fn report_visibility(&mut self, visible: Option<bool>) {
        let Some(visible) = visible else {
            return;
        };
        if let Some(angles) = self.face.on_visibility_changed(visible) {
            info!("visible again, hands snapped to {:?}", angles);
            self.request_redraw();
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = &mut self.surface {
            surface.resize(width, height);
            let (width, height) = surface.dimensions();
            self.canvas.resize(width, height);
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.face.renderer_mut().advance(delta);

        let Some(surface) = &self.surface else {
            return;
        };
        let (width, height) = surface.dimensions();
        let canvas = std::mem::replace(&mut self.canvas, Canvas::new(0, 0));
        let canvas = if canvas.dimensions() == (width, height) {
            canvas
        } else {
            Canvas::new(width, height)
        };

        self.canvas = self.face.renderer().paint(canvas).execute_ops();

        if let Err(e) = surface.present(&self.canvas) {
            error!("Render error: {}", e);
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyR => {
                if let Ok(angles) = self.face.resync() {
                    info!("manual resync to {:?}", angles);
                }
            }
            KeyCode::KeyN => {
                if self.face.set_time(None).is_ok() {
                    info!("following local time");
                }
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Analog Clock")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.size, self.size)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let surface = match pollster::block_on(SurfaceRenderer::new(window.clone())) {
                Ok(surface) => surface,
                Err(e) => {
                    error!("Failed to initialize surface: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let (width, height) = surface.dimensions();
            self.canvas = Canvas::new(width, height);
            self.window = Some(window);
            self.surface = Some(surface);
            self.last_frame_time = Instant::now();
        }

        let visible = self.visibility.lifecycle(true);
        self.report_visibility(visible);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        let visible = self.visibility.lifecycle(false);
        self.report_visibility(visible);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let visible = self.visibility.window_event(&event);
        self.report_visibility(visible);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.request_redraw();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ClockConfig::from_cli(&cli).context("failed to load configuration")?;

    let event_loop = EventLoop::new()?;
    let platform = HostPlatform::detect(&event_loop);
    let api = VisibilityApi::select(config.visibility, HostCapabilities::for_platform(platform))
        .with_context(|| format!("cannot keep the clock in sync on {:?}", platform))?;
    info!("resyncing on {} events ({:?})", api.name(), platform);

    let mut face = ClockFace::new(DialRenderer::new(config.animate), LocalClock);
    if config.emit_events {
        face.subscribe(|event| match serde_json::to_string(event) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to encode time change: {}", e),
        });
    }
    face.set_time(config.time.as_deref())
        .with_context(|| format!("invalid time {:?}", config.time.as_deref().unwrap_or_default()))?;

    let mut app = App::new(face, WinitVisibility::new(api), config.size);

    info!("Analog Clock - R to resync, N for local time, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
