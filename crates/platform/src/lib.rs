use std::fmt;
use std::sync::Arc;
use std::{thread, time::Duration};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};
use egui::{
    Context as EguiContext,
    viewport::ViewportId,
};
use egui_winit::State as EguiWinitState;
use egui_wgpu::{
    Renderer as EguiWgpuRenderer,
    ScreenDescriptor,
    wgpu,
};
use app_api::UiApp;

#[derive(Clone, Debug)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "vkeyboard".to_string(),
            width: 720,
            height: 820,
        }
    }
}

#[derive(Debug)]
pub enum PlatformError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(wgpu::CreateSurfaceError),
    Adapter(String),
    Device(wgpu::RequestDeviceError),
    NoSurfaceFormat,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(e) => write!(f, "event loop: {e}"),
            PlatformError::Window(e) => write!(f, "create window: {e}"),
            PlatformError::Surface(e) => write!(f, "create surface: {e}"),
            PlatformError::Adapter(e) => write!(f, "no suitable adapter: {e}"),
            PlatformError::Device(e) => write!(f, "request device: {e}"),
            PlatformError::NoSurfaceFormat => write!(f, "surface reports no texture formats"),
        }
    }
}

impl std::error::Error for PlatformError {}

enum UserEvent {
    Tick,
}

/// Open a window and drive `app` until the window is closed.
pub fn run<A: UiApp>(app: A, options: WindowOptions) -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .map_err(PlatformError::EventLoop)?;

    let proxy = event_loop.create_proxy();

    let mut host = PlatformApp {
        app,
        options,
        window: None,
        proxy: Some(proxy),
        ticker_started: false,
        egui_ctx: None,
        egui_state: None,
        gpu: None,
        fatal: None,
    };
    event_loop.run_app(&mut host).map_err(PlatformError::EventLoop)?;

    match host.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    egui_renderer: EguiWgpuRenderer,
}

struct PlatformApp<A> {
    app: A,
    options: WindowOptions,
    window: Option<Arc<Window>>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    egui_ctx: Option<EguiContext>,
    egui_state: Option<EguiWinitState>,
    gpu: Option<Gpu>,
    fatal: Option<PlatformError>,
}

impl<A: UiApp> PlatformApp<A> {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let window = match self.window.as_ref() {
            Some(window) => Arc::clone(window),
            None => {
                let title = if self.options.title.is_empty() {
                    self.app.title()
                } else {
                    self.options.title.clone()
                };
                let attributes = Window::default_attributes()
                    .with_title(title)
                    .with_inner_size(LogicalSize::new(self.options.width, self.options.height));
                let window = Arc::new(
                    event_loop
                        .create_window(attributes)
                        .map_err(PlatformError::Window)?,
                );
                self.window = Some(Arc::clone(&window));
                window
            }
        };

        if !self.ticker_started {
            self.ticker_started = true;

            if let Some(proxy) = self.proxy.clone() {
                thread::spawn(move || {
                    let frame = Duration::from_millis(16); // ~60Hz
                    loop {
                        if proxy.send_event(UserEvent::Tick).is_err() {
                            break;
                        }
                        thread::sleep(frame);
                    }
                });
            }
        }

        if self.egui_ctx.is_none() || self.egui_state.is_none() {
            let ctx = EguiContext::default();
            let state = EguiWinitState::new(
                ctx.clone(),
                ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            self.egui_ctx = Some(ctx);
            self.egui_state = Some(state);
        }

        if self.gpu.is_none() {
            self.gpu = Some(Self::init_gpu(&window)?);
        }
        Ok(())
    }

    fn init_gpu(window: &Arc<Window>) -> Result<Gpu, PlatformError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(Arc::clone(window))
            .map_err(PlatformError::Surface)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .map_err(|e| PlatformError::Adapter(e.to_string()))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::default(),
            },
        ))
        .map_err(PlatformError::Device)?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(PlatformError::NoSurfaceFormat)?;

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let egui_renderer = EguiWgpuRenderer::new(&device, format, None, 1, true);
        log::info!(target: "platform", "gpu ready: {format:?} {}x{}", surface_config.width, surface_config.height);

        Ok(Gpu {
            surface,
            device,
            queue,
            surface_config,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let (Some(window), Some(ctx), Some(state), Some(gpu)) = (
            self.window.as_ref(),
            self.egui_ctx.as_ref(),
            self.egui_state.as_mut(),
            self.gpu.as_mut(),
        ) else {
            return;
        };

        // 1) Acquire frame
        let frame = match gpu.surface.get_current_texture() {
            Ok(x) => x,
            Err(wgpu::SurfaceError::Lost) => {
                gpu.surface.configure(&gpu.device, &gpu.surface_config);
                return;
            }
            Err(wgpu::SurfaceError::Outdated) => return, // minimized / moved
            Err(e) => {
                log::warn!(target: "platform", "surface error: {e:?}");
                return;
            }
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

        // 2) Build UI
        let raw_input = state.take_egui_input(window);
        ctx.begin_pass(raw_input);
        self.app.ui(ctx);
        let full_output = ctx.end_pass();
        state.handle_platform_output(window, full_output.platform_output);

        // 3) Tessellate
        let clipped = ctx.tessellate(full_output.shapes, ctx.pixels_per_point());

        for (id, delta) in &full_output.textures_delta.set {
            gpu.egui_renderer.update_texture(&gpu.device, &gpu.queue, *id, delta);
        }

        // 4) Encode draw
        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("encoder"),
        });

        let screen = ScreenDescriptor {
            size_in_pixels: [gpu.surface_config.width, gpu.surface_config.height],
            pixels_per_point: ctx.pixels_per_point(),
        };

        gpu.egui_renderer
            .update_buffers(&gpu.device, &gpu.queue, &mut encoder, &clipped, &screen);

        {
            let rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.976,
                            g: 0.976,
                            b: 0.976,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            gpu.egui_renderer
                .render(&mut rpass.forget_lifetime(), &clipped, &screen);
        }

        for id in full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(&id);
        }

        // 5) Submit & present
        gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

impl<A: UiApp> ApplicationHandler<UserEvent> for PlatformApp<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.init(event_loop) {
            log::error!(target: "platform", "startup failed: {err}");
            self.fatal = Some(err);
            event_loop.exit();
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(state)) = (self.window.as_ref(), self.egui_state.as_mut()) {
            let _response = state.on_window_event(window, &event);
        }
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.surface_config.width = new_size.width.max(1);
                    gpu.surface_config.height = new_size.height.max(1);
                    gpu.surface.configure(&gpu.device, &gpu.surface_config);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}
