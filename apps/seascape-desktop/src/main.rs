use anyhow::{Context, Result, anyhow};
use clap::Parser;
use egui::Context as EguiContext;
use seascape_assets::{DEFAULT_MODEL_PATH, SceneModel, load_scene_model};
use seascape_input::{InputDispatcher, Key, KeyBindings};
use seascape_kernel::SceneContext;
use seascape_render::{FrameUniforms, RenderView, SceneConfig};
use seascape_render_wgpu::WgpuRenderer;
use seascape_tools::SceneInspector;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "seascape-desktop", about = "Seascape desktop demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// glTF model to place in the scene
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// JSON scene configuration overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Legacy numeric key code for a physical key, where one exists.
fn legacy_key(code: KeyCode) -> Option<Key> {
    let c = match code {
        KeyCode::KeyA => 'A',
        KeyCode::KeyB => 'B',
        KeyCode::KeyC => 'C',
        KeyCode::KeyD => 'D',
        KeyCode::KeyE => 'E',
        KeyCode::KeyF => 'F',
        KeyCode::KeyG => 'G',
        KeyCode::KeyH => 'H',
        KeyCode::KeyI => 'I',
        KeyCode::KeyJ => 'J',
        KeyCode::KeyK => 'K',
        KeyCode::KeyL => 'L',
        KeyCode::KeyM => 'M',
        KeyCode::KeyN => 'N',
        KeyCode::KeyO => 'O',
        KeyCode::KeyP => 'P',
        KeyCode::KeyQ => 'Q',
        KeyCode::KeyR => 'R',
        KeyCode::KeyS => 'S',
        KeyCode::KeyT => 'T',
        KeyCode::KeyU => 'U',
        KeyCode::KeyV => 'V',
        KeyCode::KeyW => 'W',
        KeyCode::KeyX => 'X',
        KeyCode::KeyY => 'Y',
        KeyCode::KeyZ => 'Z',
        KeyCode::Digit0 => '0',
        KeyCode::Digit1 => '1',
        KeyCode::Digit2 => '2',
        KeyCode::Digit3 => '3',
        KeyCode::Digit4 => '4',
        KeyCode::Digit5 => '5',
        KeyCode::Digit6 => '6',
        KeyCode::Digit7 => '7',
        KeyCode::Digit8 => '8',
        KeyCode::Digit9 => '9',
        KeyCode::Enter => return Some(Key(13)),
        KeyCode::Escape => return Some(Key(27)),
        KeyCode::Space => return Some(Key(32)),
        KeyCode::ArrowLeft => return Some(Key(37)),
        KeyCode::ArrowUp => return Some(Key(38)),
        KeyCode::ArrowRight => return Some(Key(39)),
        KeyCode::ArrowDown => return Some(Key(40)),
        _ => return None,
    };
    Key::from_char(c)
}

/// One-line key help built from the live bindings.
fn key_legend(bindings: &KeyBindings) -> String {
    let mut parts: Vec<String> = bindings
        .iter()
        .map(|(key, action)| format!("{key}: {action}"))
        .collect();
    parts.push("F1: toggle HUD".to_string());
    parts.join(" | ")
}

/// Application state.
struct AppState {
    scene: SceneContext,
    input: InputDispatcher<SceneContext>,
    config: SceneConfig,
    view: RenderView,
    /// Loaded before the window opens; uploaded once the GPU is up.
    pending_model: Option<SceneModel>,
    show_hud: bool,
}

impl AppState {
    fn new(config: SceneConfig, model: SceneModel) -> Self {
        let mut input = InputDispatcher::default();
        SceneContext::bind_controls(&mut input);
        Self {
            scene: SceneContext::new(),
            input,
            view: config.view,
            config,
            pending_model: Some(model),
            show_hud: true,
        }
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        if code == KeyCode::F1 {
            if pressed && !repeat {
                self.show_hud = !self.show_hud;
            }
            return;
        }
        let Some(key) = legacy_key(code) else {
            return;
        };
        // Held keys repeat key-down, so a held brake keeps ramping.
        if pressed {
            self.input.on_key_down(key, &mut self.scene);
        } else {
            self.input.on_key_up(key, &mut self.scene);
        }
    }

    /// Advance one frame and build its uniforms.
    fn step_frame(&mut self) -> FrameUniforms {
        let scroll = self.scene.update();
        FrameUniforms::new(scroll, self.config.sky)
    }

    fn draw_hud(&mut self, ctx: &EguiContext) {
        if !self.show_hud {
            return;
        }

        let summary = SceneInspector::summary(&self.scene);
        let legend = key_legend(self.input.bindings());

        egui::Window::new("Seascape")
            .default_width(240.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Frame: {}", summary.frame));
                ui.add(
                    egui::ProgressBar::new(summary.speed)
                        .text(format!("speed {:.3}", summary.speed)),
                );
                ui.label(format!(
                    "Moving: {}  Brake ramp: {:.1}",
                    summary.moving, summary.brake_accumulator
                ));
                ui.label(format!(
                    "Water: time {:.2}  travel {:.3}",
                    summary.scroll_time, summary.scroll_travel
                ));
                ui.separator();
                ui.small(legend);
            });
    }
}

/// Window and GPU resources, created on resume.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    /// Set when startup fails inside the event loop; returned from `main`.
    fatal: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            gpu: None,
            egui_ctx: EguiContext::default(),
            fatal: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let attrs = Window::default_attributes()
            .with_title("Seascape")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no suitable GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("seascape_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("surface reports no formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.view.set_viewport(size.width, size.height);

        let mut renderer = WgpuRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            &self.state.config,
        );
        if let Some(model) = self.state.pending_model.take() {
            let placement = self.state.config.model;
            let matrix = placement.transform.to_matrix() * model.fit_matrix(placement.fit_size);
            renderer.upload_model(&device, &model, matrix);
        }

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Gpu {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let frame = self.state.step_frame();

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.renderer
            .render(&gpu.device, &gpu.queue, &view, &self.state.view, &frame);

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.state.draw_hud(ctx);
        });
        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match self.init_gpu(event_loop) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.state.scene.mark_ready();
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.config.width = new_size.width.max(1);
                    gpu.config.height = new_size.height.max(1);
                    gpu.surface.configure(&gpu.device, &gpu.config);
                    gpu.renderer
                        .resize(&gpu.device, gpu.config.width, gpu.config.height);
                }
                self.state
                    .view
                    .set_viewport(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(code, key_state == ElementState::Pressed, repeat);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("seascape-desktop starting");

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };

    // The scene does not start until the model is in memory.
    let model = load_scene_model(&cli.model)
        .with_context(|| format!("failed to load scene model {}", cli.model.display()))?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(AppState::new(config, model));
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_state() -> AppState {
        let model = SceneModel {
            id: seascape_assets::ModelId(0),
            name: "empty".into(),
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: seascape_assets::Bounds::EMPTY,
        };
        AppState::new(SceneConfig::default(), model)
    }

    #[test]
    fn held_f1_toggles_hud_once() {
        let mut app = app_state();
        assert!(app.show_hud);
        app.handle_key(KeyCode::F1, true, false);
        app.handle_key(KeyCode::F1, true, true);
        app.handle_key(KeyCode::F1, true, true);
        app.handle_key(KeyCode::F1, false, false);
        assert!(!app.show_hud);
        assert!(!app.scene.motion.is_moving());
    }

    #[test]
    fn held_brake_repeats_reach_the_motion_model() {
        let mut app = app_state();
        app.handle_key(KeyCode::KeyS, true, false);
        app.handle_key(KeyCode::KeyS, true, true);
        app.handle_key(KeyCode::KeyS, true, true);
        app.handle_key(KeyCode::KeyS, false, false);
        let acc = app.scene.motion.state().brake_accumulator;
        assert!((acc - 0.3).abs() < 1e-6);
    }

    #[test]
    fn legend_lists_bound_keys() {
        assert_eq!(
            key_legend(&KeyBindings::default()),
            "S: brake | W: accelerate | F1: toggle HUD"
        );
    }

    #[test]
    fn legacy_codes_for_bound_keys() {
        assert_eq!(legacy_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(legacy_key(KeyCode::KeyS), Some(Key::S));
        assert_eq!(legacy_key(KeyCode::Digit7), Some(Key(55)));
        assert_eq!(legacy_key(KeyCode::F5), None);
    }
}
