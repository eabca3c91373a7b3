//! Window lifecycle, GPU setup and the per-frame loop.

use std::sync::Arc;
use std::time::Instant;

use kurbo::Size;
use polyedit_core::{CanvasSurface, PointerEvent, PolygonController};
use polyedit_render::{LayerStyle, RenderContext, RenderResult, Renderer, RendererError, VelloRenderer};
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::{Window, WindowId};

use crate::clipboard::SystemClipboard;
use crate::config::AppConfig;
use crate::event_handler::{EventHandler, apply_action};
use crate::shortcuts::ShortcutRegistry;
use crate::ui::{UiAction, UiState, render_ui};

/// Runtime state, present once the window and GPU surface exist.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    polygon_renderer: VelloRenderer,
    /// Vello renders to Rgba8Unorm; the surface may be Bgra8Unorm.
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // Editor
    controller: PolygonController,
    canvas: CanvasSurface,
    events: EventHandler,
    clipboard: SystemClipboard,
    modifiers: ModifiersState,
    last_frame: Instant,
}

impl AppState {
    fn logical_size(&self) -> Size {
        let size: LogicalSize<f64> = self.window.inner_size().to_logical(self.window.scale_factor());
        Size::new(size.width, size.height)
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.canvas.handle_pointer_event(event, &mut self.controller);
        if self.canvas.take_redraw() || self.controller.is_drawing() {
            self.window.request_redraw();
        }
    }

    fn run_action(&mut self, action: UiAction) {
        log::debug!("Action: {:?}", action);
        if let Some(notice) =
            apply_action(action, &mut self.controller, &mut self.canvas, &mut self.clipboard)
        {
            self.ui_state.notify(notice);
        }
        self.window.request_redraw();
    }

    fn resize(&mut self, size: PhysicalSize<u32>, render_cx: Option<&mut vello::util::RenderContext>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Some(render_cx) = render_cx {
            render_cx.resize_surface(&mut self.surface, size.width, size.height);
        }
        if let Err(e) = self.controller.resize(self.logical_size()) {
            log::warn!("Skipping resize: {}", e);
        }
        self.window.request_redraw();
    }

    fn key_pressed(&mut self, key: &Key) {
        let name = match key {
            Key::Character(c) => c.as_str(),
            Key::Named(NamedKey::Escape) => "Escape",
            _ => return,
        };
        if let Some(action) = ShortcutRegistry::lookup(name, self.modifiers.control_key()) {
            self.run_action(action);
        }
    }

    fn redraw(&mut self, render_cx: &vello::util::RenderContext, background: peniko::Color) {
        let now = Instant::now();
        self.ui_state.tick(now - self.last_frame);
        self.last_frame = now;
        self.ui_state.drawing = self.controller.is_drawing();

        // egui first, so toolbar clicks land in this frame
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let ui_state = &self.ui_state;
        let mut action = None;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, ui_state);
        });
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        if let Some(action) = action {
            self.run_action(action);
        }
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let input = self.controller.render_input(&self.canvas);
        let style = LayerStyle::default().with_handle_size(self.controller.config().handle_size);
        let render_ctx = RenderContext::new(&input, self.logical_size())
            .with_scale_factor(self.window.scale_factor())
            .with_background(background)
            .with_style(style);
        self.polygon_renderer.build_scene(&render_ctx);
        let base_color = self.polygon_renderer.background_color(&render_ctx);
        let scene = self.polygon_renderer.take_scene();

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let width = self.surface.config.width;
        let height = self.surface.config.height;
        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a StorageBinding texture, which must be Rgba8Unorm.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = self.vello_renderer.render_to_texture(
            device,
            queue,
            &scene,
            &render_texture_view,
            &params,
        ) {
            log::error!("Failed to render: {:?}", e);
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        // Keep animating while a toast is counting down.
        if self.ui_state.toast().is_some() {
            self.window.request_redraw();
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the event loop until the window closes.
    pub async fn run(config: AppConfig) -> Result<(), EventLoopError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app)
    }

    fn init(&mut self, window: Arc<Window>) -> RenderResult<()> {
        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(format!("{:?}", e)))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?;
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let mut controller = PolygonController::new(self.config.editor.clone());
        let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
        controller.activate(Size::new(logical.width, logical.height));

        log::info!("PolyEdit initialized - {}x{}", width, height);
        log::info!("Keyboard shortcuts:");
        ShortcutRegistry::log_all();

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            polygon_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            controller,
            canvas: CanvasSurface::new(),
            events: EventHandler::new(),
            clipboard: SystemClipboard::new(),
            modifiers: ModifiersState::empty(),
            last_frame: Instant::now(),
        });

        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.init(window) {
            log::error!("{}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();
        let egui_wants_keyboard = state.egui_ctx.wants_keyboard_input();

        match event {
            WindowEvent::CloseRequested => {
                state.controller.deactivate();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                state.resize(size, self.render_cx.as_mut());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                let background = self.config.background_color();
                state.redraw(render_cx, background);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = state.events.cursor_moved(position, state.window.scale_factor());
                // An in-progress drag keeps tracking even over the toolbar.
                if egui_wants_pointer && !state.canvas.is_manipulating() {
                    return;
                }
                state.pointer(event);
            }

            WindowEvent::CursorLeft { .. } => {
                let event = state.events.cursor_left();
                state.pointer(event);
            }

            WindowEvent::MouseInput { state: button_state, button, .. } => {
                if egui_wants_pointer && !state.canvas.is_manipulating() {
                    return;
                }
                if let Some(event) = state.events.mouse_input(button_state, button) {
                    state.pointer(event);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                state.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_wants_keyboard || !event.state.is_pressed() || event.repeat {
                    return;
                }
                state.key_pressed(&event.logical_key);
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            state.controller.deactivate();
        }
    }
}
