//! WebGPU render pipeline setup

use glam::Vec2;

use super::vertex::{colors, Vertex};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Map logical screen coordinates (origin top-left, y down) to NDC,
/// letterboxed so the 800x600 screen keeps its aspect in any viewport
pub fn screen_to_ndc(x: f32, y: f32, viewport: (u32, u32)) -> (f32, f32) {
    let (w, h) = viewport;
    let viewport_aspect = w.max(1) as f32 / h.max(1) as f32;
    let screen_aspect = SCREEN_WIDTH / SCREEN_HEIGHT;
    let (sx, sy) = if viewport_aspect > screen_aspect {
        (screen_aspect / viewport_aspect, 1.0)
    } else {
        (1.0, viewport_aspect / screen_aspect)
    };

    let nx = x / SCREEN_WIDTH * 2.0 - 1.0;
    let ny = 1.0 - y / SCREEN_HEIGHT * 2.0;
    (nx * sx, ny * sy)
}

/// Placement of the logical screen inside a viewport, as pixel offset and
/// uniform scale. Matches the letterboxing of `screen_to_ndc`.
pub fn letterbox(viewport: (u32, u32)) -> (Vec2, f32) {
    let w = viewport.0.max(1) as f32;
    let h = viewport.1.max(1) as f32;
    let scale = (w / SCREEN_WIDTH).min(h / SCREEN_HEIGHT);
    let offset = Vec2::new(
        (w - SCREEN_WIDTH * scale) / 2.0,
        (h - SCREEN_HEIGHT * scale) / 2.0,
    );
    (offset, scale)
}

/// Convert a viewport pixel position (e.g. a pointer event) to logical
/// screen coordinates
pub fn viewport_to_screen(pos: Vec2, viewport: (u32, u32)) -> Vec2 {
    let (offset, scale) = letterbox(viewport);
    (pos - offset) / scale
}

/// Vertices the buffer holds before its first growth
const INITIAL_VERTEX_CAPACITY: usize = 4096;

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ledge_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Surface setup: first sRGB format the surface offers, never a zero size
fn surface_config(
    caps: &wgpu::SurfaceCapabilities,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    let format = caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .unwrap_or(wgpu::TextureFormat::Rgba8UnormSrgb);
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);

    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

/// Flat-color triangle pipeline targeting the surface format
fn create_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("flat_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("flat_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("flat_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        // Quads are emitted without a consistent winding
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Surface, device and the single pipeline every frame goes through
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Vertices `vertex_buffer` can hold
    vertex_capacity: usize,
    /// Viewport size in pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ledge-runner-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            })
            .await?;

        let config = surface_config(&surface.get_capabilities(adapter), width, height);
        surface.configure(&device, &config);

        let pipeline = create_pipeline(&device, config.format);
        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);
        let size = (config.width, config.height);
        log::info!("Renderer ready: {:?} {}x{}", config.format, size.0, size.1);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            size,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Map screen-space vertices to NDC, upload and draw one frame
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        let ndc: Vec<Vertex> = vertices
            .iter()
            .map(|v| {
                let (x, y) = screen_to_ndc(v.position[0], v.position[1], self.size);
                Vertex::new(x, y, v.color)
            })
            .collect();

        if ndc.len() > self.vertex_capacity {
            self.vertex_capacity = ndc.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
            log::debug!("Vertex buffer grown to {}", self.vertex_capacity);
        }
        if !ndc.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&ndc));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let [r, g, b, a] = colors::BLACK.map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // Letterbox bars
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.draw(0..ndc.len() as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5
    }

    #[test]
    fn test_corners_map_to_ndc_corners_at_native_aspect() {
        assert!(close(screen_to_ndc(0.0, 0.0, (800, 600)), (-1.0, 1.0)));
        assert!(close(screen_to_ndc(800.0, 600.0, (800, 600)), (1.0, -1.0)));
        assert!(close(screen_to_ndc(400.0, 300.0, (1600, 1200)), (0.0, 0.0)));
    }

    #[test]
    fn test_wide_viewport_pillarboxes() {
        let (x, y) = screen_to_ndc(800.0, 0.0, (1600, 600));
        assert!(x < 1.0);
        assert!((y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_viewport_to_screen_inverts_letterbox() {
        // 1600x600: screen is 800x600 at scale 1, offset 400px
        let p = viewport_to_screen(Vec2::new(400.0, 0.0), (1600, 600));
        assert!(p.abs_diff_eq(Vec2::ZERO, 1e-4));
        let p = viewport_to_screen(Vec2::new(800.0, 300.0), (1600, 600));
        assert!(p.abs_diff_eq(Vec2::new(400.0, 300.0), 1e-4));
        let p = viewport_to_screen(Vec2::new(800.0, 600.0), (1600, 1200));
        assert!(p.abs_diff_eq(Vec2::new(400.0, 300.0), 1e-4));
    }

    #[test]
    fn test_surface_config_prefers_srgb_and_nonzero_size() {
        let caps = wgpu::SurfaceCapabilities {
            formats: vec![
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureFormat::Bgra8UnormSrgb,
            ],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        };
        let config = surface_config(&caps, 0, 600);
        assert_eq!(config.format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(config.alpha_mode, wgpu::CompositeAlphaMode::Opaque);
        assert_eq!((config.width, config.height), (1, 600));

        let fallback = surface_config(&wgpu::SurfaceCapabilities::default(), 800, 600);
        assert_eq!(fallback.format, wgpu::TextureFormat::Rgba8UnormSrgb);
        assert_eq!(fallback.alpha_mode, wgpu::CompositeAlphaMode::Auto);
    }

    #[test]
    fn test_tall_viewport_letterboxes() {
        let (x, y) = screen_to_ndc(800.0, 0.0, (800, 1200));
        assert!((x - 1.0).abs() < 1e-5);
        assert!(y < 1.0);
    }
}
