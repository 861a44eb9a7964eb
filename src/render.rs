use crate::core::{CLEAR_COLOR, WAVE_COLOR_RGB, WAVE_HEIGHT, WAVE_SHININESS, WAVE_SPEED, WAVE_ZOOM};
use web_sys as web;

mod waves;

use waves::{create_waves_resources, WavesResources, WavesUniforms};

/// All WebGPU state for the background wave field. At most one instance is
/// alive; the motion gate creates and drops it as the preference changes.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    waves: WavesResources,
    width: u32,
    height: u32,
    time_accum: f32,
    pointer_uv: [f32; 2],
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        // The surface owns a clone of the canvas handle, so it is 'static
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let waves = create_waves_resources(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            waves,
            width,
            height,
            time_accum: 0.0,
            pointer_uv: [0.5, 0.5],
        })
    }

    /// Pointer position in surface uv space (origin bottom-left).
    pub fn set_pointer(&mut self, u: f32, v: f32) {
        self.pointer_uv = [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)];
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, dt_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("waves_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let w = WavesUniforms {
                resolution: [self.width as f32, self.height as f32],
                time: self.time_accum,
                zoom: WAVE_ZOOM,
                pointer_uv: self.pointer_uv,
                wave_height: WAVE_HEIGHT,
                wave_speed: WAVE_SPEED,
                color: [
                    WAVE_COLOR_RGB[0],
                    WAVE_COLOR_RGB[1],
                    WAVE_COLOR_RGB[2],
                    WAVE_SHININESS,
                ],
            };
            self.queue
                .write_buffer(&self.waves.uniform_buffer, 0, bytemuck::bytes_of(&w));
            rpass.set_pipeline(&self.waves.pipeline);
            rpass.set_bind_group(0, &self.waves.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
