//! WGPU-based renderer implementation for frameless-chrome
//!
//! The window is painted on the CPU; this renderer only uploads the canvas
//! and presents it on a transparent surface so the rounded corners show
//! whatever is behind the window.

use crate::paint::Canvas;
use crate::renderer::Renderer;
use crate::utils::error::{ChromeError, IntoChromeError, Result};
use log::{info, warn};
use std::sync::Arc;
use winit::window::Window;

use super::pipeline::RenderPipeline;
use super::texture::CanvasTexture;

/// WGPU renderer implementation
pub struct WgpuRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    surface: wgpu::Surface<'static>,
    pipeline: RenderPipeline,
    texture: CanvasTexture,
}

impl WgpuRenderer {
    /// Create a renderer presenting into `window`
    pub fn new(window: Arc<Window>) -> Result<Self> {
        pollster::block_on(Self::init_wgpu(window))
    }

    async fn init_wgpu(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();

        let surface = instance
            .create_surface(window)
            .renderer_err("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .renderer_err("Failed to find suitable GPU adapter")?;
        info!("Using GPU adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("frameless-chrome device"),
                ..Default::default()
            })
            .await
            .renderer_err("Failed to create GPU device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_format(&caps.formats)
            .ok_or_else(|| ChromeError::Renderer("Surface reports no formats".to_string()))?;
        let alpha_mode = choose_alpha_mode(&caps.alpha_modes);
        if alpha_mode == wgpu::CompositeAlphaMode::Opaque {
            warn!("Surface does not support transparency; corners will be opaque");
        }

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let premultiplied = alpha_mode != wgpu::CompositeAlphaMode::PostMultiplied;
        let pipeline = RenderPipeline::new(&device, format, premultiplied);
        let texture = CanvasTexture::new(&device, size.width, size.height);

        Ok(Self {
            device,
            queue,
            surface_config,
            surface,
            pipeline,
            texture,
        })
    }

    /// Reconfigure the surface (e.g., after resize or lost surface)
    fn reconfigure_surface(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}

impl Renderer for WgpuRenderer {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure_surface();
        Ok(())
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        if canvas.width() == 0 || canvas.height() == 0 {
            return Ok(());
        }

        if self.texture.ensure_size(&self.device, canvas.width(), canvas.height()) {
            self.pipeline.invalidate_bind_group();
        }
        self.texture.upload(&self.queue, canvas);

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                self.reconfigure_surface();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(ChromeError::Renderer("Out of GPU memory".to_string()));
            }
            Err(e) => {
                warn!("Surface texture acquisition failed: {:?}", e);
                return Ok(());
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Canvas Encoder"),
        });
        self.pipeline.render(&self.device, &mut encoder, &view, &self.texture);

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }
}

/// Canvas bytes are already gamma-encoded, so prefer a linear-storage format
fn choose_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first())
        .copied()
}

/// Pick the best available way to composite a transparent window
fn choose_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    use wgpu::CompositeAlphaMode::*;

    [PreMultiplied, PostMultiplied, Inherit]
        .into_iter()
        .find(|mode| modes.contains(mode))
        .unwrap_or(Opaque)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    #[test]
    fn test_choose_format_prefers_non_srgb() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(choose_format(&formats), Some(TextureFormat::Bgra8Unorm));
        assert_eq!(
            choose_format(&[TextureFormat::Rgba8UnormSrgb]),
            Some(TextureFormat::Rgba8UnormSrgb)
        );
        assert_eq!(choose_format(&[]), None);
    }

    #[test]
    fn test_choose_alpha_mode() {
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied]),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque, CompositeAlphaMode::PostMultiplied]),
            CompositeAlphaMode::PostMultiplied
        );
        assert_eq!(choose_alpha_mode(&[CompositeAlphaMode::Opaque]), CompositeAlphaMode::Opaque);
    }
}
