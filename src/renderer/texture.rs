//! GPU texture holding the painted canvas
//!
//! The canvas is uploaded as-is into an `Rgba8Unorm` texture. The texture is
//! recreated only when the canvas size changes.

use crate::paint::Canvas;

/// Texture mirroring the CPU canvas
pub struct CanvasTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    dimensions: (u32, u32),
}

impl CanvasTexture {
    /// Create a texture for a `width` x `height` canvas
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        // The canvas maps 1:1 onto the surface, so no filtering is wanted
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Canvas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let (texture, view) = Self::create_texture(device, width, height);

        Self {
            texture,
            view,
            sampler,
            dimensions: texture_dimensions(width, height),
        }
    }

    /// Recreate the texture if the canvas size changed; returns true if it did
    pub fn ensure_size(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if self.dimensions == texture_dimensions(width, height) {
            return false;
        }

        let (texture, view) = Self::create_texture(device, width, height);
        self.texture = texture;
        self.view = view;
        self.dimensions = texture_dimensions(width, height);
        true
    }

    /// Copy the canvas pixels into the texture
    pub fn upload(&self, queue: &wgpu::Queue, canvas: &Canvas) {
        let (width, height) = self.dimensions;
        if (canvas.width(), canvas.height()) != (width, height) {
            log::warn!(
                "Canvas {}x{} does not match texture {}x{}, skipping upload",
                canvas.width(),
                canvas.height(),
                width,
                height
            );
            return;
        }

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            canvas.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn create_texture(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
        let (width, height) = texture_dimensions(width, height);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Canvas Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }
}

/// Textures cannot be empty; a zero-sized canvas gets a 1x1 texture
fn texture_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width.max(1), height.max(1))
}
