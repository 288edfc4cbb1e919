//! Renderer module for frameless-chrome
//!
//! This module presents the software-painted window canvas with wgpu. It
//! manages the surface, the canvas texture upload and the blit pipeline.

use crate::paint::Canvas;
use crate::utils::error::Result;

pub mod pipeline;
pub mod texture;
pub mod wgpu_renderer;

pub use wgpu_renderer::WgpuRenderer;

/// Something that can put a painted canvas on screen
pub trait Renderer {
    /// Handle window resize
    ///
    /// # Arguments
    ///
    /// * `width` - New window width
    /// * `height` - New window height
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Present the canvas, stretched over the whole window
    fn present(&mut self, canvas: &Canvas) -> Result<()>;
}
