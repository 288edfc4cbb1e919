//! Title bar icon loading

use crate::geometry::Size;
use crate::utils::error::{ChromeError, Result};
use image::imageops::{self, FilterType};
use log::{debug, warn};
use std::path::Path;

/// Decoded icon, straight-alpha RGBA8
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Icon {
    /// Decode `path` and scale it to `height` pixels, keeping the aspect ratio
    pub fn load(path: &Path, height: u32) -> Result<Self> {
        if height == 0 {
            return Err(ChromeError::InvalidInput("Icon height must be non-zero".to_string()));
        }

        let image = image::open(path)?.into_rgba8();
        let (src_w, src_h) = image.dimensions();
        if src_w == 0 || src_h == 0 {
            return Err(ChromeError::Icon(format!("{} is empty", path.display())));
        }

        let width = ((src_w as f64 * height as f64 / src_h as f64).round() as u32).max(1);
        let scaled = if (width, height) == (src_w, src_h) {
            image
        } else {
            imageops::resize(&image, width, height, FilterType::Triangle)
        };

        debug!(
            "Loaded icon {} ({}x{} -> {}x{})",
            path.display(),
            src_w,
            src_h,
            width,
            height
        );

        Ok(Self {
            width,
            height,
            rgba: scaled.into_raw(),
        })
    }

    /// Like `load`, but a missing or broken icon only produces a warning
    pub fn load_or_warn(path: &Path, height: u32) -> Option<Self> {
        match Self::load(path, height) {
            Ok(icon) => Some(icon),
            Err(e) => {
                warn!("Title icon {} unavailable: {}", path.display(), e);
                None
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Same pixels as a window-manager icon
    pub fn to_window_icon(&self) -> Result<winit::window::Icon> {
        winit::window::Icon::from_rgba(self.rgba.clone(), self.width, self.height)
            .map_err(|e| ChromeError::Icon(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_scales_to_height() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(64, 32, Rgba([0, 128, 255, 255]))
            .save(&path)
            .unwrap();

        let icon = Icon::load(&path, 20).unwrap();
        assert_eq!(icon.size(), Size::new(40, 20));
        assert_eq!(icon.rgba().len(), 40 * 20 * 4);
        assert_eq!(&icon.rgba()[..4], &[0, 128, 255, 255]);
    }

    #[test]
    fn test_missing_icon_is_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.png");

        assert!(matches!(Icon::load(&path, 20), Err(ChromeError::FileIO(_))));
        assert!(Icon::load_or_warn(&path, 20).is_none());
    }

    #[test]
    fn test_garbage_icon_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(Icon::load_or_warn(&path, 20).is_none());
    }

    #[test]
    fn test_window_icon_conversion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.png");
        RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        let icon = Icon::load(&path, 20).unwrap();
        assert!(icon.to_window_icon().is_ok());
    }
}
