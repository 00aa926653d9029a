//! Software framebuffer
//!
//! Row-major RGBA8 pixels in memory. Used by the native demo and by tests
//! that check what a frame looks like without a window.

use super::canvas::{Canvas, Color};
use crate::platform::PlatformError;

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    presented: u64,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PlatformError> {
        if width == 0 || height == 0 {
            return Err(PlatformError::SurfaceInit(format!(
                "framebuffer size {}x{} is empty",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Color::default(); width as usize * height as usize],
            presented: 0,
        })
    }

    /// Pixel at (x, y), or None outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        // Clip in i64 so huge rects cannot overflow
        let x0 = (x as i64).clamp(0, self.width as i64) as usize;
        let y0 = (y as i64).clamp(0, self.height as i64) as usize;
        let x1 = (x as i64 + w as i64).clamp(0, self.width as i64) as usize;
        let y1 = (y as i64 + h as i64).clamp(0, self.height as i64) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(color);
        }
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        self.presented += 1;
        Ok(())
    }
}
