//! Render boundary
//!
//! The game draws nothing but filled rectangles. Anything that can fill a
//! rectangle and show the result can host it.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::platform::PlatformError;

/// 8-bit RGBA color, laid out the way framebuffers store pixels
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A surface that accepts rectangle fills
pub trait Canvas {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill a rectangle. Parts outside the surface are ignored; a
    /// non-positive width or height draws nothing.
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// Show the finished frame
    fn present(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }
}
