//! Rendering module
//!
//! The game is drawn entirely with filled rectangles through the `Canvas`
//! capability; `Framebuffer` is the in-memory implementation.

pub mod canvas;
pub mod framebuffer;
pub mod scene;

pub use canvas::{Canvas, Color};
pub use framebuffer::Framebuffer;
pub use scene::draw_frame;
