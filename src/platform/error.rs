use thiserror::Error;

/// Failures at the window/surface boundary. The simulation itself never fails.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Failed to create the rendering surface: {0}")]
    SurfaceInit(String),
    #[error("Failed to present a frame: {0}")]
    Present(String),
}
