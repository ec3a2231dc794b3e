//! Offscreen rendering abstractions for camera capture.
//!
//! The capture pipeline and preview fitter never talk to a concrete engine
//! camera. They borrow any [`SceneCamera`] for the duration of one render
//! call, and target attachment is scoped through [`TargetGuard`] so the
//! camera's output destination is restored on every exit path.

pub mod pattern;

use thiserror::Error;

/// CPU-side RGBA pixel buffer read back from an offscreen render target.
///
/// Channels are linear `f32`, alpha preserved. PNG and JPG encoding
/// quantize to 8 bits per channel; EXR keeps the full range.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA data, row-major, four `f32` per pixel.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds coordinates are
    /// ignored.
    pub fn put(&mut self, x: u32, y: u32, rgba: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, rgba: [f32; 4]) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }
}

/// Errors raised while rendering a camera into an offscreen target.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("camera is not assigned to a viewpoint")]
    NotAssigned,

    #[error("could not allocate a {width}x{height} render target")]
    TargetAllocation { width: u32, height: u32 },

    #[error("render pass failed: {0}")]
    RenderFailed(String),
}

/// A renderable viewpoint owned by the host engine.
///
/// Implementations render the current scene state into an offscreen
/// color+depth target and read the pixels back. This crate only borrows a
/// camera for one render call at a time and never mutates its persistent
/// configuration beyond the transient target attachment.
pub trait SceneCamera: Send + Sync {
    /// Whether the camera currently points at a live viewpoint.
    fn is_assigned(&self) -> bool;

    /// Redirect the camera's output to an offscreen target of the given
    /// size.
    fn attach_target(&self, width: u32, height: u32) -> Result<(), RenderError>;

    /// Render one frame into the attached target and read the pixels back
    /// into `out`. Blocks until the readback completes.
    fn render(&self, out: &mut PixelBuffer) -> Result<(), RenderError>;

    /// Restore the camera's output to its previous destination and release
    /// the offscreen target.
    fn detach_target(&self);
}

/// Scoped attachment of a camera to an offscreen target.
///
/// Dropping the guard detaches the target, so the camera's prior output
/// destination is restored whether the capture succeeds or fails
/// mid-pipeline.
pub struct TargetGuard<'a> {
    camera: &'a dyn SceneCamera,
}

impl<'a> TargetGuard<'a> {
    /// Claim an offscreen target of the given size on `camera`.
    pub fn attach(
        camera: &'a dyn SceneCamera,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        camera.attach_target(width, height)?;
        Ok(Self { camera })
    }

    /// Render one frame into `out` through the attached target.
    pub fn render(&self, out: &mut PixelBuffer) -> Result<(), RenderError> {
        self.camera.render(out)
    }
}

impl Drop for TargetGuard<'_> {
    fn drop(&mut self) {
        self.camera.detach_target();
    }
}
