//! Live camera preview fitted to a bounded box.
//!
//! The preview renders the selected camera at a small size on every redraw.
//! Dimensions are contain-fitted into a 300x200 box preserving the output
//! aspect ratio, and the backing buffer is reallocated only when the fitted
//! size changes.

use crate::render::{PixelBuffer, RenderError, SceneCamera, TargetGuard};

/// Maximum preview box width, in logical units.
pub const MAX_PREVIEW_WIDTH: f32 = 300.0;
/// Maximum preview box height, in logical units.
pub const MAX_PREVIEW_HEIGHT: f32 = 200.0;

/// Contain-fit the scaled output resolution into the preview box.
///
/// Width-first: start at the full box width and derive the height from the
/// aspect ratio; if that overflows the box, re-derive the width from the
/// clamped height.
pub fn fit_preview(width: u32, height: u32, scale: u32) -> (u32, u32) {
    let scaled_width = (width.max(1) * scale.max(1)) as f32;
    let scaled_height = (height.max(1) * scale.max(1)) as f32;
    let aspect = scaled_width / scaled_height;

    let mut preview_width = MAX_PREVIEW_WIDTH;
    let mut preview_height = preview_width / aspect;
    if preview_height > MAX_PREVIEW_HEIGHT {
        preview_height = MAX_PREVIEW_HEIGHT;
        preview_width = preview_height * aspect;
    }

    (preview_width as u32, preview_height as u32)
}

/// Renders a live preview of a camera into a reusable offscreen buffer.
///
/// Owned by the hosting panel for its whole lifetime; the buffer is created
/// on first draw and dropped on [`CameraPreview::release`] or drop.
pub struct CameraPreview {
    buffer: Option<PixelBuffer>,
}

impl CameraPreview {
    pub fn new() -> Self {
        Self { buffer: None }
    }

    /// Render one preview frame of `camera` at the fitted size.
    ///
    /// Returns `Ok(None)` when no camera is assigned; the caller shows a
    /// placeholder instead. Two calls with identical inputs fit to the same
    /// size, though a dynamic scene may render different pixels.
    pub fn draw(
        &mut self,
        camera: Option<&dyn SceneCamera>,
        width: u32,
        height: u32,
        scale: u32,
    ) -> Result<Option<&PixelBuffer>, RenderError> {
        let Some(camera) = camera.filter(|camera| camera.is_assigned()) else {
            return Ok(None);
        };

        let (preview_width, preview_height) = fit_preview(width, height, scale);

        // Reuse the buffer across frames; the old allocation drops before
        // its replacement is installed when the fitted size changes.
        let reusable = self
            .buffer
            .take()
            .filter(|b| (b.width(), b.height()) == (preview_width, preview_height));
        self.buffer =
            Some(reusable.unwrap_or_else(|| PixelBuffer::new(preview_width, preview_height)));

        let target = TargetGuard::attach(camera, preview_width, preview_height)?;
        if let Some(buffer) = self.buffer.as_mut() {
            target.render(buffer)?;
        }

        Ok(self.buffer.as_ref())
    }

    /// Drop the preview buffer. Called when the hosting panel closes;
    /// dropping the preview covers the same path.
    pub fn release(&mut self) {
        self.buffer = None;
    }
}

impl Default for CameraPreview {
    fn default() -> Self {
        Self::new()
    }
}
