//! Capture parameter record owned and mutated by the host UI.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use super::types::ImageFormat;
use crate::render::SceneCamera;

/// All configurable settings for one screenshot capture.
///
/// Owned by the UI layer and mutated in place between redraws. The capture
/// pipeline and preview fitter read a snapshot per call and hold no
/// references afterward.
#[derive(Clone)]
pub struct CaptureSettings {
    /// Camera used to render the screenshot. `None` until the user assigns
    /// one; both capture and preview require it.
    pub camera: Option<Arc<dyn SceneCamera>>,

    /// Base width in pixels, before applying scale.
    pub base_width: u32,

    /// Base height in pixels, before applying scale.
    pub base_height: u32,

    /// Resolution multiplier. Higher values produce larger images without
    /// reducing quality.
    pub scale: u32,

    /// Output image format.
    pub format: ImageFormat,

    /// Folder screenshots are written to. Empty means no folder has been
    /// chosen yet and capture fails fast.
    pub save_path: PathBuf,

    /// Open the written file with the system handler after capture.
    pub open_after_capture: bool,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            camera: None,
            base_width: 1920,
            base_height: 1080,
            scale: 1,
            format: ImageFormat::Png,
            save_path: PathBuf::new(),
            open_after_capture: false,
        }
    }
}

impl fmt::Debug for CaptureSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSettings")
            .field("camera", &self.camera.as_ref().map(|c| c.is_assigned()))
            .field("base_width", &self.base_width)
            .field("base_height", &self.base_height)
            .field("scale", &self.scale)
            .field("format", &self.format)
            .field("save_path", &self.save_path)
            .field("open_after_capture", &self.open_after_capture)
            .finish()
    }
}

impl CaptureSettings {
    /// Final output width after applying scale. Always recomputed.
    pub fn final_width(&self) -> u32 {
        self.base_width * self.scale
    }

    /// Final output height after applying scale. Always recomputed.
    pub fn final_height(&self) -> u32 {
        self.base_height * self.scale
    }

    /// Base dimensions and scale clamped to the UI slider ranges.
    ///
    /// The sliders already enforce these ranges; values arriving from other
    /// call sites are clamped here with a warning.
    pub fn clamped(&self) -> (u32, u32, u32) {
        let mut width = self.base_width;
        let mut height = self.base_height;
        let mut scale = self.scale;

        if !(100..=4096).contains(&width) {
            log::warn!("Invalid base width {width}, clamping to 100-4096 range");
            width = width.clamp(100, 4096);
        }
        if !(100..=4096).contains(&height) {
            log::warn!("Invalid base height {height}, clamping to 100-4096 range");
            height = height.clamp(100, 4096);
        }
        if !(1..=5).contains(&scale) {
            log::warn!("Invalid scale {scale}, clamping to 1-5 range");
            scale = scale.clamp(1, 5);
        }

        (width, height, scale)
    }
}
