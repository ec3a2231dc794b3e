//! Built-in procedural camera for running the tool without an engine.

use std::sync::Mutex;

use super::{PixelBuffer, RenderError, SceneCamera};

/// Deterministic test-pattern camera.
///
/// Renders a horizontal color gradient with a checker overlay at the
/// attached target size. Stands in for an engine camera so the CLI binary
/// and the pipeline can run headless.
pub struct PatternCamera {
    target: Mutex<Option<(u32, u32)>>,
}

impl PatternCamera {
    pub fn new() -> Self {
        Self {
            target: Mutex::new(None),
        }
    }
}

impl Default for PatternCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCamera for PatternCamera {
    fn is_assigned(&self) -> bool {
        true
    }

    fn attach_target(&self, width: u32, height: u32) -> Result<(), RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::TargetAllocation { width, height });
        }
        *self.target.lock().unwrap() = Some((width, height));
        Ok(())
    }

    fn render(&self, out: &mut PixelBuffer) -> Result<(), RenderError> {
        let Some((width, height)) = *self.target.lock().unwrap() else {
            return Err(RenderError::RenderFailed("no target attached".into()));
        };
        if (out.width(), out.height()) != (width, height) {
            return Err(RenderError::RenderFailed(format!(
                "readback buffer is {}x{}, target is {}x{}",
                out.width(),
                out.height(),
                width,
                height,
            )));
        }

        for y in 0..height {
            for x in 0..width {
                let u = x as f32 / width as f32;
                let v = y as f32 / height as f32;
                let checker = if ((x / 32) + (y / 32)) % 2 == 0 { 1.0 } else { 0.7 };
                out.put(x, y, [u * checker, v * checker, (1.0 - u) * checker, 1.0]);
            }
        }
        Ok(())
    }

    fn detach_target(&self) {
        *self.target.lock().unwrap() = None;
    }
}
