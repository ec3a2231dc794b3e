//! The capture pipeline: offscreen render, readback, encode, write.

use std::path::PathBuf;

use super::{encode, file, settings::CaptureSettings, types::CaptureError};
use crate::render::{PixelBuffer, TargetGuard};

/// Capture one screenshot using the given settings.
///
/// Renders the assigned camera into an offscreen target at the final
/// (scaled) resolution, reads the pixels back, encodes them, and writes a
/// uniquely named file under the save path. Returns the written path.
///
/// One failure anywhere surfaces immediately; there are no retries. The
/// caller owns user notification.
pub fn capture(settings: &CaptureSettings) -> Result<PathBuf, CaptureError> {
    let camera = settings
        .camera
        .as_deref()
        .filter(|camera| camera.is_assigned())
        .ok_or(CaptureError::NoCamera)?;
    if settings.save_path.as_os_str().is_empty() {
        return Err(CaptureError::EmptySavePath);
    }

    let (base_width, base_height, scale) = settings.clamped();
    let (width, height) = (base_width * scale, base_height * scale);
    log::info!("Capturing {width}x{height} {} screenshot", settings.format);

    // The guard detaches the target when it drops, so the camera's output
    // is restored on success and on every failure past this point.
    let target = TargetGuard::attach(camera, width, height)?;
    let mut pixels = PixelBuffer::new(width, height);
    target.render(&mut pixels)?;

    let bytes = encode::encode(&pixels, settings.format)?;
    let directory = file::ensure_directory_exists(&settings.save_path)?;
    let filename = file::screenshot_filename(base_width, base_height, settings.format);
    let path = file::write_screenshot(&bytes, &directory, &filename)?;

    log::info!("Screenshot saved: {}", path.display());
    Ok(path)
}
