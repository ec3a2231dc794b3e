//! File naming and writing for captured screenshots.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{CaptureError, ImageFormat};

/// Build the output filename for a capture.
///
/// The pattern is `screenshot_{width}x{height}_{YYYY-MM-DD_HH-MM-SS}.{ext}`
/// with a local, lexically sortable timestamp. Two captures within the same
/// second produce the same name and the later one overwrites the earlier;
/// the timestamp is the only uniqueness source.
pub fn screenshot_filename(base_width: u32, base_height: u32, format: ImageFormat) -> String {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!(
        "screenshot_{base_width}x{base_height}_{stamp}.{}",
        format.extension()
    )
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when resolvable.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, CaptureError> {
    if !directory.exists() {
        log::info!("Creating screenshot directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write encoded image bytes into `directory` under `filename`.
pub fn write_screenshot(
    bytes: &[u8],
    directory: &Path,
    filename: &str,
) -> Result<PathBuf, CaptureError> {
    let file_path = directory.join(filename);

    log::info!(
        "Saving screenshot to: {} ({} bytes)",
        file_path.display(),
        bytes.len()
    );
    fs::write(&file_path, bytes)?;

    Ok(file_path)
}

/// Expand a leading tilde in user-supplied paths.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
