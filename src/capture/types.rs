//! Data types for screenshot capture.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderError;

/// Output image format for captured screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless, alpha preserved.
    #[default]
    Png,
    /// Lossy, no alpha, encoder default quality.
    Jpg,
    /// High dynamic range, linear channels, alpha preserved.
    Exr,
}

impl ImageFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Exr => "exr",
        }
    }

    /// Parse a user-supplied format name.
    ///
    /// Unknown names fall back to PNG with a warning rather than failing
    /// the capture.
    pub fn parse_or_png(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "png" => ImageFormat::Png,
            "jpg" | "jpeg" => ImageFormat::Jpg,
            "exr" => ImageFormat::Exr,
            other => {
                log::warn!("Unsupported format '{other}', defaulting to PNG");
                ImageFormat::Png
            }
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Errors that can occur during screenshot capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no camera is assigned")]
    NoCamera,

    #[error("save path is empty, choose a folder before capturing")]
    EmptySavePath,

    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to encode {format} image: {reason}")]
    EncodeFailed { format: ImageFormat, reason: String },

    #[error("failed to write screenshot: {0}")]
    WriteFailed(#[from] std::io::Error),
}
