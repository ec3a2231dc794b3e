//! Image encoding for captured pixel buffers.

use std::io::Cursor;

use super::types::{CaptureError, ImageFormat};
use crate::render::PixelBuffer;

/// Encode a read-back pixel buffer into the requested format.
///
/// PNG and JPG quantize to 8 bits per channel; JPG drops alpha. EXR keeps
/// the linear `f32` data, alpha included.
pub fn encode(buffer: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, CaptureError> {
    let (width, height) = (buffer.width(), buffer.height());

    let image = match format {
        ImageFormat::Png => {
            let rgba = image::RgbaImage::from_raw(width, height, quantize_rgba(buffer.data()))
                .ok_or_else(|| invalid_buffer(format, width, height))?;
            image::DynamicImage::ImageRgba8(rgba)
        }
        ImageFormat::Jpg => {
            let rgb = image::RgbImage::from_raw(width, height, quantize_rgb(buffer.data()))
                .ok_or_else(|| invalid_buffer(format, width, height))?;
            image::DynamicImage::ImageRgb8(rgb)
        }
        ImageFormat::Exr => {
            let rgba = image::Rgba32FImage::from_raw(width, height, buffer.data().to_vec())
                .ok_or_else(|| invalid_buffer(format, width, height))?;
            image::DynamicImage::ImageRgba32F(rgba)
        }
    };

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), backend_format(format))
        .map_err(|e| CaptureError::EncodeFailed {
            format,
            reason: e.to_string(),
        })?;
    Ok(bytes)
}

fn invalid_buffer(format: ImageFormat, width: u32, height: u32) -> CaptureError {
    CaptureError::EncodeFailed {
        format,
        reason: format!("pixel buffer does not match {width}x{height} dimensions"),
    }
}

fn backend_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpg => image::ImageFormat::Jpeg,
        ImageFormat::Exr => image::ImageFormat::OpenExr,
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn quantize_rgba(data: &[f32]) -> Vec<u8> {
    data.iter().map(|&c| to_u8(c)).collect()
}

fn quantize_rgb(data: &[f32]) -> Vec<u8> {
    data.chunks_exact(4)
        .flat_map(|pixel| pixel[..3].iter().map(|&c| to_u8(c)))
        .collect()
}
