//! Library exports for embedding the viewshot capture subsystems.
//!
//! Exposes the capture pipeline, preview fitter, and preference storage so
//! a host editor panel can drive them directly; the bundled binary is a
//! thin headless driver over the same surface.

pub mod capture;
pub mod config;
pub mod preview;
pub mod render;

pub use capture::{CaptureError, CaptureSettings, ImageFormat, capture};
pub use config::Preferences;
