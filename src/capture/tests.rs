use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use super::{
    capture,
    settings::CaptureSettings,
    types::{CaptureError, ImageFormat},
};
use crate::render::{PixelBuffer, RenderError, SceneCamera};

/// Camera that renders a solid color and records target attach/detach.
struct MockCamera {
    assigned: bool,
    fail_render: bool,
    color: [f32; 4],
    attach_calls: Mutex<usize>,
    detach_calls: Mutex<usize>,
}

impl MockCamera {
    fn solid(color: [f32; 4]) -> Self {
        Self {
            assigned: true,
            fail_render: false,
            color,
            attach_calls: Mutex::new(0),
            detach_calls: Mutex::new(0),
        }
    }

    fn attach_calls(&self) -> usize {
        *self.attach_calls.lock().unwrap()
    }

    fn detach_calls(&self) -> usize {
        *self.detach_calls.lock().unwrap()
    }
}

impl SceneCamera for MockCamera {
    fn is_assigned(&self) -> bool {
        self.assigned
    }

    fn attach_target(&self, _width: u32, _height: u32) -> Result<(), RenderError> {
        *self.attach_calls.lock().unwrap() += 1;
        Ok(())
    }

    fn render(&self, out: &mut PixelBuffer) -> Result<(), RenderError> {
        if self.fail_render {
            return Err(RenderError::RenderFailed("simulated device loss".into()));
        }
        out.fill(self.color);
        Ok(())
    }

    fn detach_target(&self) {
        *self.detach_calls.lock().unwrap() += 1;
    }
}

fn settings_for(camera: &Arc<MockCamera>, save_path: PathBuf) -> CaptureSettings {
    let camera: Arc<dyn SceneCamera> = camera.clone();
    CaptureSettings {
        camera: Some(camera),
        base_width: 200,
        base_height: 150,
        scale: 2,
        format: ImageFormat::Png,
        save_path,
        open_after_capture: false,
    }
}

fn dir_is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

#[test]
fn capture_without_camera_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let settings = CaptureSettings {
        camera: None,
        save_path: temp.path().to_path_buf(),
        ..Default::default()
    };

    let err = capture(&settings).unwrap_err();
    assert!(matches!(err, CaptureError::NoCamera));
    assert!(dir_is_empty(&temp));
}

#[test]
fn capture_with_unassigned_camera_fails_before_attach() {
    let temp = TempDir::new().unwrap();
    let camera = Arc::new(MockCamera {
        assigned: false,
        ..MockCamera::solid([0.0; 4])
    });
    let settings = settings_for(&camera, temp.path().to_path_buf());

    let err = capture(&settings).unwrap_err();
    assert!(matches!(err, CaptureError::NoCamera));
    assert_eq!(camera.attach_calls(), 0);
    assert!(dir_is_empty(&temp));
}

#[test]
fn capture_with_empty_save_path_fails_fast() {
    let camera = Arc::new(MockCamera::solid([0.5, 0.5, 0.5, 1.0]));
    let settings = settings_for(&camera, PathBuf::new());

    let err = capture(&settings).unwrap_err();
    assert!(matches!(err, CaptureError::EmptySavePath));
    assert_eq!(camera.attach_calls(), 0);
}

#[test]
fn capture_writes_png_with_expected_name_and_size() {
    let temp = TempDir::new().unwrap();
    let camera = Arc::new(MockCamera::solid([0.0, 0.6, 0.2, 1.0]));
    let settings = settings_for(&camera, temp.path().to_path_buf());

    let path = capture(&settings).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("screenshot_200x150_"), "got: {name}");
    assert!(name.ends_with(".png"));

    // Final resolution is base * scale, exactly.
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (400, 300));

    assert_eq!(camera.attach_calls(), 1);
    assert_eq!(camera.detach_calls(), 1);
}

#[test]
fn capture_jpg_and_exr_decode_at_final_resolution() {
    let temp = TempDir::new().unwrap();
    let camera = Arc::new(MockCamera::solid([0.9, 0.1, 0.4, 1.0]));

    for format in [ImageFormat::Jpg, ImageFormat::Exr] {
        let settings = CaptureSettings {
            format,
            ..settings_for(&camera, temp.path().to_path_buf())
        };
        let path = capture(&settings).unwrap();
        assert!(path.extension().unwrap().eq_ignore_ascii_case(format.extension()));

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (400, 300));
    }
}

#[test]
fn render_failure_restores_target_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let camera = Arc::new(MockCamera {
        fail_render: true,
        ..MockCamera::solid([0.0; 4])
    });
    let settings = settings_for(&camera, temp.path().to_path_buf());

    let err = capture(&settings).unwrap_err();
    assert!(matches!(err, CaptureError::Render(_)));
    assert_eq!(camera.attach_calls(), 1);
    assert_eq!(camera.detach_calls(), 1);
    assert!(dir_is_empty(&temp));
}

#[test]
fn write_failure_still_restores_target() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_directory");
    std::fs::write(&blocker, b"occupied").unwrap();

    let camera = Arc::new(MockCamera::solid([0.3, 0.3, 0.3, 1.0]));
    let settings = settings_for(&camera, blocker);

    let err = capture(&settings).unwrap_err();
    assert!(matches!(err, CaptureError::WriteFailed(_)));
    assert_eq!(camera.attach_calls(), 1);
    assert_eq!(camera.detach_calls(), 1);
}

#[test]
fn out_of_range_dimensions_are_clamped_into_the_capture() {
    let temp = TempDir::new().unwrap();
    let camera = Arc::new(MockCamera::solid([1.0, 1.0, 1.0, 1.0]));
    let settings = CaptureSettings {
        base_width: 120,
        base_height: 50,
        scale: 7,
        ..settings_for(&camera, temp.path().to_path_buf())
    };

    let path = capture(&settings).unwrap();

    // 50 clamps to 100, 7 clamps to 5; the filename reflects the clamp.
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("screenshot_120x100_"), "got: {name}");

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (600, 500));
}
