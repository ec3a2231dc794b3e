use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use viewshot::capture::file::expand_tilde;
use viewshot::capture::{CaptureSettings, ImageFormat, capture};
use viewshot::config::Preferences;
use viewshot::render::SceneCamera;
use viewshot::render::pattern::PatternCamera;

#[derive(Parser, Debug)]
#[command(name = "viewshot")]
#[command(version, about = "Camera screenshot capture tool for game engine editors")]
struct Cli {
    /// Base output width in pixels (100-4096)
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Base output height in pixels (100-4096)
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Resolution scale multiplier (1-5)
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Output format: png, jpg, or exr (unknown names fall back to png)
    #[arg(long, default_value = "png")]
    format: String,

    /// Save folder, remembered for the next run (default: last-used folder)
    #[arg(long, value_name = "DIR")]
    output: Option<String>,

    /// Open the screenshot with the system handler after capture
    #[arg(long)]
    open: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let save_path = match &cli.output {
        Some(dir) => {
            let dir = expand_tilde(dir);
            // Remember the chosen folder like the editor's browse dialog does.
            if let Err(e) = Preferences::remember_save_path(dir.clone()) {
                log::warn!("Could not persist save folder: {e:#}");
            }
            dir
        }
        None => Preferences::load()?.save_path,
    };

    let camera: Arc<dyn SceneCamera> = Arc::new(PatternCamera::new());
    let settings = CaptureSettings {
        camera: Some(camera),
        base_width: cli.width,
        base_height: cli.height,
        scale: cli.scale,
        format: ImageFormat::parse_or_png(&cli.format),
        save_path,
        open_after_capture: cli.open,
    };

    let path = capture(&settings)?;
    println!("Screenshot saved: {}", path.display());

    if settings.open_after_capture {
        open_file(&path);
    }

    Ok(())
}

/// Hand the written file to the platform opener. Failures only log; the
/// capture itself already succeeded.
fn open_file(path: &Path) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    if let Err(e) = std::process::Command::new(opener).arg(path).spawn() {
        log::warn!("Failed to open {}: {}", path.display(), e);
    }
}
