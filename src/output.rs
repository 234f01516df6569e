//! Where a rendered image goes: a file on disk or the desktop image viewer.

use crate::error::PatternError;
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Open the image in the platform's default viewer.
    Preview,
    /// Write the image to a file, format chosen by its extension.
    File(PathBuf),
}

impl From<Option<PathBuf>> for Output {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Preview, Self::File)
    }
}

impl Output {
    pub fn write(&self, img: &RgbImage) -> Result<(), PatternError> {
        match self {
            Self::File(path) => save(img, path),
            Self::Preview => preview(img),
        }
    }
}

fn save(img: &RgbImage, path: &Path) -> Result<(), PatternError> {
    img.save(path)?;
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Path of the temporary file handed to the viewer.
fn preview_path() -> PathBuf {
    std::env::temp_dir().join(format!("tick_pattern-{}.png", std::process::id()))
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

fn preview(img: &RgbImage) -> Result<(), PatternError> {
    let path = preview_path();
    img.save_with_format(&path, ImageFormat::Png)?;
    debug!("Preview written to {}", path.display());

    // The viewer owns the window from here on; only a failed launch is reported.
    viewer_command(&path)
        .spawn()
        .map_err(PatternError::Preview)?;
    info!("Opened preview of {}", path.display());
    Ok(())
}
