//! PNG file surface for layer output.

use grid_common::Rect;
use renderer::{Bitmap, RenderSurface};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes every bitmap it is given to a PNG file.
///
/// The bitmap is written as rendered; `dest` is only recorded.
#[derive(Debug)]
pub struct PngSurface {
    path: PathBuf,
    last_dest: Option<Rect>,
}

impl PngSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_dest: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Device rectangle of the last bitmap written.
    pub fn last_dest(&self) -> Option<Rect> {
        self.last_dest
    }
}

impl RenderSurface for PngSurface {
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) -> renderer::Result<()> {
        let png = bitmap.to_png()?;
        std::fs::write(&self.path, &png)?;
        info!(
            path = %self.path.display(),
            width = bitmap.width(),
            height = bitmap.height(),
            bytes = png.len(),
            "Wrote PNG"
        );
        self.last_dest = Some(dest);
        Ok(())
    }
}
