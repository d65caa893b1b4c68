use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::SpriteResult;
use crate::raster::buffer::PixelBuffer;

/// Consumer of finished frames: a window, a file sequence, a test harness.
///
/// Ordering contract: `present` is called with strictly increasing indices between one `begin`
/// and the matching `end`.
pub trait Presenter {
    /// Called once before the first frame with the frame size.
    fn begin(&mut self, _width: u32, _height: u32) -> SpriteResult<()> {
        Ok(())
    }

    /// Show or store one frame.
    fn present(&mut self, index: u64, frame: &PixelBuffer) -> SpriteResult<()>;

    /// Called once after the last frame.
    fn end(&mut self) -> SpriteResult<()> {
        Ok(())
    }
}

/// Keeps copies of every presented frame.
#[derive(Debug, Default)]
pub struct InMemoryPresenter {
    size: Option<(u32, u32)>,
    frames: Vec<(u64, PixelBuffer)>,
    ended: bool,
}

impl InMemoryPresenter {
    /// Empty presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size passed to `begin`, if it was called.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Presented frames in order.
    pub fn frames(&self) -> &[(u64, PixelBuffer)] {
        &self.frames
    }

    /// Whether `end` was called after the last `begin`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl Presenter for InMemoryPresenter {
    fn begin(&mut self, width: u32, height: u32) -> SpriteResult<()> {
        self.size = Some((width, height));
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn present(&mut self, index: u64, frame: &PixelBuffer) -> SpriteResult<()> {
        self.frames.push((index, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame to `<dir>/<prefix>_<index>.png`, index zero-padded to six digits.
#[derive(Debug)]
pub struct PngSequencePresenter {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequencePresenter {
    /// Presenter writing into `dir` (created on `begin`) with file prefix `frame`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            written: Vec::new(),
        }
    }

    /// Override the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path used for frame `index`.
    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("{}_{index:06}.png", self.prefix))
    }
}

impl Presenter for PngSequencePresenter {
    fn begin(&mut self, width: u32, height: u32) -> SpriteResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written.clear();
        tracing::debug!(dir = %self.dir.display(), width, height, "png sequence started");
        Ok(())
    }

    fn present(&mut self, index: u64, frame: &PixelBuffer) -> SpriteResult<()> {
        let path = self.frame_path(index);
        frame.save_png(&path)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        tracing::debug!(frames = self.written.len(), "png sequence finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/present.rs"]
mod tests;
