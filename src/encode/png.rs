use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, ensure_dir};
use crate::foundation::error::{BanimError, BanimResult};
use crate::render::frame::FrameRGBA;

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, … into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    next: u64,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, which is created on `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            next: 0,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name for frame `index`.
    pub fn frame_file_name(index: u64) -> String {
        format!("frame_{index:05}.png")
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> BanimResult<()> {
        cfg.validate()?;
        ensure_dir(&self.dir)?;
        self.cfg = Some(cfg);
        self.next = 0;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameRGBA) -> BanimResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| BanimError::encode("push_frame called before begin"))?;
        cfg.check_frame(frame)?;

        let path = self.dir.join(Self::frame_file_name(self.next));
        write_png(&path, frame)?;
        tracing::trace!(path = %path.display(), "wrote frame");
        self.written.push(path);
        self.next += 1;
        Ok(())
    }

    fn end(&mut self) -> BanimResult<()> {
        tracing::debug!(frames = self.next, dir = %self.dir.display(), "png sequence complete");
        Ok(())
    }
}

/// Write a single frame as a straight-alpha RGBA PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> BanimResult<()> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
        .ok_or_else(|| BanimError::encode("frame byte length does not match its size"))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
