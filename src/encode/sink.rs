use std::path::Path;

use crate::foundation::core::Fps;
use crate::foundation::error::{BanimError, BanimResult};
use crate::render::frame::FrameRGBA;

/// Stream parameters announced to a sink before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Playback rate.
    pub fps: Fps,
}

impl SinkConfig {
    /// Check the frame size is non-empty.
    pub fn validate(&self) -> BanimResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BanimError::validation("sink width/height must be non-zero"));
        }
        Ok(())
    }

    /// Error unless `frame` matches the configured size.
    pub fn check_frame(&self, frame: &FrameRGBA) -> BanimResult<()> {
        if frame.width != self.width || frame.height != self.height {
            return Err(BanimError::encode(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        if frame.data.len() != self.width as usize * self.height as usize * 4 {
            return Err(BanimError::encode("frame byte length mismatch"));
        }
        Ok(())
    }
}

/// Destination for a stream of rendered frames.
pub trait FrameSink {
    /// Called once before the first frame.
    fn begin(&mut self, cfg: SinkConfig) -> BanimResult<()>;

    /// Present one frame.
    fn push_frame(&mut self, frame: &FrameRGBA) -> BanimResult<()>;

    /// Called once after the last frame.
    fn end(&mut self) -> BanimResult<()>;
}

/// Sink that keeps every frame in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameRGBA>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames received so far.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Configuration passed to `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Whether `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BanimResult<()> {
        cfg.validate()?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameRGBA) -> BanimResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| BanimError::encode("push_frame called before begin"))?;
        cfg.check_frame(frame)?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> BanimResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> BanimResult<()> {
    use anyhow::Context as _;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
