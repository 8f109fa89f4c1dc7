use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{BanimError, BanimResult};
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRGBA;
use crate::render::surface::Surface;
use crate::scene::composition::Scene;

/// Fixed-timestep playback settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerOpts {
    /// Frames per second; every update advances the scene by one frame duration.
    pub fps: Fps,
    /// Hard cap on emitted frames.
    pub max_frames: u64,
    /// Extra frames emitted after the timeline runs dry.
    pub tail_frames: u64,
}

impl Default for PlayerOpts {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            max_frames: 30 * 60,
            tail_frames: 15,
        }
    }
}

impl PlayerOpts {
    /// Check the frame cap is non-zero.
    pub fn validate(&self) -> BanimResult<()> {
        if self.max_frames == 0 {
            return Err(BanimError::validation("max_frames must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(BanimError::validation("fps must be non-zero"));
        }
        Ok(())
    }
}

/// What a playback run produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// First frame at which the scene had nothing left to do.
    pub idle_at: Option<FrameIndex>,
}

impl PlayStats {
    /// Whether playback ended because the script finished rather than the frame cap.
    pub fn completed(&self) -> bool {
        self.idle_at.is_some()
    }
}

/// Run `scene` until it goes idle (plus the tail) or the frame cap is hit.
///
/// Frame `i` shows the scene after `i + 1` updates, so the first frame already reflects the
/// first dequeued action.
#[tracing::instrument(skip_all, fields(fps = opts.fps.as_f64(), max_frames = opts.max_frames))]
pub fn play_to_sink(
    scene: &mut Scene,
    surface: &mut CpuSurface,
    sink: &mut dyn FrameSink,
    opts: PlayerOpts,
) -> BanimResult<PlayStats> {
    opts.validate()?;
    let (width, height) = surface.size();
    sink.begin(SinkConfig {
        width,
        height,
        fps: opts.fps,
    })?;

    let dt = opts.fps.frame_duration_secs();
    let mut stats = PlayStats::default();
    let mut tail_left = opts.tail_frames;

    while stats.frames < opts.max_frames {
        scene.update(dt);
        scene.render(surface);
        let frame = surface.finish()?;
        sink.push_frame(&frame)?;
        tracing::trace!(frame = stats.frames, "presented");
        stats.frames += 1;

        if scene.is_idle() {
            if stats.idle_at.is_none() {
                stats.idle_at = Some(FrameIndex(stats.frames - 1));
                tracing::debug!(frame = stats.frames - 1, "scene idle");
            }
            if tail_left == 0 {
                break;
            }
            tail_left -= 1;
        }
    }

    sink.end()?;
    if stats.idle_at.is_none() {
        tracing::debug!(frames = stats.frames, "frame cap reached before scene went idle");
    }
    Ok(stats)
}

/// Render the single frame that playback would emit at `at_secs`.
pub fn render_frame_at(
    scene: &mut Scene,
    surface: &mut CpuSurface,
    fps: Fps,
    at_secs: f64,
) -> BanimResult<FrameRGBA> {
    if !at_secs.is_finite() || at_secs < 0.0 {
        return Err(BanimError::validation("frame time must be finite and >= 0"));
    }
    let dt = fps.frame_duration_secs();
    let index = fps.secs_to_frames_floor(at_secs);
    for _ in 0..=index {
        scene.update(dt);
    }
    scene.render(surface);
    surface.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/player.rs"]
mod tests;
