use crate::foundation::core::{Fps, FrameIndex, Size};
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::render::canvas::Canvas;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame dimensions; every pushed canvas has this size.
    pub size: Size,
    /// Frame rate the frames were sampled at.
    pub fps: Fps,
    /// Display duration of every frame in whole milliseconds.
    pub frame_delay_ms: u32,
    /// Total number of frames that will be pushed.
    pub total_frames: u64,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, starting
/// at 0, exactly `total_frames` times between `begin` and `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> AnvilResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Canvas) -> AnvilResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> AnvilResult<()>;
}

/// In-memory sink for tests and single-frame previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Canvas)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Canvas)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> AnvilResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Canvas) -> AnvilResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| AnvilError::encode("push_frame called before begin"))?;
        if frame.size() != cfg.size {
            return Err(AnvilError::encode("frame size does not match sink config"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> AnvilResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
