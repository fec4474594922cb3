use crate::animation::timeline::FrameTime;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex, Size};
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::render::canvas::Canvas;

/// Statistics for one sequenced animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Frames pushed into the sink.
    pub frames: u64,
    /// Per-frame display duration handed to the sink.
    pub frame_delay_ms: u32,
}

/// Turns a duration and frame rate into an ordered stream of frame times.
///
/// A sequence has exactly `round(duration * fps)` frames spaced `1 / fps` apart. Every frame is
/// rendered from its own time value; nothing carries over between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sequencer {
    fps: Fps,
    duration_s: f64,
}

impl Sequencer {
    /// Create a sequencer for a positive, finite duration.
    pub fn new(fps: Fps, duration_s: f64) -> AnvilResult<Self> {
        if !duration_s.is_finite() || duration_s <= 0.0 {
            return Err(AnvilError::validation(
                "sequence duration must be finite and > 0",
            ));
        }
        let seq = Self { fps, duration_s };
        if seq.frame_count() == 0 {
            return Err(AnvilError::validation(
                "sequence is shorter than one frame",
            ));
        }
        Ok(seq)
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Nominal duration in seconds.
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// `round(duration * fps)`.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_round(self.duration_s)
    }

    /// `round(1000 / fps)` milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        self.fps.frame_delay_ms()
    }

    /// Time information for frame `index`.
    pub fn frame_time(&self, index: FrameIndex) -> AnvilResult<FrameTime> {
        let total_frames = self.frame_count();
        if index.0 >= total_frames {
            return Err(AnvilError::validation(format!(
                "frame {} is outside the sequence (0..{total_frames})",
                index.0
            )));
        }
        Ok(FrameTime {
            index,
            total_frames,
            fps: self.fps,
        })
    }

    /// All frame times in order.
    pub fn frames(&self) -> impl Iterator<Item = FrameTime> + '_ {
        let total_frames = self.frame_count();
        (0..total_frames).map(move |i| FrameTime {
            index: FrameIndex(i),
            total_frames,
            fps: self.fps,
        })
    }

    /// Render every frame in order and stream it into `sink`.
    ///
    /// `render` is called once per frame, strictly in increasing frame order.
    pub fn run(
        &self,
        size: Size,
        sink: &mut dyn FrameSink,
        mut render: impl FnMut(FrameTime) -> AnvilResult<Canvas>,
    ) -> AnvilResult<SequenceStats> {
        let total = self.frame_count();
        let delay = self.frame_delay_ms();
        sink.begin(SinkConfig {
            size,
            fps: self.fps,
            frame_delay_ms: delay,
            total_frames: total,
        })?;

        let batch = (self.fps.as_f64().round() as u64).max(1);
        for time in self.frames() {
            let canvas = render(time)?;
            if canvas.size() != size {
                return Err(AnvilError::render(format!(
                    "frame {} rendered at {}x{}, expected {}x{}",
                    time.index.0,
                    canvas.width(),
                    canvas.height(),
                    size.width,
                    size.height
                )));
            }
            sink.push_frame(time.index, &canvas)?;
            let done = time.index.0 + 1;
            if done % batch == 0 || done == total {
                tracing::debug!(frames = done, total, "frames sequenced");
            }
        }
        sink.end()?;

        Ok(SequenceStats {
            frames: total,
            frame_delay_ms: delay,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sequencer.rs"]
mod tests;
