//! Looping GIF output through `image`'s incremental encoder.

use std::io::Write;

use image::Delay;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::render::canvas::Canvas;

/// Default NeuQuant sampling speed (1 = best quality, 30 = fastest).
pub const DEFAULT_GIF_SPEED: i32 = 10;

/// Streams frames into an infinitely looping GIF written to `W`.
///
/// Each frame is quantized and written as it arrives; only the encoder state is retained. The
/// trailer is written when `end` is called.
pub struct GifSink<W: Write> {
    writer: Option<W>,
    encoder: Option<GifEncoder<W>>,
    speed: i32,
    cfg: Option<SinkConfig>,
    next: u64,
}

impl<W: Write> GifSink<W> {
    /// Create a sink with quantizer `speed`, clamped to `1..=30`.
    pub fn new(writer: W, speed: i32) -> Self {
        Self {
            writer: Some(writer),
            encoder: None,
            speed: speed.clamp(1, 30),
            cfg: None,
            next: 0,
        }
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.next
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> AnvilResult<()> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| AnvilError::encode("gif sink can only be used once"))?;
        let mut encoder = GifEncoder::new_with_speed(writer, self.speed);
        encoder.set_repeat(Repeat::Infinite)?;
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.next = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Canvas) -> AnvilResult<()> {
        let (Some(encoder), Some(cfg)) = (self.encoder.as_mut(), self.cfg) else {
            return Err(AnvilError::encode("push_frame called outside begin/end"));
        };
        if idx.0 != self.next {
            return Err(AnvilError::encode(format!(
                "frame {} pushed out of order (expected {})",
                idx.0, self.next
            )));
        }
        if frame.size() != cfg.size {
            return Err(AnvilError::encode("frame size does not match sink config"));
        }
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        encoder.encode_frame(image::Frame::from_parts(frame.to_rgba_image()?, 0, 0, delay))?;
        self.next += 1;
        Ok(())
    }

    fn end(&mut self) -> AnvilResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| AnvilError::encode("end called before begin"))?;
        if self.next != cfg.total_frames {
            return Err(AnvilError::encode(format!(
                "gif ended after {} of {} frames",
                self.next, cfg.total_frames
            )));
        }
        // Dropping the encoder writes the trailer.
        drop(self.encoder.take());
        Ok(())
    }
}

/// Encode already-rendered frames into a looping GIF.
pub fn encode_animated<'a>(
    frames: impl ExactSizeIterator<Item = &'a Canvas>,
    fps: Fps,
    speed: i32,
) -> AnvilResult<Vec<u8>> {
    let mut frames = frames.peekable();
    let size = frames
        .peek()
        .map(|c| c.size())
        .ok_or_else(|| AnvilError::validation("gif needs at least one frame"))?;

    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes, speed);
        sink.begin(SinkConfig {
            size,
            fps,
            frame_delay_ms: fps.frame_delay_ms(),
            total_frames: frames.len() as u64,
        })?;
        for (i, frame) in frames.enumerate() {
            sink.push_frame(FrameIndex(i as u64), frame)?;
        }
        sink.end()?;
    }
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
