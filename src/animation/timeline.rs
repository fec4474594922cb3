use std::fmt::Debug;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{AnvilError, AnvilResult};

/// One scene's half-open time window `[start_s, end_s)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneWindow<S> {
    /// Inclusive start, in seconds from the animation start.
    pub start_s: f64,
    /// Exclusive end, in seconds.
    pub end_s: f64,
    /// Scene rendered while the clock is inside the window.
    pub scene: S,
}

impl<S> SceneWindow<S> {
    /// Create a window; validation happens when it joins a [`Timeline`].
    pub const fn new(start_s: f64, end_s: f64, scene: S) -> Self {
        Self {
            start_s,
            end_s,
            scene,
        }
    }

    /// Window length in seconds.
    pub fn span_s(&self) -> f64 {
        self.end_s - self.start_s
    }

    /// Return `true` when `secs` is inside `[start_s, end_s)`.
    pub fn contains(&self, secs: f64) -> bool {
        self.start_s <= secs && secs < self.end_s
    }
}

/// Scene-local time for the frame being rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneClock {
    /// Seconds since the scene window opened.
    pub local_s: f64,
    /// Window length in seconds.
    pub span_s: f64,
}

impl SceneClock {
    /// Normalized progress through the scene window, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        if self.span_s <= 0.0 {
            return 0.0;
        }
        (self.local_s / self.span_s).clamp(0.0, 1.0)
    }
}

/// Result of a timeline lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneHit<S> {
    /// Position of the window in the timeline.
    pub ordinal: usize,
    /// Scene selected for this time.
    pub scene: S,
    /// Scene-local clock.
    pub clock: SceneClock,
}

/// Ordered, contiguous, exhaustive partition of `[0, duration)` into scene windows.
///
/// Scene dispatch is a single lookup over this list; boundary constants live only here.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<S> {
    windows: Vec<SceneWindow<S>>,
}

impl<S: Copy + Debug> Timeline<S> {
    /// Build a timeline, rejecting gaps, overlaps, empty windows and a non-zero origin.
    pub fn new(windows: Vec<SceneWindow<S>>) -> AnvilResult<Self> {
        let Some(first) = windows.first() else {
            return Err(AnvilError::validation("timeline must have at least one scene"));
        };
        if first.start_s != 0.0 {
            return Err(AnvilError::validation(format!(
                "timeline must start at 0s, first scene {:?} starts at {}s",
                first.scene, first.start_s
            )));
        }
        for w in &windows {
            if !w.start_s.is_finite() || !w.end_s.is_finite() || w.end_s <= w.start_s {
                return Err(AnvilError::validation(format!(
                    "scene {:?} has an empty or invalid window [{}, {})",
                    w.scene, w.start_s, w.end_s
                )));
            }
        }
        for pair in windows.windows(2) {
            if pair[1].start_s != pair[0].end_s {
                return Err(AnvilError::validation(format!(
                    "scene {:?} starts at {}s but previous scene {:?} ends at {}s",
                    pair[1].scene, pair[1].start_s, pair[0].scene, pair[0].end_s
                )));
            }
        }
        Ok(Self { windows })
    }

    /// Total duration in seconds (end of the last window).
    pub fn duration_s(&self) -> f64 {
        self.windows.last().map(|w| w.end_s).unwrap_or(0.0)
    }

    /// Borrow the windows in order.
    pub fn windows(&self) -> &[SceneWindow<S>] {
        &self.windows
    }

    /// Find the scene whose window contains `secs`.
    pub fn locate(&self, secs: f64) -> Option<SceneHit<S>> {
        self.windows
            .iter()
            .enumerate()
            .find(|(_, w)| w.contains(secs))
            .map(|(ordinal, w)| SceneHit {
                ordinal,
                scene: w.scene,
                clock: SceneClock {
                    local_s: secs - w.start_s,
                    span_s: w.span_s(),
                },
            })
    }

    /// Like [`Timeline::locate`], but a miss is a validation error.
    pub fn require(&self, secs: f64) -> AnvilResult<SceneHit<S>> {
        self.locate(secs).ok_or_else(|| {
            AnvilError::validation(format!(
                "{secs}s is outside the timeline [0, {})",
                self.duration_s()
            ))
        })
    }
}

/// Time information for one frame of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Frame index within the sequence.
    pub index: FrameIndex,
    /// Total frames in the sequence.
    pub total_frames: u64,
    /// Frame rate the sequence is sampled at.
    pub fps: Fps,
}

impl FrameTime {
    /// Elapsed seconds at this frame (`index / fps`).
    pub fn secs(&self) -> f64 {
        self.fps.frames_to_secs(self.index.0)
    }

    /// Normalized progress through the whole animation, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        self.index.0 as f64 / self.total_frames as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
