/// Easing functions used to map normalized scene progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-out: `1 - (1 - t)^3`.
    OutCubic,
    /// Cubic ease-in/out: `4t^3` below one half, mirrored above.
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Decelerating cubic used for entrances and slides.
pub fn ease_out(t: f64) -> f64 {
    Ease::OutCubic.apply(t)
}

/// Symmetric cubic used for fills that should start and finish softly.
pub fn ease_in_out(t: f64) -> f64 {
    Ease::InOutCubic.apply(t)
}

/// Progress of a reveal that starts at `delay_s` and lasts `span_s`, clamped to `[0, 1]`.
///
/// Before `delay_s` this is 0, so callers can gate visibility with `> 0.0`.
pub fn reveal(local_s: f64, delay_s: f64, span_s: f64) -> f64 {
    if span_s <= 0.0 {
        return if local_s >= delay_s { 1.0 } else { 0.0 };
    }
    ((local_s - delay_s) / span_s).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
