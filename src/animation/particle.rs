use crate::foundation::core::Point;

/// Horizontal sway amplitude in pixels.
const SWAY_PX: f64 = 20.0;
/// Lifetime units per radian of sway.
const SWAY_PERIOD: f64 = 10.0;
/// Largest particle radius, reached at the start of a lifetime.
const MAX_RADIUS: u32 = 3;

/// A self-looping particle that drifts upward and fades out.
///
/// Unlike scene elements, a particle is driven by a modulo cycle: its local lifetime is
/// `(frame * speed) mod cycle_frames`, so it restarts at the base position every
/// `cycle_frames / speed` frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Spawn position (bottom of the drift).
    pub base: Point,
    /// Lifetime units advanced per frame.
    pub speed: f64,
    /// Frame offset so particles in a field do not move in lockstep.
    pub phase_frames: u64,
}

/// Sampled particle appearance for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleState {
    /// Center position.
    pub center: Point,
    /// Opacity, 255 at birth falling linearly toward 0.
    pub alpha: u8,
    /// Radius in pixels, never below 1.
    pub radius: u32,
}

impl Particle {
    /// Local lifetime at `frame`, in `[0, cycle_frames)`.
    pub fn lifetime(&self, frame: u64, cycle_frames: u64) -> f64 {
        let cycle = cycle_frames.max(1) as f64;
        ((frame + self.phase_frames) as f64 * self.speed).rem_euclid(cycle)
    }

    /// Sample the particle at `frame`; `travel_px` is the full upward drift of one lifetime.
    pub fn state_at(&self, frame: u64, cycle_frames: u64, travel_px: f64) -> ParticleState {
        let t = self.lifetime(frame, cycle_frames);
        let life = t / cycle_frames.max(1) as f64;

        let center = Point::new(
            self.base.x + (t / SWAY_PERIOD).sin() * SWAY_PX,
            self.base.y - life * travel_px,
        );
        let alpha = (255.0 * (1.0 - life)).floor().clamp(0.0, 255.0) as u8;
        let shrink = (life * f64::from(MAX_RADIUS)).floor() as u32;
        let radius = MAX_RADIUS.saturating_sub(shrink).max(1);

        ParticleState {
            center,
            alpha,
            radius,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particle.rs"]
mod tests;
