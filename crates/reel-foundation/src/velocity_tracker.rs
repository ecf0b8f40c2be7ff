//! Release-velocity estimation for flings.
//!
//! Uses the impulse strategy: each pair of consecutive samples contributes
//! the work needed to change a unit mass from the previous velocity to the
//! segment's velocity, and the accumulated kinetic energy is converted back
//! to a velocity. It reacts quickly to the last few samples without the noise
//! of a plain two-point difference.

use smallvec::SmallVec;

/// Samples older than this, relative to the newest, are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// Samples kept in history.
const HISTORY_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks positions along one axis and estimates velocity in px/s.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; HISTORY_SIZE]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.remove(0);
        }
        self.samples.push(Sample { time_ms, position });
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Velocity in px/s, or 0.0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples.last().copied() else {
            return 0.0;
        };

        // Newest first, cut at the horizon or the first stop.
        let mut recent: SmallVec<[Sample; HISTORY_SIZE]> = SmallVec::new();
        let mut later = newest;
        for sample in self.samples.iter().rev() {
            if newest.time_ms - sample.time_ms > HORIZON_MS
                || later.time_ms - sample.time_ms > ASSUME_STOPPED_MS
            {
                break;
            }
            recent.push(*sample);
            later = *sample;
        }
        if recent.len() < 2 {
            return 0.0;
        }

        let mut work = 0.0f32;
        let oldest = recent.len() - 1;
        for i in (1..=oldest).rev() {
            let (from, to) = (recent[i], recent[i - 1]);
            if from.time_ms == to.time_ms {
                continue;
            }
            let segment = (to.position - from.position) / (to.time_ms - from.time_ms) as f32;
            let previous = energy_to_velocity(work);
            work += (segment - previous) * segment.abs();
            if i == oldest {
                work *= 0.5;
            }
        }
        energy_to_velocity(work) * 1000.0
    }

    /// Velocity clamped to `[-max, max]`. A non-positive `max` yields 0.0.
    pub fn velocity_with_max(&self, max: f32) -> f32 {
        if !(max.is_finite() && max > 0.0) {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max, max)
    }
}

/// Kinetic energy of a unit mass back to a signed velocity.
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_samples() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        tracker.add_position(0, 10.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_motion() {
        let mut tracker = VelocityTracker::new();
        for step in 0..5 {
            tracker.add_position(step * 10, step as f32 * 20.0);
        }
        let v = tracker.velocity();
        assert!((v - 2_000.0).abs() < 200.0, "expected ~2000, got {v}");
    }

    #[test]
    fn leftward_motion_is_negative() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, 300.0);
        tracker.add_position(10, 250.0);
        tracker.add_position(20, 200.0);
        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn pause_before_release_kills_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, 0.0);
        tracker.add_position(10, 50.0);
        tracker.add_position(10 + ASSUME_STOPPED_MS + 1, 50.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn clamps_to_max() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, 0.0);
        tracker.add_position(1, 1_000.0);
        assert_eq!(tracker.velocity_with_max(8_000.0), 8_000.0);
        assert_eq!(tracker.velocity_with_max(0.0), 0.0);
    }

    #[test]
    fn history_is_bounded() {
        let mut tracker = VelocityTracker::new();
        for step in 0..100 {
            tracker.add_position(step, step as f32);
        }
        assert_eq!(tracker.samples.len(), HISTORY_SIZE);
    }
}
