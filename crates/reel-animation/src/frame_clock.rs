//! Time source for animation ticks.

use web_time::Instant;

/// Supplies the timestamp of the frame currently being produced.
///
/// All physics reads the time through this trait so that a host can drive
/// animation from its own vsync clock and tests can step time by hand.
pub trait FrameClock {
    /// Monotonic milliseconds since an arbitrary origin.
    fn now_millis(&self) -> i64;
}

/// Wall-clock frame time measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemFrameClock {
    origin: Instant,
}

impl SystemFrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn now_millis(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemFrameClock::new();
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(a >= 0);
        assert!(b >= a);
    }
}
