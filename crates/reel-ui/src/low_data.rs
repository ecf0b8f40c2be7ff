//! One-shot "running low on data" detection.

/// Fires once per data generation when fewer than `threshold` items remain
/// beyond the rightmost materialized one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LowDataMonitor {
    threshold: usize,
    notified: bool,
}

impl LowDataMonitor {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            notified: false,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: usize) {
        self.threshold = threshold;
    }

    pub fn has_notified(&self) -> bool {
        self.notified
    }

    /// Returns `true` exactly once per generation, the first time fewer than
    /// `threshold` of `count` items lie past the first `reached` ones.
    pub fn check(&mut self, count: usize, reached: usize) -> bool {
        if self.notified || count.saturating_sub(reached) >= self.threshold {
            return false;
        }
        self.notified = true;
        log::debug!("running low on data: {reached} of {count} reached");
        true
    }

    /// Starts a new data generation.
    pub fn reset(&mut self) {
        self.notified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_generation() {
        let mut monitor = LowDataMonitor::new(5);
        assert!(!monitor.check(100, 90));
        assert!(monitor.check(100, 96));
        assert!(!monitor.check(100, 97));
        assert!(!monitor.check(100, 100));

        monitor.reset();
        assert!(monitor.check(100, 100));
    }

    #[test]
    fn zero_threshold_never_fires() {
        let mut monitor = LowDataMonitor::new(0);
        assert!(!monitor.check(10, 10));
    }
}
