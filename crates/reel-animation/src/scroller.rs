//! Scroll-offset tracker for programmatic scrolls and flings.
//!
//! [`Scroller`] does not move anything itself. The owner starts a motion,
//! then on every frame calls [`Scroller::compute_next_offset`] and applies
//! [`Scroller::current_offset`] to whatever it scrolls. Positions are whole
//! pixels, matching the integer layout coordinates of the list.

use std::rc::Rc;

use crate::frame_clock::FrameClock;
use crate::interpolator::viscous_fluid;
use crate::spline::{self, FlingCalculator};

/// Duration of a [`Scroller::start_scroll`] motion.
pub const DEFAULT_SCROLL_DURATION_MS: i64 = 250;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    /// Eased move from `start_x` to `final_x` over `duration_ms`.
    Scroll,
    /// Momentum move; `distance` is the unclamped travel and `direction`
    /// the sign of the release velocity.
    Fling { distance: f32, direction: f32 },
}

/// Tracks a single in-flight scroll motion on the x axis.
pub struct Scroller {
    clock: Rc<dyn FrameClock>,
    calculator: FlingCalculator,
    mode: Mode,
    start_x: i32,
    final_x: i32,
    min_x: i32,
    max_x: i32,
    curr_x: i32,
    start_time_ms: i64,
    last_time_ms: i64,
    duration_ms: i64,
    finished: bool,
    curr_velocity: f32,
}

impl std::fmt::Debug for Scroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("mode", &self.mode)
            .field("curr_x", &self.curr_x)
            .field("final_x", &self.final_x)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl Scroller {
    /// Creates an idle scroller using the platform's default friction.
    pub fn new(clock: Rc<dyn FrameClock>, density: f32) -> Self {
        Self {
            clock,
            calculator: FlingCalculator::new(FlingCalculator::PLATFORM_FRICTION, density),
            mode: Mode::Scroll,
            start_x: 0,
            final_x: 0,
            min_x: i32::MIN,
            max_x: i32::MAX,
            curr_x: 0,
            start_time_ms: 0,
            last_time_ms: 0,
            duration_ms: 0,
            finished: true,
            curr_velocity: 0.0,
        }
    }

    /// Changes how quickly flings decelerate. Affects flings started afterwards.
    pub fn set_friction(&mut self, friction: f32) {
        self.calculator.set_friction(friction);
    }

    pub fn friction(&self) -> f32 {
        self.calculator.friction()
    }

    /// Starts an eased move from `from` to `to`.
    pub fn start_scroll(&mut self, from: i32, to: i32) {
        self.start_scroll_with_duration(from, to, DEFAULT_SCROLL_DURATION_MS);
    }

    pub fn start_scroll_with_duration(&mut self, from: i32, to: i32, duration_ms: i64) {
        self.mode = Mode::Scroll;
        self.finished = false;
        self.start_time_ms = self.clock.now_millis();
        self.last_time_ms = self.start_time_ms;
        self.duration_ms = duration_ms.max(0);
        self.start_x = from;
        self.curr_x = from;
        self.final_x = to;
        self.min_x = i32::MIN;
        self.max_x = i32::MAX;
        self.curr_velocity = 0.0;
    }

    /// Starts a momentum move from `start_x` with `velocity_x` px/s. The
    /// resting position is clamped to `[min_x, max_x]`.
    pub fn fling(&mut self, start_x: i32, velocity_x: f32, min_x: i32, max_x: i32) {
        let speed = velocity_x.abs();
        let total = self.calculator.distance(speed);

        self.mode = Mode::Fling {
            distance: total as f32,
            direction: velocity_x.signum(),
        };
        self.finished = false;
        self.start_time_ms = self.clock.now_millis();
        self.last_time_ms = self.start_time_ms;
        self.duration_ms = self.calculator.duration_ms(speed);
        self.start_x = start_x;
        self.curr_x = start_x;
        self.min_x = min_x;
        self.max_x = max_x;
        self.curr_velocity = velocity_x;

        let travel = (total * f64::from(velocity_x.signum())).round();
        let unclamped = (f64::from(start_x) + travel).clamp(f64::from(i32::MIN), f64::from(i32::MAX));
        self.final_x = (unclamped as i32).clamp(min_x, max_x.max(min_x));

        log::debug!(
            "fling from {start_x} at {velocity_x:.0}px/s: {}ms to {}",
            self.duration_ms,
            self.final_x
        );
    }

    /// Advances to the current frame time. Returns `true` while the motion
    /// produced a new position this frame, including the frame on which it
    /// reaches its end.
    pub fn compute_next_offset(&mut self) -> bool {
        if self.finished {
            return false;
        }

        let now = self.clock.now_millis();
        let elapsed = now - self.start_time_ms;
        let frame_ms = now - self.last_time_ms;
        self.last_time_ms = now;
        if elapsed >= self.duration_ms {
            self.curr_x = self.final_x;
            self.curr_velocity = 0.0;
            self.finished = true;
            return true;
        }

        let t = elapsed.max(0) as f32 / self.duration_ms as f32;
        match self.mode {
            Mode::Scroll => {
                let previous = self.curr_x;
                let delta = (self.final_x - self.start_x) as f32;
                self.curr_x = self.start_x + (viscous_fluid(t) * delta).round() as i32;
                // A second pass at the same frame time keeps the last velocity.
                if frame_ms > 0 {
                    self.curr_velocity = (self.curr_x - previous) as f32 * 1000.0 / frame_ms as f32;
                }
            }
            Mode::Fling {
                distance,
                direction,
            } => {
                let sample = spline::sample(t);
                self.curr_velocity =
                    sample.velocity * distance * direction / self.duration_ms as f32 * 1000.0;
                let span = (self.final_x - self.start_x) as f32;
                let x = self.start_x + (sample.distance * span).round() as i32;
                self.curr_x = x.clamp(self.min_x, self.max_x.max(self.min_x));
                if self.curr_x == self.final_x {
                    self.curr_velocity = 0.0;
                    self.finished = true;
                }
            }
        }
        true
    }

    pub fn current_offset(&self) -> i32 {
        self.curr_x
    }

    /// Signed velocity in px/s as of the last [`Self::compute_next_offset`].
    pub fn current_velocity(&self) -> f32 {
        self.curr_velocity
    }

    pub fn final_offset(&self) -> i32 {
        self.final_x
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stops the motion where it is.
    pub fn force_finish(&mut self) {
        self.finished = true;
        self.curr_velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct StepClock(Cell<i64>);

    impl FrameClock for StepClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    fn scroller() -> (Rc<StepClock>, Scroller) {
        let clock = Rc::new(StepClock::default());
        let scroller = Scroller::new(clock.clone(), 1.0);
        (clock, scroller)
    }

    #[test]
    fn idle_scroller_reports_nothing() {
        let (_, mut s) = scroller();
        assert!(s.is_finished());
        assert!(!s.compute_next_offset());
    }

    #[test]
    fn start_scroll_eases_to_target() {
        let (clock, mut s) = scroller();
        s.start_scroll(0, 200);

        clock.0.set(100);
        assert!(s.compute_next_offset());
        let mid = s.current_offset();
        assert!(mid > 0 && mid < 200, "mid-way offset was {mid}");

        clock.0.set(DEFAULT_SCROLL_DURATION_MS);
        assert!(s.compute_next_offset());
        assert_eq!(s.current_offset(), 200);
        assert!(s.is_finished());
        assert!(!s.compute_next_offset());
    }

    #[test]
    fn repeated_scroll_step_at_same_time_keeps_velocity() {
        let (clock, mut s) = scroller();
        s.start_scroll(0, 400);
        clock.0.set(16);
        assert!(s.compute_next_offset());
        let velocity = s.current_velocity();
        assert!(velocity > 0.0, "velocity was {velocity}");

        assert!(s.compute_next_offset());
        assert_eq!(s.current_velocity(), velocity);
        assert!(!s.is_finished());
    }

    #[test]
    fn fling_decelerates_until_finished() {
        let (clock, mut s) = scroller();
        s.set_friction(0.009);
        s.fling(0, 2000.0, 0, i32::MAX);

        let tolerance = 2000.0 * 0.005;
        let mut last_velocity = f32::MAX;
        let mut last_offset = 0;
        let mut frames = 0;
        while !s.is_finished() {
            frames += 1;
            clock.0.set(frames * 16);
            assert!(s.compute_next_offset());
            let v = s.current_velocity().abs();
            assert!(v <= last_velocity + tolerance, "{v} after {last_velocity}");
            assert!(s.current_offset() >= last_offset);
            last_velocity = v;
            last_offset = s.current_offset();
            assert!(frames < 1000, "fling never finished");
        }
        assert_eq!(s.current_offset(), s.final_offset());
        assert!(s.final_offset() > 0);
    }

    #[test]
    fn fling_resting_point_is_clamped() {
        let (_, mut s) = scroller();
        s.fling(100, 5000.0, 0, 150);
        assert_eq!(s.final_offset(), 150);

        s.fling(100, -5000.0, 0, 150);
        assert_eq!(s.final_offset(), 0);
    }

    #[test]
    fn force_finish_freezes_position() {
        let (clock, mut s) = scroller();
        s.fling(0, 3000.0, 0, i32::MAX);
        clock.0.set(32);
        s.compute_next_offset();
        let held = s.current_offset();
        s.force_finish();
        clock.0.set(64);
        assert!(!s.compute_next_offset());
        assert_eq!(s.current_offset(), held);
        assert_eq!(s.current_velocity(), 0.0);
    }
}
