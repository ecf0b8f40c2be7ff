use std::cell::Cell;
use std::rc::Rc;

use reel_animation::FrameClock;

/// Frame clock stepped by hand.
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    now: Cell<i64>,
}

impl ManualFrameClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> i64 {
        self.now.get()
    }

    pub fn set(&self, now_ms: i64) {
        self.now.set(now_ms);
    }

    /// Moves time forward and returns the new time.
    pub fn advance(&self, ms: i64) -> i64 {
        let now = self.now.get() + ms;
        self.now.set(now);
        now
    }
}

impl FrameClock for ManualFrameClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
