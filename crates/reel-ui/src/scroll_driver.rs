//! Scroll position, physics and edge feedback for one list.
//!
//! The driver owns everything that decides *where* the list is: the committed
//! and pending offsets, the scroller animating flings and `scroll_to`, the
//! edge glows, and the interaction state reported to listeners.

use std::rc::Rc;

use reel_animation::{detect_capabilities, FrameClock, PhysicsCapabilities, Scroller};
use reel_foundation::{Edge, OverscrollFeedback, ScrollPosition};

use crate::config::ListConfig;
use crate::listeners::ListListeners;
use crate::scroll_state::ScrollState;

pub struct ScrollDriver {
    position: ScrollPosition,
    scroller: Scroller,
    capabilities: Box<dyn PhysicsCapabilities>,
    overscroll: OverscrollFeedback,
    state: ScrollState,
    clock: Rc<dyn FrameClock>,
}

impl std::fmt::Debug for ScrollDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollDriver")
            .field("position", &self.position)
            .field("scroller", &self.scroller)
            .field("capabilities", &self.capabilities.name())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ScrollDriver {
    pub fn new(config: &ListConfig, clock: Rc<dyn FrameClock>) -> Self {
        let capabilities = detect_capabilities(config.platform_level);
        let mut scroller = Scroller::new(clock.clone(), config.density);
        capabilities.apply_friction(&mut scroller, config.friction);
        log::debug!("scroll physics: {} capabilities", capabilities.name());
        Self {
            position: ScrollPosition::new(),
            scroller,
            capabilities,
            overscroll: OverscrollFeedback::new(),
            state: ScrollState::Idle,
            clock,
        }
    }

    pub fn position(&self) -> &ScrollPosition {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut ScrollPosition {
        &mut self.position
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    pub fn overscroll(&self) -> &OverscrollFeedback {
        &self.overscroll
    }

    pub fn overscroll_mut(&mut self) -> &mut OverscrollFeedback {
        &mut self.overscroll
    }

    pub fn capabilities(&self) -> &dyn PhysicsCapabilities {
        self.capabilities.as_ref()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Whether the scroller is animating a fling or `scroll_to`.
    pub fn is_moving(&self) -> bool {
        !self.scroller.is_finished()
    }

    /// Changes the interaction state, notifying listeners only on a change.
    pub fn set_state(&mut self, state: ScrollState, listeners: &mut ListListeners) {
        if self.state != state {
            log::debug!("scroll state {:?} -> {:?}", self.state, state);
            listeners.scroll_state_changed(state);
        }
        self.state = state;
    }

    /// Stops any motion. Returns whether something was moving.
    pub fn stop(&mut self) -> bool {
        let was_moving = self.is_moving();
        self.scroller.force_finish();
        was_moving
    }

    /// Starts a fling from the pending offset. `velocity_x` is the pointer
    /// velocity, so a rightward swipe scrolls toward offset 0.
    pub fn fling(&mut self, velocity_x: f32, listeners: &mut ListListeners) {
        let max_x = self.position.max_x_or_unbounded();
        self.scroller
            .fling(self.position.next_x(), -velocity_x, 0, max_x);
        self.set_state(ScrollState::Fling, listeners);
    }

    /// Animates from the pending offset to `x`.
    pub fn scroll_to(&mut self, x: i32, listeners: &mut ListListeners) {
        self.scroller.start_scroll(self.position.next_x(), x);
        self.set_state(ScrollState::Fling, listeners);
    }

    /// Pulls the scroller's position into `next_x` and clamps it to the
    /// scroll range. A fling that hits a bound is stopped and its momentum
    /// handed to that edge's glow.
    pub fn advance(&mut self, glow_enabled: bool, listeners: &mut ListListeners) -> Option<Edge> {
        if self.scroller.compute_next_offset() {
            self.position.set_next_x(self.scroller.current_offset());
        }
        let edge = self.position.clamp_next()?;
        if self.state == ScrollState::Fling {
            if glow_enabled {
                let velocity = self.capabilities.absorb_velocity(&self.scroller);
                let now = self.now_ms();
                self.overscroll.absorb_at(edge, velocity, now);
            }
            self.scroller.force_finish();
            self.set_state(ScrollState::Idle, listeners);
        }
        Some(edge)
    }

    /// Ends a frame. Returns `true` if motion continues on the next frame;
    /// a fling that just finished settles to idle.
    pub fn finish_frame(&mut self, listeners: &mut ListListeners) -> bool {
        if self.is_moving() {
            return true;
        }
        if self.state == ScrollState::Fling {
            self.set_state(ScrollState::Idle, listeners);
        }
        false
    }

    /// Keeps the committed offset as the target but forgets the bound.
    pub fn rehome(&mut self, listeners: &mut ListListeners) {
        self.position.rehome();
        self.set_state(ScrollState::Idle, listeners);
    }

    /// Back to offset 0, at rest, without glows.
    pub fn reset(&mut self, listeners: &mut ListListeners) {
        self.scroller.force_finish();
        self.position.reset();
        self.overscroll.reset();
        self.set_state(ScrollState::Idle, listeners);
    }
}
