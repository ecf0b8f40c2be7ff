//! Maps recognized gestures onto the list.
//!
//! [`TouchController`] keeps the little state that spans a touch sequence:
//! whether the press caught a running fling (which blocks taps until the
//! next press), which item shows the pressed highlight, and whether scrollable
//! ancestors were asked to keep their hands off the touch stream.

use reel_foundation::{Adapter, ItemInstance, Point, Viewport, WindowManager};

use crate::host::ListHost;
use crate::listeners::ListListeners;
use crate::scroll_driver::ScrollDriver;
use crate::scroll_state::ScrollState;

/// The parts of a list a gesture may touch.
pub struct TouchContext<'a, A: Adapter, H: ListHost + ?Sized> {
    pub adapter: Option<&'a A>,
    pub window: &'a mut WindowManager<A::Item>,
    pub driver: &'a mut ScrollDriver,
    pub listeners: &'a mut ListListeners,
    pub host: &'a mut H,
    pub viewport: Viewport,
    /// Whether edge glows may react at all.
    pub glow_enabled: bool,
}

impl<A: Adapter, H: ListHost + ?Sized> TouchContext<'_, A, H> {
    fn item_id(&self, index: usize) -> u64 {
        self.adapter
            .map_or(index as u64, |adapter| adapter.item_id(index))
    }
}

#[derive(Debug, Default)]
pub struct TouchController {
    blocked: bool,
    pressed: Option<usize>,
    disallowing_intercept: bool,
}

impl TouchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current press caught a moving list.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Adapter index of the item showing the pressed highlight.
    pub fn pressed_index(&self) -> Option<usize> {
        self.pressed
    }

    pub fn is_disallowing_intercept(&self) -> bool {
        self.disallowing_intercept
    }

    /// A press stops any motion. A press that caught motion only stops it;
    /// it neither highlights nor clicks anything.
    pub fn on_down<A, H>(&mut self, at: Point, cx: &mut TouchContext<'_, A, H>)
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        self.blocked = cx.driver.stop();
        cx.driver.set_state(ScrollState::Idle, cx.listeners);
        self.unpress(cx.window);
        if self.blocked {
            return;
        }
        let Some(index) = cx.window.hit_test(at.x as i32, at.y as i32) else {
            return;
        };
        if let Some(item) = cx.window.get_mut(index) {
            item.instance_mut().set_pressed_visual_state(true);
            self.pressed = Some(index);
            cx.host.invalidate();
        }
    }

    /// Moves the list by `distance_x` pixels of finger travel (positive when
    /// the finger moved left).
    pub fn on_scroll<A, H>(&mut self, distance_x: f32, cx: &mut TouchContext<'_, A, H>)
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        self.set_intercept_lock(true, cx.host);
        cx.driver.set_state(ScrollState::TouchScroll, cx.listeners);
        self.unpress(cx.window);

        let current_x = cx.driver.position().current_x();
        cx.driver.position_mut().scroll_by(distance_x as i32);
        if cx.glow_enabled && !cx.driver.is_moving() {
            let max_x = cx.driver.position().max_x_or_unbounded();
            let now = cx.driver.now_ms();
            cx.driver.overscroll_mut().on_touch_scroll(
                current_x,
                distance_x.round() as i32,
                max_x,
                cx.viewport.render_width(),
                now,
            );
        }
        cx.host.schedule_frame();
    }

    pub fn on_fling<A, H>(&mut self, velocity_x: f32, cx: &mut TouchContext<'_, A, H>)
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        cx.driver.fling(velocity_x, cx.listeners);
        cx.host.schedule_frame();
    }

    /// Dispatches an item click for the item under `at`, or a plain click when
    /// no item-click listener took it. Returns whether an item click fired.
    pub fn on_single_tap<A, H>(&mut self, at: Point, cx: &mut TouchContext<'_, A, H>) -> bool
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        self.unpress(cx.window);
        if self.blocked {
            return false;
        }
        if let Some(index) = cx.window.hit_test(at.x as i32, at.y as i32) {
            let id = cx.item_id(index);
            if cx.listeners.item_click(index, id) {
                return true;
            }
        }
        cx.listeners.click();
        false
    }

    pub fn on_long_press<A, H>(&mut self, at: Point, cx: &mut TouchContext<'_, A, H>)
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        self.unpress(cx.window);
        if self.blocked {
            return;
        }
        let Some(index) = cx.window.hit_test(at.x as i32, at.y as i32) else {
            return;
        };
        let id = cx.item_id(index);
        if cx.listeners.item_long_click(index, id) == Some(true) {
            cx.host.perform_haptic_feedback();
        }
    }

    /// Pointer released: settle unless a fling took over, let glows recede and
    /// give ancestors the touch stream back.
    pub fn on_up<A, H>(&mut self, cx: &mut TouchContext<'_, A, H>)
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        if !cx.driver.is_moving() {
            cx.driver.set_state(ScrollState::Idle, cx.listeners);
        }
        self.set_intercept_lock(false, cx.host);
        let now = cx.driver.now_ms();
        cx.driver.overscroll_mut().release_all(now);
    }

    pub fn on_cancel<A, H>(&mut self, cx: &mut TouchContext<'_, A, H>)
    where
        A: Adapter,
        H: ListHost + ?Sized,
    {
        self.unpress(cx.window);
        let now = cx.driver.now_ms();
        cx.driver.overscroll_mut().release_all(now);
        self.set_intercept_lock(false, cx.host);
    }

    /// Clears the pressed highlight, if any.
    pub fn unpress<I: ItemInstance>(&mut self, window: &mut WindowManager<I>) {
        let Some(index) = self.pressed.take() else {
            return;
        };
        if let Some(item) = window.get_mut(index) {
            item.instance_mut().set_pressed_visual_state(false);
        }
    }

    fn set_intercept_lock<H: ListHost + ?Sized>(&mut self, disallow: bool, host: &mut H) {
        if self.disallowing_intercept == disallow {
            return;
        }
        if host.request_disallow_intercept(disallow) {
            self.disallowing_intercept = disallow;
        }
    }
}
