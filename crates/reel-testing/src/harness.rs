//! Drives a [`ListWidget`] the way a host would: pointer events stamped with
//! a manual clock, followed by frame callbacks.

use std::rc::Rc;

use reel_foundation::{PointerEvent, Viewport};
use reel_ui::{LayoutReport, ListComponent, ListConfig, ListWidget};

use crate::adapter::TestAdapter;
use crate::clock::ManualFrameClock;
use crate::host::RecordingHost;
use crate::recorder::EventRecorder;

/// Time between frames.
pub const FRAME_MS: i64 = 16;

/// Frames [`ListHarness::settle`] runs before giving up.
const MAX_SETTLE_FRAMES: usize = 5_000;

pub type TestList = ListWidget<TestAdapter, RecordingHost>;

pub struct ListHarness {
    pub clock: Rc<ManualFrameClock>,
    pub list: TestList,
    pub events: EventRecorder,
    /// Vertical coordinate of every pointer event.
    pub touch_y: f32,
    pointer_x: f32,
}

impl ListHarness {
    pub fn new(adapter: TestAdapter, viewport: Viewport) -> Self {
        Self::with_config(adapter, viewport, ListConfig::default())
    }

    pub fn with_config(adapter: TestAdapter, viewport: Viewport, config: ListConfig) -> Self {
        Self::with_host(adapter, viewport, config, RecordingHost::new())
    }

    /// Builds the list, installs an [`EventRecorder`] and runs the first
    /// layout.
    pub fn with_host(
        adapter: TestAdapter,
        viewport: Viewport,
        config: ListConfig,
        host: RecordingHost,
    ) -> Self {
        let clock = ManualFrameClock::new();
        let mut list: TestList = ListWidget::with_host(config, clock.clone(), host);
        let events = EventRecorder::new();
        events.install(&mut list);
        list.set_adapter(adapter);
        list.set_viewport(viewport);
        list.layout();
        Self {
            clock,
            list,
            events,
            touch_y: viewport.height as f32 / 2.0,
            pointer_x: 0.0,
        }
    }

    pub fn adapter_mut(&mut self) -> &mut TestAdapter {
        self.list
            .adapter_mut()
            .expect("harness list always has an adapter")
    }

    /// Advances one frame and runs the frame callback.
    pub fn frame(&mut self) -> LayoutReport {
        self.clock.advance(FRAME_MS);
        self.list.on_frame()
    }

    /// Runs frames until neither motion nor a glow animation continues.
    /// Returns the number of frames run.
    pub fn settle(&mut self) -> usize {
        for frames in 1..=MAX_SETTLE_FRAMES {
            let report = self.frame();
            if !report.motion_continues && !report.glow_animating {
                return frames;
            }
        }
        panic!("list still moving after {MAX_SETTLE_FRAMES} frames");
    }

    pub fn press(&mut self, x: f32) {
        self.pointer_x = x;
        let event = PointerEvent::down(x, self.touch_y, self.clock.now());
        self.list.handle_pointer(&event);
    }

    /// Moves the pointer one frame later and lays out.
    pub fn move_to(&mut self, x: f32) {
        self.pointer_x = x;
        let now = self.clock.advance(FRAME_MS);
        self.list
            .handle_pointer(&PointerEvent::moved(x, self.touch_y, now));
        self.list.on_frame();
    }

    /// Lifts the pointer where it is, at the current time, and lays out.
    pub fn release(&mut self) {
        let event = PointerEvent::up(self.pointer_x, self.touch_y, self.clock.now());
        self.list.handle_pointer(&event);
        self.list.on_frame();
    }

    pub fn cancel(&mut self) {
        self.list
            .handle_pointer(&PointerEvent::cancel(self.clock.now()));
        self.list.on_frame();
    }

    /// Holds the pointer still for `ms` without delivering frames.
    pub fn pause(&mut self, ms: i64) {
        self.clock.advance(ms);
    }

    /// Drags from `from` to `to` in `steps` moves, then holds still before
    /// lifting so the release does not fling.
    pub fn drag(&mut self, from: f32, to: f32, steps: usize) {
        self.press(from);
        self.move_in_steps(from, to, steps);
        self.pause(100);
        self.release();
    }

    /// Swipes from `from` to `to` in four quick moves and releases while
    /// still moving.
    pub fn fling(&mut self, from: f32, to: f32) {
        self.press(from);
        self.move_in_steps(from, to, 4);
        self.release();
    }

    pub fn tap(&mut self, x: f32) {
        self.press(x);
        self.pause(50);
        self.release();
    }

    /// Holds past the long-press timeout, delivering a frame, then releases.
    pub fn long_press(&mut self, x: f32) {
        self.press(x);
        let timeout = self.list.config().gestures.long_press_timeout_ms;
        self.pause(timeout + FRAME_MS);
        self.list.on_frame();
        self.release();
    }

    fn move_in_steps(&mut self, from: f32, to: f32, steps: usize) {
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from + (to - from) * step as f32 / steps as f32;
            self.move_to(x);
        }
    }

    /// Adapter indices currently materialized, left to right.
    pub fn indices(&self) -> Vec<usize> {
        self.list.items().map(|item| item.index()).collect()
    }

    /// Left edges of the materialized items, left to right.
    pub fn lefts(&self) -> Vec<i32> {
        self.list.items().map(|item| item.bounds().left).collect()
    }
}
