//! The horizontal list component.
//!
//! [`ListWidget`] binds an [`Adapter`] to a [`WindowManager`] and a
//! [`ScrollDriver`]. A host embeds it by forwarding three things:
//!
//! * pointer events, through [`ListWidget::handle_pointer`],
//! * frame callbacks it was asked for via [`ListHost::schedule_frame`],
//!   through [`ListWidget::on_frame`],
//! * adapter data notifications, through [`ListComponent::on_adapter_changed`].
//!
//! All timestamps (pointer event times and the frame clock) must share one
//! time base.

use std::rc::Rc;

use reel_animation::FrameClock;
use reel_foundation::{
    Adapter, Edge, Gesture, GestureDetector, MaterializedItem, OverscrollFeedback, PointerEvent,
    PointerEventKind, PoolStats, Rect, Viewport, WindowManager,
};

use crate::config::{DividerGraphic, ListConfig};
use crate::fading_edge;
use crate::host::{ListHost, NoopHost};
use crate::listeners::ListListeners;
use crate::low_data::LowDataMonitor;
use crate::saved_state::{RestoreError, SavedListState, StateBundle};
use crate::scroll_driver::ScrollDriver;
use crate::scroll_state::ScrollState;
use crate::touch::{TouchContext, TouchController};

/// Layout passes allowed per frame: one, plus one re-run when the pass
/// discovered a new scroll bound.
pub const MAX_LAYOUT_PASSES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterChange {
    /// Item content changed; the list stays at its offset.
    ContentChanged,
    /// The data set is gone; the list resets to offset 0.
    Invalidated,
}

/// Outcome of one [`ListComponent::layout`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Reconciliation passes run, at most [`MAX_LAYOUT_PASSES`].
    pub passes: usize,
    /// Bound the pending offset was clamped against, if any.
    pub clamped: Option<Edge>,
    /// The scroller is still moving and another frame was requested.
    pub motion_continues: bool,
    /// An edge glow is still animating.
    pub glow_animating: bool,
}

/// The surface a host drives a list through.
pub trait ListComponent {
    fn layout(&mut self) -> LayoutReport;

    fn handle_gesture(&mut self, gesture: Gesture);

    fn on_adapter_changed(&mut self, change: AdapterChange);
}

pub struct ListWidget<A: Adapter, H: ListHost = NoopHost> {
    adapter: Option<A>,
    viewport: Viewport,
    config: ListConfig,
    window: WindowManager<A::Item>,
    driver: ScrollDriver,
    touch: TouchController,
    gestures: GestureDetector,
    listeners: ListListeners,
    low_data: LowDataMonitor,
    data_changed: bool,
    selected_index: Option<usize>,
    host: H,
}

impl<A, H> std::fmt::Debug for ListWidget<A, H>
where
    A: Adapter,
    H: ListHost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListWidget")
            .field("viewport", &self.viewport)
            .field("first", &self.window.first_visible_index())
            .field("last", &self.window.last_visible_index())
            .field("driver", &self.driver)
            .field("touch", &self.touch)
            .finish_non_exhaustive()
    }
}

fn edge_glow_enabled<A: Adapter>(adapter: Option<&A>, max_x: Option<i32>) -> bool {
    adapter.is_some_and(|adapter| !adapter.is_empty()) && max_x.map_or(true, |max_x| max_x > 0)
}

impl<A: Adapter> ListWidget<A, NoopHost> {
    pub fn new(config: ListConfig, clock: Rc<dyn FrameClock>) -> Self {
        Self::with_host(config, clock, NoopHost)
    }
}

impl<A: Adapter, H: ListHost> ListWidget<A, H> {
    pub fn with_host(config: ListConfig, clock: Rc<dyn FrameClock>, host: H) -> Self {
        let driver = ScrollDriver::new(&config, clock);
        Self {
            adapter: None,
            viewport: Viewport::default(),
            window: WindowManager::new(1, config.resolved_divider_width()),
            driver,
            touch: TouchController::new(),
            gestures: GestureDetector::new(config.gestures),
            listeners: ListListeners::default(),
            low_data: LowDataMonitor::new(config.low_data_threshold),
            data_changed: false,
            selected_index: None,
            host,
            config,
        }
    }

    /// Binds `adapter`, dropping every item and pooled instance of the
    /// previous one, and resets to offset 0.
    pub fn set_adapter(&mut self, adapter: A) {
        self.touch.unpress(&mut self.window);
        self.window.clear(adapter.type_count());
        self.adapter = Some(adapter);
        self.low_data.reset();
        self.data_changed = false;
        self.driver.reset(&mut self.listeners);
        self.host.schedule_frame();
    }

    /// Unbinds and returns the adapter. The list becomes inert.
    pub fn take_adapter(&mut self) -> Option<A> {
        self.touch.unpress(&mut self.window);
        self.window.clear(1);
        self.driver.reset(&mut self.listeners);
        self.adapter.take()
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    /// Mutable access for changing data; follow up with a
    /// [`ListComponent::on_adapter_changed`] notification.
    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.host.schedule_frame();
        }
    }

    /// Sets the divider graphic; the divider width follows its intrinsic width.
    pub fn set_divider(&mut self, divider: Option<DividerGraphic>) {
        self.config.divider = divider;
        self.config.divider_width = None;
        self.apply_divider_width();
    }

    pub fn set_divider_width(&mut self, width: i32) {
        self.config.divider_width = Some(width);
        self.apply_divider_width();
    }

    pub fn divider_width(&self) -> i32 {
        self.window.divider_width()
    }

    fn apply_divider_width(&mut self) {
        self.window
            .set_divider_width(self.config.resolved_divider_width());
        self.host.invalidate();
        self.host.schedule_frame();
    }

    pub fn listeners_mut(&mut self) -> &mut ListListeners {
        &mut self.listeners
    }

    pub fn set_on_item_click(&mut self, listener: impl FnMut(usize, u64) + 'static) {
        self.listeners.set_item_click(Some(Box::new(listener)));
    }

    pub fn set_on_item_long_click(&mut self, listener: impl FnMut(usize, u64) -> bool + 'static) {
        self.listeners.set_item_long_click(Some(Box::new(listener)));
    }

    pub fn set_on_scroll_state_changed(&mut self, listener: impl FnMut(ScrollState) + 'static) {
        self.listeners.set_scroll_state(Some(Box::new(listener)));
    }

    /// Installs the running-low listener, fired once per data generation when
    /// fewer than `threshold` items remain past the last materialized one.
    pub fn set_on_running_low(&mut self, threshold: usize, listener: impl FnMut() + 'static) {
        self.config.low_data_threshold = threshold;
        self.low_data.set_threshold(threshold);
        self.listeners.set_running_low(Some(Box::new(listener)));
    }

    /// Plain click: a tap that does not land on an item, or lands on one
    /// while no item-click listener is installed.
    pub fn set_on_click(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.set_click(Some(Box::new(listener)));
    }

    /// Animates to offset `x`.
    pub fn scroll_to(&mut self, x: i32) {
        self.driver.scroll_to(x, &mut self.listeners);
        self.host.schedule_frame();
    }

    pub fn current_x(&self) -> i32 {
        self.driver.position().current_x()
    }

    /// Scroll bound, once the last item has been laid out.
    pub fn max_x(&self) -> Option<i32> {
        self.driver.position().max_x()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.driver.state()
    }

    pub fn driver(&self) -> &ScrollDriver {
        &self.driver
    }

    pub fn touch(&self) -> &TouchController {
        &self.touch
    }

    pub fn first_visible_index(&self) -> Option<usize> {
        self.window.first_visible_index()
    }

    pub fn last_visible_index(&self) -> Option<usize> {
        self.window.last_visible_index()
    }

    pub fn window(&self) -> &WindowManager<A::Item> {
        &self.window
    }

    pub fn items(&self) -> impl DoubleEndedIterator<Item = &MaterializedItem<A::Item>> + '_ {
        self.window.items()
    }

    pub fn item_at(&self, x: i32, y: i32) -> Option<usize> {
        self.window.hit_test(x, y)
    }

    pub fn stats(&self) -> PoolStats {
        self.window.stats()
    }

    pub fn set_selection(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// The selected item's instance, if it is currently materialized.
    pub fn selected_item(&self) -> Option<&A::Item> {
        self.window
            .get(self.selected_index?)
            .map(MaterializedItem::instance)
    }

    pub fn divider_rects(&self) -> Vec<Rect> {
        let count = self.adapter.as_ref().map_or(0, Adapter::count);
        self.window.divider_rects(count, &self.viewport)
    }

    pub fn is_edge_glow_enabled(&self) -> bool {
        edge_glow_enabled(self.adapter.as_ref(), self.max_x())
    }

    /// Edge glows to draw, or `None` while they are suppressed.
    pub fn edge_glows(&self) -> Option<&OverscrollFeedback> {
        self.is_edge_glow_enabled()
            .then(|| self.driver.overscroll())
    }

    pub fn left_fading_edge_strength(&self) -> f32 {
        fading_edge::left_strength(self.current_x(), self.config.fading_edge_length)
    }

    pub fn right_fading_edge_strength(&self) -> f32 {
        fading_edge::right_strength(self.current_x(), self.max_x(), self.config.fading_edge_length)
    }

    pub fn saved_state(&self) -> SavedListState {
        SavedListState {
            current_x: self.current_x(),
        }
    }

    pub fn save_state(&self, bundle: &mut StateBundle) {
        self.saved_state().write_to(bundle);
    }

    /// Jumps to the saved offset on the next layout pass.
    pub fn restore(&mut self, state: SavedListState) {
        self.driver
            .position_mut()
            .request_restore(state.current_x);
        self.host.schedule_frame();
    }

    pub fn restore_state(&mut self, bundle: &StateBundle) -> Result<(), RestoreError> {
        let state = SavedListState::read_from(bundle)?;
        self.restore(state);
        Ok(())
    }

    /// Feeds one raw pointer event through gesture recognition.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        for gesture in self.gestures.on_event(event) {
            self.handle_gesture(gesture);
        }
        if event.kind == PointerEventKind::Down {
            // Frames drive long-press detection while the pointer is down.
            self.host.schedule_frame();
        }
        true
    }

    /// Frame callback: fires a pending long press, then lays out.
    pub fn on_frame(&mut self) -> LayoutReport {
        if let Some(gesture) = self.gestures.on_frame(self.driver.now_ms()) {
            self.handle_gesture(gesture);
        }
        self.layout()
    }

    pub fn notify_content_changed(&mut self) {
        self.on_adapter_changed(AdapterChange::ContentChanged);
    }

    pub fn notify_invalidated(&mut self) {
        self.on_adapter_changed(AdapterChange::Invalidated);
    }
}

impl<A: Adapter, H: ListHost> ListComponent for ListWidget<A, H> {
    fn layout(&mut self) -> LayoutReport {
        let Some(adapter) = self.adapter.as_mut() else {
            return LayoutReport::default();
        };
        self.host.invalidate();

        if std::mem::take(&mut self.data_changed) {
            log::debug!("data changed; re-homing at {}", self.driver.position().current_x());
            self.window.recycle_all();
            self.driver.rehome(&mut self.listeners);
        }
        self.driver.position_mut().apply_restore();

        let count = adapter.count();
        let mut report = LayoutReport::default();
        loop {
            report.passes += 1;
            let glow_enabled = edge_glow_enabled(Some(&*adapter), self.driver.position().max_x());
            if let Some(edge) = self.driver.advance(glow_enabled, &mut self.listeners) {
                report.clamped = Some(edge);
            }

            let dx = self.driver.position().pending_dx();
            let reconciled = self.window.reconcile(&mut *adapter, &self.viewport, dx);
            self.driver.position_mut().commit();

            if reconciled.appended > 0
                && self.listeners.has_running_low()
                && self.low_data.check(count, self.window.reached_count())
            {
                self.listeners.running_low();
            }

            let current_x = self.driver.position().current_x();
            let Some(max_x) = self.window.determine_max_x(count, &self.viewport, current_x) else {
                break;
            };
            if !self.driver.position_mut().update_max_x(max_x) {
                break;
            }
            log::debug!("scroll bound determined: {max_x}");
            if report.passes >= MAX_LAYOUT_PASSES {
                log::warn!("scroll bound still changing after {} layout passes", report.passes);
                break;
            }
        }

        report.motion_continues = self.driver.finish_frame(&mut self.listeners);
        let now = self.driver.now_ms();
        let glow_enabled = edge_glow_enabled(Some(&*adapter), self.driver.position().max_x());
        report.glow_animating = self.driver.overscroll_mut().update(now) && glow_enabled;
        if report.motion_continues || report.glow_animating || self.gestures.is_pressed() {
            self.host.schedule_frame();
        }
        report
    }

    fn handle_gesture(&mut self, gesture: Gesture) {
        let glow_enabled = edge_glow_enabled(self.adapter.as_ref(), self.driver.position().max_x());
        let mut cx = TouchContext {
            adapter: self.adapter.as_ref(),
            window: &mut self.window,
            driver: &mut self.driver,
            listeners: &mut self.listeners,
            host: &mut self.host,
            viewport: self.viewport,
            glow_enabled,
        };
        match gesture {
            Gesture::Down(at) => self.touch.on_down(at, &mut cx),
            Gesture::Scroll { distance_x, .. } => self.touch.on_scroll(distance_x, &mut cx),
            Gesture::Fling { velocity_x, .. } => self.touch.on_fling(velocity_x, &mut cx),
            Gesture::SingleTapConfirmed(at) => {
                self.touch.on_single_tap(at, &mut cx);
            }
            Gesture::LongPress(at) => self.touch.on_long_press(at, &mut cx),
            Gesture::Up => self.touch.on_up(&mut cx),
            Gesture::Cancel => self.touch.on_cancel(&mut cx),
        }
    }

    fn on_adapter_changed(&mut self, change: AdapterChange) {
        self.low_data.reset();
        self.touch.unpress(&mut self.window);
        match change {
            AdapterChange::ContentChanged => {
                self.data_changed = true;
            }
            AdapterChange::Invalidated => {
                log::debug!("data invalidated; resetting list");
                let type_count = self.adapter.as_ref().map_or(1, Adapter::type_count);
                self.window.clear(type_count);
                self.driver.reset(&mut self.listeners);
                self.data_changed = false;
            }
        }
        self.host.invalidate();
        self.host.schedule_frame();
    }
}
