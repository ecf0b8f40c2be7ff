//! Listener recording.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reel_foundation::Adapter;
use reel_ui::{ListHost, ListWidget, ScrollState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEvent {
    ItemClick { index: usize, id: u64 },
    ItemLongClick { index: usize, id: u64 },
    ScrollState(ScrollState),
    RunningLow,
    Click,
}

/// Collects every listener callback of a list in order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<ListEvent>>>,
    long_click_handled: Rc<Cell<bool>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        let recorder = Self::default();
        recorder.long_click_handled.set(true);
        recorder
    }

    /// Installs click, long-click, scroll-state and plain-click listeners.
    pub fn install<A: Adapter, H: ListHost>(&self, list: &mut ListWidget<A, H>) {
        let events = self.events.clone();
        list.set_on_item_click(move |index, id| {
            events.borrow_mut().push(ListEvent::ItemClick { index, id })
        });

        let events = self.events.clone();
        let handled = self.long_click_handled.clone();
        list.set_on_item_long_click(move |index, id| {
            events
                .borrow_mut()
                .push(ListEvent::ItemLongClick { index, id });
            handled.get()
        });

        let events = self.events.clone();
        list.set_on_scroll_state_changed(move |state| {
            events.borrow_mut().push(ListEvent::ScrollState(state))
        });

        let events = self.events.clone();
        list.set_on_click(move || events.borrow_mut().push(ListEvent::Click));
    }

    pub fn install_running_low<A: Adapter, H: ListHost>(
        &self,
        list: &mut ListWidget<A, H>,
        threshold: usize,
    ) {
        let events = self.events.clone();
        list.set_on_running_low(threshold, move || {
            events.borrow_mut().push(ListEvent::RunningLow)
        });
    }

    /// What the long-click listener returns.
    pub fn set_long_click_handled(&self, handled: bool) {
        self.long_click_handled.set(handled);
    }

    pub fn events(&self) -> Vec<ListEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn item_clicks(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListEvent::ItemClick { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn scroll_states(&self) -> Vec<ScrollState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListEvent::ScrollState(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &ListEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| *event == wanted)
            .count()
    }
}
