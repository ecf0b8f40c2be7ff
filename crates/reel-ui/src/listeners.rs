//! Callbacks the list reports interaction through.

use crate::scroll_state::ScrollState;

pub type ItemClickListener = Box<dyn FnMut(usize, u64)>;
/// Returns whether the long click was handled.
pub type ItemLongClickListener = Box<dyn FnMut(usize, u64) -> bool>;
pub type ScrollStateListener = Box<dyn FnMut(ScrollState)>;
pub type RunningLowListener = Box<dyn FnMut()>;
pub type ClickListener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct ListListeners {
    item_click: Option<ItemClickListener>,
    item_long_click: Option<ItemLongClickListener>,
    scroll_state: Option<ScrollStateListener>,
    running_low: Option<RunningLowListener>,
    click: Option<ClickListener>,
}

impl std::fmt::Debug for ListListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListListeners")
            .field("item_click", &self.item_click.is_some())
            .field("item_long_click", &self.item_long_click.is_some())
            .field("scroll_state", &self.scroll_state.is_some())
            .field("running_low", &self.running_low.is_some())
            .field("click", &self.click.is_some())
            .finish()
    }
}

impl ListListeners {
    pub fn set_item_click(&mut self, listener: Option<ItemClickListener>) {
        self.item_click = listener;
    }

    pub fn set_item_long_click(&mut self, listener: Option<ItemLongClickListener>) {
        self.item_long_click = listener;
    }

    pub fn set_scroll_state(&mut self, listener: Option<ScrollStateListener>) {
        self.scroll_state = listener;
    }

    pub fn set_running_low(&mut self, listener: Option<RunningLowListener>) {
        self.running_low = listener;
    }

    pub fn set_click(&mut self, listener: Option<ClickListener>) {
        self.click = listener;
    }

    pub fn has_running_low(&self) -> bool {
        self.running_low.is_some()
    }

    /// Returns `false` when no item-click listener is installed.
    pub(crate) fn item_click(&mut self, index: usize, id: u64) -> bool {
        match self.item_click.as_mut() {
            Some(listener) => {
                listener(index, id);
                true
            }
            None => false,
        }
    }

    /// `None` when no long-click listener is installed.
    pub(crate) fn item_long_click(&mut self, index: usize, id: u64) -> Option<bool> {
        self.item_long_click
            .as_mut()
            .map(|listener| listener(index, id))
    }

    pub(crate) fn scroll_state_changed(&mut self, state: ScrollState) {
        if let Some(listener) = self.scroll_state.as_mut() {
            listener(state);
        }
    }

    pub(crate) fn running_low(&mut self) {
        if let Some(listener) = self.running_low.as_mut() {
            listener();
        }
    }

    pub(crate) fn click(&mut self) -> bool {
        match self.click.as_mut() {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }
}
