//! A horizontally scrolling list that materializes only the items covering
//! its viewport and recycles the rest.
//!
//! ```ignore
//! let mut list = ListWidget::new(ListConfig::default(), Rc::new(SystemFrameClock::new()));
//! list.set_adapter(my_adapter);
//! list.set_viewport(Viewport::new(1080, 240));
//! list.set_on_item_click(|index, id| println!("clicked {index} ({id})"));
//! list.layout();
//! ```

pub mod config;
pub mod fading_edge;
pub mod host;
pub mod list;
pub mod listeners;
pub mod low_data;
pub mod saved_state;
pub mod scroll_driver;
pub mod scroll_state;
pub mod touch;

pub use config::{DividerGraphic, ListConfig, DEFAULT_FLING_FRICTION};
pub use host::{ListHost, NoopHost};
pub use list::{AdapterChange, LayoutReport, ListComponent, ListWidget, MAX_LAYOUT_PASSES};
pub use listeners::ListListeners;
pub use low_data::LowDataMonitor;
pub use saved_state::{RestoreError, SavedListState, StateBundle, CURRENT_X_KEY};
pub use scroll_driver::ScrollDriver;
pub use scroll_state::ScrollState;
pub use touch::{TouchContext, TouchController};

pub use reel_animation::{FrameClock, SystemFrameClock};
pub use reel_foundation::{
    Adapter, Edge, Gesture, Insets, ItemInstance, MeasureConstraint, PointerEvent, Rect, ViewType,
    Viewport,
};
