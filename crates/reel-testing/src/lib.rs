//! Test fixtures for Reel lists: a recording adapter, a manual frame clock,
//! a recording host and a harness that plays pointer gestures into a list.

pub mod adapter;
pub mod assertions;
pub mod clock;
pub mod harness;
pub mod host;
pub mod recorder;

pub use adapter::{Materialization, TestAdapter, TestItem, DEFAULT_ITEM_HEIGHT, ID_BASE};
pub use assertions::{
    assert_approx_eq, assert_layout_consistent, assert_window_contiguous,
    assert_window_covers_only_viewport,
};
pub use clock::ManualFrameClock;
pub use harness::{ListHarness, TestList, FRAME_MS};
pub use host::RecordingHost;
pub use recorder::{EventRecorder, ListEvent};

pub mod prelude {
    pub use crate::adapter::{TestAdapter, TestItem, ID_BASE};
    pub use crate::assertions::*;
    pub use crate::clock::ManualFrameClock;
    pub use crate::harness::{ListHarness, FRAME_MS};
    pub use crate::host::RecordingHost;
    pub use crate::recorder::{EventRecorder, ListEvent};
    pub use reel_ui::{
        AdapterChange, Edge, Insets, ListComponent, ListConfig, ScrollState, Viewport,
        MAX_LAYOUT_PASSES,
    };
}
