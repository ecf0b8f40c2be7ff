//! Building blocks for a virtualized horizontal list: the item window and its
//! recycling pool, scroll bounds, overscroll feedback and pointer gestures.
//!
//! Nothing here knows about a UI toolkit. The host supplies a [`Viewport`],
//! an [`Adapter`] and raw [`PointerEvent`]s; `reel-ui` ties the pieces
//! together into a list component.

pub mod adapter;
pub mod geometry;
pub mod gesture;
pub mod gesture_constants;
pub mod input;
pub mod item_pool;
pub mod overscroll;
pub mod scroll_position;
pub mod velocity_tracker;
pub mod viewport;
pub mod window;

pub use adapter::{Adapter, ItemInstance, MeasureConstraint, ViewType};
pub use geometry::{Edge, Point, Rect};
pub use gesture::{Gesture, GestureConfig, GestureDetector, Gestures};
pub use input::{PointerEvent, PointerEventKind};
pub use item_pool::{ItemPool, PoolStats};
pub use overscroll::{EdgeGlow, GlowState, OverscrollFeedback};
pub use scroll_position::ScrollPosition;
pub use velocity_tracker::VelocityTracker;
pub use viewport::{Insets, Viewport};
pub use window::{MaterializedItem, ReconcileReport, WindowManager};
