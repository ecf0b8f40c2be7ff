//! Scroll physics for the reel list: fling deceleration, eased programmatic
//! scrolls, the frame clock they read, and host capability detection.

pub mod capabilities;
pub mod frame_clock;
pub mod interpolator;
pub mod scroller;
pub mod spline;

pub use capabilities::{
    detect_capabilities, AdjustableFriction, BaselineCapabilities, FullCapabilities,
    PhysicsCapabilities, DEFAULT_ABSORB_VELOCITY,
};
pub use frame_clock::{FrameClock, SystemFrameClock};
pub use scroller::{Scroller, DEFAULT_SCROLL_DURATION_MS};
pub use spline::FlingCalculator;

pub mod prelude {
    pub use crate::capabilities::{detect_capabilities, PhysicsCapabilities};
    pub use crate::frame_clock::{FrameClock, SystemFrameClock};
    pub use crate::scroller::Scroller;
}
