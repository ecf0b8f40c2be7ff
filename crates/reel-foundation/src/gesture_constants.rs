//! Default gesture thresholds, in logical pixels and milliseconds.
//!
//! Values follow common touch platform conventions at baseline density.

/// Movement from the press position before a drag becomes a scroll. Taps are
/// no longer possible once it is exceeded.
pub const TOUCH_SLOP: f32 = 8.0;

/// Release speed (px/s) below which a drag ends without a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Fling speeds (px/s) are clamped to this.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Hold time before a stationary press becomes a long press.
pub const LONG_PRESS_TIMEOUT_MS: i64 = 500;
