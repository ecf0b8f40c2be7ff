//! Services the list asks of the UI toolkit embedding it.

/// Host-side services. Every method has a no-op default so a host only
/// implements what it can provide.
pub trait ListHost {
    /// Requests a call to the list's frame callback on the next frame.
    fn schedule_frame(&mut self) {}

    /// Asks scrollable ancestors to stop (or resume) intercepting touch.
    /// Returns `true` if an ancestor took the request.
    fn request_disallow_intercept(&mut self, disallow: bool) -> bool {
        let _ = disallow;
        false
    }

    /// Plays long-press haptic feedback.
    fn perform_haptic_feedback(&mut self) {}

    /// Marks the list's drawing as stale.
    fn invalidate(&mut self) {}
}

/// Host that ignores every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl ListHost for NoopHost {}
