use reel_ui::ListHost;

/// Host that counts every service request.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub frames_requested: usize,
    pub invalidations: usize,
    pub haptics: usize,
    pub intercept_requests: Vec<bool>,
    /// Whether a scrollable ancestor exists to accept intercept requests.
    pub has_scrollable_ancestor: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scrollable_ancestor() -> Self {
        Self {
            has_scrollable_ancestor: true,
            ..Self::default()
        }
    }
}

impl ListHost for RecordingHost {
    fn schedule_frame(&mut self) {
        self.frames_requested += 1;
    }

    fn request_disallow_intercept(&mut self, disallow: bool) -> bool {
        self.intercept_requests.push(disallow);
        self.has_scrollable_ancestor
    }

    fn perform_haptic_feedback(&mut self) {
        self.haptics += 1;
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}
