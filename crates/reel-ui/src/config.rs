//! List configuration.

use reel_foundation::gesture::GestureConfig;

/// Friction applied to flings where the host allows it. Lower than the
/// platform default so flings glide further.
pub const DEFAULT_FLING_FRICTION: f32 = 0.009;

/// Describes the graphic drawn between items. The list only needs its width;
/// painting it is left to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DividerGraphic {
    pub intrinsic_width: i32,
}

impl DividerGraphic {
    pub const fn new(intrinsic_width: i32) -> Self {
        Self { intrinsic_width }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListConfig {
    pub divider: Option<DividerGraphic>,
    /// Overrides the divider graphic's width when set to a non-zero value.
    pub divider_width: Option<i32>,
    /// Remaining-item count below which the running-low listener fires.
    pub low_data_threshold: usize,
    pub friction: f32,
    /// Screen density relative to 160 dpi.
    pub density: f32,
    /// Host platform level, used to pick physics capabilities. `None` means
    /// a host with every capability.
    pub platform_level: Option<u32>,
    /// Length in pixels over which the fading edges ramp up.
    pub fading_edge_length: i32,
    pub gestures: GestureConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            divider: None,
            divider_width: None,
            low_data_threshold: 0,
            friction: DEFAULT_FLING_FRICTION,
            density: 1.0,
            platform_level: None,
            fading_edge_length: 0,
            gestures: GestureConfig::default(),
        }
    }
}

impl ListConfig {
    pub fn with_divider_width(mut self, width: i32) -> Self {
        self.divider_width = Some(width);
        self
    }

    pub fn with_divider(mut self, divider: DividerGraphic) -> Self {
        self.divider = Some(divider);
        self
    }

    pub fn with_low_data_threshold(mut self, threshold: usize) -> Self {
        self.low_data_threshold = threshold;
        self
    }

    pub fn with_platform_level(mut self, level: u32) -> Self {
        self.platform_level = Some(level);
        self
    }

    pub fn with_fading_edge_length(mut self, length: i32) -> Self {
        self.fading_edge_length = length;
        self
    }

    /// Explicit non-zero width, else the divider graphic's width, else 0.
    pub fn resolved_divider_width(&self) -> i32 {
        match (self.divider_width, self.divider) {
            (Some(width), _) if width != 0 => width.max(0),
            (_, Some(divider)) => divider.intrinsic_width.max(0),
            _ => 0,
        }
    }
}
