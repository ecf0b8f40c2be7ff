//! Assertions over list layout.

use reel_foundation::{ItemInstance, Viewport, WindowManager};

/// Asserts two floats are within `tolerance` of each other.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual}"
    );
}

/// Asserts the window holds a gap-free ascending run of adapter indices.
pub fn assert_window_contiguous<I: ItemInstance>(window: &WindowManager<I>) {
    let indices: Vec<usize> = window.items().map(|item| item.index()).collect();
    for pair in indices.windows(2) {
        assert_eq!(pair[0] + 1, pair[1], "window not contiguous: {indices:?}");
    }
    assert_eq!(window.first_visible_index(), indices.first().copied());
    assert_eq!(window.last_visible_index(), indices.last().copied());
}

/// Asserts every item sits one width plus one divider after its left
/// neighbour, starting at the display offset.
pub fn assert_layout_consistent<I: ItemInstance>(window: &WindowManager<I>, viewport: &Viewport) {
    let mut left = window.display_offset() + viewport.padding.left;
    for item in window.items() {
        let bounds = item.bounds();
        assert_eq!(bounds.left, left, "item {} misplaced", item.index());
        assert_eq!(bounds.width(), item.width(), "item {} width", item.index());
        assert_eq!(bounds.top, viewport.padding.top, "item {} top", item.index());
        left += item.width() + window.divider_width();
    }
}

/// Asserts every item intersects the viewport's horizontal extent.
pub fn assert_window_covers_only_viewport<I: ItemInstance>(
    window: &WindowManager<I>,
    viewport: &Viewport,
) {
    for item in window.items() {
        let bounds = item.bounds();
        assert!(
            bounds.right > 0 && bounds.left < viewport.width,
            "item {} at {:?} lies outside 0..{}",
            item.index(),
            bounds,
            viewport.width
        );
    }
}
