//! Committed and pending scroll offsets plus the scroll bound.

use crate::geometry::Edge;

/// `current_x` is the offset the window was last laid out at; `next_x` is the
/// offset the next layout pass moves it to.
///
/// `max_x` is unknown until the last adapter item has been laid out once.
/// While unknown, only the left bound is enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    current_x: i32,
    next_x: i32,
    max_x: Option<i32>,
    restore_x: Option<i32>,
}

impl ScrollPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_x(&self) -> i32 {
        self.current_x
    }

    pub fn next_x(&self) -> i32 {
        self.next_x
    }

    pub fn set_next_x(&mut self, x: i32) {
        self.next_x = x;
    }

    /// Moves the pending offset by `distance` pixels.
    pub fn scroll_by(&mut self, distance: i32) {
        self.next_x = self.next_x.saturating_add(distance);
    }

    pub fn max_x(&self) -> Option<i32> {
        self.max_x
    }

    /// Scroll bound with an unknown bound treated as unlimited.
    pub fn max_x_or_unbounded(&self) -> i32 {
        self.max_x.unwrap_or(i32::MAX)
    }

    /// Records a newly determined bound. Returns `true` if it changed.
    pub fn update_max_x(&mut self, max_x: i32) -> bool {
        let changed = self.max_x != Some(max_x);
        self.max_x = Some(max_x);
        changed
    }

    /// Remembers an offset to jump to on the next layout pass.
    pub fn request_restore(&mut self, x: i32) {
        self.restore_x = Some(x);
    }

    /// Applies a pending restore to `next_x`. Returns whether one was pending.
    pub fn apply_restore(&mut self) -> bool {
        match self.restore_x.take() {
            Some(x) => {
                self.next_x = x;
                true
            }
            None => false,
        }
    }

    /// Clamps `next_x` into `[0, max_x]` and reports which bound it hit.
    pub fn clamp_next(&mut self) -> Option<Edge> {
        if self.next_x < 0 {
            self.next_x = 0;
            Some(Edge::Left)
        } else if self.next_x > self.max_x_or_unbounded() {
            self.next_x = self.max_x_or_unbounded();
            Some(Edge::Right)
        } else {
            None
        }
    }

    /// Content movement for this pass: positive when content moves right.
    pub fn pending_dx(&self) -> i32 {
        self.current_x.saturating_sub(self.next_x)
    }

    pub fn commit(&mut self) {
        self.current_x = self.next_x;
    }

    /// Back to offset 0 with an unknown bound. A pending restore survives.
    pub fn reset(&mut self) {
        self.current_x = 0;
        self.next_x = 0;
        self.max_x = None;
    }

    /// Forgets the bound and re-homes at the committed offset, for when item
    /// content changed but the list should stay where it is.
    pub fn rehome(&mut self) {
        let x = self.current_x;
        self.reset();
        self.next_x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_reports_the_edge_it_hit() {
        let mut pos = ScrollPosition::new();
        pos.set_next_x(-40);
        assert_eq!(pos.clamp_next(), Some(Edge::Left));
        assert_eq!(pos.next_x(), 0);

        pos.update_max_x(100);
        pos.set_next_x(130);
        assert_eq!(pos.clamp_next(), Some(Edge::Right));
        assert_eq!(pos.next_x(), 100);
    }

    #[test]
    fn clamp_is_idempotent() {
        let mut pos = ScrollPosition::new();
        pos.update_max_x(500);
        for target in [-1_000, -1, 0, 250, 500, 501, 9_000] {
            pos.set_next_x(target);
            pos.clamp_next();
            let once = pos.next_x();
            assert_eq!(pos.clamp_next(), None);
            assert_eq!(pos.next_x(), once, "second clamp moved {target}");
        }
    }

    #[test]
    fn unknown_bound_only_clamps_left() {
        let mut pos = ScrollPosition::new();
        pos.set_next_x(1_000_000);
        assert_eq!(pos.clamp_next(), None);
        assert_eq!(pos.next_x(), 1_000_000);
    }

    #[test]
    fn rehome_keeps_offset_and_forgets_bound() {
        let mut pos = ScrollPosition::new();
        pos.update_max_x(300);
        pos.set_next_x(120);
        pos.commit();
        pos.rehome();
        assert_eq!(pos.current_x(), 0);
        assert_eq!(pos.next_x(), 120);
        assert_eq!(pos.max_x(), None);
        assert_eq!(pos.pending_dx(), -120);
    }

    #[test]
    fn restore_is_applied_once() {
        let mut pos = ScrollPosition::new();
        pos.request_restore(77);
        assert!(pos.apply_restore());
        assert_eq!(pos.next_x(), 77);
        assert!(!pos.apply_restore());
    }
}
