//! Contracts between the list and the code that supplies its items.
//!
//! An [`Adapter`] knows how many items exist and how to build the view for
//! one of them. The list only ever materializes the handful of indices that
//! cover the viewport and hands back detached instances of a matching view
//! type so the adapter can rebind them instead of allocating new ones.

use crate::viewport::Viewport;

/// Small integer classifying items for recycling compatibility.
pub type ViewType = usize;

/// Size constraint passed to [`ItemInstance::measure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureConstraint {
    /// The item must be exactly this many pixels.
    Exactly(i32),
    /// The item picks its own size.
    Unspecified,
}

impl MeasureConstraint {
    /// Resolves the constraint against the size an item would like to be.
    pub fn resolve(self, desired: i32) -> i32 {
        match self {
            MeasureConstraint::Exactly(size) => size,
            MeasureConstraint::Unspecified => desired,
        }
    }
}

/// A materialized item view owned either by the list window or the pool.
pub trait ItemInstance {
    /// Measures the item. Heights are always constrained to the list's
    /// content height.
    fn measure(&mut self, width: MeasureConstraint, height: MeasureConstraint);

    fn measured_width(&self) -> i32;

    fn measured_height(&self) -> i32;

    /// Shows or clears the pressed highlight.
    fn set_pressed_visual_state(&mut self, pressed: bool) {
        let _ = pressed;
    }

    /// A fixed width requested by the item's layout, if any. Items without one
    /// are measured unconstrained.
    fn preferred_width(&self) -> Option<i32> {
        None
    }
}

/// Supplies item count, view types and item views.
pub trait Adapter {
    type Item: ItemInstance;

    /// Number of items in the logical sequence.
    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// View type of the item at `index`, expected in `0..type_count()`.
    fn view_type(&self, index: usize) -> ViewType {
        let _ = index;
        0
    }

    /// Number of distinct view types this adapter produces.
    fn type_count(&self) -> usize {
        1
    }

    /// Stable id reported to click listeners. Defaults to the index.
    fn item_id(&self, index: usize) -> u64 {
        index as u64
    }

    /// Builds or rebinds the view for `index`.
    ///
    /// `recycled` is a detached instance previously produced for the same
    /// view type, if the pool had one.
    fn materialize(
        &mut self,
        index: usize,
        recycled: Option<Self::Item>,
        container: &Viewport,
    ) -> Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_resolution() {
        assert_eq!(MeasureConstraint::Exactly(40).resolve(90), 40);
        assert_eq!(MeasureConstraint::Unspecified.resolve(90), 90);
    }
}
