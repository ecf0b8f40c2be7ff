//! Sliding window of materialized items.
//!
//! [`WindowManager`] keeps the contiguous run of adapter indices whose views
//! overlap the viewport. Each layout pass it is given the content movement
//! `dx` since the last pass and:
//!
//! 1. evicts items that scrolled fully past the left edge, then the right edge,
//! 2. materializes items on the right while there is room, then on the left,
//! 3. positions every item from the display offset.
//!
//! Evicted instances go to the [`ItemPool`] and are handed back to the adapter
//! the next time an index of the same view type is materialized.

use std::collections::VecDeque;

use crate::adapter::{Adapter, ItemInstance, MeasureConstraint, ViewType};
use crate::geometry::Rect;
use crate::item_pool::{ItemPool, PoolStats};
use crate::viewport::Viewport;

/// An item currently owned by the window.
#[derive(Debug)]
pub struct MaterializedItem<I> {
    index: usize,
    view_type: ViewType,
    instance: I,
    width: i32,
    bounds: Rect,
}

impl<I> MaterializedItem<I> {
    /// Adapter index this item was materialized for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// View type recorded when the item was materialized.
    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }

    pub fn instance_mut(&mut self) -> &mut I {
        &mut self.instance
    }

    /// Measured width at materialization time.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Placement from the most recent layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// What a single [`WindowManager::reconcile`] call changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub evicted_left: usize,
    pub evicted_right: usize,
    pub appended: usize,
    pub prepended: usize,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug)]
pub struct WindowManager<I> {
    items: VecDeque<MaterializedItem<I>>,
    /// Adapter index of the leftmost item. `None` until the first fill.
    /// When every item has been evicted this still names the index the
    /// window resumes from.
    first_index: Option<usize>,
    display_offset: i32,
    divider_width: i32,
    pool: ItemPool<I>,
    materializations: usize,
}

impl<I: ItemInstance> Default for WindowManager<I> {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl<I: ItemInstance> WindowManager<I> {
    pub fn new(type_count: usize, divider_width: i32) -> Self {
        Self {
            items: VecDeque::new(),
            first_index: None,
            display_offset: 0,
            divider_width: divider_width.max(0),
            pool: ItemPool::new(type_count),
            materializations: 0,
        }
    }

    pub fn divider_width(&self) -> i32 {
        self.divider_width
    }

    pub fn set_divider_width(&mut self, width: i32) {
        self.divider_width = width.max(0);
    }

    pub fn display_offset(&self) -> i32 {
        self.display_offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adapter index of the leftmost materialized item.
    pub fn first_visible_index(&self) -> Option<usize> {
        self.items.front().map(|item| item.index)
    }

    /// Adapter index of the rightmost materialized item.
    pub fn last_visible_index(&self) -> Option<usize> {
        self.items.back().map(|item| item.index)
    }

    /// Adapter index one past the rightmost item, i.e. how many items of the
    /// sequence have been reached so far from the left.
    pub fn reached_count(&self) -> usize {
        self.first_index.map_or(0, |first| first + self.items.len())
    }

    pub fn items(&self) -> impl DoubleEndedIterator<Item = &MaterializedItem<I>> + '_ {
        self.items.iter()
    }

    pub fn items_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut MaterializedItem<I>> + '_ {
        self.items.iter_mut()
    }

    /// The materialized item for adapter `index`, if it is in the window.
    pub fn get(&self, index: usize) -> Option<&MaterializedItem<I>> {
        let slot = index.checked_sub(self.first_visible_index()?)?;
        self.items.get(slot)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MaterializedItem<I>> {
        let slot = index.checked_sub(self.first_visible_index()?)?;
        self.items.get_mut(slot)
    }

    /// Adapter index of the first item whose bounds contain the point.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.items
            .iter()
            .find(|item| item.bounds.contains(x, y))
            .map(|item| item.index)
    }

    pub fn pool(&self) -> &ItemPool<I> {
        &self.pool
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            materialized: self.items.len(),
            pooled: self.pool.len(),
            materializations: self.materializations,
            reuses: self.pool.reuses(),
        }
    }

    /// Moves every materialized item into the pool and empties the window.
    /// The pool keeps its instances.
    pub fn recycle_all(&mut self) {
        while let Some(item) = self.items.pop_front() {
            self.pool.recycle(item.view_type, item.instance);
        }
        self.first_index = None;
        self.display_offset = 0;
    }

    /// Drops the window and the pool, zeroes the reuse counters and sizes the
    /// pool for `type_count` view types.
    pub fn clear(&mut self, type_count: usize) {
        self.items.clear();
        self.pool.reset(type_count);
        self.materializations = 0;
        self.first_index = None;
        self.display_offset = 0;
    }

    /// Brings the window up to date with a content movement of `dx` pixels
    /// (positive when content moves right).
    pub fn reconcile<A>(&mut self, adapter: &mut A, viewport: &Viewport, dx: i32) -> ReconcileReport
    where
        A: Adapter<Item = I> + ?Sized,
    {
        let count = adapter.count();
        if count == 0 {
            return ReconcileReport::default();
        }

        let mut report = ReconcileReport::default();
        self.evict(count, viewport, dx, &mut report);
        self.fill_right(adapter, count, viewport, dx, &mut report);
        self.fill_left(adapter, viewport, dx, &mut report);
        self.position(viewport, dx);
        report
    }

    fn evict(&mut self, count: usize, viewport: &Viewport, dx: i32, report: &mut ReconcileReport) {
        while self.items.front().is_some_and(|item| item.bounds.right + dx <= 0) {
            let Some(item) = self.items.pop_front() else {
                break;
            };
            self.display_offset += if item.index + 1 == count {
                item.width
            } else {
                self.divider_width + item.width
            };
            log::trace!("evict left {}", item.index);
            self.pool.recycle(item.view_type, item.instance);
            self.first_index = Some(item.index + 1);
            report.evicted_left += 1;
        }

        while self
            .items
            .back()
            .is_some_and(|item| item.bounds.left + dx >= viewport.width)
        {
            let Some(item) = self.items.pop_back() else {
                break;
            };
            log::trace!("evict right {}", item.index);
            self.pool.recycle(item.view_type, item.instance);
            report.evicted_right += 1;
        }
    }

    fn fill_right<A>(
        &mut self,
        adapter: &mut A,
        count: usize,
        viewport: &Viewport,
        dx: i32,
        report: &mut ReconcileReport,
    ) where
        A: Adapter<Item = I> + ?Sized,
    {
        let mut right_edge = self.items.back().map_or(0, |item| item.bounds.right);
        while right_edge + dx + self.divider_width < viewport.width {
            let index = self.reached_count();
            if index >= count {
                break;
            }
            if self.first_index.is_none() {
                self.first_index = Some(index);
            }
            let item = self.materialize(adapter, viewport, index);
            right_edge += if index == 0 { 0 } else { self.divider_width } + item.width;
            log::trace!("append {index} ({}px)", item.width);
            self.items.push_back(item);
            report.appended += 1;
        }
    }

    fn fill_left<A>(
        &mut self,
        adapter: &mut A,
        viewport: &Viewport,
        dx: i32,
        report: &mut ReconcileReport,
    ) where
        A: Adapter<Item = I> + ?Sized,
    {
        let mut left_edge = self.items.front().map_or(0, |item| item.bounds.left);
        while left_edge + dx - self.divider_width > 0 {
            let Some(index) = self.first_index.and_then(|first| first.checked_sub(1)) else {
                break;
            };
            self.first_index = Some(index);
            let item = self.materialize(adapter, viewport, index);
            let width = item.width;
            left_edge -= if index == 0 {
                width
            } else {
                self.divider_width + width
            };
            // Only an item landing exactly on the origin skips the divider.
            self.display_offset -= if left_edge + dx == 0 {
                width
            } else {
                self.divider_width + width
            };
            log::trace!("prepend {index} ({width}px)");
            self.items.push_front(item);
            report.prepended += 1;
        }
    }

    fn position(&mut self, viewport: &Viewport, dx: i32) {
        if self.items.is_empty() {
            return;
        }
        self.display_offset += dx;
        let mut left_offset = self.display_offset;
        let top = viewport.padding.top;
        for item in &mut self.items {
            let left = left_offset + viewport.padding.left;
            let height = item.instance.measured_height();
            item.bounds = Rect::new(left, top, left + item.width, top + height);
            left_offset += item.width + self.divider_width;
        }
    }

    fn materialize<A>(&mut self, adapter: &mut A, viewport: &Viewport, index: usize) -> MaterializedItem<I>
    where
        A: Adapter<Item = I> + ?Sized,
    {
        let view_type = adapter.view_type(index);
        let recycled = self.pool.take(view_type);
        let mut instance = adapter.materialize(index, recycled, viewport);

        let width_constraint = match instance.preferred_width() {
            Some(width) if width > 0 => MeasureConstraint::Exactly(width),
            _ => MeasureConstraint::Unspecified,
        };
        instance.measure(
            width_constraint,
            MeasureConstraint::Exactly(viewport.render_height().max(0)),
        );
        let mut width = instance.measured_width();
        if width < 0 {
            log::warn!("item {index} measured to negative width {width}; laying out as 0");
            width = 0;
        }
        self.materializations += 1;

        MaterializedItem {
            index,
            view_type,
            instance,
            width,
            bounds: Rect::default(),
        }
    }

    /// Scroll bound implied by the current layout, once the last adapter item
    /// is the rightmost materialized one.
    pub fn determine_max_x(&self, count: usize, viewport: &Viewport, current_x: i32) -> Option<i32> {
        let last = self.items.back()?;
        if last.index + 1 != count {
            return None;
        }
        let max_x = current_x + (last.bounds.right - viewport.padding.left) - viewport.render_width();
        Some(max_x.max(0))
    }

    /// Rectangles between adjacent items, clipped to the padded viewport.
    /// Dividers clipped away entirely are left out.
    ///
    /// No divider follows the last adapter item. When the first item starts
    /// right of the left padding edge the gap before it is filled too.
    pub fn divider_rects(&self, count: usize, viewport: &Viewport) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.items.len() + 1);
        if self.divider_width == 0 {
            return rects;
        }
        let top = viewport.padding.top;
        let bottom = top + viewport.render_height();
        let min_left = viewport.padding.left;
        let max_right = viewport.width - viewport.padding.right;

        for (slot, item) in self.items.iter().enumerate() {
            if item.index + 1 == count {
                continue;
            }
            let left = item.bounds.right.max(min_left);
            let right = (item.bounds.right + self.divider_width).min(max_right);
            if left < right {
                rects.push(Rect::new(left, top, right, bottom));
            }
            if slot == 0 && item.bounds.left > min_left {
                rects.push(Rect::new(min_left, top, item.bounds.left, bottom));
            }
        }
        rects
    }
}
