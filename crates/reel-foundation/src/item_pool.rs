//! Per-view-type pool of detached item instances.
//!
//! Evicted items wait here until an index of the same view type needs an
//! instance again. Instances are handed out first-in first-out.

use std::collections::VecDeque;

use crate::adapter::ViewType;

/// Reuse counters for a pool and the window that draws from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Items currently materialized in the window.
    pub materialized: usize,
    /// Detached instances waiting in the pool.
    pub pooled: usize,
    /// Adapter materializations since the window was last cleared.
    pub materializations: usize,
    /// Materializations that were handed a pooled instance since the last
    /// clear.
    pub reuses: usize,
}

#[derive(Debug)]
pub struct ItemPool<I> {
    queues: Vec<VecDeque<I>>,
    reuses: usize,
}

impl<I> Default for ItemPool<I> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<I> ItemPool<I> {
    /// Creates a pool that accepts view types `0..type_count`.
    pub fn new(type_count: usize) -> Self {
        let mut queues = Vec::with_capacity(type_count);
        queues.resize_with(type_count, VecDeque::new);
        Self { queues, reuses: 0 }
    }

    /// Drops every pooled instance, zeroes the reuse count and re-sizes for
    /// `type_count` view types.
    pub fn reset(&mut self, type_count: usize) {
        self.queues.clear();
        self.queues.resize_with(type_count, VecDeque::new);
        self.reuses = 0;
    }

    pub fn type_count(&self) -> usize {
        self.queues.len()
    }

    /// Whether instances of `view_type` are cached at all.
    pub fn accepts(&self, view_type: ViewType) -> bool {
        view_type < self.queues.len()
    }

    /// Takes the oldest pooled instance of `view_type`.
    pub fn take(&mut self, view_type: ViewType) -> Option<I> {
        let item = self.queues.get_mut(view_type)?.pop_front();
        if item.is_some() {
            self.reuses += 1;
        }
        item
    }

    /// Stores `item` for later reuse. Instances of a view type outside the
    /// known range are dropped and `false` is returned.
    pub fn recycle(&mut self, view_type: ViewType, item: I) -> bool {
        match self.queues.get_mut(view_type) {
            Some(queue) => {
                queue.push_back(item);
                true
            }
            None => {
                log::debug!(
                    "not pooling item of view type {view_type}: adapter declared {} types",
                    self.queues.len()
                );
                false
            }
        }
    }

    /// Number of pooled instances across all view types.
    pub fn len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Number of successful [`Self::take`] calls.
    pub fn reuses(&self) -> usize {
        self.reuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recycled_instance_comes_back_for_same_type() {
        let mut pool = ItemPool::new(2);
        assert!(pool.recycle(1, "a"));
        assert_eq!(pool.take(0), None);
        assert_eq!(pool.take(1), Some("a"));
        assert_eq!(pool.take(1), None);
        assert_eq!(pool.reuses(), 1);
    }

    #[test]
    fn first_in_first_out_within_a_type() {
        let mut pool = ItemPool::new(1);
        pool.recycle(0, 1);
        pool.recycle(0, 2);
        assert_eq!(pool.take(0), Some(1));
        assert_eq!(pool.take(0), Some(2));
    }

    #[test]
    fn unknown_view_type_is_never_pooled() {
        let mut pool = ItemPool::new(1);
        assert!(!pool.recycle(3, "x"));
        assert!(pool.is_empty());
        assert_eq!(pool.take(3), None);
        assert!(!pool.accepts(3));
    }

    #[test]
    fn reset_drops_instances() {
        let mut pool = ItemPool::new(1);
        pool.recycle(0, "a");
        pool.reset(3);
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.type_count(), 3);
    }

    #[test]
    fn reset_zeroes_reuse_count() {
        let mut pool = ItemPool::new(1);
        pool.recycle(0, "a");
        assert_eq!(pool.take(0), Some("a"));
        assert_eq!(pool.reuses(), 1);
        pool.reset(1);
        assert_eq!(pool.reuses(), 0);
    }
}
