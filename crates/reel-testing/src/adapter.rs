//! Adapter and item fixtures that record how the list used them.

use reel_foundation::{Adapter, ItemInstance, MeasureConstraint, ViewType, Viewport};

/// Item ids reported by [`TestAdapter`] are `ID_BASE + index`.
pub const ID_BASE: u64 = 1_000;

/// Height test items ask for when measured unconstrained.
pub const DEFAULT_ITEM_HEIGHT: i32 = 48;

/// An item instance with a unique `serial`, so tests can tell whether the
/// list reused an instance or created a new one.
#[derive(Debug)]
pub struct TestItem {
    pub serial: usize,
    pub view_type: ViewType,
    pub bound_index: usize,
    pub content_width: i32,
    pub fixed_width: Option<i32>,
    measured_width: i32,
    measured_height: i32,
    pressed: bool,
    measure_calls: usize,
}

impl TestItem {
    pub fn new(serial: usize) -> Self {
        Self {
            serial,
            view_type: 0,
            bound_index: 0,
            content_width: 0,
            fixed_width: None,
            measured_width: 0,
            measured_height: 0,
            pressed: false,
            measure_calls: 0,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn measure_calls(&self) -> usize {
        self.measure_calls
    }
}

impl ItemInstance for TestItem {
    fn measure(&mut self, width: MeasureConstraint, height: MeasureConstraint) {
        self.measured_width = width.resolve(self.content_width);
        self.measured_height = height.resolve(DEFAULT_ITEM_HEIGHT);
        self.measure_calls += 1;
    }

    fn measured_width(&self) -> i32 {
        self.measured_width
    }

    fn measured_height(&self) -> i32 {
        self.measured_height
    }

    fn set_pressed_visual_state(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn preferred_width(&self) -> Option<i32> {
        self.fixed_width
    }
}

/// One call to [`Adapter::materialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Materialization {
    pub index: usize,
    pub serial: usize,
    pub reused: bool,
}

/// Adapter over a vector of item widths.
#[derive(Debug, Default)]
pub struct TestAdapter {
    widths: Vec<i32>,
    view_types: Vec<ViewType>,
    type_count: usize,
    fixed_width: bool,
    created: usize,
    log: Vec<Materialization>,
}

impl TestAdapter {
    /// `count` items of `width` pixels, one view type.
    pub fn uniform(count: usize, width: i32) -> Self {
        Self::with_widths(vec![width; count])
    }

    pub fn with_widths(widths: Vec<i32>) -> Self {
        Self {
            widths,
            type_count: 1,
            ..Self::default()
        }
    }

    /// Assigns per-index view types and the declared type count. Indices past
    /// the end of `view_types` use type 0.
    pub fn with_view_types(mut self, view_types: Vec<ViewType>, type_count: usize) -> Self {
        self.view_types = view_types;
        self.type_count = type_count;
        self
    }

    /// Items request their width as a fixed layout width instead of measuring
    /// to content.
    pub fn with_fixed_widths(mut self) -> Self {
        self.fixed_width = true;
        self
    }

    pub fn push(&mut self, width: i32) {
        self.widths.push(width);
    }

    pub fn truncate(&mut self, len: usize) {
        self.widths.truncate(len);
    }

    pub fn set_width(&mut self, index: usize, width: i32) {
        self.widths[index] = width;
    }

    /// Total width of the content when laid out with `divider` between items.
    pub fn content_width(&self, divider: i32) -> i32 {
        let items: i32 = self.widths.iter().sum();
        let gaps = self.widths.len().saturating_sub(1) as i32;
        items + gaps * divider
    }

    /// Number of instances created from scratch.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn materializations(&self) -> &[Materialization] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Adapter for TestAdapter {
    type Item = TestItem;

    fn count(&self) -> usize {
        self.widths.len()
    }

    fn view_type(&self, index: usize) -> ViewType {
        self.view_types.get(index).copied().unwrap_or(0)
    }

    fn type_count(&self) -> usize {
        self.type_count
    }

    fn item_id(&self, index: usize) -> u64 {
        ID_BASE + index as u64
    }

    fn materialize(&mut self, index: usize, recycled: Option<TestItem>, _: &Viewport) -> TestItem {
        let reused = recycled.is_some();
        let mut item = match recycled {
            Some(item) => item,
            None => {
                self.created += 1;
                TestItem::new(self.created)
            }
        };
        item.bound_index = index;
        item.view_type = self.view_type(index);
        item.content_width = self.widths[index];
        item.fixed_width = self.fixed_width.then_some(self.widths[index]);
        item.pressed = false;
        self.log.push(Materialization {
            index,
            serial: item.serial,
            reused,
        });
        item
    }
}
