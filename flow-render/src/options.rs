use alloc::sync::Arc;

use crate::Layout;
use crate::window::WindowBounds;

/// Declared height of the item at an index, in pixels.
pub type ItemHeightFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Configuration for [`crate::FlowRender`].
///
/// Cheap to clone: the height callback lives in an `Arc`, so adapters can tweak a field and call
/// `FlowRender::set_options` without reallocating closures.
pub struct FlowOptions {
    /// Total number of logical items.
    pub total: usize,
    /// Number of items to keep materialized. When `remain >= total` windowing is disabled and
    /// every item is rendered.
    pub remain: usize,
    /// Number of columns. `0` is treated as `1`.
    pub column: usize,
    /// Uniform item height. `0` means items declare their own heights through `item_height`.
    pub height: u32,
    /// Declared per-item height, consulted only when `height == 0`.
    pub item_height: ItemHeightFn,
}

impl Clone for FlowOptions {
    fn clone(&self) -> Self {
        Self {
            total: self.total,
            remain: self.remain,
            column: self.column,
            height: self.height,
            item_height: Arc::clone(&self.item_height),
        }
    }
}

impl FlowOptions {
    /// Creates options for a single-column list of `total` items, keeping `remain` materialized.
    ///
    /// Until a height is configured, every item is treated as zero pixels tall.
    pub fn new(total: usize, remain: usize) -> Self {
        Self {
            total,
            remain,
            column: 1,
            height: 0,
            item_height: Arc::new(|_| 0),
        }
    }

    /// Creates options for items that all share the same `height`.
    pub fn uniform(total: usize, remain: usize, height: u32) -> Self {
        Self::new(total, remain).with_height(height)
    }

    /// Creates options for items that declare their own heights.
    pub fn variable(
        total: usize,
        remain: usize,
        item_height: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self::new(total, remain).with_item_height(item_height)
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_remain(mut self, remain: usize) -> Self {
        self.remain = remain;
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_item_height(
        mut self,
        item_height: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        self.item_height = Arc::new(item_height);
        self
    }

    pub fn is_same_height(&self) -> bool {
        self.height != 0
    }

    pub fn is_single_column(&self) -> bool {
        self.column <= 1
    }

    /// The projection strategy implied by `height` and `column`.
    pub fn layout(&self) -> Layout {
        let column = self.column.max(1);
        if self.is_same_height() {
            Layout::Uniform {
                height: self.height,
                column,
            }
        } else if column == 1 {
            Layout::Stacked
        } else {
            Layout::Packed { column }
        }
    }

    pub fn bounds(&self) -> WindowBounds {
        WindowBounds::new(self.remain, self.total)
    }
}

impl core::fmt::Debug for FlowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlowOptions")
            .field("total", &self.total)
            .field("remain", &self.remain)
            .field("column", &self.column)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
