use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::window::{self, WindowBounds};
use crate::{
    FlowOptions, Frame, ItemRect, Layout, RectCache, ScrollDirection, Viewport, VisibleRange,
    WindowState, projector,
};

/// A headless windowing engine for one list.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with the container geometry (`mount`), raw scroll offsets
///   (`scroll`) and item count changes (`set_total`).
/// - Before producing output, call [`FlowRender::reconcile`], then read the [`Frame`] (spacer
///   height, content height and the range of items to materialize).
///
/// Each list owns its own engine; nothing is shared between instances.
#[derive(Clone, Debug)]
pub struct FlowRender {
    options: FlowOptions,
    cache: RectCache,
    window: WindowState,
    content_height: u64,

    wrap_height: u32,
    offset_top: u64,
    last_scroll_top: i64,
    direction: ScrollDirection,
}

impl FlowRender {
    /// Creates an engine and projects rects for every item.
    pub fn new(options: FlowOptions) -> Self {
        let item_height = Arc::clone(&options.item_height);
        Self::with_heights(options, move |i| item_height(i))
    }

    /// Same as [`Self::new`], but reads declared heights from `item_height` instead of
    /// `options.item_height` for the initial projection.
    pub fn with_heights(options: FlowOptions, item_height: impl FnMut(usize) -> u32) -> Self {
        fdebug!(
            total = options.total,
            remain = options.remain,
            column = options.column,
            height = options.height,
            "FlowRender::new"
        );
        let mut f = Self {
            options,
            cache: RectCache::new(),
            window: WindowState::TOP,
            content_height: 0,
            wrap_height: 0,
            offset_top: 0,
            last_scroll_top: 0,
            direction: ScrollDirection::Forward,
        };
        f.project_from(0, item_height);
        f
    }

    pub fn options(&self) -> &FlowOptions {
        &self.options
    }

    /// Replaces the options, re-projecting only what the change requires.
    ///
    /// - A layout change (uniform height or column count), or a new height callback for a
    ///   variable layout, clears the cache and re-projects every item.
    /// - A `total` change follows [`Self::set_total`].
    /// - A `remain` change only clamps the current window.
    pub fn set_options(&mut self, options: FlowOptions) {
        let item_height = Arc::clone(&options.item_height);
        self.set_options_with(options, move |i| item_height(i));
    }

    /// Same as [`Self::set_options`], but reads declared heights from `item_height`.
    pub fn set_options_with(
        &mut self,
        options: FlowOptions,
        item_height: impl FnMut(usize) -> u32,
    ) {
        let prev_layout = self.options.layout();
        let prev_total = self.options.total;
        let item_height_unchanged = Arc::ptr_eq(&self.options.item_height, &options.item_height);
        let total = options.total;
        self.options = options;
        ftrace!(
            total,
            remain = self.options.remain,
            column = self.options.column,
            height = self.options.height,
            "FlowRender::set_options"
        );

        let layout = self.options.layout();
        if layout != prev_layout || (!layout.is_uniform() && !item_height_unchanged) {
            self.clear();
            self.project_from(0, item_height);
        } else if total != prev_total {
            self.options.total = prev_total;
            self.set_total_with(total, item_height);
        }

        self.window = window::clamp(&self.cache, self.window, self.options.bounds());
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut FlowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn total(&self) -> usize {
        self.options.total
    }

    pub fn remain(&self) -> usize {
        self.options.remain
    }

    pub fn layout(&self) -> Layout {
        self.options.layout()
    }

    pub fn bounds(&self) -> WindowBounds {
        self.options.bounds()
    }

    /// `false` when every item fits in the window and no windowing happens.
    pub fn is_windowing(&self) -> bool {
        self.bounds().is_windowing()
    }

    /// Updates the item count.
    ///
    /// - `0` clears everything.
    /// - Shrinking clears everything and re-projects from index 0.
    /// - Growing projects only the new items; the window is re-derived by the next
    ///   [`Self::reconcile`].
    pub fn set_total(&mut self, total: usize) {
        let item_height = Arc::clone(&self.options.item_height);
        self.set_total_with(total, move |i| item_height(i));
    }

    /// Same as [`Self::set_total`], but reads declared heights from `item_height`.
    pub fn set_total_with(&mut self, total: usize, item_height: impl FnMut(usize) -> u32) {
        let prev = self.options.total;
        if prev == total {
            return;
        }
        self.options.total = total;
        fdebug!(prev, total, "set_total");

        if total == 0 {
            self.clear();
        } else if total < prev {
            self.clear();
            self.project_from(0, item_height);
        } else {
            let offset = cmp::min(prev, self.cache.len());
            self.project_from(offset, item_height);
        }
    }

    /// Drops every rect and resets the window to the top.
    pub fn clear(&mut self) {
        fdebug!(len = self.cache.len(), "clear");
        self.cache.clear();
        self.window = WindowState::TOP;
        self.content_height = 0;
    }

    /// Re-reads declared heights for `[index, total)` and re-projects them.
    ///
    /// Call this after items starting at `index` changed height. Uniform layouts derive rects from
    /// the index alone, so this is a no-op for them.
    pub fn reproject_from(&mut self, index: usize) {
        let item_height = Arc::clone(&self.options.item_height);
        self.reproject_from_with(index, move |i| item_height(i));
    }

    /// Same as [`Self::reproject_from`], but reads declared heights from `item_height`.
    pub fn reproject_from_with(&mut self, index: usize, item_height: impl FnMut(usize) -> u32) {
        if self.options.layout().is_uniform() || index >= self.options.total {
            return;
        }
        let offset = cmp::min(index, self.cache.len());
        ftrace!(index = offset, "reproject_from");
        self.project_from(offset, item_height);
    }

    fn project_from(&mut self, offset: usize, item_height: impl FnMut(usize) -> u32) {
        let layout = self.options.layout();
        let total = self.options.total;
        self.content_height =
            projector::project(&mut self.cache, layout, total, offset, item_height);
    }

    /// Records the container geometry: the list's offset inside its scroll container and the
    /// container's visible height.
    pub fn mount(&mut self, offset_top: u64, wrap_height: u32) {
        self.offset_top = offset_top;
        self.wrap_height = wrap_height;
    }

    pub fn offset_top(&self) -> u64 {
        self.offset_top
    }

    pub fn set_offset_top(&mut self, offset_top: u64) {
        self.offset_top = offset_top;
    }

    pub fn wrap_height(&self) -> u32 {
        self.wrap_height
    }

    pub fn set_wrap_height(&mut self, wrap_height: u32) {
        self.wrap_height = wrap_height;
    }

    pub fn last_scroll_top(&self) -> i64 {
        self.last_scroll_top
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    /// The visible part of the list for the last reported scroll offset, or `None` while the
    /// list's top edge is still inside the viewport.
    pub fn viewport(&self) -> Option<Viewport> {
        window::viewport_at(self.last_scroll_top, self.offset_top, self.wrap_height)
    }

    /// Applies a scroll offset from the UI layer.
    ///
    /// `offset` is the raw scroll offset of the container. When `direction` is `None` it is
    /// inferred from the previous offset. The window moves by at most one item; call
    /// [`Self::reconcile`] before rendering to catch up with larger jumps.
    pub fn scroll(&mut self, offset: i64, direction: Option<ScrollDirection>) {
        let direction = direction.unwrap_or(if offset < self.last_scroll_top {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Forward
        });
        self.direction = direction;
        self.last_scroll_top = offset;

        let bounds = self.options.bounds();
        if !bounds.is_windowing() {
            return;
        }
        let Some(viewport) = self.viewport() else {
            self.window = WindowState::TOP;
            return;
        };
        ftrace!(offset, ?direction, start = self.window.start, "scroll");
        self.window = window::scroll_step(
            &self.cache,
            self.window,
            viewport,
            direction,
            self.options.layout(),
            bounds,
        );
    }

    /// Re-derives the window from the last scroll offset and the current rects.
    ///
    /// Call this before every render: it repairs the window after jumps the incremental scroll
    /// path cannot follow, and after resizes or count changes.
    pub fn reconcile(&mut self) {
        self.window = window::reconcile(
            &self.cache,
            self.window,
            self.viewport(),
            self.options.layout(),
            self.options.bounds(),
        );
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    /// Restores a previously captured window, clamped to the current bounds.
    pub fn restore_window(&mut self, window: WindowState) {
        self.window = window::clamp(&self.cache, window, self.options.bounds());
    }

    pub fn start(&self) -> usize {
        self.window.start
    }

    pub fn padding_top(&self) -> u64 {
        self.window.padding_top
    }

    /// Simulated height of the whole list.
    pub fn content_height(&self) -> u64 {
        self.content_height
    }

    pub fn cache(&self) -> &RectCache {
        &self.cache
    }

    pub fn rect(&self, index: usize) -> Option<ItemRect> {
        self.cache.get(index).copied()
    }

    /// The items to materialize: `[start, min(start + remain, total))`, or every item when
    /// windowing is disabled.
    pub fn visible_range(&self) -> VisibleRange {
        let bounds = self.options.bounds();
        if !bounds.is_windowing() {
            return VisibleRange {
                start_index: 0,
                end_index: bounds.total,
            };
        }
        let start = cmp::min(self.window.start, bounds.max_start());
        VisibleRange {
            start_index: start,
            end_index: bounds.end(start),
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            padding_top: if self.is_windowing() {
                self.window.padding_top
            } else {
                0
            },
            height: self.content_height,
            range: self.visible_range(),
        }
    }

    pub fn for_each_visible_index(&self, f: impl FnMut(usize)) {
        let range = self.visible_range();
        (range.start_index..range.end_index).for_each(f);
    }

    pub fn for_each_visible_rect(&self, mut f: impl FnMut(usize, ItemRect)) {
        let range = self.visible_range();
        for i in range.start_index..range.end_index {
            if let Some(rect) = self.cache.get(i) {
                f(i, *rect);
            }
        }
    }

    /// Collects visible indexes into `out` (clears `out` first).
    pub fn collect_visible_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_visible_index(|i| out.push(i));
    }
}
