use alloc::vec::Vec;

use flow_render::{FlowOptions, FlowRender, Frame, ScrollDirection, VisibleRange};

use crate::{DeclaredHeight, ItemProvider};

/// What an adapter draws for one render pass: a spacer, the materialized slice and the height
/// of the simulated list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOutput<T> {
    /// Height of the leading spacer in pixels.
    pub padding_top: u64,
    /// Height of the whole simulated list in pixels.
    pub height: u64,
    /// Index range of `items` inside the full list.
    pub range: VisibleRange,
    pub items: Vec<T>,
}

/// A framework-neutral controller that wraps a [`FlowRender`] together with the list's items.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` once the container is laid out, and `on_resize` when its height changes
/// - `on_scroll` for every scroll event
/// - `set_items` / `set_getter` / `resize_item` when the data changes
/// - `render` before drawing
///
/// Heights of variable-height items are read from the items themselves through
/// [`DeclaredHeight`]; `FlowOptions::item_height` is not consulted.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    flow: FlowRender,
    provider: ItemProvider<T>,
}

impl<T: DeclaredHeight + Clone> Controller<T> {
    /// Creates a controller; `options.total` is replaced by the provider's length.
    pub fn new(options: FlowOptions, provider: ItemProvider<T>) -> Self {
        let options = options.with_total(provider.len());
        let flow = FlowRender::with_heights(options, |i| provider.declared_height(i));
        Self { flow, provider }
    }

    pub fn from_items(options: FlowOptions, items: Vec<T>) -> Self {
        Self::new(options, ItemProvider::Items(items))
    }

    pub fn flow(&self) -> &FlowRender {
        &self.flow
    }

    pub fn provider(&self) -> &ItemProvider<T> {
        &self.provider
    }

    pub fn into_parts(self) -> (FlowRender, ItemProvider<T>) {
        (self.flow, self.provider)
    }

    pub fn len(&self) -> usize {
        self.provider.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provider.is_empty()
    }

    /// Records where the list sits inside its scroll container and how tall the container is.
    pub fn mount(&mut self, offset_top: u64, wrap_height: u32) {
        adebug!(offset_top, wrap_height, "mount");
        self.flow.mount(offset_top, wrap_height);
    }

    /// Call this when the scroll container's visible height changes.
    pub fn on_resize(&mut self, wrap_height: u32) {
        adebug!(wrap_height, "on_resize");
        self.flow.set_wrap_height(wrap_height);
    }

    /// Call this when the list moved inside its scroll container (e.g. content above it grew).
    pub fn on_offset_change(&mut self, offset_top: u64) {
        self.flow.set_offset_top(offset_top);
    }

    /// Call this for every scroll event with the container's raw scroll offset.
    ///
    /// `direction` may be `None` to infer it from the previous offset.
    pub fn on_scroll(&mut self, offset: i64, direction: Option<ScrollDirection>) {
        self.flow.scroll(offset, direction);
    }

    /// Replaces the options. Layout changes re-project every item from its declared height.
    pub fn set_options(&mut self, options: FlowOptions) {
        let options = options.with_total(self.provider.len());
        let provider = &self.provider;
        self.flow
            .set_options_with(options, |i| provider.declared_height(i));
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut FlowOptions)) {
        let mut next = self.flow.options().clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Replaces the items.
    ///
    /// A longer list is treated as an append: rects of the existing prefix are kept and only the
    /// new items are projected. A shorter list re-projects everything. A list of the same length
    /// re-reads every height.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.set_provider(ItemProvider::Items(items));
    }

    /// Switches to lazily produced items; see [`Self::set_items`] for how `total` changes apply.
    pub fn set_getter(&mut self, total: usize, get: impl Fn(usize) -> T + Send + Sync + 'static) {
        self.set_provider(ItemProvider::getter(total, get));
    }

    pub fn set_provider(&mut self, provider: ItemProvider<T>) {
        let prev = self.provider.len();
        self.provider = provider;
        let total = self.provider.len();
        adebug!(prev, total, "set_provider");

        let provider = &self.provider;
        if total == prev {
            self.flow
                .reproject_from_with(0, |i| provider.declared_height(i));
        } else {
            self.flow
                .set_total_with(total, |i| provider.declared_height(i));
        }
    }

    /// Appends items to a materialized list and projects only the new ones.
    ///
    /// Returns `false` (and does nothing) when items come from a getter.
    pub fn extend_items(&mut self, items: impl IntoIterator<Item = T>) -> bool {
        let ItemProvider::Items(current) = &mut self.provider else {
            return false;
        };
        current.extend(items);
        let total = current.len();
        let provider = &self.provider;
        self.flow
            .set_total_with(total, |i| provider.declared_height(i));
        true
    }

    /// Changes the declared height of one materialized item and re-projects it and everything
    /// after it.
    ///
    /// Returns `false` when `index` is out of range or items come from a getter (use
    /// [`Self::invalidate_from`] there).
    pub fn resize_item(&mut self, index: usize, height: u32) -> bool {
        let ItemProvider::Items(items) = &mut self.provider else {
            return false;
        };
        let Some(item) = items.get_mut(index) else {
            return false;
        };
        if item.declared_height() == height {
            return true;
        }
        atrace!(index, height, "resize_item");
        item.set_declared_height(height);
        self.invalidate_from(index);
        true
    }

    /// Re-reads declared heights for `index..` from the provider.
    pub fn invalidate_from(&mut self, index: usize) {
        let provider = &self.provider;
        self.flow
            .reproject_from_with(index, |i| provider.declared_height(i));
    }

    /// Reconciles the window with the last scroll position and returns the output to draw.
    pub fn render(&mut self) -> RenderOutput<T> {
        let mut items = Vec::new();
        let frame = self.render_into(&mut items);
        RenderOutput {
            padding_top: frame.padding_top,
            height: frame.height,
            range: frame.range,
            items,
        }
    }

    /// Like [`Self::render`], but reuses `out` for the visible items.
    pub fn render_into(&mut self, out: &mut Vec<T>) -> Frame {
        self.flow.reconcile();
        let frame = self.flow.frame();
        self.provider.slice_into(frame.range, out);
        atrace!(
            start = frame.range.start_index,
            end = frame.range.end_index,
            padding_top = frame.padding_top,
            "render"
        );
        frame
    }
}
