//! Window tracking: the incremental scroll step and the full reconciliation.
//!
//! Everything here is a pure function of the rect cache, the current [`WindowState`], the
//! viewport and the layout. The engine owns the state and feeds it through these functions; the
//! functions themselves never index past the cache and always return a window whose `start`
//! lies in `[0, total - remain]`.

use crate::{Layout, RectCache, ScrollDirection, Viewport, WindowState};

/// How many items are materialized (`remain`) out of how many exist (`total`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowBounds {
    pub remain: usize,
    pub total: usize,
}

impl WindowBounds {
    pub fn new(remain: usize, total: usize) -> Self {
        Self { remain, total }
    }

    /// Windowing is only needed when there are more items than we keep materialized.
    pub fn is_windowing(&self) -> bool {
        self.remain > 0 && self.remain < self.total
    }

    /// The largest valid window start.
    pub fn max_start(&self) -> usize {
        self.total.saturating_sub(self.remain)
    }

    /// Exclusive end of a window starting at `start`.
    pub fn end(&self, start: usize) -> usize {
        start.saturating_add(self.remain).min(self.total)
    }
}

/// Converts a raw container scroll offset into list coordinates.
///
/// Returns `None` when the list's top edge is at or below the container's top edge, which
/// includes negative offsets reported by overscroll/bounce.
pub fn viewport_at(raw_offset: i64, offset_top: u64, wrap_height: u32) -> Option<Viewport> {
    let offset_top = i64::try_from(offset_top).unwrap_or(i64::MAX);
    let scroll_top = raw_offset.saturating_sub(offset_top);
    if scroll_top <= 0 {
        return None;
    }
    Some(Viewport {
        scroll_top: scroll_top as u64,
        height: wrap_height,
    })
}

/// A window starting at `start` whose spacer matches the top of that item.
pub fn window_at(cache: &RectCache, start: usize) -> WindowState {
    let top = cache.top(start);
    debug_assert!(
        top.is_some(),
        "window_at: missing rect (start={start}, len={})",
        cache.len()
    );
    WindowState {
        start,
        padding_top: top.unwrap_or(0),
    }
}

/// The last valid window: `start = total - remain`.
pub fn window_at_bottom(cache: &RectCache, bounds: WindowBounds) -> WindowState {
    window_at(cache, bounds.max_start())
}

/// Pulls an out-of-range `start` back into `[0, total - remain]`.
pub fn clamp(cache: &RectCache, window: WindowState, bounds: WindowBounds) -> WindowState {
    if !bounds.is_windowing() {
        return WindowState::TOP;
    }
    if window.start > bounds.max_start() {
        return window_at_bottom(cache, bounds);
    }
    window
}

/// Advances the window by at most one item in `direction`.
///
/// This is the cheap per-scroll-event path. It assumes scroll events arrive densely enough that
/// the window never has to move by more than one item between two events; anything else is
/// repaired by [`reconcile`].
pub fn scroll_step(
    cache: &RectCache,
    window: WindowState,
    viewport: Viewport,
    direction: ScrollDirection,
    layout: Layout,
    bounds: WindowBounds,
) -> WindowState {
    if !bounds.is_windowing() {
        return window;
    }
    let window = clamp(cache, window, bounds);
    let start = window.start;
    let last = start + bounds.remain - 1;

    match direction {
        ScrollDirection::Backward => {
            if start == 0 {
                return WindowState::TOP;
            }
            let (Some(first_rect), Some(last_rect)) = (cache.get(start), cache.get(last)) else {
                fwarn!(start, len = cache.len(), "scroll_step: window outside the cache");
                return window;
            };
            // The tail has dropped below the viewport, or the head has come into view.
            if last_rect.top > viewport.scroll_bottom() || first_rect.top > viewport.scroll_top {
                let start = start - 1;
                if layout.column() > 1 {
                    return window_at(cache, start);
                }
                let exposed = cache.get(start).map_or(0, |r| r.height);
                ftrace!(start, "scroll_step: up");
                return WindowState {
                    start,
                    padding_top: window.padding_top.saturating_sub(exposed as u64),
                };
            }
            window
        }
        ScrollDirection::Forward => {
            if start + bounds.remain >= bounds.total {
                return window_at_bottom(cache, bounds);
            }
            let (Some(first_rect), Some(last_rect)) = (cache.get(start), cache.get(last)) else {
                fwarn!(start, len = cache.len(), "scroll_step: window outside the cache");
                return window;
            };
            // The head has left the viewport above, or the tail has come into view.
            if first_rect.bottom < viewport.scroll_top
                || last_rect.bottom < viewport.scroll_bottom()
            {
                let next = start + 1;
                if layout.column() > 1 {
                    return window_at(cache, next);
                }
                ftrace!(start = next, "scroll_step: down");
                return WindowState {
                    start: next,
                    padding_top: window
                        .padding_top
                        .saturating_add(first_rect.height as u64),
                };
            }
            window
        }
    }
}

/// Re-derives a valid window from the current viewport, however far it has moved.
///
/// Both directions are corrected one after the other: after a long scroll one way followed by
/// a short reversal, checking only the latest direction would leave the window stale.
pub fn reconcile(
    cache: &RectCache,
    window: WindowState,
    viewport: Option<Viewport>,
    layout: Layout,
    bounds: WindowBounds,
) -> WindowState {
    if !bounds.is_windowing() {
        return window;
    }
    let Some(viewport) = viewport.filter(|v| v.scroll_top > 0) else {
        return WindowState::TOP;
    };
    let Some(last_rect) = cache.get(bounds.total - 1) else {
        fwarn!(
            total = bounds.total,
            len = cache.len(),
            "reconcile: cache does not cover the list"
        );
        return clamp(cache, window, bounds);
    };
    if viewport.scroll_bottom() >= last_rect.bottom {
        return window_at_bottom(cache, bounds);
    }

    let window = clamp(cache, window, bounds);
    let window = adjust_up(cache, window, viewport, layout, bounds);
    let window = adjust_down(cache, window, viewport, layout, bounds);
    ftrace!(
        start = window.start,
        padding_top = window.padding_top,
        "reconcile"
    );
    window
}

fn adjust_up(
    cache: &RectCache,
    window: WindowState,
    viewport: Viewport,
    layout: Layout,
    bounds: WindowBounds,
) -> WindowState {
    let Some(first_rect) = cache.get(window.start) else {
        return window;
    };
    if first_rect.top <= viewport.scroll_top {
        return window;
    }
    let delta = first_rect.top - viewport.scroll_top;

    match layout {
        Layout::Uniform { height, column } if height > 0 => {
            let rows = delta.div_ceil(height as u64);
            let count = usize::try_from(rows)
                .unwrap_or(usize::MAX)
                .saturating_mul(column.max(1));
            window_at(cache, window.start.saturating_sub(count))
        }
        _ => {
            for i in (0..window.start).rev() {
                if cache.top(i).is_some_and(|top| top <= viewport.scroll_top) {
                    return window_at(cache, i.saturating_sub(bounds.remain / 2));
                }
            }
            window
        }
    }
}

fn adjust_down(
    cache: &RectCache,
    window: WindowState,
    viewport: Viewport,
    layout: Layout,
    bounds: WindowBounds,
) -> WindowState {
    let scroll_bottom = viewport.scroll_bottom();
    let Some(last_rect) = cache.get(window.start + bounds.remain - 1) else {
        return window;
    };
    if last_rect.bottom >= scroll_bottom {
        return window;
    }
    let delta = scroll_bottom - last_rect.bottom;

    match layout {
        Layout::Uniform { height, column } if height > 0 => {
            let rows = delta.div_ceil(height as u64);
            let count = usize::try_from(rows)
                .unwrap_or(usize::MAX)
                .saturating_mul(column.max(1));
            let start = window
                .start
                .saturating_add(count)
                .min(bounds.max_start());
            window_at(cache, start)
        }
        _ => {
            for i in (window.start + bounds.remain)..bounds.total {
                if cache.bottom(i).is_some_and(|bottom| bottom >= scroll_bottom) {
                    let start = (i - bounds.remain / 2).min(bounds.max_start());
                    return window_at(cache, start);
                }
            }
            window
        }
    }
}
