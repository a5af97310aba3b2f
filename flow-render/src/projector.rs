//! Height projection: turns item heights into [`ItemRect`]s.
//!
//! Three layouts are supported:
//! - [`Layout::Uniform`]: rects are derived from the index alone (`top = height * row`).
//! - [`Layout::Stacked`]: declared heights accumulate in a single track.
//! - [`Layout::Packed`]: declared heights are packed greedily into the currently shortest of
//!   `column` tracks (first track wins ties).

use alloc::vec;
use alloc::vec::Vec;

use crate::{ItemRect, Layout, RectCache};

/// Projects rects for items `[offset, total)` into `cache` and returns the total content height.
///
/// Any entries at or after `offset` are replaced. `offset` must not exceed `cache.len()`;
/// larger values are clamped to the end of the cache (and debug-asserted).
///
/// `item_height(i)` is only consulted by the variable layouts.
pub fn project(
    cache: &mut RectCache,
    layout: Layout,
    total: usize,
    offset: usize,
    item_height: impl FnMut(usize) -> u32,
) -> u64 {
    if total == 0 {
        return 0;
    }

    let mut offset = offset.min(total);
    if offset > cache.len() {
        fwarn!(offset, len = cache.len(), "project: offset past the end of the cache");
        debug_assert!(
            offset <= cache.len(),
            "project: offset past the end of the cache (offset={offset}, len={})",
            cache.len()
        );
        offset = cache.len();
    }

    cache.truncate(offset);
    cache.reserve(total - offset);
    fdebug!(total, offset, ?layout, "project");

    match layout {
        Layout::Uniform { height, column } => {
            cache.set_tracks(Vec::new());
            project_uniform(cache, height, column, total)
        }
        Layout::Stacked => {
            cache.set_tracks(Vec::new());
            project_stacked(cache, total, item_height)
        }
        Layout::Packed { column } => project_packed(cache, column, total, item_height),
    }
}

/// Content height of `total` uniform items laid out in `column` columns.
pub fn uniform_content_height(height: u32, column: usize, total: usize) -> u64 {
    let rows = total.div_ceil(column.max(1));
    (height as u64).saturating_mul(rows as u64)
}

fn project_uniform(cache: &mut RectCache, height: u32, column: usize, total: usize) -> u64 {
    let column = column.max(1);
    for i in cache.len()..total {
        let top = (height as u64).saturating_mul((i / column) as u64);
        cache.push(ItemRect::new(top, height));
    }
    uniform_content_height(height, column, total)
}

fn project_stacked(
    cache: &mut RectCache,
    total: usize,
    mut item_height: impl FnMut(usize) -> u32,
) -> u64 {
    let mut before = cache.last().map_or(0, |r| r.bottom);
    for i in cache.len()..total {
        let rect = ItemRect::new(before, item_height(i));
        before = rect.bottom;
        cache.push(rect);
    }
    before
}

fn project_packed(
    cache: &mut RectCache,
    column: usize,
    total: usize,
    mut item_height: impl FnMut(usize) -> u32,
) -> u64 {
    let column = column.max(1);
    let mut tracks = seed_tracks(cache, column);
    for i in cache.len()..total {
        let track = shortest_track(&tracks);
        let rect = ItemRect::new(tracks[track], item_height(i));
        tracks[track] = rect.bottom;
        cache.push(rect);
    }
    let height = tracks.iter().copied().max().unwrap_or(0);
    cache.set_tracks(tracks);
    height
}

/// Track heights to continue packing from.
///
/// When the cache still carries the accumulators of the projection that produced it, those are
/// exact. Otherwise (after a truncation) the existing prefix is replayed through the same greedy
/// rule, which reproduces the same track assignment.
fn seed_tracks(cache: &RectCache, column: usize) -> Vec<u64> {
    let stored = cache.track_heights();
    if stored.len() == column {
        return stored.to_vec();
    }

    let mut tracks = vec![0u64; column];
    for rect in cache {
        let track = shortest_track(&tracks);
        tracks[track] = tracks[track].saturating_add(rect.height as u64);
    }
    tracks
}

fn shortest_track(tracks: &[u64]) -> usize {
    let mut best = 0usize;
    for (i, &h) in tracks.iter().enumerate().skip(1) {
        if h < tracks[best] {
            best = i;
        }
    }
    best
}
