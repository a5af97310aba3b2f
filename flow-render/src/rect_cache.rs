use alloc::vec::Vec;

use crate::ItemRect;

/// Index → [`ItemRect`] storage.
///
/// Entries always form a dense prefix `[0, len)`: the projector appends newly known items and
/// truncates before re-projecting a suffix. Lookups past the end return `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RectCache {
    rects: Vec<ItemRect>,
    // Per-track accumulated heights after the last packed projection over the whole prefix.
    tracks: Vec<u64>,
}

impl RectCache {
    pub fn new() -> Self {
        Self {
            rects: Vec::new(),
            tracks: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rects: Vec::with_capacity(capacity),
            tracks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemRect> {
        self.rects.get(index)
    }

    pub fn top(&self, index: usize) -> Option<u64> {
        self.rects.get(index).map(|r| r.top)
    }

    pub fn bottom(&self, index: usize) -> Option<u64> {
        self.rects.get(index).map(|r| r.bottom)
    }

    pub fn last(&self) -> Option<&ItemRect> {
        self.rects.last()
    }

    pub fn as_slice(&self) -> &[ItemRect] {
        &self.rects
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ItemRect> {
        self.rects.iter()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.tracks.clear();
    }

    pub fn truncate(&mut self, len: usize) {
        if len < self.rects.len() {
            self.rects.truncate(len);
            self.tracks.clear();
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.rects.reserve(additional);
    }

    pub(crate) fn push(&mut self, rect: ItemRect) {
        self.rects.push(rect);
    }

    /// Accumulated height of each track after the last multi-column projection.
    ///
    /// Empty for uniform and single-track layouts, and after a truncation until the next
    /// projection.
    pub fn track_heights(&self) -> &[u64] {
        &self.tracks
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<u64>) {
        self.tracks = tracks;
    }
}

impl<'a> IntoIterator for &'a RectCache {
    type Item = &'a ItemRect;
    type IntoIter = core::slice::Iter<'a, ItemRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
