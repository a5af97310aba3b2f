use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use flow_render::VisibleRange;

use crate::DeclaredHeight;

/// Lazily produces the item at an index.
pub type ItemGetterFn<T> = Arc<dyn Fn(usize) -> T + Send + Sync>;

/// Where a list's items come from.
pub enum ItemProvider<T> {
    /// A fully materialized sequence.
    Items(Vec<T>),
    /// `total` items produced on demand; only the visible ones are ever built.
    Getter { total: usize, get: ItemGetterFn<T> },
}

impl<T> ItemProvider<T> {
    pub fn items(items: Vec<T>) -> Self {
        Self::Items(items)
    }

    pub fn getter(total: usize, get: impl Fn(usize) -> T + Send + Sync + 'static) -> Self {
        Self::Getter {
            total,
            get: Arc::new(get),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Getter { total, .. } => *total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared height of the item at `index`, or `0` past the end.
    pub fn declared_height(&self, index: usize) -> u32
    where
        T: DeclaredHeight,
    {
        match self {
            Self::Items(items) => items.get(index).map_or(0, DeclaredHeight::declared_height),
            Self::Getter { total, get } if index < *total => get(index).declared_height(),
            Self::Getter { .. } => 0,
        }
    }

    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Self::Items(items) => items.get(index).cloned(),
            Self::Getter { total, get } => (index < *total).then(|| get(index)),
        }
    }

    /// Materializes the items of `range`, clamped to the provider's length.
    pub fn slice(&self, range: VisibleRange) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.slice_into(range, &mut out);
        out
    }

    /// Like [`Self::slice`], but reuses `out` (cleared first).
    pub fn slice_into(&self, range: VisibleRange, out: &mut Vec<T>)
    where
        T: Clone,
    {
        out.clear();
        let end = cmp::min(range.end_index, self.len());
        if range.start_index >= end {
            return;
        }
        match self {
            Self::Items(items) => out.extend_from_slice(&items[range.start_index..end]),
            Self::Getter { get, .. } => {
                out.reserve(end - range.start_index);
                out.extend((range.start_index..end).map(|i| get(i)));
            }
        }
    }
}

impl<T: Clone> Clone for ItemProvider<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Items(items) => Self::Items(items.clone()),
            Self::Getter { total, get } => Self::Getter {
                total: *total,
                get: Arc::clone(get),
            },
        }
    }
}

impl<T> Default for ItemProvider<T> {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ItemProvider<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Items(items) => f.debug_tuple("Items").field(items).finish(),
            Self::Getter { total, .. } => f
                .debug_struct("Getter")
                .field("total", total)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> From<Vec<T>> for ItemProvider<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items)
    }
}
