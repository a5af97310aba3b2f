#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Towards larger offsets (scrolling down).
    Forward,
    /// Towards smaller offsets (scrolling up).
    Backward,
}

/// Geometry of a single item in the scroll axis.
///
/// `bottom == top + height` always holds for rects produced by the projector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRect {
    pub height: u32,
    pub top: u64,
    pub bottom: u64,
}

impl ItemRect {
    pub fn new(top: u64, height: u32) -> Self {
        Self {
            height,
            top,
            bottom: top.saturating_add(height as u64),
        }
    }
}

/// How item rects are derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// Every item has the same height; rects are derived from the index alone.
    Uniform { height: u32, column: usize },
    /// Items declare their own heights and are stacked in a single track.
    Stacked,
    /// Items declare their own heights and are packed into the shortest of `column` tracks.
    Packed { column: usize },
}

impl Layout {
    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform { .. })
    }

    pub fn column(&self) -> usize {
        match *self {
            Self::Uniform { column, .. } | Self::Packed { column } => column,
            Self::Stacked => 1,
        }
    }
}

/// The range of item indexes to materialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Everything a presentation layer needs to draw the current window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Height of the blank spacer rendered above the first materialized item.
    pub padding_top: u64,
    /// Simulated height of the whole list.
    pub height: u64,
    pub range: VisibleRange,
}
