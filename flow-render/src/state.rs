/// The current window: which item is materialized first and how tall the leading spacer is.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub start: usize,
    pub padding_top: u64,
}

impl WindowState {
    pub const TOP: Self = Self {
        start: 0,
        padding_top: 0,
    };
}

/// The visible part of the list in list coordinates.
///
/// `scroll_top` is already relative to the list's own top edge (the container scroll offset
/// minus the list's offset inside the container).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top: u64,
    pub height: u32,
}

impl Viewport {
    pub fn scroll_bottom(&self) -> u64 {
        self.scroll_top.saturating_add(self.height as u64)
    }
}
