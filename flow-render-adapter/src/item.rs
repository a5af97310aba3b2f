use crate::{ParsePxError, parse_px};

/// Items that carry their own rendered height.
///
/// Variable-height lists read every item's height through this trait when projecting.
pub trait DeclaredHeight {
    fn declared_height(&self) -> u32;

    /// Updates the declared height in place (used by `Controller::resize_item`).
    fn set_declared_height(&mut self, height: u32);
}

impl DeclaredHeight for u32 {
    fn declared_height(&self) -> u32 {
        *self
    }

    fn set_declared_height(&mut self, height: u32) {
        *self = height;
    }
}

/// An item descriptor: user data plus the height it renders at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledItem<T> {
    pub data: T,
    pub height: u32,
}

impl<T> StyledItem<T> {
    pub fn new(data: T, height: u32) -> Self {
        Self { data, height }
    }

    /// Builds a descriptor from a pixel length such as `"24px"`.
    pub fn from_px(data: T, height: &str) -> Result<Self, ParsePxError> {
        Ok(Self::new(data, parse_px(height)?))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StyledItem<U> {
        StyledItem {
            data: f(self.data),
            height: self.height,
        }
    }
}

impl<T> DeclaredHeight for StyledItem<T> {
    fn declared_height(&self) -> u32 {
        self.height
    }

    fn set_declared_height(&mut self, height: u32) {
        self.height = height;
    }
}
