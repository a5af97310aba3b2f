//! A headless viewport-windowing engine for long lists.
//!
//! For adapter-level utilities (px heights, item providers, a render controller), see the
//! `flow-render-adapter` crate.
//!
//! Only a contiguous slice of items is materialized at any time; a single leading spacer
//! (`padding_top`) stands in for everything above the slice, and the total content height
//! simulates the full list. The crate provides:
//! - a rect cache with per-item `top`/`bottom`/`height`
//! - projection for uniform, single-track and multi-column (shortest-track packed) layouts
//! - an O(1) per-event scroll step plus a full reconciliation for jumps, resizes and count
//!   changes
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container's visible height and the list's offset inside it
//! - raw scroll offsets
//! - item heights (either one uniform height or a declared height per item)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod flow_render;
mod options;
pub mod projector;
mod rect_cache;
mod state;
mod types;
pub mod window;


pub use flow_render::FlowRender;
pub use options::{FlowOptions, ItemHeightFn};
pub use rect_cache::RectCache;
pub use state::{Viewport, WindowState};
pub use types::{Frame, ItemRect, Layout, ScrollDirection, VisibleRange};
pub use window::WindowBounds;
