//! Adapter utilities for the `flow-render` crate.
//!
//! The `flow-render` crate is UI-agnostic and focuses on the windowing math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Pixel-length parsing for heights declared as strings (`"24px"`)
//! - Item descriptors that carry their own height
//! - Item providers (a materialized `Vec` or a lazy getter)
//! - A `Controller` that ties the engine to the items and produces render output
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod item;
mod provider;
mod px;


pub use controller::{Controller, RenderOutput};
pub use item::{DeclaredHeight, StyledItem};
pub use provider::{ItemGetterFn, ItemProvider};
pub use px::{ParsePxError, parse_px};
