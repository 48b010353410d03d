//! Adapter utilities for the `dragreorder` crate.
//!
//! The `dragreorder` crate is UI-agnostic and focuses on the gesture-to-index mapping. This crate
//! provides small, framework-neutral helpers commonly needed around it:
//!
//! - A keyed, order-preserving list store that applies reorder/delete intents
//! - A cancellable auto-scroll job that runs at most once at a time
//! - Swipe-to-dismiss row state
//! - Accessibility actions (swap with neighbour, delete)
//! - [`ReorderController`], which wires all of the above together
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod accessibility;
mod controller;
mod dismiss;
mod key;
mod list;
mod options;
mod overscroll;
mod tween;


pub use accessibility::{AccessibilityAction, ActionKind, accessibility_actions};
pub use controller::ReorderController;
pub use dismiss::{
    DismissAlignment, DismissBackground, DismissColor, DismissDirection, DismissDirections,
    DismissIcon, DismissState, DismissThreshold, DismissValue,
};
pub use key::ListKey;
pub use list::{Item, ListError, ReorderableList, sample_list};
pub use options::ReorderOptions;
pub use overscroll::OverScroll;
pub use tween::{Easing, Tween};
