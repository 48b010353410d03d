//! A headless drag-to-reorder engine for virtualized lists.
//!
//! For adapter-level utilities (list store, auto-scroll jobs, swipe-to-dismiss), see the
//! `dragreorder-adapter` crate.
//!
//! This crate focuses on the gesture-to-index mapping: turning a long-press drag with continuous
//! pointer deltas into discrete `move(from, to)` intents, plus the over-scroll amount needed when
//! the dragged item is pushed past the viewport edge.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the visible window (keyed items with their current offsets and sizes)
//! - the viewport bounds
//! - gesture callbacks (start/move/end/cancel)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod mutator;
mod options;
mod session;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use controller::DragController;
pub use mutator::{HapticFeedback, ListMutator, NoHaptics};
pub use options::DragOptions;
pub use session::DragSession;
pub use types::{DragDirection, DragPhase, DragUpdate, Move, Span, VisibleItem};
pub use window::VisibleWindow;
