//! Wheel pickers: selection model, wheel sync and orchestration.
//!
//! # Responsibility
//! - Keep coupled wheels converged on one valid value.
//! - Return explicit move commands instead of driving widgets directly.
//!
//! # Invariants
//! - Single-threaded: every call runs to completion on the caller's thread.
//! - No picker API returns an error; invalid intermediate input is clamped.

pub mod config;
pub mod date_picker;
pub mod dialog;
pub mod selection;
pub mod time_picker;
pub mod wheel;

use crate::picker::wheel::WheelCommand;

/// What one picker input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerUpdate<A, T> {
    /// Value announced to the change callback, if any.
    pub emitted: Option<T>,
    /// Wheel moves the host must perform, in axis order.
    pub commands: Vec<WheelCommand<A>>,
}

impl<A, T> Default for PickerUpdate<A, T> {
    fn default() -> Self {
        Self {
            emitted: None,
            commands: Vec::new(),
        }
    }
}

impl<A, T> PickerUpdate<A, T> {
    /// Returns `true` when the input changed nothing.
    pub fn is_noop(&self) -> bool {
        self.emitted.is_none() && self.commands.is_empty()
    }
}
