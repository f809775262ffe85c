//! Value types shared by pickers, dialogs and the FFI boundary.
//!
//! # Responsibility
//! - Define canonical date/time values used by core picker logic.
//! - Reject invalid values at construction instead of masking them later.
//!
//! # Invariants
//! - Values are immutable; every change produces a new value.

pub mod date;
pub mod time;
