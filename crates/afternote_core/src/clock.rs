//! "Today" providers for components that depend on the current date.
//!
//! Pickers never read the ambient clock directly; they take a `Clock` so that
//! year windows stay deterministic under test.

use crate::calendar::date_clamped;
use crate::model::date::CalendarDate;

/// Source of the current local calendar date.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the device's local date through the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let today = jiff::Zoned::now().date();
        date_clamped(
            i32::from(today.year()),
            today.month() as u8,
            today.day() as u8,
        )
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
