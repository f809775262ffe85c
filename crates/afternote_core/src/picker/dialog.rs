//! Confirm/dismiss session around a date picker.
//!
//! # Responsibility
//! - Hold the pending selection while the user scrolls.
//! - Hand the selection over only on explicit confirmation.
//!
//! # Invariants
//! - A closed dialog ignores input and never yields a date.
//! - `YearMonth` dialogs hide the day wheel; the confirmed day is the
//!   initial day clamped into the selected month, re-derived on every change.
//! - `YearMonth` dialogs only confirm years their wheel offers.

use crate::calendar::{date_clamped, DateField};
use crate::clock::Clock;
use crate::model::date::CalendarDate;
use crate::picker::config::PickerConfig;
use crate::picker::date_picker::{DatePicker, DatePickerUpdate};
use crate::picker::wheel::WheelEvent;
use log::debug;

/// Which wheels the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Year, month and day wheels.
    FullDate,
    /// Year and month wheels only.
    YearMonth,
}

/// Modal date selection session.
#[derive(Debug)]
pub struct DateSelectionDialog {
    kind: DialogKind,
    picker: DatePicker,
    anchor_day: u8,
    open: bool,
}

impl DateSelectionDialog {
    /// Opens a dialog of `kind` at `initial`.
    pub fn open(kind: DialogKind, initial: CalendarDate, clock: &dyn Clock) -> Self {
        let (config, start) = match kind {
            DialogKind::FullDate => (PickerConfig::default(), initial),
            DialogKind::YearMonth => {
                let config = PickerConfig::receiver_year_month();
                let window = config.resolve_window(clock);
                let year = initial.year().clamp(window.start(), window.last());
                (config, date_clamped(year, initial.month(), initial.day()))
            }
        };

        Self {
            kind,
            picker: DatePicker::with_clock(start, None, config, clock, |_| {}),
            anchor_day: initial.day(),
            open: true,
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    /// Forwards wheel input while open; `None` once closed or for a hidden
    /// wheel.
    pub fn handle_wheel_event(
        &mut self,
        field: DateField,
        event: WheelEvent,
    ) -> Option<DatePickerUpdate> {
        if !self.open || (self.kind == DialogKind::YearMonth && field == DateField::Day) {
            return None;
        }
        Some(self.picker.handle_wheel_event(field, event))
    }

    /// Date that `confirm` would return right now.
    pub fn pending(&self) -> CalendarDate {
        let date = self.picker.effective_date();
        match self.kind {
            DialogKind::FullDate => date,
            DialogKind::YearMonth => date_clamped(date.year(), date.month(), self.anchor_day),
        }
    }

    /// Screen-reader description of the pending selection.
    pub fn accessibility_label(&self) -> String {
        let pending = self.pending();
        match self.kind {
            DialogKind::FullDate => self.picker.accessibility_label(),
            DialogKind::YearMonth => {
                format!("{}년 {}월 선택됨", pending.year(), pending.month())
            }
        }
    }

    /// Closes the dialog and returns the selection.
    pub fn confirm(&mut self) -> Option<CalendarDate> {
        if !self.open {
            return None;
        }
        self.open = false;
        let date = self.pending();
        debug!("event=dialog_confirmed module=picker date={}", date);
        Some(date)
    }

    /// Closes the dialog without a selection.
    pub fn dismiss(&mut self) {
        if self.open {
            self.open = false;
            debug!("event=dialog_dismissed module=picker");
        }
    }
}
