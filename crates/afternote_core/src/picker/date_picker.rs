//! Year/month/day wheel picker orchestration.
//!
//! # Responsibility
//! - Compose one `WheelSyncController` per date field.
//! - Compute the next date from user wheel input and emit it upward.
//! - Re-sync every wheel after external or user-driven date changes.
//!
//! # Invariants
//! - This is the only place a new date is created or announced.
//! - An emitted date never precedes the minimum date.
//! - Announcing the current date again is a no-op: no callback, and wheels
//!   that already show the selection do not move.
//! - External writes (`set_date`) never invoke the callback.
//! - The minimum date is fixed for the picker's lifetime; callers recreate
//!   the picker to change it.

use crate::calendar::{apply_floor, date_clamped, step, DateField};
use crate::clock::{Clock, SystemClock};
use crate::model::date::CalendarDate;
use crate::picker::config::PickerConfig;
use crate::picker::selection::{recompute, Selection, YearWindow};
use crate::picker::wheel::{WheelCommand, WheelEvent, WheelSyncController};
use crate::picker::PickerUpdate;
use log::{debug, trace};

/// Callback invoked once per user-driven date change.
pub type DateChangedCallback = Box<dyn FnMut(CalendarDate) + Send>;

/// Outcome of one date picker input.
pub type DatePickerUpdate = PickerUpdate<DateField, CalendarDate>;

const FIELDS: [DateField; 3] = [DateField::Year, DateField::Month, DateField::Day];

/// Three synchronized wheels resolving to one valid date.
pub struct DatePicker {
    date: CalendarDate,
    min_date: Option<CalendarDate>,
    window: YearWindow,
    selection: Selection,
    year: WheelSyncController<DateField>,
    month: WheelSyncController<DateField>,
    day: WheelSyncController<DateField>,
    on_date_changed: DateChangedCallback,
}

impl DatePicker {
    /// Creates a picker with the default year window of the system clock.
    pub fn new(
        initial: CalendarDate,
        min_date: Option<CalendarDate>,
        on_date_changed: impl FnMut(CalendarDate) + Send + 'static,
    ) -> Self {
        Self::with_clock(
            initial,
            min_date,
            PickerConfig::default(),
            &SystemClock,
            on_date_changed,
        )
    }

    /// Creates a picker with an explicit config and clock.
    ///
    /// Wheels start at the selection's indices; no commands are issued.
    pub fn with_clock(
        initial: CalendarDate,
        min_date: Option<CalendarDate>,
        config: PickerConfig,
        clock: &dyn Clock,
        on_date_changed: impl FnMut(CalendarDate) + Send + 'static,
    ) -> Self {
        let window = config.resolve_window(clock);
        let selection = recompute(initial, min_date, window);
        let indices = selection.indices();

        Self {
            date: initial,
            min_date,
            window,
            year: WheelSyncController::new(
                DateField::Year,
                indices.year,
                selection.len(DateField::Year),
            ),
            month: WheelSyncController::new(
                DateField::Month,
                indices.month,
                selection.len(DateField::Month),
            ),
            day: WheelSyncController::new(
                DateField::Day,
                indices.day,
                selection.len(DateField::Day),
            ),
            selection,
            on_date_changed: Box::new(on_date_changed),
        }
    }

    /// Date last written by the caller or emitted by the picker.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn min_date(&self) -> Option<CalendarDate> {
        self.min_date
    }

    /// Date the wheels display (floor applied).
    pub fn effective_date(&self) -> CalendarDate {
        self.selection.effective_date()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn year_window(&self) -> YearWindow {
        self.window
    }

    pub fn wheel(&self, field: DateField) -> &WheelSyncController<DateField> {
        match field {
            DateField::Year => &self.year,
            DateField::Month => &self.month,
            DateField::Day => &self.day,
        }
    }

    /// Screen-reader description, always matching the effective date.
    pub fn accessibility_label(&self) -> String {
        self.selection.accessibility_label()
    }

    /// Routes one wheel notification through echo filtering and, for user
    /// input, date recomputation.
    pub fn handle_wheel_event(&mut self, field: DateField, event: WheelEvent) -> DatePickerUpdate {
        match self.wheel_mut(field).handle(event) {
            Some(index) => {
                let candidate = self.candidate_for(field, index);
                self.accept(candidate)
            }
            None => PickerUpdate::default(),
        }
    }

    /// Applies an externally supplied date without announcing it.
    pub fn set_date(&mut self, date: CalendarDate) -> DatePickerUpdate {
        if date != self.date {
            self.date = date;
            self.selection = recompute(date, self.min_date, self.window);
            debug!(
                "event=date_set_external module=picker date={} effective={}",
                date,
                self.selection.effective_date()
            );
        }
        PickerUpdate {
            emitted: None,
            commands: self.resync(),
        }
    }

    /// Increments or decrements one field, as an accessibility action would.
    pub fn step(&mut self, field: DateField, delta: i32) -> DatePickerUpdate {
        let stepped = step(self.effective_date(), field, delta);
        self.accept(apply_floor(stepped, self.min_date))
    }

    fn candidate_for(&self, field: DateField, index: usize) -> CalendarDate {
        let base = self.selection.effective_date();
        let value = self.selection.value_at(field, index);
        let candidate = match field {
            DateField::Year => date_clamped(value, base.month(), base.day()),
            DateField::Month => date_clamped(base.year(), value as u8, base.day()),
            DateField::Day => date_clamped(base.year(), base.month(), value as u8),
        };
        apply_floor(candidate, self.min_date)
    }

    fn accept(&mut self, candidate: CalendarDate) -> DatePickerUpdate {
        if candidate == self.date {
            trace!(
                "event=date_unchanged module=picker date={}",
                candidate
            );
            return PickerUpdate {
                emitted: None,
                commands: self.resync(),
            };
        }

        self.date = candidate;
        self.selection = recompute(candidate, self.min_date, self.window);
        debug!("event=date_emitted module=picker date={}", candidate);
        (self.on_date_changed)(candidate);

        PickerUpdate {
            emitted: Some(candidate),
            commands: self.resync(),
        }
    }

    fn resync(&mut self) -> Vec<WheelCommand<DateField>> {
        let indices = self.selection.indices();
        let mut commands = Vec::new();
        for field in FIELDS {
            let count = self.selection.len(field);
            if let Some(command) = self.wheel_mut(field).sync_to(indices.get(field), count) {
                commands.push(command);
            }
        }
        commands
    }

    fn wheel_mut(&mut self, field: DateField) -> &mut WheelSyncController<DateField> {
        match field {
            DateField::Year => &mut self.year,
            DateField::Month => &mut self.month,
            DateField::Day => &mut self.day,
        }
    }
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("date", &self.date)
            .field("min_date", &self.min_date)
            .field("window", &self.window)
            .field("year", &self.year)
            .field("month", &self.month)
            .field("day", &self.day)
            .finish_non_exhaustive()
    }
}
