//! Core logic for Afternote's wheel date and time pickers.
//! This crate is the single source of truth for picker invariants; UI
//! layers only render wheels and forward wheel notifications.

pub mod calendar;
pub mod clock;
pub mod logging;
pub mod model;
pub mod picker;

pub use calendar::{apply_floor, clamp_day, days_in_month, is_leap_year, step, DateField};
pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{CalendarDate, CalendarDateError};
pub use model::time::{to_12_hour, to_24_hour, ClockTime, Meridiem};
pub use picker::config::{PickerConfig, YearWindowPolicy, DEFAULT_YEAR_COUNT};
pub use picker::date_picker::{DateChangedCallback, DatePicker, DatePickerUpdate};
pub use picker::dialog::{DateSelectionDialog, DialogKind};
pub use picker::selection::{recompute, AxisIndices, AxisOption, Selection, YearWindow};
pub use picker::time_picker::{TimeChangedCallback, TimeField, TimePicker, TimePickerUpdate};
pub use picker::wheel::{
    WheelAxis, WheelCommand, WheelEvent, WheelSyncController, WheelSyncState,
};
pub use picker::PickerUpdate;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
