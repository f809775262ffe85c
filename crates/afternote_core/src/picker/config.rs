//! Picker configuration.

use crate::clock::Clock;
use crate::picker::selection::YearWindow;

/// Number of years offered by default: this year through +10.
pub const DEFAULT_YEAR_COUNT: usize = 11;

/// First year offered by the receiver year-month dialog.
pub const RECEIVER_DIALOG_MIN_YEAR: i32 = 2026;

/// Where the year wheel's candidate window starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWindowPolicy {
    /// Starts at the clock's current year.
    FromToday,
    /// Starts at a fixed year regardless of the clock.
    FixedStart(i32),
}

/// Construction-time options for date pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    pub year_window: YearWindowPolicy,
    /// Length of the year window; `0` is treated as `1`.
    pub year_count: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            year_window: YearWindowPolicy::FromToday,
            year_count: DEFAULT_YEAR_COUNT,
        }
    }
}

impl PickerConfig {
    /// Config used by the receiver year-month dialog.
    pub fn receiver_year_month() -> Self {
        Self {
            year_window: YearWindowPolicy::FixedStart(RECEIVER_DIALOG_MIN_YEAR),
            year_count: DEFAULT_YEAR_COUNT,
        }
    }

    /// Resolves the year window against `clock`.
    pub fn resolve_window(&self, clock: &dyn Clock) -> YearWindow {
        let start = match self.year_window {
            YearWindowPolicy::FromToday => clock.today().year(),
            YearWindowPolicy::FixedStart(year) => year,
        };
        YearWindow::new(start, self.year_count)
    }
}
