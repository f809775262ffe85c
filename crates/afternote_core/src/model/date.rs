//! Calendar date value model.
//!
//! # Responsibility
//! - Define the single date value shared by pickers, dialogs and FFI.
//! - Validate dates at every construction boundary (new, parse, serde).
//!
//! # Invariants
//! - A `CalendarDate` always names a real proleptic Gregorian day.
//! - Ordering is lexicographic over `(year, month, day)`.
//! - Values are never mutated; changes produce a new value.

use crate::calendar::days_in_month;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d{1,6})-(\d{1,2})-(\d{1,2})\s*$").expect("valid iso date regex")
});

/// Immutable `(year, month, day)` triple that always names a real date.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate", into = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Validation failures for date construction at boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDateError {
    /// Month outside `1..=12`.
    InvalidMonth(u8),
    /// Day outside `1..=days_in_month(year, month)`.
    InvalidDay { year: i32, month: u8, day: u8 },
    /// Text input that is not `YYYY-MM-DD`.
    Malformed(String),
}

impl Display for CalendarDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "month must be in 1..=12, got {month}"),
            Self::InvalidDay { year, month, day } => write!(
                f,
                "day {day} does not exist in {year:04}-{month:02} (max {})",
                days_in_month(*year, *month)
            ),
            Self::Malformed(value) => write!(f, "expected YYYY-MM-DD date, got `{value}`"),
        }
    }
}

impl Error for CalendarDateError {}

impl CalendarDate {
    /// Creates a validated date.
    ///
    /// # Errors
    /// - `InvalidMonth` when `month` is outside `1..=12`.
    /// - `InvalidDay` when `day` is zero or past the end of the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarDateError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarDateError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarDateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from fields already known to be valid.
    ///
    /// Only used inside the crate after `clamp_day` or an equivalent check.
    pub(crate) const fn from_valid(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` when both dates fall in the same year and month.
    pub fn same_year_month(self, other: Self) -> bool {
        self.year == other.year && self.month == other.month
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarDateError::Malformed(value.trim().to_string());
        let captures = ISO_DATE_RE.captures(value).ok_or_else(malformed)?;
        let year = captures[1].parse::<i32>().map_err(|_| malformed())?;
        let month = captures[2].parse::<u8>().map_err(|_| malformed())?;
        let day = captures[3].parse::<u8>().map_err(|_| malformed())?;
        Self::new(year, month, day)
    }
}

/// Unvalidated wire shape; serde goes through `CalendarDate::new`.
#[derive(Serialize, Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = CalendarDateError;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<CalendarDate> for RawCalendarDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarDate, CalendarDateError};

    #[test]
    fn parse_accepts_padded_and_unpadded_fields() {
        let padded: CalendarDate = "2025-01-05".parse().expect("padded date");
        let loose: CalendarDate = " 2025-1-5 ".parse().expect("unpadded date");
        assert_eq!(padded, loose);
        assert_eq!(padded.to_string(), "2025-01-05");
    }

    #[test]
    fn parse_rejects_non_dates() {
        let err = "2025/01/05".parse::<CalendarDate>().unwrap_err();
        assert_eq!(err, CalendarDateError::Malformed("2025/01/05".to_string()));

        let err = "2023-02-29".parse::<CalendarDate>().unwrap_err();
        assert_eq!(
            err,
            CalendarDateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn invalid_day_message_names_month_length() {
        let err = CalendarDate::new(2025, 4, 31).unwrap_err();
        assert_eq!(err.to_string(), "day 31 does not exist in 2025-04 (max 30)");
    }
}
