//! Pure calendar arithmetic for wheel pickers.
//!
//! # Responsibility
//! - Month lengths under the proleptic Gregorian leap rule.
//! - Day clamping, minimum-date floors and field stepping that never
//!   produce an invalid date.
//!
//! # Invariants
//! - Functions are stateless and side-effect free.
//! - Month outside `1..=12` is a caller bug (debug assertion), not a
//!   recoverable case.

use crate::model::date::CalendarDate;

/// One field of a calendar date; doubles as the date picker's wheel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    /// Stable lowercase id used in logs and at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

/// Returns whether `year` is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days (28..=31) in `month` of `year`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Clamps `day` into `1..=days_in_month(year, month)`.
pub fn clamp_day(year: i32, month: u8, day: u8) -> u8 {
    day.clamp(1, days_in_month(year, month))
}

/// Returns `date`, or `min_date` when `date` is earlier than it.
pub fn apply_floor(date: CalendarDate, min_date: Option<CalendarDate>) -> CalendarDate {
    match min_date {
        Some(floor) if date < floor => floor,
        _ => date,
    }
}

/// Builds a date from possibly-overflowing fields.
///
/// Month is clamped to `1..=12`; day is clamped into the month.
pub fn date_clamped(year: i32, month: u8, day: u8) -> CalendarDate {
    let month = month.clamp(1, 12);
    CalendarDate::from_valid(year, month, clamp_day(year, month, day))
}

/// Moves one field of `date` by `delta` steps.
///
/// - `Year`: keeps month, clamps day (Feb 29 -> Feb 28).
/// - `Month`: carries into the year, clamps day (Jan 31 + 1 -> Feb 28/29).
/// - `Day`: carries across month and year boundaries.
pub fn step(date: CalendarDate, field: DateField, delta: i32) -> CalendarDate {
    match field {
        DateField::Year => {
            let year = date.year().saturating_add(delta);
            date_clamped(year, date.month(), date.day())
        }
        DateField::Month => {
            let zero_based = i64::from(date.year()) * 12 + i64::from(date.month()) - 1;
            let shifted = (zero_based + i64::from(delta)).clamp(
                i64::from(i32::MIN) * 12,
                i64::from(i32::MAX) * 12 + 11,
            );
            let year = shifted.div_euclid(12) as i32;
            let month = (shifted.rem_euclid(12) + 1) as u8;
            date_clamped(year, month, date.day())
        }
        DateField::Day => step_days(date, delta),
    }
}

/// Days in a 400-year Gregorian cycle: 97 leap years and 303 common ones.
const DAYS_PER_ERA: i64 = 146_097;

/// Offset from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

fn step_days(date: CalendarDate, delta: i32) -> CalendarDate {
    let min = epoch_day(i32::MIN, 1, 1);
    let max = epoch_day(i32::MAX, 12, 31);
    let start = epoch_day(date.year(), date.month(), date.day());
    let target = (start + i64::from(delta)).clamp(min, max);
    let (year, month, day) = civil_from_epoch_day(target);
    CalendarDate::from_valid(year, month, day)
}

/// Days since 1970-01-01; years are counted from March so leap days fall last.
fn epoch_day(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (i64::from(month) + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

fn civil_from_epoch_day(days: i64) -> (i32, u8, u8) {
    let days = days + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month as u8, day as u8)
}
