//! Selection model: projects `(current date, floor)` onto wheel contents.
//!
//! # Responsibility
//! - Derive year/month/day candidate lists and the index each wheel shows.
//! - Produce the accessibility description for the current selection.
//!
//! # Invariants
//! - Everything derives from the effective (floored) date, never the raw one.
//! - Lookups never fail: a missing value degrades to a boundary index.
//! - Day candidates start at the floor's day only inside the floor's
//!   year-month.

use crate::calendar::{apply_floor, days_in_month, DateField};
use crate::model::date::CalendarDate;
use log::debug;
use std::fmt::{Debug, Display};

/// Contiguous window of selectable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    start: i32,
    len: usize,
}

impl YearWindow {
    /// Creates a window of `len` years starting at `start`.
    ///
    /// `len` is raised to 1 and capped so the window ends at or before
    /// `i32::MAX`.
    pub fn new(start: i32, len: usize) -> Self {
        let room =
            usize::try_from(i64::from(i32::MAX) - i64::from(start) + 1).unwrap_or(usize::MAX);
        Self {
            start,
            len: len.clamp(1, room),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a window holds at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Last selectable year.
    pub fn last(&self) -> i32 {
        let offset = i32::try_from(self.len - 1).unwrap_or(i32::MAX);
        self.start.saturating_add(offset)
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.last()
    }
}

/// One selectable value on a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOption<T> {
    pub value: T,
    pub index: usize,
}

impl<T: Display> AxisOption<T> {
    /// Text shown on the wheel row.
    pub fn label(&self) -> String {
        self.value.to_string()
    }
}

/// Target index for each date wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisIndices {
    pub year: usize,
    pub month: usize,
    pub day: usize,
}

impl AxisIndices {
    pub fn get(&self, field: DateField) -> usize {
        match field {
            DateField::Year => self.year,
            DateField::Month => self.month,
            DateField::Day => self.day,
        }
    }
}

/// Wheel contents for one `(current date, floor)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    effective: CalendarDate,
    years: Vec<AxisOption<i32>>,
    months: Vec<AxisOption<u8>>,
    days: Vec<AxisOption<u8>>,
    indices: AxisIndices,
}

impl Selection {
    /// Current date after the floor was applied.
    pub fn effective_date(&self) -> CalendarDate {
        self.effective
    }

    pub fn years(&self) -> &[AxisOption<i32>] {
        &self.years
    }

    pub fn months(&self) -> &[AxisOption<u8>] {
        &self.months
    }

    pub fn days(&self) -> &[AxisOption<u8>] {
        &self.days
    }

    pub fn indices(&self) -> AxisIndices {
        self.indices
    }

    /// Number of candidates on `field`'s wheel.
    pub fn len(&self, field: DateField) -> usize {
        match field {
            DateField::Year => self.years.len(),
            DateField::Month => self.months.len(),
            DateField::Day => self.days.len(),
        }
    }

    /// Candidate value at `index` on `field`'s wheel, clamping the index.
    pub fn value_at(&self, field: DateField, index: usize) -> i32 {
        match field {
            DateField::Year => clamped(&self.years, index),
            DateField::Month => i32::from(clamped(&self.months, index)),
            DateField::Day => i32::from(clamped(&self.days, index)),
        }
    }

    /// Screen-reader description of the effective date.
    pub fn accessibility_label(&self) -> String {
        format!(
            "{}년 {}월 {}일 선택됨",
            self.effective.year(),
            self.effective.month(),
            self.effective.day()
        )
    }
}

/// Recomputes wheel contents for `current` under an optional floor.
pub fn recompute(
    current: CalendarDate,
    min_date: Option<CalendarDate>,
    window: YearWindow,
) -> Selection {
    let effective = apply_floor(current, min_date);

    let years = options(window.years());
    let months = options(1..=12u8);
    let last_day = days_in_month(effective.year(), effective.month());
    let first_day = match min_date {
        Some(floor) if floor.same_year_month(effective) => floor.day(),
        _ => 1,
    };
    let days = options(first_day..=last_day);

    let indices = AxisIndices {
        year: index_or_boundary(&years, effective.year(), DateField::Year),
        month: index_or_boundary(&months, effective.month(), DateField::Month),
        day: index_or_boundary(&days, effective.day(), DateField::Day),
    };

    Selection {
        effective,
        years,
        months,
        days,
        indices,
    }
}

fn options<T>(values: impl Iterator<Item = T>) -> Vec<AxisOption<T>> {
    values
        .enumerate()
        .map(|(index, value)| AxisOption { value, index })
        .collect()
}

fn clamped<T: Copy>(options: &[AxisOption<T>], index: usize) -> T {
    // Lists are never empty: year windows hold >= 1 year, months 12, days >= 1.
    options[index.min(options.len().saturating_sub(1))].value
}

/// Finds `value` in ascending `options`, or the nearest boundary index.
fn index_or_boundary<T: Copy + Ord + Debug>(
    options: &[AxisOption<T>],
    value: T,
    field: DateField,
) -> usize {
    if let Some(option) = options.iter().find(|option| option.value == value) {
        return option.index;
    }

    let last = options.len().saturating_sub(1);
    let fallback = match options.first() {
        Some(first) if value < first.value => 0,
        _ => last,
    };
    if cfg!(debug_assertions) {
        debug!(
            "event=selection_lookup_miss module=picker axis={} value={:?} fallback_index={}",
            field.as_str(),
            value,
            fallback
        );
    }
    fallback
}
