//! Wall-clock time value used by the send-time wheel picker.
//!
//! # Invariants
//! - `hour` is always in `0..=23` and `minute` in `0..=59`.
//! - 12-hour projections use `12` for midnight and noon, never `0`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Morning/afternoon half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Label shown on the meridiem wheel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Am => "오전",
            Self::Pm => "오후",
        }
    }
}

/// 24-hour `hour:minute` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawClockTime")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a time, clamping out-of-range fields to the last valid value.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Builds a time from a 12-hour wheel selection.
    pub fn from_twelve_hour(meridiem: Meridiem, hour12: u8, minute: u8) -> Self {
        Self::new(to_24_hour(meridiem, hour12), minute)
    }

    /// Projects this time onto the 12-hour wheels.
    pub fn twelve_hour(self) -> (Meridiem, u8) {
        to_12_hour(self.hour)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Unvalidated wire shape; decoding clamps through `ClockTime::new`.
#[derive(Deserialize)]
struct RawClockTime {
    hour: u8,
    minute: u8,
}

impl From<RawClockTime> for ClockTime {
    fn from(raw: RawClockTime) -> Self {
        Self::new(raw.hour, raw.minute)
    }
}

/// Converts a 12-hour selection to a 24-hour hour.
///
/// `hour12` is clamped into `1..=12`.
pub fn to_24_hour(meridiem: Meridiem, hour12: u8) -> u8 {
    let hour12 = hour12.clamp(1, 12);
    match (meridiem, hour12) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, hour) => hour,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, hour) => hour + 12,
    }
}

/// Converts a 24-hour hour to its 12-hour projection.
pub fn to_12_hour(hour24: u8) -> (Meridiem, u8) {
    match hour24.min(23) {
        0 => (Meridiem::Am, 12),
        hour @ 1..=11 => (Meridiem::Am, hour),
        12 => (Meridiem::Pm, 12),
        hour => (Meridiem::Pm, hour - 12),
    }
}
