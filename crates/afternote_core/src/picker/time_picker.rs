//! Send-time wheel picker (AM/PM | hour | minute).
//!
//! Wheels show a 12-hour clock; the picker announces 24-hour `ClockTime`s.
//! Echo filtering is shared with the date picker through
//! `WheelSyncController`.

use crate::model::time::{ClockTime, Meridiem};
use crate::picker::wheel::{WheelAxis, WheelCommand, WheelEvent, WheelSyncController};
use crate::picker::PickerUpdate;
use log::debug;

const MERIDIEMS: [Meridiem; 2] = [Meridiem::Am, Meridiem::Pm];
const HOUR_COUNT: usize = 12;
const MINUTE_COUNT: usize = 60;

/// Wheel axis of the time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Meridiem,
    Hour,
    Minute,
}

impl WheelAxis for TimeField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Meridiem => "meridiem",
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

/// Outcome of one time picker input.
pub type TimePickerUpdate = PickerUpdate<TimeField, ClockTime>;

/// Callback invoked once per user-driven time change.
pub type TimeChangedCallback = Box<dyn FnMut(ClockTime) + Send>;

/// Three synchronized wheels resolving to one 24-hour time.
pub struct TimePicker {
    time: ClockTime,
    meridiem: WheelSyncController<TimeField>,
    hour: WheelSyncController<TimeField>,
    minute: WheelSyncController<TimeField>,
    on_time_changed: TimeChangedCallback,
}

impl TimePicker {
    pub fn new(initial: ClockTime, on_time_changed: impl FnMut(ClockTime) + Send + 'static) -> Self {
        let [meridiem, hour, minute] = wheel_indices(initial);
        Self {
            time: initial,
            meridiem: WheelSyncController::new(TimeField::Meridiem, meridiem, MERIDIEMS.len()),
            hour: WheelSyncController::new(TimeField::Hour, hour, HOUR_COUNT),
            minute: WheelSyncController::new(TimeField::Minute, minute, MINUTE_COUNT),
            on_time_changed: Box::new(on_time_changed),
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn wheel(&self, field: TimeField) -> &WheelSyncController<TimeField> {
        match field {
            TimeField::Meridiem => &self.meridiem,
            TimeField::Hour => &self.hour,
            TimeField::Minute => &self.minute,
        }
    }

    /// Row labels of one wheel (`오전`/`오후`, `1`..`12`, `00`..`59`).
    pub fn labels(field: TimeField) -> Vec<String> {
        match field {
            TimeField::Meridiem => MERIDIEMS.iter().map(|m| m.label().to_string()).collect(),
            TimeField::Hour => (1..=HOUR_COUNT).map(|hour| hour.to_string()).collect(),
            TimeField::Minute => (0..MINUTE_COUNT).map(|minute| format!("{minute:02}")).collect(),
        }
    }

    pub fn handle_wheel_event(&mut self, field: TimeField, event: WheelEvent) -> TimePickerUpdate {
        let Some(index) = self.wheel_mut(field).handle(event) else {
            return PickerUpdate::default();
        };

        let (meridiem, hour12) = self.time.twelve_hour();
        let minute = self.time.minute();
        let candidate = match field {
            TimeField::Meridiem => {
                ClockTime::from_twelve_hour(MERIDIEMS[index.min(1)], hour12, minute)
            }
            TimeField::Hour => ClockTime::from_twelve_hour(meridiem, index as u8 + 1, minute),
            TimeField::Minute => ClockTime::new(self.time.hour(), index as u8),
        };

        if candidate == self.time {
            return PickerUpdate {
                emitted: None,
                commands: self.resync(),
            };
        }

        self.time = candidate;
        debug!("event=time_emitted module=picker time={}", candidate);
        (self.on_time_changed)(candidate);
        PickerUpdate {
            emitted: Some(candidate),
            commands: self.resync(),
        }
    }

    /// Applies an externally supplied time without announcing it.
    pub fn set_time(&mut self, time: ClockTime) -> TimePickerUpdate {
        self.time = time;
        PickerUpdate {
            emitted: None,
            commands: self.resync(),
        }
    }

    fn resync(&mut self) -> Vec<WheelCommand<TimeField>> {
        let [meridiem, hour, minute] = wheel_indices(self.time);
        [
            self.meridiem.sync_to(meridiem, MERIDIEMS.len()),
            self.hour.sync_to(hour, HOUR_COUNT),
            self.minute.sync_to(minute, MINUTE_COUNT),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn wheel_mut(&mut self, field: TimeField) -> &mut WheelSyncController<TimeField> {
        match field {
            TimeField::Meridiem => &mut self.meridiem,
            TimeField::Hour => &mut self.hour,
            TimeField::Minute => &mut self.minute,
        }
    }
}

fn wheel_indices(time: ClockTime) -> [usize; 3] {
    let (meridiem, hour12) = time.twelve_hour();
    let meridiem_index = match meridiem {
        Meridiem::Am => 0,
        Meridiem::Pm => 1,
    };
    [
        meridiem_index,
        usize::from(hour12) - 1,
        usize::from(time.minute()),
    ]
}
