use afternote_core::{ClockTime, TimeField, TimePicker, WheelCommand, WheelEvent};
use std::sync::{Arc, Mutex};

fn picker(initial: ClockTime) -> (TimePicker, Arc<Mutex<Vec<ClockTime>>>) {
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&emitted);
    let picker = TimePicker::new(initial, move |time| sink.lock().unwrap().push(time));
    (picker, emitted)
}

#[test]
fn initial_wheels_show_twelve_hour_projection() {
    let (picker, _) = picker(ClockTime::new(15, 22));
    assert_eq!(picker.wheel(TimeField::Meridiem).current_index(), 1);
    assert_eq!(picker.wheel(TimeField::Hour).current_index(), 2);
    assert_eq!(picker.wheel(TimeField::Minute).current_index(), 22);
}

#[test]
fn switching_meridiem_keeps_hour_and_minute() {
    let (mut picker, emitted) = picker(ClockTime::new(15, 22));

    let update = picker.handle_wheel_event(TimeField::Meridiem, WheelEvent::IndexChanged(0));

    assert_eq!(update.emitted, Some(ClockTime::new(3, 22)));
    assert!(update.commands.is_empty());
    assert_eq!(*emitted.lock().unwrap(), vec![ClockTime::new(3, 22)]);
}

#[test]
fn twelve_on_hour_wheel_maps_to_midnight_and_noon() {
    let (mut picker, _) = picker(ClockTime::new(9, 0));
    let update = picker.handle_wheel_event(TimeField::Hour, WheelEvent::IndexChanged(11));
    assert_eq!(update.emitted, Some(ClockTime::new(0, 0)));

    let update = picker.handle_wheel_event(TimeField::Meridiem, WheelEvent::IndexChanged(1));
    assert_eq!(update.emitted, Some(ClockTime::new(12, 0)));
}

#[test]
fn minute_scroll_emits_once_and_repeat_is_noop() {
    let (mut picker, emitted) = picker(ClockTime::new(8, 5));

    let update = picker.handle_wheel_event(TimeField::Minute, WheelEvent::IndexChanged(45));
    assert_eq!(update.emitted, Some(ClockTime::new(8, 45)));

    let repeat = picker.handle_wheel_event(TimeField::Minute, WheelEvent::IndexChanged(45));
    assert!(repeat.is_noop());
    assert_eq!(emitted.lock().unwrap().len(), 1);
}

#[test]
fn external_time_moves_wheels_and_echoes_are_dropped() {
    let (mut picker, emitted) = picker(ClockTime::new(8, 5));

    let update = picker.set_time(ClockTime::new(20, 30));
    assert_eq!(update.emitted, None);
    assert_eq!(
        update.commands,
        vec![
            WheelCommand {
                axis: TimeField::Meridiem,
                index: 1
            },
            WheelCommand {
                axis: TimeField::Minute,
                index: 30
            },
        ]
    );

    for command in update.commands {
        let echo = picker.handle_wheel_event(command.axis, WheelEvent::IndexChanged(command.index));
        assert!(echo.is_noop());
    }
    assert!(emitted.lock().unwrap().is_empty());
    assert_eq!(picker.time(), ClockTime::new(20, 30));
}
