use afternote_core::{
    CalendarDate, DateField, DatePicker, DatePickerUpdate, FixedClock, PickerConfig,
    WheelCommand, WheelEvent, YearWindowPolicy,
};
use std::sync::{Arc, Mutex};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

/// Picker plus a record of every callback invocation.
struct Harness {
    picker: DatePicker,
    emitted: Arc<Mutex<Vec<CalendarDate>>>,
}

impl Harness {
    fn new(initial: CalendarDate, min_date: Option<CalendarDate>) -> Self {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let picker = DatePicker::with_clock(
            initial,
            min_date,
            PickerConfig::default(),
            &FixedClock(date(2025, 6, 1)),
            move |date| sink.lock().unwrap().push(date),
        );
        Self { picker, emitted }
    }

    fn scroll(&mut self, field: DateField, index: usize) -> DatePickerUpdate {
        self.picker
            .handle_wheel_event(field, WheelEvent::IndexChanged(index))
    }

    /// Plays move commands back as the widget's position reports until
    /// nothing is left in flight.
    fn settle(&mut self, mut commands: Vec<WheelCommand<DateField>>) {
        let mut rounds = 0;
        while !commands.is_empty() {
            rounds += 1;
            assert!(rounds < 10, "wheel sync did not converge");
            let mut next = Vec::new();
            for command in commands {
                let update = self
                    .picker
                    .handle_wheel_event(command.axis, WheelEvent::IndexChanged(command.index));
                next.extend(update.commands);
            }
            commands = next;
        }
    }

    fn emitted(&self) -> Vec<CalendarDate> {
        self.emitted.lock().unwrap().clone()
    }
}

#[test]
fn month_change_clamps_day_to_new_month() {
    let mut harness = Harness::new(date(2025, 1, 31), None);

    let update = harness.scroll(DateField::Month, 3);

    assert_eq!(update.emitted, Some(date(2025, 4, 30)));
    assert_eq!(
        update.commands,
        vec![WheelCommand {
            axis: DateField::Day,
            index: 29
        }]
    );
    assert_eq!(harness.picker.date(), date(2025, 4, 30));
    assert_eq!(harness.picker.selection().days().len(), 30);
}

#[test]
fn single_user_scroll_emits_exactly_once() {
    let mut harness = Harness::new(date(2025, 1, 31), None);

    let update = harness.scroll(DateField::Month, 3);
    harness.settle(update.commands);

    assert_eq!(harness.emitted(), vec![date(2025, 4, 30)]);
    for field in [DateField::Year, DateField::Month, DateField::Day] {
        assert_eq!(
            harness.picker.wheel(field).current_index(),
            harness.picker.selection().indices().get(field)
        );
    }
}

#[test]
fn same_date_is_a_noop() {
    let mut harness = Harness::new(date(2025, 5, 10), None);

    let update = harness.scroll(DateField::Month, 4);

    assert!(update.is_noop());
    assert!(harness.emitted().is_empty());
}

#[test]
fn day_below_floor_is_not_offered_and_floors() {
    let floor = date(2025, 11, 20);
    let mut harness = Harness::new(date(2025, 11, 26), Some(floor));
    let days: Vec<u8> = harness
        .picker
        .selection()
        .days()
        .iter()
        .map(|option| option.value)
        .collect();
    assert_eq!(days.first(), Some(&20));
    assert!(!days.contains(&15));

    let update = harness.scroll(DateField::Day, 0);

    assert_eq!(update.emitted, Some(floor));
    assert_eq!(harness.emitted(), vec![floor]);
}

#[test]
fn moving_past_floor_month_restores_full_day_range() {
    let floor = date(2025, 11, 20);
    let mut harness = Harness::new(date(2025, 11, 26), Some(floor));

    let update = harness.scroll(DateField::Month, 11);

    assert_eq!(update.emitted, Some(date(2025, 12, 26)));
    let days = harness.picker.selection().days();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0].value, 1);
    assert_eq!(
        update.commands,
        vec![WheelCommand {
            axis: DateField::Day,
            index: 25
        }]
    );
}

#[test]
fn scroll_below_floor_snaps_wheel_back_without_emitting() {
    let floor = date(2025, 11, 20);
    let mut harness = Harness::new(floor, Some(floor));

    let update = harness.scroll(DateField::Month, 9);

    assert_eq!(update.emitted, None);
    assert_eq!(
        update.commands,
        vec![WheelCommand {
            axis: DateField::Month,
            index: 10
        }]
    );
    harness.settle(update.commands);
    assert!(harness.emitted().is_empty());
}

#[test]
fn emitted_dates_never_precede_floor() {
    let floor = date(2025, 11, 20);
    let mut harness = Harness::new(date(2025, 11, 26), Some(floor));

    for field in [DateField::Year, DateField::Month, DateField::Day] {
        for index in 0..32 {
            let update = harness.scroll(field, index);
            harness.settle(update.commands);
        }
    }

    let emitted = harness.emitted();
    assert!(!emitted.is_empty());
    assert!(emitted.iter().all(|date| *date >= floor));
    assert!(harness.picker.date() >= floor);
}

#[test]
fn year_beyond_window_does_not_crash_and_is_kept() {
    let mut harness = Harness::new(date(2040, 5, 10), None);
    assert_eq!(harness.picker.selection().indices().year, 10);
    assert_eq!(harness.picker.wheel(DateField::Year).current_index(), 10);

    let update = harness.scroll(DateField::Month, 5);
    assert_eq!(update.emitted, Some(date(2040, 6, 10)));

    let update = harness.scroll(DateField::Year, 0);
    assert_eq!(update.emitted, Some(date(2025, 6, 10)));
}

#[test]
fn window_at_last_representable_year_stays_usable() {
    let config = PickerConfig {
        year_window: YearWindowPolicy::FixedStart(i32::MAX),
        year_count: usize::MAX,
    };
    let mut picker = DatePicker::with_clock(
        date(2025, 1, 31),
        None,
        config,
        &FixedClock(date(2025, 6, 1)),
        |_| {},
    );

    assert_eq!(picker.year_window().len(), 1);
    assert_eq!(picker.selection().years().len(), 1);

    let update = picker.handle_wheel_event(DateField::Year, WheelEvent::IndexChanged(3));
    assert_eq!(update.emitted, Some(date(i32::MAX, 1, 31)));
}

#[test]
fn leap_day_clamps_when_year_changes() {
    let mut harness = Harness::new(date(2028, 2, 29), None);

    let update = harness.scroll(DateField::Year, 4);

    assert_eq!(update.emitted, Some(date(2029, 2, 28)));
    assert_eq!(
        update.commands,
        vec![WheelCommand {
            axis: DateField::Day,
            index: 27
        }]
    );
}

#[test]
fn external_date_resyncs_without_callback() {
    let mut harness = Harness::new(date(2025, 1, 31), None);

    let update = harness.picker.set_date(date(2027, 2, 14));

    assert_eq!(update.emitted, None);
    assert_eq!(
        update.commands,
        vec![
            WheelCommand {
                axis: DateField::Year,
                index: 2
            },
            WheelCommand {
                axis: DateField::Month,
                index: 1
            },
            WheelCommand {
                axis: DateField::Day,
                index: 13
            },
        ]
    );
    harness.settle(update.commands);
    assert!(harness.emitted().is_empty());
    assert_eq!(harness.picker.accessibility_label(), "2027년 2월 14일 선택됨");

    let again = harness.picker.set_date(date(2027, 2, 14));
    assert!(again.is_noop());
}

#[test]
fn external_date_below_floor_displays_floor() {
    let floor = date(2025, 11, 20);
    let mut harness = Harness::new(date(2025, 12, 1), Some(floor));

    harness.picker.set_date(date(2025, 11, 2));

    assert_eq!(harness.picker.date(), date(2025, 11, 2));
    assert_eq!(harness.picker.effective_date(), floor);
    assert_eq!(harness.picker.accessibility_label(), "2025년 11월 20일 선택됨");
}

#[test]
fn step_routes_through_emit_path() {
    let mut harness = Harness::new(date(2025, 1, 31), None);

    let update = harness.picker.step(DateField::Month, 1);
    assert_eq!(update.emitted, Some(date(2025, 2, 28)));

    let update = harness.picker.step(DateField::Day, 1);
    assert_eq!(update.emitted, Some(date(2025, 3, 1)));

    assert_eq!(harness.emitted(), vec![date(2025, 2, 28), date(2025, 3, 1)]);
}

#[test]
fn step_below_floor_is_a_noop_at_floor() {
    let floor = date(2025, 11, 20);
    let mut harness = Harness::new(floor, Some(floor));

    let update = harness.picker.step(DateField::Day, -1);

    assert!(update.is_noop());
    assert!(harness.emitted().is_empty());
}
