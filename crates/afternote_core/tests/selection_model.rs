use afternote_core::{recompute, AxisIndices, CalendarDate, DateField, YearWindow};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn values<T: Copy>(options: &[afternote_core::AxisOption<T>]) -> Vec<T> {
    options.iter().map(|option| option.value).collect()
}

fn window() -> YearWindow {
    YearWindow::new(2025, 11)
}

#[test]
fn lists_and_indices_follow_current_date() {
    let selection = recompute(date(2025, 11, 26), None, window());

    assert_eq!(values(selection.years()), (2025..=2035).collect::<Vec<_>>());
    assert_eq!(values(selection.months()), (1..=12).collect::<Vec<u8>>());
    assert_eq!(values(selection.days()), (1..=30).collect::<Vec<u8>>());
    assert_eq!(
        selection.indices(),
        AxisIndices {
            year: 0,
            month: 10,
            day: 25
        }
    );
    assert_eq!(selection.effective_date(), date(2025, 11, 26));
}

#[test]
fn option_index_and_label_match_position() {
    let selection = recompute(date(2025, 2, 10), None, window());
    let last_day = selection.days().last().unwrap();
    assert_eq!(last_day.index, 27);
    assert_eq!(last_day.label(), "28");
    assert_eq!(selection.years()[3].label(), "2028");
}

#[test]
fn floor_truncates_days_only_inside_its_year_month() {
    let floor = Some(date(2025, 11, 20));

    let same_month = recompute(date(2025, 11, 26), floor, window());
    assert_eq!(values(same_month.days()), (20..=30).collect::<Vec<u8>>());
    assert!(!values(same_month.days()).contains(&15));
    assert_eq!(same_month.indices().day, 6);

    let next_month = recompute(date(2025, 12, 3), floor, window());
    assert_eq!(values(next_month.days()), (1..=31).collect::<Vec<u8>>());
    assert_eq!(next_month.indices().day, 2);
}

#[test]
fn selection_derives_from_effective_date() {
    let floor = date(2025, 11, 20);
    let selection = recompute(date(2025, 3, 5), Some(floor), window());

    assert_eq!(selection.effective_date(), floor);
    assert_eq!(selection.indices().month, 10);
    assert_eq!(selection.indices().day, 0);
    assert_eq!(selection.accessibility_label(), "2025년 11월 20일 선택됨");
}

#[test]
fn year_outside_window_clamps_to_boundary_index() {
    let future = recompute(date(2040, 5, 10), None, window());
    assert_eq!(future.indices().year, 10);
    assert_eq!(future.effective_date(), date(2040, 5, 10));

    let past = recompute(date(2019, 5, 10), None, window());
    assert_eq!(past.indices().year, 0);
}

#[test]
fn value_at_clamps_out_of_range_indices() {
    let selection = recompute(date(2025, 4, 10), None, window());
    assert_eq!(selection.value_at(DateField::Day, 99), 30);
    assert_eq!(selection.value_at(DateField::Month, 11), 12);
    assert_eq!(selection.value_at(DateField::Year, 4), 2029);
    assert_eq!(selection.len(DateField::Day), 30);
}

#[test]
fn accessibility_label_uses_unpadded_fields() {
    let selection = recompute(date(2026, 1, 5), None, window());
    assert_eq!(selection.accessibility_label(), "2026년 1월 5일 선택됨");
}
