//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `afternote_core` linkage.
//! - Replay one wheel scroll so picker wiring can be checked without a UI.
//!
//! Usage: `afternote_cli [YYYY-MM-DD] [month-index]`

use afternote_core::{CalendarDate, Clock, DateField, DatePicker, SystemClock, WheelEvent};

fn main() {
    println!("afternote_core ping={}", afternote_core::ping());
    println!("afternote_core version={}", afternote_core::core_version());

    let mut args = std::env::args().skip(1);
    let initial = match args.next() {
        Some(raw) => match raw.parse::<CalendarDate>() {
            Ok(date) => date,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        None => SystemClock.today(),
    };
    let month_index = args
        .next()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(3);

    let mut picker = DatePicker::new(initial, None, |date| println!("date_changed={date}"));
    println!("picker initial={} label={}", picker.date(), picker.accessibility_label());

    let update = picker.handle_wheel_event(DateField::Month, WheelEvent::IndexChanged(month_index));
    for command in &update.commands {
        println!("wheel_move axis={} index={}", command.axis.as_str(), command.index);
        picker.handle_wheel_event(command.axis, WheelEvent::IndexChanged(command.index));
    }
    println!("picker final={} label={}", picker.date(), picker.accessibility_label());
}
