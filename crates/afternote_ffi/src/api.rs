//! FFI use-case API for the mobile date and time pickers.
//!
//! # Responsibility
//! - Expose stable, use-case-level picker and dialog sessions to Dart via FRB.
//! - Translate wheel notifications in and move commands out as plain data.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dates cross the boundary as `YYYY-MM-DD` strings, times as `HH:MM`.
//! - Every session call returns a full envelope; `ok = false` carries the
//!   reason in `message`.

use afternote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AxisOption, CalendarDate, ClockTime, DateField, DatePicker, DatePickerUpdate,
    DateSelectionDialog, DialogKind, SystemClock, TimeField, TimePicker, WheelAxis, WheelCommand,
    WheelEvent,
};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

type Registry<S> = OnceLock<Mutex<HashMap<Uuid, S>>>;

static PICKER_SESSIONS: Registry<DatePicker> = OnceLock::new();
static DIALOG_SESSIONS: Registry<DateSelectionDialog> = OnceLock::new();
static TIME_SESSIONS: Registry<TimePicker> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One wheel move the UI must animate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelMove {
    /// `year|month|day`, or `meridiem|hour|minute` for time pickers.
    pub axis: String,
    pub index: u32,
}

/// Picker state envelope returned by every picker call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatePickerResponse {
    pub ok: bool,
    pub session_id: Option<String>,
    /// Effective (floored) date shown by the wheels.
    pub date: Option<String>,
    /// Date announced by this call, if the user changed it.
    pub emitted: Option<String>,
    pub commands: Vec<WheelMove>,
    pub year_labels: Vec<String>,
    pub month_labels: Vec<String>,
    pub day_labels: Vec<String>,
    pub accessibility_label: String,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

impl DatePickerResponse {
    fn from_picker(session_id: Uuid, picker: &DatePicker, update: DatePickerUpdate) -> Self {
        let selection = picker.selection();
        Self {
            ok: true,
            session_id: Some(session_id.to_string()),
            date: Some(selection.effective_date().to_string()),
            emitted: update.emitted.map(|date| date.to_string()),
            commands: wheel_moves(update.commands),
            year_labels: labels(selection.years()),
            month_labels: labels(selection.months()),
            day_labels: labels(selection.days()),
            accessibility_label: selection.accessibility_label(),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Opens a date picker session.
///
/// Input semantics:
/// - `initial`: starting date, `YYYY-MM-DD`.
/// - `min_date`: optional floor, `YYYY-MM-DD`; fixed for the session.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; malformed dates return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn date_picker_open(initial: String, min_date: Option<String>) -> DatePickerResponse {
    let initial = match parse_date("initial", &initial) {
        Ok(date) => date,
        Err(message) => return DatePickerResponse::failure(message),
    };
    let min_date = match min_date.as_deref().map(|raw| parse_date("min_date", raw)) {
        Some(Ok(date)) => Some(date),
        Some(Err(message)) => return DatePickerResponse::failure(message),
        None => None,
    };

    let session_id = Uuid::new_v4();
    let picker = DatePicker::new(initial, min_date, |_| {});
    let response =
        DatePickerResponse::from_picker(session_id, &picker, DatePickerUpdate::default());

    match with_registry(&PICKER_SESSIONS, |sessions| {
        sessions.insert(session_id, picker);
    }) {
        Ok(()) => {
            debug!("event=picker_session_open module=ffi session={session_id}");
            response
        }
        Err(message) => DatePickerResponse::failure(message),
    }
}

/// Reports the index a wheel settled on.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Echoes of previously returned `commands` are absorbed (`emitted = None`).
#[flutter_rust_bridge::frb(sync)]
pub fn date_picker_wheel_event(session_id: String, axis: String, index: u32) -> DatePickerResponse {
    let field = match parse_axis(&axis) {
        Ok(field) => field,
        Err(message) => return DatePickerResponse::failure(message),
    };
    with_picker(&session_id, |picker| {
        picker.handle_wheel_event(field, WheelEvent::IndexChanged(index as usize))
    })
}

/// Reports that the user touched a wheel.
///
/// Must be sent before the position reports of a user drag that starts while
/// a move command is still animating.
#[flutter_rust_bridge::frb(sync)]
pub fn date_picker_gesture(session_id: String, axis: String) -> DatePickerResponse {
    let field = match parse_axis(&axis) {
        Ok(field) => field,
        Err(message) => return DatePickerResponse::failure(message),
    };
    with_picker(&session_id, |picker| {
        picker.handle_wheel_event(field, WheelEvent::GestureStarted)
    })
}

/// Replaces the bound date from the UI side; never reported as `emitted`.
#[flutter_rust_bridge::frb(sync)]
pub fn date_picker_set_date(session_id: String, date: String) -> DatePickerResponse {
    let date = match parse_date("date", &date) {
        Ok(date) => date,
        Err(message) => return DatePickerResponse::failure(message),
    };
    with_picker(&session_id, |picker| picker.set_date(date))
}

/// Closes a picker session. Returns `false` when it was not open.
#[flutter_rust_bridge::frb(sync)]
pub fn date_picker_close(session_id: String) -> bool {
    close_session(&PICKER_SESSIONS, &session_id)
}

fn with_picker(
    session_id: &str,
    f: impl FnOnce(&mut DatePicker) -> DatePickerUpdate,
) -> DatePickerResponse {
    match with_session(&PICKER_SESSIONS, session_id, |id, picker| {
        let update = f(picker);
        DatePickerResponse::from_picker(id, picker, update)
    }) {
        Ok(response) => response,
        Err(message) => DatePickerResponse::failure(message),
    }
}

/// Confirm/dismiss dialog state envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateDialogResponse {
    pub ok: bool,
    pub session_id: Option<String>,
    /// `full_date|year_month`.
    pub kind: String,
    pub is_open: bool,
    /// Date a confirm would return right now.
    pub pending: Option<String>,
    /// Set only by `date_dialog_confirm`.
    pub confirmed: Option<String>,
    pub commands: Vec<WheelMove>,
    pub year_labels: Vec<String>,
    pub month_labels: Vec<String>,
    /// Empty for `year_month` dialogs, which hide the day wheel.
    pub day_labels: Vec<String>,
    pub accessibility_label: String,
    pub message: String,
}

impl DateDialogResponse {
    fn from_dialog(
        session_id: Uuid,
        dialog: &DateSelectionDialog,
        commands: Vec<WheelCommand<DateField>>,
        confirmed: Option<CalendarDate>,
    ) -> Self {
        let selection = dialog.picker().selection();
        let (day_labels, commands) = match dialog.kind() {
            DialogKind::FullDate => (labels(selection.days()), commands),
            DialogKind::YearMonth => (
                Vec::new(),
                commands
                    .into_iter()
                    .filter(|command| command.axis != DateField::Day)
                    .collect(),
            ),
        };
        Self {
            ok: true,
            session_id: Some(session_id.to_string()),
            kind: dialog_kind_str(dialog.kind()).to_string(),
            is_open: dialog.is_open(),
            pending: Some(dialog.pending().to_string()),
            confirmed: confirmed.map(|date| date.to_string()),
            commands: wheel_moves(commands),
            year_labels: labels(selection.years()),
            month_labels: labels(selection.months()),
            day_labels,
            accessibility_label: dialog.accessibility_label(),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Opens a confirm/dismiss date dialog.
///
/// Input semantics:
/// - `kind`: `full_date` (year, month and day wheels) or `year_month`
///   (receiver dialog: fixed years from 2026, day wheel hidden).
/// - `initial`: starting date, `YYYY-MM-DD`.
///
/// # FFI contract
/// - Sync call, in-memory only; reads the device date for `full_date`.
/// - Never panics; unknown kinds and malformed dates return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn date_dialog_open(kind: String, initial: String) -> DateDialogResponse {
    let kind = match parse_dialog_kind(&kind) {
        Ok(kind) => kind,
        Err(message) => return DateDialogResponse::failure(message),
    };
    let initial = match parse_date("initial", &initial) {
        Ok(date) => date,
        Err(message) => return DateDialogResponse::failure(message),
    };

    let session_id = Uuid::new_v4();
    let dialog = DateSelectionDialog::open(kind, initial, &SystemClock);
    let response = DateDialogResponse::from_dialog(session_id, &dialog, Vec::new(), None);

    match with_registry(&DIALOG_SESSIONS, |sessions| {
        sessions.insert(session_id, dialog);
    }) {
        Ok(()) => {
            debug!(
                "event=dialog_session_open module=ffi session={session_id} kind={}",
                response.kind
            );
            response
        }
        Err(message) => DateDialogResponse::failure(message),
    }
}

/// Reports the index a dialog wheel settled on.
///
/// Reports for the hidden day wheel of a `year_month` dialog are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn date_dialog_wheel_event(session_id: String, axis: String, index: u32) -> DateDialogResponse {
    let field = match parse_axis(&axis) {
        Ok(field) => field,
        Err(message) => return DateDialogResponse::failure(message),
    };
    with_dialog(&session_id, field, WheelEvent::IndexChanged(index as usize))
}

/// Reports that the user touched a dialog wheel.
#[flutter_rust_bridge::frb(sync)]
pub fn date_dialog_gesture(session_id: String, axis: String) -> DateDialogResponse {
    let field = match parse_axis(&axis) {
        Ok(field) => field,
        Err(message) => return DateDialogResponse::failure(message),
    };
    with_dialog(&session_id, field, WheelEvent::GestureStarted)
}

/// Confirms the pending date and closes the session.
///
/// `confirmed` carries the selection; the session id is invalid afterwards.
#[flutter_rust_bridge::frb(sync)]
pub fn date_dialog_confirm(session_id: String) -> DateDialogResponse {
    let result = parse_session_id(&session_id).and_then(|id| {
        with_registry(&DIALOG_SESSIONS, |sessions| sessions.remove(&id))?
            .map(|dialog| (id, dialog))
            .ok_or_else(|| format!("session not found: {id}"))
    });
    match result {
        Ok((id, mut dialog)) => {
            let confirmed = dialog.confirm();
            DateDialogResponse::from_dialog(id, &dialog, Vec::new(), confirmed)
        }
        Err(message) => DateDialogResponse::failure(message),
    }
}

/// Dismisses a dialog without a selection. Returns `false` when it was not
/// open.
#[flutter_rust_bridge::frb(sync)]
pub fn date_dialog_dismiss(session_id: String) -> bool {
    close_session(&DIALOG_SESSIONS, &session_id)
}

fn with_dialog(session_id: &str, field: DateField, event: WheelEvent) -> DateDialogResponse {
    match with_session(&DIALOG_SESSIONS, session_id, |id, dialog| {
        let commands = dialog
            .handle_wheel_event(field, event)
            .map(|update| update.commands)
            .unwrap_or_default();
        DateDialogResponse::from_dialog(id, dialog, commands, None)
    }) {
        Ok(response) => response,
        Err(message) => DateDialogResponse::failure(message),
    }
}

/// Send-time picker state envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimePickerResponse {
    pub ok: bool,
    pub session_id: Option<String>,
    /// Current 24-hour time, `HH:MM`.
    pub time: Option<String>,
    /// Time announced by this call, if the user changed it.
    pub emitted: Option<String>,
    pub commands: Vec<WheelMove>,
    pub meridiem_labels: Vec<String>,
    pub hour_labels: Vec<String>,
    pub minute_labels: Vec<String>,
    pub message: String,
}

impl TimePickerResponse {
    fn from_picker(
        session_id: Uuid,
        picker: &TimePicker,
        emitted: Option<ClockTime>,
        commands: Vec<WheelCommand<TimeField>>,
    ) -> Self {
        Self {
            ok: true,
            session_id: Some(session_id.to_string()),
            time: Some(picker.time().to_string()),
            emitted: emitted.map(|time| time.to_string()),
            commands: wheel_moves(commands),
            meridiem_labels: TimePicker::labels(TimeField::Meridiem),
            hour_labels: TimePicker::labels(TimeField::Hour),
            minute_labels: TimePicker::labels(TimeField::Minute),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Opens a send-time picker session.
///
/// Input semantics:
/// - `hour`: 24-hour hour; values above 23 clamp to 23.
/// - `minute`: values above 59 clamp to 59.
#[flutter_rust_bridge::frb(sync)]
pub fn time_picker_open(hour: u8, minute: u8) -> TimePickerResponse {
    let session_id = Uuid::new_v4();
    let picker = TimePicker::new(ClockTime::new(hour, minute), |_| {});
    let response = TimePickerResponse::from_picker(session_id, &picker, None, Vec::new());

    match with_registry(&TIME_SESSIONS, |sessions| {
        sessions.insert(session_id, picker);
    }) {
        Ok(()) => {
            debug!("event=time_session_open module=ffi session={session_id}");
            response
        }
        Err(message) => TimePickerResponse::failure(message),
    }
}

/// Reports the index a time wheel (`meridiem|hour|minute`) settled on.
#[flutter_rust_bridge::frb(sync)]
pub fn time_picker_wheel_event(session_id: String, axis: String, index: u32) -> TimePickerResponse {
    let field = match parse_time_axis(&axis) {
        Ok(field) => field,
        Err(message) => return TimePickerResponse::failure(message),
    };
    with_time_picker(&session_id, field, WheelEvent::IndexChanged(index as usize))
}

/// Reports that the user touched a time wheel.
#[flutter_rust_bridge::frb(sync)]
pub fn time_picker_gesture(session_id: String, axis: String) -> TimePickerResponse {
    let field = match parse_time_axis(&axis) {
        Ok(field) => field,
        Err(message) => return TimePickerResponse::failure(message),
    };
    with_time_picker(&session_id, field, WheelEvent::GestureStarted)
}

/// Closes a time picker session. Returns `false` when it was not open.
#[flutter_rust_bridge::frb(sync)]
pub fn time_picker_close(session_id: String) -> bool {
    close_session(&TIME_SESSIONS, &session_id)
}

fn with_time_picker(session_id: &str, field: TimeField, event: WheelEvent) -> TimePickerResponse {
    match with_session(&TIME_SESSIONS, session_id, |id, picker| {
        let update = picker.handle_wheel_event(field, event);
        TimePickerResponse::from_picker(id, picker, update.emitted, update.commands)
    }) {
        Ok(response) => response,
        Err(message) => TimePickerResponse::failure(message),
    }
}

fn with_session<S, R>(
    registry: &'static Registry<S>,
    session_id: &str,
    f: impl FnOnce(Uuid, &mut S) -> R,
) -> Result<R, String> {
    let id = parse_session_id(session_id)?;
    with_registry(registry, |sessions| sessions.get_mut(&id).map(|session| f(id, session)))?
        .ok_or_else(|| format!("session not found: {id}"))
}

fn close_session<S>(registry: &'static Registry<S>, session_id: &str) -> bool {
    let Ok(id) = parse_session_id(session_id) else {
        return false;
    };
    with_registry(registry, |sessions| sessions.remove(&id).is_some()).unwrap_or(false)
}

fn with_registry<S, T>(
    registry: &'static Registry<S>,
    f: impl FnOnce(&mut HashMap<Uuid, S>) -> T,
) -> Result<T, String> {
    let sessions = registry.get_or_init(|| Mutex::new(HashMap::new()));
    match sessions.lock() {
        Ok(mut guard) => Ok(f(&mut guard)),
        Err(_) => {
            warn!("event=picker_registry_poisoned module=ffi status=error");
            Err("picker session registry is unavailable".to_string())
        }
    }
}

fn wheel_moves<A: WheelAxis>(commands: Vec<WheelCommand<A>>) -> Vec<WheelMove> {
    commands
        .into_iter()
        .map(|command| WheelMove {
            axis: command.axis.as_str().to_string(),
            index: command.index as u32,
        })
        .collect()
}

fn labels<T: Display>(options: &[AxisOption<T>]) -> Vec<String> {
    options.iter().map(AxisOption::label).collect()
}

fn parse_session_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid session id `{raw}`: {err}"))
}

fn parse_date(name: &str, raw: &str) -> Result<CalendarDate, String> {
    raw.parse::<CalendarDate>()
        .map_err(|err| format!("invalid {name}: {err}"))
}

fn parse_axis(axis: &str) -> Result<DateField, String> {
    match axis.trim() {
        "year" => Ok(DateField::Year),
        "month" => Ok(DateField::Month),
        "day" => Ok(DateField::Day),
        other => Err(format!("unsupported wheel axis `{other}`; expected year|month|day")),
    }
}

fn parse_time_axis(axis: &str) -> Result<TimeField, String> {
    match axis.trim() {
        "meridiem" => Ok(TimeField::Meridiem),
        "hour" => Ok(TimeField::Hour),
        "minute" => Ok(TimeField::Minute),
        other => Err(format!(
            "unsupported wheel axis `{other}`; expected meridiem|hour|minute"
        )),
    }
}

fn parse_dialog_kind(kind: &str) -> Result<DialogKind, String> {
    match kind.trim() {
        "full_date" => Ok(DialogKind::FullDate),
        "year_month" => Ok(DialogKind::YearMonth),
        other => Err(format!(
            "unsupported dialog kind `{other}`; expected full_date|year_month"
        )),
    }
}

fn dialog_kind_str(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::FullDate => "full_date",
        DialogKind::YearMonth => "year_month",
    }
}
