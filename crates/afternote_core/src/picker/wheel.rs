//! Per-axis wheel synchronization.
//!
//! # Responsibility
//! - Own the authoritative current index of one wheel.
//! - Turn target indices into explicit move commands for the host.
//! - Tell the host's echo of a move command apart from user scrolling.
//!
//! # Invariants
//! - At most one move command is in flight per axis (`commanded`).
//! - A reported index equal to the in-flight command is an echo and is
//!   never forwarded as user input.
//! - A user gesture or a differing report clears the in-flight marker.
//! - Indices are clamped into `0..item_count`; nothing here returns errors.

use crate::calendar::DateField;
use log::{debug, trace, warn};
use std::fmt::Debug;

/// Identifies one wheel of a picker in logs and commands.
pub trait WheelAxis: Copy + Debug {
    fn as_str(self) -> &'static str;
}

impl WheelAxis for DateField {
    fn as_str(self) -> &'static str {
        DateField::as_str(self)
    }
}

/// Notification reported by the host's wheel widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    /// The wheel settled on an index.
    IndexChanged(usize),
    /// The user touched or started dragging the wheel.
    GestureStarted,
}

/// "Move the wheel to `index`" request returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelCommand<A> {
    pub axis: A,
    pub index: usize,
}

/// Reconciliation state of one wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelSyncState {
    /// The wheel shows the authoritative index.
    Idle,
    /// A move command is in flight and its echo has not arrived yet.
    Reconciling { commanded: usize },
}

/// Synchronizes one wheel with its picker.
#[derive(Debug, Clone)]
pub struct WheelSyncController<A> {
    axis: A,
    item_count: usize,
    current_index: usize,
    commanded: Option<usize>,
}

impl<A: WheelAxis> WheelSyncController<A> {
    /// Creates an idle controller already showing `index`.
    pub fn new(axis: A, index: usize, item_count: usize) -> Self {
        let mut controller = Self {
            axis,
            item_count: item_count.max(1),
            current_index: 0,
            commanded: None,
        };
        controller.current_index = controller.clamp_index(index, "initial");
        controller
    }

    pub fn axis(&self) -> A {
        self.axis
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn state(&self) -> WheelSyncState {
        match self.commanded {
            Some(commanded) => WheelSyncState::Reconciling { commanded },
            None => WheelSyncState::Idle,
        }
    }

    /// Moves the wheel toward `target` after its candidate list changed.
    ///
    /// Returns a command only when the wheel is not already at, or moving to,
    /// `target`.
    pub fn sync_to(&mut self, target: usize, item_count: usize) -> Option<WheelCommand<A>> {
        self.item_count = item_count.max(1);
        let target = self.clamp_index(target, "sync_target");

        if target == self.current_index {
            return None;
        }

        self.commanded = Some(target);
        self.current_index = target;
        trace!(
            "event=wheel_command module=picker axis={} index={}",
            self.axis.as_str(),
            target
        );
        Some(WheelCommand {
            axis: self.axis,
            index: target,
        })
    }

    /// Classifies one wheel notification.
    ///
    /// Returns `Some(index)` when the notification is user input the picker
    /// must act on; echoes and gestures return `None`.
    pub fn handle(&mut self, event: WheelEvent) -> Option<usize> {
        match event {
            WheelEvent::GestureStarted => {
                if let Some(commanded) = self.commanded.take() {
                    debug!(
                        "event=wheel_command_superseded module=picker axis={} commanded={} cause=gesture",
                        self.axis.as_str(),
                        commanded
                    );
                }
                None
            }
            WheelEvent::IndexChanged(reported) => {
                let reported = self.clamp_index(reported, "reported");
                if self.commanded == Some(reported) {
                    self.commanded = None;
                    self.current_index = reported;
                    trace!(
                        "event=wheel_echo_dropped module=picker axis={} index={}",
                        self.axis.as_str(),
                        reported
                    );
                    return None;
                }

                if let Some(commanded) = self.commanded.take() {
                    debug!(
                        "event=wheel_command_superseded module=picker axis={} commanded={} reported={}",
                        self.axis.as_str(),
                        commanded,
                        reported
                    );
                }
                self.current_index = reported;
                Some(reported)
            }
        }
    }

    fn clamp_index(&self, index: usize, source: &str) -> usize {
        let last = self.item_count - 1;
        if index > last {
            warn!(
                "event=wheel_index_clamped module=picker axis={} source={} index={} last={}",
                self.axis.as_str(),
                source,
                index,
                last
            );
            return last;
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::{DateField, WheelCommand, WheelEvent, WheelSyncController, WheelSyncState};

    #[test]
    fn new_clamps_initial_index() {
        let wheel = WheelSyncController::new(DateField::Day, 40, 30);
        assert_eq!(wheel.current_index(), 29);
        assert_eq!(wheel.state(), WheelSyncState::Idle);
    }

    #[test]
    fn in_flight_target_is_not_recommanded() {
        let mut wheel = WheelSyncController::new(DateField::Month, 0, 12);
        assert_eq!(
            wheel.sync_to(3, 12),
            Some(WheelCommand {
                axis: DateField::Month,
                index: 3
            })
        );
        assert_eq!(wheel.sync_to(3, 12), None);
        assert_eq!(wheel.state(), WheelSyncState::Reconciling { commanded: 3 });
    }

    #[test]
    fn shrinking_list_moves_wheel_to_last_item() {
        let mut wheel = WheelSyncController::new(DateField::Day, 30, 31);
        let command = wheel.sync_to(30, 30).expect("index 30 no longer exists");
        assert_eq!(command.index, 29);
    }

    #[test]
    fn out_of_range_report_is_clamped_not_propagated() {
        let mut wheel = WheelSyncController::new(DateField::Year, 0, 11);
        assert_eq!(wheel.handle(WheelEvent::IndexChanged(99)), Some(10));
        assert_eq!(wheel.current_index(), 10);
    }
}
