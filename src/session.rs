//! Session liveness state: warning flag and inactivity counter.
//!
//! Owned by the dashboard controller; every mutation goes through these
//! methods so the poll and the inactivity tick share one warning guard.

/// Input events that count as user activity.
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionController {
    warning_shown: bool,
    idle_minutes: u32,
    warn_after_minutes: u32,
}

impl SessionController {
    pub fn new(warn_after_minutes: u32) -> Self {
        Self {
            warning_shown: false,
            idle_minutes: 0,
            warn_after_minutes,
        }
    }

    pub fn warning_shown(&self) -> bool {
        self.warning_shown
    }

    pub fn idle_minutes(&self) -> u32 {
        self.idle_minutes
    }

    /// Any user input resets the idle counter.
    pub fn note_activity(&mut self) {
        self.idle_minutes = 0;
    }

    /// Advance the idle counter by one minute.
    ///
    /// Returns true exactly when the counter lands on the warning threshold
    /// and no warning is currently shown.
    pub fn tick(&mut self) -> bool {
        self.idle_minutes = self.idle_minutes.saturating_add(1);
        self.idle_minutes == self.warn_after_minutes && !self.warning_shown
    }

    /// Claim the warning. Returns false if it is already shown.
    pub fn mark_warned(&mut self) -> bool {
        if self.warning_shown {
            return false;
        }
        self.warning_shown = true;
        true
    }

    /// Session extended: clear the warning and start idling from zero.
    pub fn reset(&mut self) {
        self.warning_shown = false;
        self.idle_minutes = 0;
    }
}
