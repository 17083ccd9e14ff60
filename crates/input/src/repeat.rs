//! One-shot key-repeat scheduling.

use std::time::{Duration, Instant};

use klava_core::KeyCode;

/// Schedules one delayed re-fire per key press.
///
/// Arming pushes a deadline entry; `due` hands back the keys whose deadline
/// has passed and drops them, so each press re-fires at most once. Whether
/// the key is still held at fire time is the caller's check, matching the
/// rest of the held-state bookkeeping.
#[derive(Debug, Clone)]
pub struct RepeatTimer {
    delay: Duration,
    pending: Vec<(KeyCode, Instant)>,
}

impl RepeatTimer {
    pub fn new(delay: Duration) -> Self {
        RepeatTimer {
            delay,
            pending: Vec::new(),
        }
    }

    /// Schedule a re-fire for `code`, `delay` after `now`.
    pub fn arm(&mut self, code: KeyCode, now: Instant) {
        self.pending.push((code, now + self.delay));
    }

    /// Cancel pending re-fires for `code`.
    pub fn cancel(&mut self, code: KeyCode) {
        self.pending.retain(|(pending, _)| *pending != code);
    }

    /// Keys whose deadline has passed, removed from the schedule.
    pub fn due(&mut self, now: Instant) -> Vec<KeyCode> {
        let mut fired = Vec::new();
        self.pending.retain(|(code, deadline)| {
            if *deadline <= now {
                fired.push(*code);
                false
            } else {
                true
            }
        });
        fired
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Whether nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
