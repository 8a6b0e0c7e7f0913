use serde::{Deserialize, Serialize};

use super::format_clock;

/// Nested countdown attached to a single segment.
///
/// Counts down in lockstep with the owning timer's ticks and latches once
/// it first reaches zero. The latch survives pauses; only a segment reset
/// rearms it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotClock {
    limit_secs: u64,
    remaining_secs: u64,
    expired: bool,
}

impl ShotClock {
    pub fn new(limit_secs: u64) -> Self {
        Self {
            limit_secs,
            remaining_secs: limit_secs,
            expired: false,
        }
    }

    pub fn limit_secs(&self) -> u64 {
        self.limit_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// True once the clock has run out. Never reverts except via rewind.
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Zero-padded `MM:SS` for the remaining time.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Advance one second. Returns true on the tick that trips the latch.
    pub(crate) fn tick(&mut self) -> bool {
        if self.expired {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.expired = true;
            return true;
        }
        false
    }

    pub(crate) fn rewind(&mut self) {
        self.remaining_secs = self.limit_secs;
        self.expired = false;
    }
}
