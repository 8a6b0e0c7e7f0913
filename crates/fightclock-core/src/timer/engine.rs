//! Segment timer implementation.
//!
//! Each segment of the script gets its own independent timer: a discrete
//! state machine driven by one-second ticks. It owns no thread and never
//! sleeps. While running it stores the deadline of its next tick, and the
//! caller pumps it with the current `Instant`; pausing or resetting clears
//! the deadline, so no tick can fire after either call returns.
//!
//! ## State Transitions
//!
//! ```text
//! Initial -> Running <-> Paused
//!              |
//!              v
//!           Complete
//!
//! reset() returns any state to Initial.
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SegmentTimer::new(0, "Reporter presents".into(), 600, None);
//! timer.start(Instant::now());
//! // In a loop:
//! for event in timer.pump(Instant::now()) { /* ring the alarm, log, ... */ }
//! ```

use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::format_clock;
use super::shot_clock::ShotClock;
use crate::events::Event;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Remaining time at or below which the low-time warning shows.
pub const LOW_TIME_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Initial,
    Running,
    Paused,
    Complete,
}

/// Label for the pause control, which doubles as resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseLabel {
    Pause,
    Resume,
}

impl PauseLabel {
    pub fn text(self) -> &'static str {
        match self {
            PauseLabel::Pause => "Pause",
            PauseLabel::Resume => "Resume",
        }
    }
}

/// Which controls an interface should offer for a timer in its current
/// state. Purely a view concern; command guards do not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: Option<PauseLabel>,
    pub reset: bool,
}

/// Countdown timer for a single segment.
///
/// Operates on discrete one-second ticks -- no internal thread. The caller
/// is responsible for calling `pump()` with the current instant.
#[derive(Debug, Clone)]
pub struct SegmentTimer {
    index: usize,
    description: String,
    total_secs: u64,
    remaining_secs: u64,
    state: TimerState,
    shot_clock: Option<ShotClock>,
    /// Deadline of the next scheduled tick. `Some` exactly while running;
    /// clearing it is what cancels the countdown.
    deadline: Option<Instant>,
}

impl SegmentTimer {
    /// Create a timer in the `Initial` state with the full duration ahead
    /// of it. `shot_clock_secs` attaches a nested countdown, present only
    /// on the one designated segment of a script.
    pub fn new(
        index: usize,
        description: String,
        total_secs: u64,
        shot_clock_secs: Option<u64>,
    ) -> Self {
        Self {
            index,
            description,
            total_secs,
            remaining_secs: total_secs,
            state: TimerState::Initial,
            shot_clock: shot_clock_secs.map(ShotClock::new),
            deadline: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn shot_clock(&self) -> Option<&ShotClock> {
        self.shot_clock.as_ref()
    }

    /// Zero-padded `MM:SS` for the remaining time.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// 0.0 .. 100.0 elapsed share of the segment.
    /// A zero-duration segment reports 0%, never a division by zero.
    pub fn progress_pct(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        let elapsed = self.total_secs.saturating_sub(self.remaining_secs) as f64;
        (elapsed / self.total_secs as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// True exactly while `0 < remaining <= LOW_TIME_SECS`. Clears again
    /// at zero, so a completed timer shows no warning.
    pub fn low_time(&self) -> bool {
        self.remaining_secs > 0 && self.remaining_secs <= LOW_TIME_SECS
    }

    /// Deadline of the next tick, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn controls(&self) -> Controls {
        match self.state {
            TimerState::Initial => Controls {
                start: true,
                pause: None,
                reset: false,
            },
            TimerState::Running => Controls {
                start: false,
                pause: Some(PauseLabel::Pause),
                reset: true,
            },
            TimerState::Paused => Controls {
                start: false,
                pause: Some(PauseLabel::Resume),
                reset: true,
            },
            TimerState::Complete => Controls {
                start: false,
                pause: None,
                reset: true,
            },
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the countdown, or resume a paused one. No-op while a tick is
    /// already scheduled or after completion, so a timer never
    /// double-schedules.
    pub fn start(&mut self, now: Instant) -> Option<Event> {
        match self.state {
            TimerState::Initial => {
                self.state = TimerState::Running;
                self.deadline = Some(now + TICK_INTERVAL);
                Some(Event::SegmentStarted {
                    index: self.index,
                    description: self.description.clone(),
                    duration_secs: self.total_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.deadline = Some(now + TICK_INTERVAL);
                Some(Event::SegmentResumed {
                    index: self.index,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running | TimerState::Complete => None,
        }
    }

    /// Pause a running countdown; called again while paused, resumes it.
    /// One command covers both directions. No effect when initial or
    /// complete.
    pub fn pause(&mut self, now: Instant) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                self.deadline = None;
                Some(Event::SegmentPaused {
                    index: self.index,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => self.start(now),
            TimerState::Initial | TimerState::Complete => None,
        }
    }

    /// Spacebar semantics: pause while running, otherwise try to start.
    pub fn toggle(&mut self, now: Instant) -> Option<Event> {
        match self.state {
            TimerState::Running => self.pause(now),
            _ => self.start(now),
        }
    }

    /// Return to the initial state: full duration restored, shot clock
    /// rewound and rearmed, no tick scheduled. Always emits
    /// [`Event::SegmentReset`] so the shared alarm gets silenced even if
    /// this timer never rang it.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Initial;
        self.remaining_secs = self.total_secs;
        self.deadline = None;
        if let Some(clock) = self.shot_clock.as_mut() {
            clock.rewind();
        }
        Event::SegmentReset {
            index: self.index,
            at: Utc::now(),
        }
    }

    /// Fire every tick whose deadline has passed. Safe to call as often as
    /// the caller likes; after a stall it catches up one second at a time,
    /// so no countdown progress is ever lost.
    pub fn pump(&mut self, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(due) = self.deadline {
            if due > now {
                break;
            }
            events.extend(self.tick());
            if self.state == TimerState::Running {
                self.deadline = Some(due + TICK_INTERVAL);
            }
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// One second elapses. Completion fires within the tick that reaches
    /// zero, so a fresh two-minute timer completes on its 120th tick.
    fn tick(&mut self) -> Vec<Event> {
        if self.state != TimerState::Running {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if let Some(clock) = self.shot_clock.as_mut() {
            if clock.tick() {
                events.push(Event::ShotClockExpired {
                    index: self.index,
                    at: Utc::now(),
                });
            }
        }
        if self.remaining_secs == 0 {
            self.state = TimerState::Complete;
            self.deadline = None;
            events.push(Event::SegmentCompleted {
                index: self.index,
                description: self.description.clone(),
                at: Utc::now(),
            });
        }
        events
    }
}
