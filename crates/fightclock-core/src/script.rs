use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

/// Index of the discussion segment that carries the shot clock.
pub const SHOT_CLOCK_SEGMENT: usize = 4;

/// Shot clock limit in seconds (5 minutes).
pub const SHOT_CLOCK_SECS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Duration in whole minutes.
    pub minutes: u64,
    pub description: String,
}

impl Segment {
    /// Segment duration in seconds.
    pub fn total_secs(&self) -> u64 {
        self.minutes.saturating_mul(60)
    }

    /// Human-readable duration, singular below two minutes.
    pub fn duration_label(&self) -> String {
        let unit = if self.minutes <= 1 { "minute" } else { "minutes" };
        format!("{} {}", self.minutes, unit)
    }
}

/// Attaches a nested countdown to one segment of the script.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotClockRule {
    pub segment_index: usize,
    pub limit_secs: u64,
}

/// The ordered segment catalog for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub segments: Vec<Segment>,
    pub shot_clock: Option<ShotClockRule>,
}

impl Script {
    pub fn new(
        segments: Vec<Segment>,
        shot_clock: Option<ShotClockRule>,
    ) -> Result<Self, ScriptError> {
        if segments.is_empty() {
            return Err(ScriptError::Empty);
        }
        if let Some(rule) = shot_clock {
            if rule.segment_index >= segments.len() {
                return Err(ScriptError::ShotClockOutOfRange {
                    index: rule.segment_index,
                    len: segments.len(),
                });
            }
        }
        Ok(Self {
            segments,
            shot_clock,
        })
    }

    /// The standard physics fight stage plan. The opponent-led discussion
    /// additionally carries a five-minute shot clock.
    pub fn physics_fight() -> Self {
        let seg = |minutes: u64, description: &str| Segment {
            minutes,
            description: description.into(),
        };
        Self {
            segments: vec![
                seg(2, "Reporter prepares presentation"),
                seg(10, "Reporter presents"),
                seg(2, "Opponent questions reporter"),
                seg(4, "Opponent prepares presentation"),
                seg(12, "Opponent leads discussion with reporter"),
                seg(1, "Opponent summarises"),
                seg(1, "Reporter concludes"),
                seg(10, "Jurors question"),
                seg(5, "Jurors write comments and scores"),
                seg(5, "Open scoring, comments and feedback"),
            ],
            shot_clock: Some(ShotClockRule {
                segment_index: SHOT_CLOCK_SEGMENT,
                limit_secs: SHOT_CLOCK_SECS,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_duration_min(&self) -> u64 {
        self.segments.iter().map(|s| s.minutes).sum()
    }

    /// Shot clock limit for the given segment, if the rule targets it.
    pub fn shot_clock_for(&self, index: usize) -> Option<u64> {
        self.shot_clock
            .filter(|rule| rule.segment_index == index)
            .map(|rule| rule.limit_secs)
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::physics_fight()
    }
}
