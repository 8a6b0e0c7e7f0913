use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every observable state change in a session produces an Event.
/// The interface layer consumes them to ring or silence the alarm
/// and to keep its log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SegmentStarted {
        index: usize,
        description: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SegmentPaused {
        index: usize,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SegmentResumed {
        index: usize,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A segment counted down to zero. Rings the shared alarm.
    SegmentCompleted {
        index: usize,
        description: String,
        at: DateTime<Utc>,
    },
    /// A segment went back to its initial state. Silences the alarm.
    SegmentReset {
        index: usize,
        at: DateTime<Utc>,
    },
    /// The nested shot clock inside a running segment ran out.
    /// Fires at most once per segment until that segment is reset.
    ShotClockExpired {
        index: usize,
        at: DateTime<Utc>,
    },
}
