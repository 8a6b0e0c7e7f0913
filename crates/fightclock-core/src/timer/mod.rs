mod engine;
mod shot_clock;

pub use engine::{
    Controls, PauseLabel, SegmentTimer, TimerState, LOW_TIME_SECS, TICK_INTERVAL,
};
pub use shot_clock::ShotClock;

/// Format whole seconds as zero-padded `MM:SS`.
pub(crate) fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
