//! Property-based tests for timer and carousel invariants.
//!
//! Pump schedules are randomized so the countdown invariants hold no
//! matter how erratically an interface polls: fast pollers, stalled
//! pollers, and everything in between.

use std::time::{Duration, Instant};

use fightclock_core::{Carousel, Event, SegmentTimer, TimerState};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Seconds between successive pump calls. Zero steps model a caller that
/// polls faster than the clock moves.
fn pump_schedule() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..=7, 1..60)
}

/// Carousel moves: true is next, false is prev.
fn nav_moves() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..100)
}

fn timer(total_secs: u64) -> SegmentTimer {
    SegmentTimer::new(0, "segment".into(), total_secs, None)
}

// ============================================================================
// Countdown Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Remaining time never increases while running, and floors at zero.
    #[test]
    fn remaining_is_monotonic(total in 0u64..400, steps in pump_schedule()) {
        let t0 = Instant::now();
        let mut t = timer(total);
        t.start(t0);
        let mut elapsed = 0u64;
        let mut last = t.remaining_secs();
        for step in steps {
            elapsed += step;
            t.pump(t0 + Duration::from_secs(elapsed));
            let remaining = t.remaining_secs();
            prop_assert!(remaining <= last,
                "remaining went {} -> {} at {}s", last, remaining, elapsed);
            last = remaining;
        }
    }

    /// Progress stays within [0, 100]; the low-time flag holds exactly on
    /// 0 < remaining <= 10; zero remaining means the timer completed.
    #[test]
    fn display_state_is_consistent(total in 0u64..400, steps in pump_schedule()) {
        let t0 = Instant::now();
        let mut t = timer(total);
        t.start(t0);
        let mut elapsed = 0u64;
        for step in steps {
            elapsed += step;
            t.pump(t0 + Duration::from_secs(elapsed));
            let pct = t.progress_pct();
            prop_assert!((0.0..=100.0).contains(&pct), "progress {} out of bounds", pct);
            let remaining = t.remaining_secs();
            prop_assert_eq!(t.low_time(), remaining > 0 && remaining <= 10);
            if remaining == 0 && elapsed > 0 {
                prop_assert_eq!(t.state(), TimerState::Complete);
                prop_assert!(t.next_deadline().is_none());
            }
        }
    }

    /// However the caller pumps, completion fires exactly once per run.
    #[test]
    fn completion_fires_exactly_once(total in 1u64..200, steps in pump_schedule()) {
        let t0 = Instant::now();
        let mut t = timer(total);
        t.start(t0);
        let mut completions = 0usize;
        let mut elapsed = 0u64;
        for step in steps {
            elapsed += step;
            completions += t
                .pump(t0 + Duration::from_secs(elapsed))
                .iter()
                .filter(|e| matches!(e, Event::SegmentCompleted { .. }))
                .count();
        }
        // One last pump far past the end settles any unfinished countdown.
        completions += t
            .pump(t0 + Duration::from_secs(elapsed + total + 5))
            .iter()
            .filter(|e| matches!(e, Event::SegmentCompleted { .. }))
            .count();
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(t.state(), TimerState::Complete);
    }

    /// A paused timer is frozen no matter how long the caller waits.
    #[test]
    fn paused_timer_is_frozen(total in 30u64..400, run in 1u64..29, wait in 1u64..500) {
        let t0 = Instant::now();
        let mut t = timer(total);
        t.start(t0);
        t.pump(t0 + Duration::from_secs(run));
        t.pause(t0 + Duration::from_secs(run));
        let frozen = t.remaining_secs();
        prop_assert_eq!(frozen, total - run);

        let events = t.pump(t0 + Duration::from_secs(run + wait));
        prop_assert!(events.is_empty());
        prop_assert_eq!(t.remaining_secs(), frozen);
        prop_assert_eq!(t.state(), TimerState::Paused);
    }

    /// Reset restores the full duration and zero progress from any point.
    #[test]
    fn reset_restores_initial(total in 1u64..400, steps in pump_schedule()) {
        let t0 = Instant::now();
        let mut t = timer(total);
        t.start(t0);
        let mut elapsed = 0u64;
        for step in steps {
            elapsed += step;
            t.pump(t0 + Duration::from_secs(elapsed));
        }
        t.reset();
        prop_assert_eq!(t.state(), TimerState::Initial);
        prop_assert_eq!(t.remaining_secs(), total);
        prop_assert_eq!(t.progress_pct(), 0.0);
        prop_assert!(t.next_deadline().is_none());
    }
}

// ============================================================================
// Shot Clock Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The expiry latch never reverts while running, and an expired clock
    /// pins its remaining time at zero.
    #[test]
    fn shot_clock_latch_is_one_way(steps in pump_schedule()) {
        let t0 = Instant::now();
        let mut t = SegmentTimer::new(4, "discussion".into(), 720, Some(300));
        t.start(t0);
        let mut elapsed = 0u64;
        let mut was_expired = false;
        for step in steps {
            elapsed += step;
            t.pump(t0 + Duration::from_secs(elapsed));
            let clock = *t.shot_clock().unwrap();
            if was_expired {
                prop_assert!(clock.expired(), "latch reverted at {}s", elapsed);
            }
            if clock.expired() {
                prop_assert_eq!(clock.remaining_secs(), 0);
            }
            prop_assert!(clock.remaining_secs() <= 300);
            was_expired = clock.expired();
        }
    }
}

// ============================================================================
// Carousel Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The index stays in range and boundary moves are no-ops.
    #[test]
    fn carousel_index_stays_in_range(len in 1usize..20, moves in nav_moves()) {
        let mut c = Carousel::new(len);
        for forward in moves {
            let at_first = c.at_first();
            let at_last = c.at_last();
            let moved = if forward { c.next() } else { c.prev() };
            prop_assert!(c.index() < len, "index {} escaped 0..{}", c.index(), len);
            if forward && at_last {
                prop_assert!(!moved);
            }
            if !forward && at_first {
                prop_assert!(!moved);
            }
        }
    }
}

// ============================================================================
// Clock Text Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// `MM:SS` text always parses back to the seconds it was built from.
    #[test]
    fn clock_text_round_trips(secs in 0u64..36_000) {
        let t = timer(secs);
        let text = t.clock();
        let (minutes, seconds) = text.split_once(':').unwrap();
        prop_assert!(minutes.len() >= 2, "minutes not zero-padded: {}", text);
        prop_assert_eq!(seconds.len(), 2, "seconds not two digits: {}", text);
        let parsed = minutes.parse::<u64>().unwrap() * 60 + seconds.parse::<u64>().unwrap();
        prop_assert_eq!(parsed, secs);
    }
}
