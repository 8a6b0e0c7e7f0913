//! One running event: the script's timers plus the carousel position.
//!
//! The session is the command surface an interface layer drives. Commands
//! address whichever timer the carousel currently shows; navigation moves
//! the carousel and nothing else, so hidden timers keep counting. All
//! state changes come back as [`Event`]s.

use std::time::Instant;

use crate::carousel::Carousel;
use crate::events::Event;
use crate::script::Script;
use crate::timer::SegmentTimer;

#[derive(Debug, Clone)]
pub struct Session {
    script: Script,
    timers: Vec<SegmentTimer>,
    carousel: Carousel,
}

impl Session {
    /// Instantiate one timer per script segment, carousel on the first.
    pub fn new(script: Script) -> Self {
        let timers = script
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                SegmentTimer::new(
                    index,
                    segment.description.clone(),
                    segment.total_secs(),
                    script.shot_clock_for(index),
                )
            })
            .collect::<Vec<_>>();
        let carousel = Carousel::new(timers.len());
        Self {
            script,
            timers,
            carousel,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn timers(&self) -> &[SegmentTimer] {
        &self.timers
    }

    /// The timer the carousel currently shows. `None` only for a script
    /// that was constructed empty by hand.
    pub fn current(&self) -> Option<&SegmentTimer> {
        self.timers.get(self.carousel.index())
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Show the next segment. Clamped at the end; timers are untouched.
    pub fn next_segment(&mut self) -> bool {
        self.carousel.next()
    }

    /// Show the previous segment. Clamped at the start.
    pub fn prev_segment(&mut self) -> bool {
        self.carousel.prev()
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.carousel.jump_to(index)
    }

    // ── Commands for the visible timer ───────────────────────────────

    pub fn start_current(&mut self, now: Instant) -> Option<Event> {
        self.current_mut()?.start(now)
    }

    pub fn pause_current(&mut self, now: Instant) -> Option<Event> {
        self.current_mut()?.pause(now)
    }

    pub fn toggle_current(&mut self, now: Instant) -> Option<Event> {
        self.current_mut()?.toggle(now)
    }

    pub fn reset_current(&mut self) -> Option<Event> {
        Some(self.current_mut()?.reset())
    }

    // ── Ticking ──────────────────────────────────────────────────────

    /// Pump every timer, visible or not. Multiple segments may be counting
    /// at once; events come back in segment order.
    pub fn pump(&mut self, now: Instant) -> Vec<Event> {
        self.timers
            .iter_mut()
            .flat_map(|timer| timer.pump(now))
            .collect()
    }

    fn current_mut(&mut self) -> Option<&mut SegmentTimer> {
        self.timers.get_mut(self.carousel.index())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Script::default())
    }
}
