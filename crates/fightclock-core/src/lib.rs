//! # Fightclock Core Library
//!
//! Core logic for Fightclock, a segmented countdown timer for scripted
//! debate-style events (the built-in script is an IYPT-style physics fight).
//! The library is interface-agnostic: it never touches a terminal, an audio
//! device, or the wall clock on its own -- the caller supplies `Instant`
//! values and periodically pumps the session, and every state change comes
//! back as an [`Event`] for the interface layer to act on.
//!
//! ## Architecture
//!
//! - **Script**: the fixed, ordered list of timed segments, with one
//!   designated segment carrying a nested shot clock
//! - **Segment timers**: one independent state machine per segment, driven
//!   by discrete one-second ticks; multiple timers may run at once
//! - **Carousel**: the one-segment-at-a-time view position with clamped
//!   prev/next navigation
//! - **Session**: one running event; owns the timers and the carousel and
//!   routes interface commands to them
//!
//! ## Key Components
//!
//! - [`Script`]: segment catalog with the built-in [`Script::physics_fight`]
//! - [`SegmentTimer`]: per-segment countdown state machine
//! - [`Session`]: command surface the interface layer drives
//! - [`Event`]: timestamped notifications (completion rings the alarm,
//!   reset silences it)

pub mod carousel;
pub mod error;
pub mod events;
pub mod script;
pub mod session;
pub mod timer;

pub use carousel::Carousel;
pub use error::ScriptError;
pub use events::Event;
pub use script::{Script, Segment, ShotClockRule};
pub use session::Session;
pub use timer::{Controls, PauseLabel, SegmentTimer, ShotClock, TimerState};
