//! Application state: one session wired to the shared alarm.
//!
//! Commands from the key router go to the session; every event that comes
//! back drives the alarm (completion plays it, reset silences it) and is
//! logged as one JSON line.

use std::time::Instant;

use fightclock_core::{Event, Session};
use ratatui::crossterm::event::KeyEvent;

use crate::alarm::AlarmSink;
use crate::input::{self, Command};

pub struct App {
    session: Session,
    alarm: Box<dyn AlarmSink>,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session, alarm: Box<dyn AlarmSink>) -> Self {
        Self {
            session,
            alarm,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(command) = input::command_for(key) {
            self.apply(command, now);
        }
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        let event = match command {
            Command::PrevSegment => {
                self.session.prev_segment();
                None
            }
            Command::NextSegment => {
                self.session.next_segment();
                None
            }
            Command::ToggleCurrent => self.session.toggle_current(now),
            Command::ResetCurrent => self.session.reset_current(),
            Command::Quit => {
                self.should_quit = true;
                None
            }
        };
        if let Some(event) = event {
            self.handle_event(event);
        }
    }

    /// Advance every timer to `now` and react to whatever fired.
    pub fn pump(&mut self, now: Instant) {
        for event in self.session.pump(now) {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: Event) {
        match &event {
            Event::SegmentCompleted { .. } => self.alarm.play_from_start(),
            Event::SegmentReset { .. } => self.alarm.stop_and_rewind(),
            _ => {}
        }
        match serde_json::to_string(&event) {
            Ok(line) => log::info!("{line}"),
            Err(e) => log::debug!("unloggable event: {e}"),
        }
    }
}
