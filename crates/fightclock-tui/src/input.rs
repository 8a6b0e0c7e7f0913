//! Global key bindings.
//!
//! Arrows move the carousel, space drives the visible timer, `r` resets
//! it. The bindings are active regardless of which segment is shown.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PrevSegment,
    NextSegment,
    /// Pause the visible timer if running, otherwise start it.
    ToggleCurrent,
    ResetCurrent,
    Quit,
}

/// Map a key press to a command. Release events are ignored so terminals
/// reporting them do not double-fire.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Left => Some(Command::PrevSegment),
        KeyCode::Right => Some(Command::NextSegment),
        KeyCode::Char(' ') => Some(Command::ToggleCurrent),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ResetCurrent),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
