//! Rendering for the one-segment-at-a-time view.
//!
//! Exactly the segment under the carousel is drawn; hidden timers keep
//! their state off screen. Control hints mirror the visible timer's
//! state, so space reads Start, Pause or Resume as appropriate.

use fightclock_core::{SegmentTimer, ShotClock, TimerState};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::App;

const ACCENT: Color = Color::Cyan;

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Segment card
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    if let Some(timer) = app.session().current() {
        let subtitle = app
            .session()
            .script()
            .segments
            .get(timer.index())
            .map(|s| s.duration_label())
            .unwrap_or_default();
        render_segment(f, timer, &subtitle, chunks[1]);
    }
    render_footer(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let carousel = app.session().carousel();
    let position = format!("Segment {} of {}", carousel.index() + 1, carousel.len());
    let header = Paragraph::new(position)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(
                    " FIGHTCLOCK ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(header, area);
}

fn render_segment(f: &mut Frame, timer: &SegmentTimer, subtitle: &str, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Length(2), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Clock
            Constraint::Length(2), // Shot clock
            Constraint::Length(2), // Status
            Constraint::Length(3), // Progress bar
            Constraint::Length(1),
            Constraint::Length(2), // Controls
            Constraint::Percentage(10),
        ])
        .split(area);

    let title = Paragraph::new(segment_title(timer))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, sections[1]);

    let subtitle = Paragraph::new(subtitle.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, sections[2]);

    // The countdown turns red for the final ten seconds.
    let clock_style = if timer.low_time() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let clock = Paragraph::new(timer.clock())
        .style(clock_style)
        .alignment(Alignment::Center);
    f.render_widget(clock, sections[4]);

    if let Some(shot) = timer.shot_clock() {
        let style = if shot.expired() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let line = Paragraph::new(shot_clock_text(shot))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(line, sections[5]);
    }

    let (word, color) = status(timer.state());
    let status = Paragraph::new(word)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(status, sections[6]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .ratio(timer.progress_pct() / 100.0)
        .label(format!("{:.0}%", timer.progress_pct()));
    f.render_widget(gauge, sections[7]);

    let controls = Paragraph::new(control_hint(timer))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(controls, sections[9]);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let carousel = app.session().carousel();
    let dim = Style::default().fg(Color::DarkGray);
    let live = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    // Navigation hints dim out at the ends of the script.
    let line = Line::from(vec![
        Span::styled("< Prev", if carousel.at_first() { dim } else { live }),
        Span::raw("   "),
        Span::styled("Next >", if carousel.at_last() { dim } else { live }),
        Span::raw("   "),
        Span::styled("Q", live),
        Span::raw(" Quit"),
    ]);
    let footer = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(footer, area);
}

fn segment_title(timer: &SegmentTimer) -> String {
    format!("Segment {}: {}", timer.index() + 1, timer.description())
}

fn status(state: TimerState) -> (&'static str, Color) {
    match state {
        TimerState::Initial => ("READY", Color::Gray),
        TimerState::Running => ("RUNNING", Color::Green),
        TimerState::Paused => ("PAUSED", Color::Yellow),
        TimerState::Complete => ("COMPLETE", Color::Cyan),
    }
}

fn shot_clock_text(shot: &ShotClock) -> String {
    if shot.expired() {
        "Discussion window over".to_string()
    } else {
        format!("Discussion window {}", shot.clock())
    }
}

/// Keyboard hints for exactly the controls the timer's state offers.
fn control_hint(timer: &SegmentTimer) -> String {
    let controls = timer.controls();
    let mut parts = Vec::new();
    if controls.start {
        parts.push("Space Start".to_string());
    }
    if let Some(label) = controls.pause {
        parts.push(format!("Space {}", label.text()));
    }
    if controls.reset {
        parts.push("R Reset".to_string());
    }
    parts.join("   ")
}
