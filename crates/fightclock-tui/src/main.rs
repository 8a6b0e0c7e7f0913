use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use fightclock_core::{Script, Session};
use ratatui::crossterm::event::{self, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

mod alarm;
mod app;
mod input;
mod ui;

use app::App;

#[derive(Parser)]
#[command(name = "fightclock", version, about = "Segmented countdown timer for physics fights")]
struct Args {
    /// Open on this segment (1-based).
    #[arg(long, value_name = "N")]
    from: Option<usize>,

    /// Disable the completion alarm.
    #[arg(long)]
    mute: bool,

    /// Print the segment script and exit.
    #[arg(long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::physics_fight();

    if args.list {
        print_script(&script);
        return Ok(());
    }

    let mut session = Session::new(script);
    if let Some(from) = args.from {
        let jumped = from
            .checked_sub(1)
            .map(|index| session.jump_to(index))
            .unwrap_or(false);
        if !jumped {
            return Err(format!(
                "--from must be between 1 and {}",
                session.script().len()
            )
            .into());
        }
    }

    let mut app = App::new(session, alarm::open(args.mute));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll_interval = Duration::from_millis(50);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key, Instant::now());
            }
        }

        app.pump(Instant::now());
    }
}

fn print_script(script: &Script) {
    for (i, segment) in script.segments.iter().enumerate() {
        let window = match script.shot_clock_for(i) {
            Some(limit) => format!("  ({} min window)", limit / 60),
            None => String::new(),
        };
        println!(
            "{:>2}. {:>10}  {}{}",
            i + 1,
            segment.duration_label(),
            segment.description,
            window
        );
    }
    println!("    total {} minutes", script.total_duration_min());
}
