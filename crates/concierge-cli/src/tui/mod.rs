//! Interactive terminal loop.
//!
//! Single-threaded: poll crossterm for a key with a short timeout, apply it to
//! the [`App`], redraw. Every mutation happens synchronously inside the loop.

mod input;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::app::App;
use crate::ui;

pub use input::handle_key;

/// Terminal events the loop reacts to.
pub enum TermEvent {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
}

/// Run the interactive dashboard until the operator quits.
///
/// Enters raw mode and the alternate screen, and restores both before
/// returning, including when the loop fails.
pub fn run(app: &mut App, tick: Duration) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Dashboard started");
    let result = run_loop(&mut terminal, app, tick);

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    match &result {
        Ok(()) => info!("Dashboard closed"),
        Err(e) => warn!(error = %e, "Dashboard exited with error"),
    }
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            if let Some(term_event) = read_event()? {
                input::handle_term_event(app, term_event);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn read_event() -> io::Result<Option<TermEvent>> {
    Ok(match event::read()? {
        // Filter out Release events (Windows emits Press + Release per keystroke)
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Some(TermEvent::Key(key))
        }
        Event::Resize(w, h) => Some(TermEvent::Resize(w, h)),
        _ => None,
    })
}
