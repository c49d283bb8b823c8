mod app_state;
mod card_widget;
mod key_handler;
mod status_bar;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use crate::app::App;
use app_state::TuiState;

/// Upper bound on how long the loop waits for input
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(app: App) -> Result<()> {
    // Deal the first card before touching the terminal so load errors print normally
    let mut state = TuiState::new(&app)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event loop
    let result = run_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut TuiState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, state))?;

        if state.quit {
            return Ok(());
        }

        // Wake up in time for the reveal timer
        if event::poll(state.poll_timeout(Instant::now(), POLL_INTERVAL))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    key_handler::handle_key(state, key);
                }
            }
        }

        state.tick(Instant::now());
    }
}
