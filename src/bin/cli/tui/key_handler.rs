use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    if state.show_help {
        match key.code {
            KeyCode::Char('q') => state.quit = true,
            KeyCode::Char('?') | KeyCode::Esc => state.show_help = false,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('y') | KeyCode::Right | KeyCode::Enter => state.mark_known(),
        KeyCode::Char('n') | KeyCode::Left | KeyCode::Char(' ') => state.mark_unknown(),
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        _ => {}
    }
}
