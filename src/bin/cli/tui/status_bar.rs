use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Red).fg(Color::White));
        f.render_widget(flash, area);
        return;
    }

    let hint = if state.is_revealed() {
        "y: knew it  n: didn't know"
    } else {
        "waiting to flip\u{2026}  y/n to answer early"
    };

    let text = format!(
        " {} words left  \u{2502}  {} learned, {} seen  \u{2502}  {}  ?: help  q: quit ",
        state.remaining(),
        state.learned(),
        state.dealt,
        hint
    );

    let status = Paragraph::new(text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
